pub mod config;
pub mod controller;
pub mod error;
pub mod mapper;
pub mod models;
pub mod render;
pub mod session;
pub mod sizing;
pub mod store;

// Re-export commonly used types
pub use config::{get_config_path, GridConfig, GridLayout};
pub use controller::{validate_fields, Controller, ControllerState};
pub use error::{ConfigError, ControllerError, StoreError, ValidationError};
pub use mapper::{map, quadrant_to_xy, xy_to_quadrant, DEFAULT_JITTER};
pub use models::{AiPotential, LocationAxis, MethodAxis, Project, ProjectFields, Quadrant};
pub use render::{pick_point, Decoration, LabelKind, LineKind, PlotPoint, RenderFrame};
pub use session::Session;
pub use sizing::DotSizes;
pub use store::ProjectStore;
