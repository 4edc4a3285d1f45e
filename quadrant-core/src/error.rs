//! Error types
//!
//! Everything here is recoverable: a failed request leaves the session usable.

use thiserror::Error;

use crate::models::Quadrant;

/// Errors raised by the project store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Project index {index} is out of range (store holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Form input that cannot be accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project name must not be empty")]
    EmptyName,
}

/// Errors surfaced by the interaction controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Selection {point} is stale - the grid changed since it was drawn")]
    StaleSelection { point: usize },

    #[error("No project is selected")]
    NoSelection,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Configuration values that cannot be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Jitter {0} must be within [0, 0.25)")]
    InvalidJitter(f64),

    #[error("Dot sizes must be positive and strictly increasing (got {none}, {some}, {many})")]
    InvalidDotSizes { none: f32, some: f32, many: f32 },

    #[error("Unknown quadrant '{0}' in quadrant_labels")]
    UnknownQuadrant(String),

    #[error("Quadrant '{0}' is labelled more than once in quadrant_labels")]
    DuplicateQuadrant(Quadrant),
}
