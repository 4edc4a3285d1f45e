use chrono::{DateTime, Utc};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::config::GridConfig;
use crate::controller::{Controller, ControllerState};
use crate::error::ControllerError;
use crate::mapper::random_jitter;
use crate::models::{Project, ProjectFields};
use crate::render::RenderFrame;
use crate::store::ProjectStore;

/// One user's working state, from start-up until it is dropped.
///
/// Each session owns its own store; nothing is shared between sessions and
/// nothing survives the session.
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    config: GridConfig,
    store: ProjectStore,
    controller: Controller,
    rng: StdRng,
}

impl Session {
    /// Starts a session with entropy-seeded jitter
    pub fn new(config: GridConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Starts a session whose jitter sequence is reproducible
    pub fn with_seed(config: GridConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GridConfig, rng: StdRng) -> Self {
        let id = Uuid::new_v4();
        info!("Session {} started ({} layout)", id, config.layout);
        Self {
            id,
            started_at: Utc::now(),
            config,
            store: ProjectStore::new(),
            controller: Controller::new(),
            rng,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    pub fn projects(&self) -> &[Project] {
        self.store.list()
    }

    pub fn state(&self) -> ControllerState {
        self.controller.state()
    }

    pub fn selected(&self) -> Option<&Project> {
        self.controller.selected(&self.store)
    }

    pub fn open_add(&mut self) {
        self.controller.open_add();
    }

    /// Adds a project with freshly drawn jitter
    pub fn add(&mut self, fields: ProjectFields) -> Result<usize, ControllerError> {
        let jitter = random_jitter(&mut self.rng, self.config.jitter);
        self.controller.submit_add(&mut self.store, fields, jitter)
    }

    pub fn render(&mut self) -> RenderFrame {
        self.controller.render(&self.store, &self.config)
    }

    pub fn select_point(&mut self, point: usize) -> Result<&Project, ControllerError> {
        self.controller.select_point(&self.store, point)
    }

    pub fn save_edit(&mut self, fields: ProjectFields) -> Result<usize, ControllerError> {
        self.controller.save_edit(&mut self.store, fields)
    }

    pub fn delete_selected(&mut self) -> Result<Project, ControllerError> {
        self.controller.delete_selected(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.controller.cancel();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let elapsed = Utc::now() - self.started_at;
        info!(
            "Session {} ended after {}s with {} projects",
            self.id,
            elapsed.num_seconds(),
            self.store.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LocationAxis, MethodAxis};

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::with_seed(GridConfig::default(), 1);
        let second = Session::with_seed(GridConfig::default(), 1);

        first
            .add(ProjectFields::new("A", MethodAxis::Manual, LocationAxis::Onshore))
            .unwrap();

        assert_eq!(first.projects().len(), 1);
        assert!(second.projects().is_empty());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let mut a = Session::with_seed(GridConfig::default(), 42);
        let mut b = Session::with_seed(GridConfig::default(), 42);
        let fields = ProjectFields::new("A", MethodAxis::AiAssisted, LocationAxis::Offshore);

        a.add(fields.clone()).unwrap();
        b.add(fields).unwrap();

        let (pa, pb) = (&a.projects()[0], &b.projects()[0]);
        assert_eq!((pa.jitter_x, pa.jitter_y), (pb.jitter_x, pb.jitter_y));
    }

    #[test]
    fn test_zero_jitter_config() {
        let config = GridConfig {
            jitter: 0.0,
            ..GridConfig::default()
        };
        let mut session = Session::with_seed(config, 9);
        session
            .add(ProjectFields::new("A", MethodAxis::Manual, LocationAxis::Offshore))
            .unwrap();

        let frame = session.render();
        assert_eq!((frame.points[0].x, frame.points[0].y), (0.25, 0.25));
    }
}
