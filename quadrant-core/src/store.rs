use log::info;

use crate::error::StoreError;
use crate::models::{Project, ProjectFields};

/// Ordered, session-scoped collection of projects.
///
/// A project's position is the only identity the UI uses, so insertion order
/// is preserved and deletes shift later positions down by one.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a project and returns its position
    pub fn add(&mut self, project: Project) -> usize {
        info!("Adding project '{}' ({})", project.name, project.id);
        self.projects.push(project);
        self.projects.len() - 1
    }

    /// Replaces the mutable fields of the project at `index`
    pub fn update(&mut self, index: usize, fields: ProjectFields) -> Result<(), StoreError> {
        let len = self.projects.len();
        let project = self
            .projects
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })?;
        project.apply(fields);
        info!("Updated project '{}' at {}", project.name, index);
        Ok(())
    }

    /// Removes and returns the project at `index`
    pub fn delete(&mut self, index: usize) -> Result<Project, StoreError> {
        if index >= self.projects.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.projects.len(),
            });
        }
        let removed = self.projects.remove(index);
        info!("Deleted project '{}' from {}", removed.name, index);
        Ok(removed)
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiPotential, LocationAxis, MethodAxis};

    fn project(name: &str) -> Project {
        Project::new(
            ProjectFields::new(name, MethodAxis::Manual, LocationAxis::Offshore),
            (0.01, -0.02),
        )
    }

    #[test]
    fn test_add_returns_position() {
        let mut store = ProjectStore::new();
        assert_eq!(store.add(project("A")), 0);
        assert_eq!(store.add(project("B")), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[1].name, "B");
    }

    #[test]
    fn test_add_then_delete_restores_contents() {
        let mut store = ProjectStore::new();
        store.add(project("A"));
        let before = store.list().to_vec();

        let idx = store.add(project("B"));
        let removed = store.delete(idx).unwrap();

        assert_eq!(removed.name, "B");
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_update_preserves_jitter_and_id() {
        let mut store = ProjectStore::new();
        store.add(project("A"));
        let original = store.get(0).cloned().unwrap();

        store
            .update(
                0,
                ProjectFields::new("A2", MethodAxis::AiAssisted, LocationAxis::Onshore)
                    .with_ai_potential(AiPotential::Many),
            )
            .unwrap();

        let updated = store.get(0).unwrap();
        assert_eq!(updated.name, "A2");
        assert_eq!(updated.method, MethodAxis::AiAssisted);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.jitter_x, original.jitter_x);
        assert_eq!(updated.jitter_y, original.jitter_y);
    }

    #[test]
    fn test_delete_shifts_indices() {
        let mut store = ProjectStore::new();
        store.add(project("A"));
        store.add(project("B"));
        store.add(project("C"));

        store.delete(0).unwrap();
        store
            .update(
                0,
                ProjectFields::new("B2", MethodAxis::Manual, LocationAxis::Offshore),
            )
            .unwrap();

        let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B2", "C"]);
    }

    #[test]
    fn test_out_of_range() {
        let mut store = ProjectStore::new();
        store.add(project("A"));

        assert_eq!(
            store.delete(3),
            Err(StoreError::OutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            store.update(1, ProjectFields::default()),
            Err(StoreError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(store.len(), 1);
    }
}
