//! Interaction controller
//!
//! Reconciles add/edit/delete requests and chart selections against a
//! [`ProjectStore`]. Point identifiers coming back from a render adapter are
//! positions in the most recent [`RenderFrame`], so the controller remembers
//! which project sat at each position when it last rendered. Any successful
//! mutation forgets that snapshot; selections are only trusted again after a
//! fresh render.

use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::GridConfig;
use crate::error::{ControllerError, ValidationError};
use crate::models::{Project, ProjectFields};
use crate::render::{build_frame, RenderFrame};
use crate::store::ProjectStore;

/// Where the user is in the add/edit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Nothing selected; the add form is shown
    #[default]
    Idle,
    /// The add form has been opened or a submit was rejected
    AddPending,
    /// A plotted project is open for editing
    EditSelected { index: usize, id: Uuid },
}

/// Trims the name and rejects it when nothing is left
pub fn validate_fields(mut fields: ProjectFields) -> Result<ProjectFields, ValidationError> {
    let trimmed = fields.name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed.len() != fields.name.len() {
        fields.name = trimmed.to_string();
    }
    Ok(fields)
}

#[derive(Debug, Default)]
pub struct Controller {
    state: ControllerState,
    /// Project ids in the order they were last rendered
    rendered: Option<Vec<Uuid>>,
    generation: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Store index of the project being edited
    pub fn selection(&self) -> Option<usize> {
        match self.state {
            ControllerState::EditSelected { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The project being edited, if the selection still holds
    pub fn selected<'s>(&self, store: &'s ProjectStore) -> Option<&'s Project> {
        match self.state {
            ControllerState::EditSelected { index, id } => {
                store.get(index).filter(|project| project.id == id)
            }
            _ => None,
        }
    }

    pub fn open_add(&mut self) {
        self.state = ControllerState::AddPending;
    }

    /// Validates and appends a new project, returning its index.
    ///
    /// A rejected submit leaves the store untouched and the add form open.
    pub fn submit_add(
        &mut self,
        store: &mut ProjectStore,
        fields: ProjectFields,
        jitter: (f64, f64),
    ) -> Result<usize, ControllerError> {
        let fields = match validate_fields(fields) {
            Ok(fields) => fields,
            Err(e) => {
                self.state = ControllerState::AddPending;
                return Err(e.into());
            }
        };

        let index = store.add(Project::new(fields, jitter));
        self.invalidate();
        self.state = ControllerState::Idle;
        Ok(index)
    }

    /// Builds a frame from the store and records it as the selection snapshot
    pub fn render(&mut self, store: &ProjectStore, config: &GridConfig) -> RenderFrame {
        self.generation += 1;
        self.rendered = Some(store.list().iter().map(|p| p.id).collect());
        debug!(
            "Rendered generation {} with {} points",
            self.generation,
            store.len()
        );
        build_frame(store.list(), config, self.generation)
    }

    /// Resolves a point identifier from the last render to a project.
    ///
    /// A stale or unknown identifier drops back to [`ControllerState::Idle`].
    pub fn select_point<'s>(
        &mut self,
        store: &'s ProjectStore,
        point: usize,
    ) -> Result<&'s Project, ControllerError> {
        let rendered_id = self
            .rendered
            .as_ref()
            .and_then(|ids| ids.get(point))
            .copied();

        let project = rendered_id.and_then(|id| store.get(point).filter(|p| p.id == id));
        match project {
            Some(project) => {
                self.state = ControllerState::EditSelected {
                    index: point,
                    id: project.id,
                };
                Ok(project)
            }
            None => {
                warn!("Ignoring stale selection of point {}", point);
                self.state = ControllerState::Idle;
                Err(ControllerError::StaleSelection { point })
            }
        }
    }

    /// Applies an edit to the selected project, returning its index
    pub fn save_edit(
        &mut self,
        store: &mut ProjectStore,
        fields: ProjectFields,
    ) -> Result<usize, ControllerError> {
        let (index, _) = self.current_selection()?;
        let fields = validate_fields(fields)?;
        let index = self.confirm_selection(store, index)?;

        store.update(index, fields)?;
        self.invalidate();
        self.state = ControllerState::Idle;
        Ok(index)
    }

    /// Removes the selected project and returns it
    pub fn delete_selected(&mut self, store: &mut ProjectStore) -> Result<Project, ControllerError> {
        let (index, _) = self.current_selection()?;
        let index = self.confirm_selection(store, index)?;

        let removed = store.delete(index)?;
        self.invalidate();
        self.state = ControllerState::Idle;
        Ok(removed)
    }

    /// Leaves any form without touching the store
    pub fn cancel(&mut self) {
        self.state = ControllerState::Idle;
    }

    fn current_selection(&self) -> Result<(usize, Uuid), ControllerError> {
        match self.state {
            ControllerState::EditSelected { index, id } => Ok((index, id)),
            _ => Err(ControllerError::NoSelection),
        }
    }

    /// The selected index must still hold the project that was selected
    fn confirm_selection(
        &mut self,
        store: &ProjectStore,
        index: usize,
    ) -> Result<usize, ControllerError> {
        if self.selected(store).is_some() {
            return Ok(index);
        }
        warn!("Selected project at {} is gone, returning to idle", index);
        self.state = ControllerState::Idle;
        Err(ControllerError::StaleSelection { point: index })
    }

    fn invalidate(&mut self) {
        if self.rendered.take().is_some() {
            info!("Store changed, last render invalidated");
        }
    }
}
