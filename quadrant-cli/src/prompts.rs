use anyhow::Result;
use colored::Colorize;
use inquire::{CustomType, Select, Text};
use std::fmt;

use quadrant_core::mapper::{parse_quadrant, quadrant_to_xy};
use quadrant_core::{AiPotential, LocationAxis, MethodAxis, ProjectFields};

/// Top-level choices while nothing is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleAction {
    Add,
    Select,
    Json,
    Quit,
}

impl fmt::Display for IdleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdleAction::Add => write!(f, "Add project"),
            IdleAction::Select => write!(f, "Select a point to edit"),
            IdleAction::Json => write!(f, "Print projects as JSON"),
            IdleAction::Quit => write!(f, "Quit"),
        }
    }
}

/// Choices while a project is open for editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Save,
    Delete,
    Cancel,
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditAction::Save => write!(f, "Edit and save"),
            EditAction::Delete => write!(f, "Delete"),
            EditAction::Cancel => write!(f, "Cancel"),
        }
    }
}

pub fn prompt_idle_action() -> Result<IdleAction> {
    let options = vec![
        IdleAction::Add,
        IdleAction::Select,
        IdleAction::Json,
        IdleAction::Quit,
    ];
    Ok(Select::new("What next?", options).prompt()?)
}

pub fn prompt_edit_action(name: &str) -> Result<EditAction> {
    let options = vec![EditAction::Save, EditAction::Delete, EditAction::Cancel];
    let message = format!("'{}' selected:", name);
    Ok(Select::new(&message, options).prompt()?)
}

pub fn prompt_point() -> Result<usize> {
    Ok(CustomType::<usize>::new("Point #:")
        .with_error_message("Please enter a point number")
        .prompt()?)
}

/// Prompts for project fields, starting from `current` when editing.
///
/// With `four_way` set the two axes are chosen as a single quadrant name.
pub fn prompt_fields(current: Option<&ProjectFields>, four_way: bool) -> Result<ProjectFields> {
    let initial = current.map(|f| f.name.as_str()).unwrap_or("");
    let name = Text::new("Project Name:").with_initial_value(initial).prompt()?;

    let (method, location) = if four_way {
        let hint = current
            .map(|f| f.quadrant().to_string())
            .unwrap_or_else(|| "e.g. onshore ai".to_string());
        let answer = Text::new("Quadrant:").with_placeholder(&hint).prompt()?;
        let answer = if answer.trim().is_empty() {
            hint
        } else {
            answer
        };
        if parse_quadrant(&answer).is_none() {
            println!(
                "{}",
                format!("Unrecognised quadrant '{}', using the default", answer).yellow()
            );
        }
        let (x, y) = quadrant_to_xy(&answer);
        (MethodAxis::from_category(x), LocationAxis::from_category(y))
    } else {
        let method = Select::new("Method:", MethodAxis::ALL.to_vec())
            .with_starting_cursor(current.map(|f| f.method.category() as usize).unwrap_or(0))
            .prompt()?;
        let location = Select::new("Location:", LocationAxis::ALL.to_vec())
            .with_starting_cursor(current.map(|f| f.location.category() as usize).unwrap_or(0))
            .prompt()?;
        (method, location)
    };

    let tier_cursor = current
        .map(|f| AiPotential::resolve(f.ai_potential) as usize)
        .unwrap_or(0);
    let tier = Select::new("AI Potential:", AiPotential::ALL.to_vec())
        .with_starting_cursor(tier_cursor)
        .prompt()?;

    Ok(ProjectFields::new(name, method, location).with_ai_potential(tier))
}
