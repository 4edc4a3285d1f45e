use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// How a project's process is carried out (horizontal axis)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum MethodAxis {
    #[default]
    Manual,
    AiAssisted,
}

impl MethodAxis {
    pub const ALL: [MethodAxis; 2] = [MethodAxis::Manual, MethodAxis::AiAssisted];

    /// Axis category, 0 for Manual and 1 for AI-assisted
    pub fn category(self) -> u8 {
        match self {
            MethodAxis::Manual => 0,
            MethodAxis::AiAssisted => 1,
        }
    }

    /// Inverse of [`MethodAxis::category`]; any non-zero value is AI-assisted
    pub fn from_category(category: u8) -> Self {
        if category == 0 {
            MethodAxis::Manual
        } else {
            MethodAxis::AiAssisted
        }
    }

    /// Short tick label used on the plot axis
    pub fn tick_label(self) -> &'static str {
        match self {
            MethodAxis::Manual => "Manual",
            MethodAxis::AiAssisted => "AI",
        }
    }
}

impl fmt::Display for MethodAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodAxis::Manual => write!(f, "Manual"),
            MethodAxis::AiAssisted => write!(f, "Auto + AI"),
        }
    }
}

/// Where a project is delivered from (vertical axis)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum LocationAxis {
    #[default]
    Offshore,
    Onshore,
}

impl LocationAxis {
    pub const ALL: [LocationAxis; 2] = [LocationAxis::Offshore, LocationAxis::Onshore];

    /// Axis category, 0 for Offshore and 1 for Onshore
    pub fn category(self) -> u8 {
        match self {
            LocationAxis::Offshore => 0,
            LocationAxis::Onshore => 1,
        }
    }

    pub fn from_category(category: u8) -> Self {
        if category == 0 {
            LocationAxis::Offshore
        } else {
            LocationAxis::Onshore
        }
    }
}

impl fmt::Display for LocationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationAxis::Offshore => write!(f, "Offshore"),
            LocationAxis::Onshore => write!(f, "Onshore"),
        }
    }
}

/// Ordered tier of AI potential; only drives marker size
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub enum AiPotential {
    #[default]
    None,
    Some,
    Many,
}

impl AiPotential {
    pub const ALL: [AiPotential; 3] = [AiPotential::None, AiPotential::Some, AiPotential::Many];

    /// Parse a tier from free text; anything unrecognised is the lowest tier
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "some" | "medium" => AiPotential::Some,
            "many" | "high" | "lots" => AiPotential::Many,
            _ => AiPotential::None,
        }
    }

    /// Resolve an optional tier, treating a missing value as `None`
    pub fn resolve(tier: Option<AiPotential>) -> Self {
        tier.unwrap_or_default()
    }
}

impl fmt::Display for AiPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiPotential::None => write!(f, "None"),
            AiPotential::Some => write!(f, "Some"),
            AiPotential::Many => write!(f, "Many"),
        }
    }
}

/// One of the four named regions of the grid, combining location and method
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Quadrant {
    OffshoreManual,
    OffshoreAi,
    OnshoreManual,
    OnshoreAi,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::OnshoreManual,
        Quadrant::OnshoreAi,
        Quadrant::OffshoreManual,
        Quadrant::OffshoreAi,
    ];

    /// Quadrant used when a name cannot be recognised
    pub const FALLBACK: Quadrant = Quadrant::OffshoreManual;

    pub fn method(self) -> MethodAxis {
        match self {
            Quadrant::OffshoreManual | Quadrant::OnshoreManual => MethodAxis::Manual,
            Quadrant::OffshoreAi | Quadrant::OnshoreAi => MethodAxis::AiAssisted,
        }
    }

    pub fn location(self) -> LocationAxis {
        match self {
            Quadrant::OffshoreManual | Quadrant::OffshoreAi => LocationAxis::Offshore,
            Quadrant::OnshoreManual | Quadrant::OnshoreAi => LocationAxis::Onshore,
        }
    }

    pub fn from_axes(method: MethodAxis, location: LocationAxis) -> Self {
        match (location, method) {
            (LocationAxis::Offshore, MethodAxis::Manual) => Quadrant::OffshoreManual,
            (LocationAxis::Offshore, MethodAxis::AiAssisted) => Quadrant::OffshoreAi,
            (LocationAxis::Onshore, MethodAxis::Manual) => Quadrant::OnshoreManual,
            (LocationAxis::Onshore, MethodAxis::AiAssisted) => Quadrant::OnshoreAi,
        }
    }

    /// Stable key used in configuration files
    pub fn key(self) -> &'static str {
        match self {
            Quadrant::OffshoreManual => "offshore_manual",
            Quadrant::OffshoreAi => "offshore_ai",
            Quadrant::OnshoreManual => "onshore_manual",
            Quadrant::OnshoreAi => "onshore_ai",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quadrant::OffshoreManual => write!(f, "Offshore / Manual"),
            Quadrant::OffshoreAi => write!(f, "Offshore / AI"),
            Quadrant::OnshoreManual => write!(f, "Onshore / Manual"),
            Quadrant::OnshoreAi => write!(f, "Onshore / AI"),
        }
    }
}

/// The user-editable part of a project, as submitted by an add or edit form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFields {
    pub name: String,
    pub method: MethodAxis,
    pub location: LocationAxis,
    pub ai_potential: Option<AiPotential>,
}

impl ProjectFields {
    pub fn new(name: impl Into<String>, method: MethodAxis, location: LocationAxis) -> Self {
        Self {
            name: name.into(),
            method,
            location,
            ai_potential: None,
        }
    }

    pub fn with_ai_potential(mut self, tier: AiPotential) -> Self {
        self.ai_potential = Some(tier);
        self
    }

    /// Build fields from a 4-way quadrant selection
    pub fn in_quadrant(name: impl Into<String>, quadrant: Quadrant) -> Self {
        Self::new(name, quadrant.method(), quadrant.location())
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_axes(self.method, self.location)
    }
}

/// A single project plotted on the grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Identity assigned at creation, never reused
    pub id: Uuid,

    pub name: String,

    pub method: MethodAxis,

    pub location: LocationAxis,

    /// Missing means the lowest tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_potential: Option<AiPotential>,

    /// Horizontal marker offset, fixed at creation
    pub jitter_x: f64,

    /// Vertical marker offset, fixed at creation
    pub jitter_y: f64,

    pub created_at: DateTime<Utc>,

    pub modified_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project from form fields and a pre-drawn jitter pair
    pub fn new(fields: ProjectFields, jitter: (f64, f64)) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            method: fields.method,
            location: fields.location,
            ai_potential: fields.ai_potential,
            jitter_x: jitter.0,
            jitter_y: jitter.1,
            created_at: now,
            modified_at: now,
        }
    }

    /// Replaces every mutable field; id and jitter stay as they were
    pub fn apply(&mut self, fields: ProjectFields) {
        self.name = fields.name;
        self.method = fields.method;
        self.location = fields.location;
        self.ai_potential = fields.ai_potential;
        self.modified_at = Utc::now();
    }

    pub fn fields(&self) -> ProjectFields {
        ProjectFields {
            name: self.name.clone(),
            method: self.method,
            location: self.location,
            ai_potential: self.ai_potential,
        }
    }

    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_axes(self.method, self.location)
    }

    pub fn tier(&self) -> AiPotential {
        AiPotential::resolve(self.ai_potential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_categories() {
        assert_eq!(MethodAxis::Manual.category(), 0);
        assert_eq!(MethodAxis::AiAssisted.category(), 1);
        assert_eq!(LocationAxis::Offshore.category(), 0);
        assert_eq!(LocationAxis::Onshore.category(), 1);

        for method in MethodAxis::ALL {
            assert_eq!(MethodAxis::from_category(method.category()), method);
        }
        for location in LocationAxis::ALL {
            assert_eq!(LocationAxis::from_category(location.category()), location);
        }
    }

    #[test]
    fn test_ai_potential_ordering_and_default() {
        assert!(AiPotential::None < AiPotential::Some);
        assert!(AiPotential::Some < AiPotential::Many);
        assert_eq!(AiPotential::resolve(None), AiPotential::None);
        assert_eq!(AiPotential::from_label(" Many "), AiPotential::Many);
        assert_eq!(AiPotential::from_label("lots"), AiPotential::Many);
        assert_eq!(AiPotential::from_label("unknown"), AiPotential::None);
    }

    #[test]
    fn test_apply_keeps_identity_and_jitter() {
        let mut project = Project::new(
            ProjectFields::new("Alpha", MethodAxis::Manual, LocationAxis::Onshore),
            (0.05, -0.07),
        );
        let id = project.id;

        project.apply(
            ProjectFields::new("Beta", MethodAxis::AiAssisted, LocationAxis::Offshore)
                .with_ai_potential(AiPotential::Some),
        );

        assert_eq!(project.id, id);
        assert_eq!(project.name, "Beta");
        assert_eq!(project.quadrant(), Quadrant::OffshoreAi);
        assert_eq!(project.tier(), AiPotential::Some);
        assert_eq!(project.jitter_x, 0.05);
        assert_eq!(project.jitter_y, -0.07);
        assert!(project.modified_at >= project.created_at);
    }

    #[test]
    fn test_quadrant_axes_round_trip() {
        for quadrant in Quadrant::ALL {
            assert_eq!(
                Quadrant::from_axes(quadrant.method(), quadrant.location()),
                quadrant
            );
        }
    }

    #[test]
    fn test_project_missing_ai_potential_deserializes() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Legacy",
            "method": "Manual",
            "location": "Onshore",
            "jitter_x": 0.0,
            "jitter_y": 0.0,
            "created_at": "2024-01-01T00:00:00Z",
            "modified_at": "2024-01-01T00:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.ai_potential.is_none());
        assert_eq!(project.tier(), AiPotential::None);
    }
}
