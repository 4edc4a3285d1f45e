//! Render model
//!
//! What a front-end needs to draw one frame of the grid: the plotted points in
//! store order and the static decorations. A point's identifier is its
//! position in [`RenderFrame::points`].

use serde::Serialize;

use crate::config::{GridConfig, GridLayout};
use crate::mapper::{self, DIVIDER};
use crate::models::{LocationAxis, MethodAxis, Project, Quadrant};

/// One marker on the plot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub size: f32,
    pub tooltip: String,
}

/// Visual weight of a line
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LineKind {
    /// Quadrant boundary at 0.5
    Divider,
    /// Sub-cell line in the 4x4 layout
    Minor,
}

/// Where a text label is anchored
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LabelKind {
    Quadrant,
    XTick,
    YTick,
    XTitle,
    YTitle,
}

/// Static, data-independent drawing primitive in plot space
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum Decoration {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        kind: LineKind,
    },
    Arrow {
        from: (f64, f64),
        to: (f64, f64),
    },
    Label {
        at: (f64, f64),
        text: String,
        kind: LabelKind,
    },
}

/// Everything needed to draw the grid once
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderFrame {
    /// Incremented on every render; lets adapters detect a fresh frame
    pub generation: u64,
    pub title: String,
    pub points: Vec<PlotPoint>,
    pub decorations: Vec<Decoration>,
}

impl RenderFrame {
    pub fn point(&self, id: usize) -> Option<&PlotPoint> {
        self.points.get(id)
    }
}

pub fn tooltip(project: &Project) -> String {
    format!(
        "{}\n{} / {}\nAI potential: {}",
        project.name,
        project.location,
        project.method,
        project.tier()
    )
}

pub fn plot_point(project: &Project, config: &GridConfig) -> PlotPoint {
    let (x, y) = mapper::map(project);
    PlotPoint {
        x,
        y,
        label: project.name.clone(),
        size: config.dot_sizes.size(project.ai_potential),
        tooltip: tooltip(project),
    }
}

/// Dividers, optional diagonal arrow and all text labels
pub fn decorations(config: &GridConfig) -> Vec<Decoration> {
    let mut out = vec![
        Decoration::Line {
            from: (DIVIDER, 0.0),
            to: (DIVIDER, 1.0),
            kind: LineKind::Divider,
        },
        Decoration::Line {
            from: (0.0, DIVIDER),
            to: (1.0, DIVIDER),
            kind: LineKind::Divider,
        },
    ];

    if config.layout == GridLayout::FourByFour {
        for at in [0.25, 0.75] {
            out.push(Decoration::Line {
                from: (at, 0.0),
                to: (at, 1.0),
                kind: LineKind::Minor,
            });
            out.push(Decoration::Line {
                from: (0.0, at),
                to: (1.0, at),
                kind: LineKind::Minor,
            });
        }
    }

    if config.show_diagonal {
        out.push(Decoration::Arrow {
            from: (0.0, 1.0),
            to: (1.0, 0.0),
        });
    }

    for quadrant in Quadrant::ALL {
        let (cx, cy) = mapper::quadrant_center(quadrant.method(), quadrant.location());
        // Sit near the outer edge so labels don't cover the markers
        let y = if cy > DIVIDER { 0.97 } else { 0.03 };
        out.push(Decoration::Label {
            at: (cx, y),
            text: config.quadrant_label(quadrant),
            kind: LabelKind::Quadrant,
        });
    }

    for method in MethodAxis::ALL {
        out.push(Decoration::Label {
            at: (f64::from(method.category()), 0.0),
            text: method.tick_label().to_string(),
            kind: LabelKind::XTick,
        });
    }
    for location in LocationAxis::ALL {
        out.push(Decoration::Label {
            at: (0.0, f64::from(location.category())),
            text: location.to_string(),
            kind: LabelKind::YTick,
        });
    }

    out.push(Decoration::Label {
        at: (0.5, 0.0),
        text: config.x_axis_title.clone(),
        kind: LabelKind::XTitle,
    });
    out.push(Decoration::Label {
        at: (0.0, 0.5),
        text: config.y_axis_title.clone(),
        kind: LabelKind::YTitle,
    });

    out
}

/// Builds a frame for the given projects, in order
pub fn build_frame(projects: &[Project], config: &GridConfig, generation: u64) -> RenderFrame {
    RenderFrame {
        generation,
        title: config.title.clone(),
        points: projects.iter().map(|p| plot_point(p, config)).collect(),
        decorations: decorations(config),
    }
}

/// Identifier of the point nearest to `(x, y)` within `tolerance`.
///
/// On ties the later point wins, since it is drawn on top.
pub fn pick_point(frame: &RenderFrame, x: f64, y: f64, tolerance: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (id, point) in frame.points.iter().enumerate() {
        let distance = ((point.x - x).powi(2) + (point.y - y).powi(2)).sqrt();
        if distance.is_nan() || distance > tolerance {
            continue;
        }
        match best {
            Some((_, d)) if distance > d => {}
            _ => best = Some((id, distance)),
        }
    }
    best.map(|(id, _)| id)
}
