//! Painter-based drawing of a [`RenderFrame`].
//!
//! Plot space is the unit square with y pointing up; screen space has y
//! pointing down, so every conversion goes through [`PlotArea`].

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use quadrant_core::{pick_point, Decoration, LabelKind, LineKind, RenderFrame};

const MARGIN_LEFT: f32 = 72.0;
const MARGIN_BOTTOM: f32 = 46.0;
const MARGIN_TOP: f32 = 24.0;
const MARGIN_RIGHT: f32 = 12.0;

/// Extra pixels around a marker that still count as a hit
const HIT_SLACK: f32 = 3.0;

const POINT_FILL: Color32 = Color32::from_rgb(31, 119, 180);
const SELECTED_FILL: Color32 = Color32::from_rgb(255, 127, 14);
const ARROW_COLOR: Color32 = Color32::from_rgb(214, 39, 40);

struct PlotArea {
    rect: Rect,
}

impl PlotArea {
    fn to_screen(&self, (x, y): (f64, f64)) -> Pos2 {
        Pos2::new(
            self.rect.left() + x as f32 * self.rect.width(),
            self.rect.bottom() - y as f32 * self.rect.height(),
        )
    }

    fn to_plot(&self, pos: Pos2) -> (f64, f64) {
        (
            f64::from((pos.x - self.rect.left()) / self.rect.width()),
            f64::from((self.rect.bottom() - pos.y) / self.rect.height()),
        )
    }

    /// Pixel distance expressed in plot units
    fn plot_distance(&self, pixels: f32) -> f64 {
        f64::from(pixels / self.rect.width().min(self.rect.height()))
    }
}

/// Draws the grid and returns the identifier of a clicked point, if any
pub fn show(ui: &mut egui::Ui, frame: &RenderFrame, selected: Option<usize>) -> Option<usize> {
    let available = ui.available_size();
    let side = available.x.min(available.y).max(240.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());

    let area = PlotArea {
        rect: Rect::from_min_max(
            response.rect.min + Vec2::new(MARGIN_LEFT, MARGIN_TOP),
            response.rect.max - Vec2::new(MARGIN_RIGHT, MARGIN_BOTTOM),
        ),
    };

    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let faint = visuals.weak_text_color();

    painter.rect_stroke(area.rect, 0.0, Stroke::new(1.0, faint));

    for decoration in &frame.decorations {
        match decoration {
            Decoration::Line { from, to, kind } => {
                let stroke = match kind {
                    LineKind::Divider => Stroke::new(1.5, Color32::GRAY),
                    LineKind::Minor => Stroke::new(0.5, faint),
                };
                painter.line_segment([area.to_screen(*from), area.to_screen(*to)], stroke);
            }
            Decoration::Arrow { from, to } => {
                let origin = area.to_screen(*from);
                let tip = area.to_screen(*to);
                painter.arrow(origin, tip - origin, Stroke::new(2.0, ARROW_COLOR));
            }
            Decoration::Label { at, text, kind } => {
                let (pos, align, size, color) = match kind {
                    LabelKind::Quadrant => (area.to_screen(*at), Align2::CENTER_CENTER, 13.0, faint),
                    LabelKind::XTick => (
                        area.to_screen(*at) + Vec2::new(0.0, 4.0),
                        Align2::CENTER_TOP,
                        12.0,
                        text_color,
                    ),
                    LabelKind::YTick => (
                        area.to_screen(*at) - Vec2::new(6.0, 0.0),
                        Align2::RIGHT_CENTER,
                        12.0,
                        text_color,
                    ),
                    LabelKind::XTitle => (
                        Pos2::new(area.rect.center().x, area.rect.bottom() + 24.0),
                        Align2::CENTER_TOP,
                        13.0,
                        text_color,
                    ),
                    LabelKind::YTitle => (
                        Pos2::new(area.rect.left(), area.rect.top() - 6.0),
                        Align2::LEFT_BOTTOM,
                        13.0,
                        text_color,
                    ),
                };
                painter.text(pos, align, text, FontId::proportional(size), color);
            }
        }
    }

    let mut largest = 0.0_f32;
    for (id, point) in frame.points.iter().enumerate() {
        let center = area.to_screen((point.x, point.y));
        let radius = point.size / 2.0;
        largest = largest.max(radius);
        let fill = if selected == Some(id) {
            SELECTED_FILL
        } else {
            POINT_FILL
        };
        painter.circle(center, radius, fill, Stroke::new(1.0, Color32::WHITE));
        painter.text(
            center + Vec2::new(radius + 3.0, 0.0),
            Align2::LEFT_CENTER,
            &point.label,
            FontId::proportional(12.0),
            text_color,
        );
    }

    let tolerance = area.plot_distance(largest + HIT_SLACK);
    let hit = |pos: Pos2| {
        let (x, y) = area.to_plot(pos);
        pick_point(frame, x, y, tolerance)
    };

    let tooltip = response
        .hover_pos()
        .and_then(hit)
        .and_then(|id| frame.point(id))
        .map(|point| point.tooltip.clone());
    let response = match tooltip {
        Some(text) => response.on_hover_text_at_pointer(text),
        None => response,
    };

    if response.clicked() {
        response.interact_pointer_pos().and_then(hit)
    } else {
        None
    }
}
