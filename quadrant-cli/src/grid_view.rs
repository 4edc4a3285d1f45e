use colored::Colorize;

use quadrant_core::mapper::quadrant_at;
use quadrant_core::{DotSizes, LocationAxis, MethodAxis, Quadrant, RenderFrame};

const CELL_WIDTH: usize = 34;

fn marker(size: f32, sizes: &DotSizes) -> &'static str {
    if size >= sizes.many {
        "⬤"
    } else if size >= sizes.some {
        "●"
    } else {
        "•"
    }
}

/// Cell lines for one quadrant, `[#] name` per point in frame order
fn cell_lines(frame: &RenderFrame, quadrant: Quadrant, sizes: &DotSizes) -> Vec<String> {
    frame
        .points
        .iter()
        .enumerate()
        .filter(|(_, p)| quadrant_at(p.x, p.y) == quadrant)
        .map(|(id, p)| {
            let mut line = format!("{} [{}] {}", marker(p.size, sizes), id, p.label);
            if line.chars().count() > CELL_WIDTH {
                line = line.chars().take(CELL_WIDTH - 1).collect::<String>() + "…";
            }
            line
        })
        .collect()
}

fn pad(s: &str) -> String {
    let len = s.chars().count();
    format!("{}{}", s, " ".repeat(CELL_WIDTH.saturating_sub(len)))
}

/// Prints the frame as a two-by-two table, onshore on top
pub fn print_frame(frame: &RenderFrame, sizes: &DotSizes, labels: impl Fn(Quadrant) -> String) {
    println!("\n{}", frame.title.bold());
    let rule = format!("+{}+{}+", "-".repeat(CELL_WIDTH + 2), "-".repeat(CELL_WIDTH + 2));

    for location in [LocationAxis::Onshore, LocationAxis::Offshore] {
        println!("{}", rule);
        let left = Quadrant::from_axes(MethodAxis::Manual, location);
        let right = Quadrant::from_axes(MethodAxis::AiAssisted, location);

        println!(
            "| {} | {} |  {}",
            pad(&labels(left)).dimmed(),
            pad(&labels(right)).dimmed(),
            location.to_string().cyan()
        );

        let left_lines = cell_lines(frame, left, sizes);
        let right_lines = cell_lines(frame, right, sizes);
        let rows = left_lines.len().max(right_lines.len()).max(1);
        for row in 0..rows {
            let l = left_lines.get(row).map(String::as_str).unwrap_or("");
            let r = right_lines.get(row).map(String::as_str).unwrap_or("");
            println!("| {} | {} |", pad(l), pad(r));
        }
    }
    println!("{}", rule);
    println!(
        "  {}{}",
        pad(MethodAxis::Manual.tick_label()).cyan(),
        pad(MethodAxis::AiAssisted.tick_label()).cyan()
    );

    if frame.points.is_empty() {
        println!("{}", "No projects yet.".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrant_core::{GridConfig, ProjectFields, Session};

    #[test]
    fn test_cells_group_points_by_quadrant() {
        let mut session = Session::with_seed(GridConfig::default(), 5);
        session
            .add(ProjectFields::in_quadrant("Alpha", Quadrant::OnshoreManual))
            .unwrap();
        session
            .add(ProjectFields::in_quadrant("Beta", Quadrant::OffshoreAi))
            .unwrap();
        let frame = session.render();
        let sizes = DotSizes::default();

        let onshore_manual = cell_lines(&frame, Quadrant::OnshoreManual, &sizes);
        assert_eq!(onshore_manual, vec!["• [0] Alpha".to_string()]);
        assert!(cell_lines(&frame, Quadrant::OnshoreAi, &sizes).is_empty());
        assert_eq!(cell_lines(&frame, Quadrant::OffshoreAi, &sizes).len(), 1);
    }

    #[test]
    fn test_marker_grows_with_size() {
        let sizes = DotSizes::default();
        assert_eq!(marker(sizes.none, &sizes), "•");
        assert_eq!(marker(sizes.some, &sizes), "●");
        assert_eq!(marker(sizes.many, &sizes), "⬤");
    }
}
