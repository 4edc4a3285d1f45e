//! Coordinate mapping
//!
//! Places projects in unit-square plot space. Each axis is split at 0.5, so a
//! project sits at the center of its quadrant (0.25 or 0.75 on each axis),
//! nudged by the jitter stored on the record.

use log::debug;
use rand::Rng;

use crate::models::{LocationAxis, MethodAxis, Project, Quadrant};

/// Default half-width of the jitter range
pub const DEFAULT_JITTER: f64 = 0.12;

/// Position of the quadrant dividers on both axes
pub const DIVIDER: f64 = 0.5;

/// Un-jittered center of the quadrant for the given categories
pub fn quadrant_center(method: MethodAxis, location: LocationAxis) -> (f64, f64) {
    (
        0.25 + 0.5 * f64::from(method.category()),
        0.25 + 0.5 * f64::from(location.category()),
    )
}

/// Plot position of a project: its quadrant center plus its stored jitter
pub fn map(project: &Project) -> (f64, f64) {
    let (cx, cy) = quadrant_center(project.method, project.location);
    (cx + project.jitter_x, cy + project.jitter_y)
}

/// Draw a jitter pair uniformly from `[-half_width, half_width]` on each axis
pub fn random_jitter<R: Rng>(rng: &mut R, half_width: f64) -> (f64, f64) {
    if half_width <= 0.0 {
        return (0.0, 0.0);
    }
    (
        rng.gen_range(-half_width..=half_width),
        rng.gen_range(-half_width..=half_width),
    )
}

/// Recognise a quadrant by name.
///
/// Accepts config keys (`onshore_ai`), display names (`Onshore / AI`) and
/// loose combinations such as `"AI + Auto onshore"`. Exactly one location and
/// one method must be named; contradictory names are not recognised.
pub fn parse_quadrant(name: &str) -> Option<Quadrant> {
    let normalized = name.to_lowercase();
    let words: Vec<&str> = normalized
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let onshore = words.contains(&"onshore");
    let offshore = words.contains(&"offshore");
    let location = match (onshore, offshore) {
        (true, false) => LocationAxis::Onshore,
        (false, true) => LocationAxis::Offshore,
        _ => return None,
    };

    let automated = words.iter().any(|w| matches!(*w, "ai" | "auto" | "automated"));
    let manual = words.contains(&"manual");
    let method = match (automated, manual) {
        (true, false) => MethodAxis::AiAssisted,
        (false, true) => MethodAxis::Manual,
        _ => return None,
    };

    Some(Quadrant::from_axes(method, location))
}

/// Axis categories `(method, location)` for a quadrant name.
///
/// Unrecognised names fall back to [`Quadrant::FALLBACK`].
pub fn quadrant_to_xy(name: &str) -> (u8, u8) {
    let quadrant = parse_quadrant(name).unwrap_or_else(|| {
        debug!(
            "Unrecognised quadrant '{}', using {}",
            name,
            Quadrant::FALLBACK
        );
        Quadrant::FALLBACK
    });
    (quadrant.method().category(), quadrant.location().category())
}

/// Quadrant for a pair of axis categories
pub fn xy_to_quadrant(x: u8, y: u8) -> Quadrant {
    Quadrant::from_axes(MethodAxis::from_category(x), LocationAxis::from_category(y))
}

/// Quadrant containing a plot-space point
pub fn quadrant_at(x: f64, y: f64) -> Quadrant {
    xy_to_quadrant(u8::from(x >= DIVIDER), u8::from(y >= DIVIDER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectFields;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn project(method: MethodAxis, location: LocationAxis, jitter: (f64, f64)) -> Project {
        Project::new(ProjectFields::new("P", method, location), jitter)
    }

    #[test]
    fn test_centers_fall_inside_quadrants() {
        for method in MethodAxis::ALL {
            for location in LocationAxis::ALL {
                let (x, y) = quadrant_center(method, location);
                assert_eq!(quadrant_at(x, y), Quadrant::from_axes(method, location));

                for dx in [-DEFAULT_JITTER, DEFAULT_JITTER] {
                    for dy in [-DEFAULT_JITTER, DEFAULT_JITTER] {
                        let (px, py) = map(&project(method, location, (dx, dy)));
                        assert!(px > 0.0 && px < 1.0);
                        assert!(py > 0.0 && py < 1.0);
                        assert_eq!(quadrant_at(px, py), Quadrant::from_axes(method, location));
                    }
                }
            }
        }
    }

    #[test]
    fn test_map_adds_jitter() {
        let p = project(MethodAxis::AiAssisted, LocationAxis::Offshore, (0.1, -0.05));
        let (x, y) = map(&p);
        assert!((x - 0.85).abs() < 1e-12);
        assert!((y - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_quadrant_lookup_is_inverse() {
        for quadrant in Quadrant::ALL {
            let (x, y) = quadrant_to_xy(quadrant.key());
            assert_eq!(xy_to_quadrant(x, y), quadrant);

            let (x, y) = quadrant_to_xy(&quadrant.to_string());
            assert_eq!(xy_to_quadrant(x, y), quadrant);
        }
    }

    #[test]
    fn test_quadrant_lookup_loose_names() {
        assert_eq!(parse_quadrant("Onshore + Auto/AI"), Some(Quadrant::OnshoreAi));
        assert_eq!(parse_quadrant("  OFFSHORE manual "), Some(Quadrant::OffshoreManual));
        assert_eq!(parse_quadrant("onshore"), None);
        assert_eq!(parse_quadrant("maintenance"), None);
    }

    #[test]
    fn test_contradictory_names_use_fallback() {
        assert_eq!(parse_quadrant("manual ai onshore"), None);
        assert_eq!(parse_quadrant("offshore onshore manual"), None);
        assert_eq!(
            quadrant_to_xy("manual ai onshore"),
            quadrant_to_xy("not a quadrant")
        );
    }

    #[test]
    fn test_unknown_quadrant_uses_fallback() {
        let fallback = (
            Quadrant::FALLBACK.method().category(),
            Quadrant::FALLBACK.location().category(),
        );
        assert_eq!(quadrant_to_xy(""), fallback);
        assert_eq!(quadrant_to_xy("north-east"), fallback);
    }

    #[test]
    fn test_random_jitter_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (jx, jy) = random_jitter(&mut rng, 0.15);
            assert!((-0.15..=0.15).contains(&jx));
            assert!((-0.15..=0.15).contains(&jy));
        }
        assert_eq!(random_jitter(&mut rng, 0.0), (0.0, 0.0));
    }
}
