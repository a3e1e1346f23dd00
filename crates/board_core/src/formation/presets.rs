//! Built-in formation presets
//!
//! Template positions are expressed in the default 800x600 canvas, home
//! orientation, and stay inside the home drag band so applying a preset
//! never needs a clamp. Slot order matches the default roster: keeper,
//! back line, midfield, forwards.

use once_cell::sync::Lazy;

use super::Formation;
use crate::pitch::Point;

static PRESETS: Lazy<Vec<Formation>> = Lazy::new(|| {
    vec![
        create_442(),
        create_433(),
        create_451(),
        create_4231(),
        create_352(),
        create_343(),
        create_532(),
    ]
});

pub(super) fn presets() -> &'static [Formation] {
    &PRESETS
}

pub(super) fn default_preset_id() -> &'static str {
    &PRESETS[0].id
}

fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn formation(id: &str, description: &str, positions: Vec<Point>) -> Formation {
    Formation {
        id: id.to_string(),
        name: id.to_string(),
        description: Some(description.to_string()),
        positions,
    }
}

fn create_442() -> Formation {
    formation(
        "4-4-2",
        "Two balanced banks of four",
        vec![
            pt(400.0, 560.0),
            pt(120.0, 480.0),
            pt(300.0, 490.0),
            pt(500.0, 490.0),
            pt(680.0, 480.0),
            pt(120.0, 385.0),
            pt(300.0, 395.0),
            pt(500.0, 395.0),
            pt(680.0, 385.0),
            pt(300.0, 305.0),
            pt(500.0, 305.0),
        ],
    )
}

fn create_433() -> Formation {
    formation(
        "4-3-3",
        "Midfield triangle behind wide forwards",
        vec![
            pt(400.0, 560.0),
            pt(120.0, 480.0),
            pt(300.0, 490.0),
            pt(500.0, 490.0),
            pt(680.0, 480.0),
            pt(250.0, 400.0),
            pt(400.0, 420.0),
            pt(550.0, 400.0),
            pt(130.0, 310.0),
            pt(400.0, 295.0),
            pt(670.0, 310.0),
        ],
    )
}

fn create_451() -> Formation {
    formation(
        "4-5-1",
        "Packed midfield feeding a lone striker",
        vec![
            pt(400.0, 560.0),
            pt(120.0, 480.0),
            pt(300.0, 490.0),
            pt(500.0, 490.0),
            pt(680.0, 480.0),
            pt(110.0, 385.0),
            pt(260.0, 400.0),
            pt(400.0, 415.0),
            pt(540.0, 400.0),
            pt(690.0, 385.0),
            pt(400.0, 300.0),
        ],
    )
}

fn create_4231() -> Formation {
    formation(
        "4-2-3-1",
        "Double pivot behind an attacking trio",
        vec![
            pt(400.0, 560.0),
            pt(120.0, 480.0),
            pt(300.0, 490.0),
            pt(500.0, 490.0),
            pt(680.0, 480.0),
            pt(310.0, 430.0),
            pt(490.0, 430.0),
            pt(150.0, 345.0),
            pt(400.0, 355.0),
            pt(650.0, 345.0),
            pt(400.0, 295.0),
        ],
    )
}

fn create_352() -> Formation {
    formation(
        "3-5-2",
        "Wing-backs supplying a front two",
        vec![
            pt(400.0, 560.0),
            pt(240.0, 485.0),
            pt(400.0, 495.0),
            pt(560.0, 485.0),
            pt(90.0, 395.0),
            pt(270.0, 405.0),
            pt(400.0, 425.0),
            pt(530.0, 405.0),
            pt(710.0, 395.0),
            pt(300.0, 305.0),
            pt(500.0, 305.0),
        ],
    )
}

fn create_343() -> Formation {
    formation(
        "3-4-3",
        "Back three behind an aggressive front line",
        vec![
            pt(400.0, 560.0),
            pt(240.0, 485.0),
            pt(400.0, 495.0),
            pt(560.0, 485.0),
            pt(130.0, 400.0),
            pt(320.0, 410.0),
            pt(480.0, 410.0),
            pt(670.0, 400.0),
            pt(150.0, 305.0),
            pt(400.0, 295.0),
            pt(650.0, 305.0),
        ],
    )
}

fn create_532() -> Formation {
    formation(
        "5-3-2",
        "Five-man defensive block",
        vec![
            pt(400.0, 560.0),
            pt(90.0, 470.0),
            pt(250.0, 490.0),
            pt(400.0, 500.0),
            pt(550.0, 490.0),
            pt(710.0, 470.0),
            pt(250.0, 400.0),
            pt(400.0, 390.0),
            pt(550.0, 400.0),
            pt(300.0, 305.0),
            pt(500.0, 305.0),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Side;
    use crate::pitch::PitchGeometry;

    #[test]
    fn every_preset_has_eleven_slots_and_a_unique_id() {
        let presets = presets();
        assert_eq!(presets.len(), 7);
        for f in presets {
            assert_eq!(f.positions.len(), 11, "{} is not a full lineup", f.id);
            assert!(!f.is_custom());
            assert!(f.description.is_some());
        }
        let mut ids: Vec<&str> = presets.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), presets.len());
    }

    #[test]
    fn the_default_preset_is_the_first_one() {
        assert_eq!(default_preset_id(), "4-4-2");
        assert_eq!(presets()[0].id, "4-4-2");
    }

    #[test]
    fn preset_positions_sit_inside_the_home_drag_band() {
        let geo = PitchGeometry::default();
        for f in presets() {
            for p in &f.positions {
                let clamped = geo.clamp_to_side(Side::Home, *p);
                assert_eq!(clamped, *p, "{} has a slot outside the home band", f.id);
            }
        }
    }

    #[test]
    fn keeper_slot_sits_deepest() {
        for f in presets() {
            let keeper_y = f.positions[0].y;
            assert!(f.positions[1..].iter().all(|p| p.y < keeper_y), "{}", f.id);
        }
    }
}
