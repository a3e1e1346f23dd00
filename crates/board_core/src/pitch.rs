//! Pitch geometry and coordinate conversion
//!
//! All board state lives in one logical canvas coordinate system. The
//! rendered widget may be any size; `ViewportTransform` converts device
//! coordinates back into canvas coordinates before any clamping happens.

use serde::{Deserialize, Serialize};

use crate::models::Side;

/// A point in logical canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Logical pitch dimensions and the movement limits derived from them.
///
/// The home team occupies the high-y half of the canvas, the away team the
/// low-y half. Both teams may cross the halfway line by `halfline_overlap`
/// canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchGeometry {
    pub width: f32,
    pub height: f32,
    /// Inner edge distance that players cannot cross on any side.
    pub margin: f32,
    /// How far past the halfway line each team may advance.
    pub halfline_overlap: f32,
}

impl Default for PitchGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 25.0,
            halfline_overlap: 20.0,
        }
    }
}

impl PitchGeometry {
    /// Y coordinate of the halfway line.
    pub fn midline(&self) -> f32 {
        self.height / 2.0
    }

    /// Reflect a y coordinate across the halfway line.
    pub fn mirror_y(&self, y: f32) -> f32 {
        self.height - y
    }

    /// Reflect a point across the halfway line, keeping x.
    pub fn mirror_point(&self, p: Point) -> Point {
        Point::new(p.x, self.mirror_y(p.y))
    }

    /// Inclusive y range a team's players may occupy while dragging.
    pub fn y_band(&self, side: Side) -> (f32, f32) {
        match side {
            Side::Home => (self.midline() - self.halfline_overlap, self.height - self.margin),
            Side::Away => (self.margin, self.midline() + self.halfline_overlap),
        }
    }

    /// Clamp a point into the given team's movement area.
    pub fn clamp_to_side(&self, side: Side, p: Point) -> Point {
        let (y_min, y_max) = self.y_band(side);
        Point::new(
            p.x.clamp(self.margin, self.width - self.margin),
            p.y.clamp(y_min, y_max),
        )
    }
}

/// Maps device (rendered widget) coordinates into canvas coordinates.
///
/// Rebuild the transform whenever the rendered size changes. Rendered
/// dimensions must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    origin_x: f32,
    origin_y: f32,
    scale_x: f32,
    scale_y: f32,
}

impl ViewportTransform {
    /// `origin` is the device position of the canvas top-left corner,
    /// `rendered_*` the device size the canvas is drawn at.
    pub fn new(
        geometry: &PitchGeometry,
        origin_x: f32,
        origin_y: f32,
        rendered_width: f32,
        rendered_height: f32,
    ) -> Self {
        Self {
            origin_x,
            origin_y,
            scale_x: geometry.width / rendered_width,
            scale_y: geometry.height / rendered_height,
        }
    }

    /// Identity transform for a canvas rendered at its logical size.
    pub fn identity(geometry: &PitchGeometry) -> Self {
        Self::new(geometry, 0.0, 0.0, geometry.width, geometry.height)
    }

    /// Convert a device coordinate into canvas coordinates.
    pub fn to_canvas(&self, device_x: f32, device_y: f32) -> Point {
        Point::new(
            (device_x - self.origin_x) * self.scale_x,
            (device_y - self.origin_y) * self.scale_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_bands_overlap_at_the_halfway_line() {
        let geo = PitchGeometry::default();
        assert_eq!(geo.midline(), 300.0);
        assert_eq!(geo.y_band(Side::Home), (280.0, 575.0));
        assert_eq!(geo.y_band(Side::Away), (25.0, 320.0));
    }

    #[test]
    fn clamp_pins_out_of_range_points_to_the_band_edge() {
        let geo = PitchGeometry::default();

        let p = geo.clamp_to_side(Side::Home, Point::new(-50.0, 1000.0));
        assert_eq!(p, Point::new(25.0, 575.0));

        let p = geo.clamp_to_side(Side::Home, Point::new(400.0, 100.0));
        assert_eq!(p, Point::new(400.0, 280.0));

        let p = geo.clamp_to_side(Side::Away, Point::new(900.0, 500.0));
        assert_eq!(p, Point::new(775.0, 320.0));
    }

    #[test]
    fn clamp_keeps_points_already_inside_the_band() {
        let geo = PitchGeometry::default();
        let p = Point::new(320.0, 450.0);
        assert_eq!(geo.clamp_to_side(Side::Home, p), p);
        let p = Point::new(320.0, 150.0);
        assert_eq!(geo.clamp_to_side(Side::Away, p), p);
    }

    #[test]
    fn mirror_maps_one_band_onto_the_other() {
        let geo = PitchGeometry::default();
        let (home_min, home_max) = geo.y_band(Side::Home);
        let (away_min, away_max) = geo.y_band(Side::Away);
        assert_eq!(geo.mirror_y(home_min), away_max);
        assert_eq!(geo.mirror_y(home_max), away_min);
    }

    #[test]
    fn viewport_scales_device_input_back_to_canvas() {
        let geo = PitchGeometry::default();
        // Rendered at half size with a 10px offset on both axes.
        let vt = ViewportTransform::new(&geo, 10.0, 10.0, 400.0, 300.0);
        let p = vt.to_canvas(210.0, 160.0);
        assert_eq!(p, Point::new(400.0, 300.0));

        let id = ViewportTransform::identity(&geo);
        assert_eq!(id.to_canvas(123.0, 45.0), Point::new(123.0, 45.0));
    }

    proptest! {
        #[test]
        fn mirror_is_its_own_inverse(y in 0.0f32..600.0) {
            let geo = PitchGeometry::default();
            let back = geo.mirror_y(geo.mirror_y(y));
            prop_assert!((back - y).abs() < 1e-3);
        }

        #[test]
        fn clamp_always_lands_inside_the_band(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0) {
            let geo = PitchGeometry::default();
            for side in [Side::Home, Side::Away] {
                let p = geo.clamp_to_side(side, Point::new(x, y));
                let (y_min, y_max) = geo.y_band(side);
                prop_assert!(p.x >= geo.margin && p.x <= geo.width - geo.margin);
                prop_assert!(p.y >= y_min && p.y <= y_max);
            }
        }
    }
}
