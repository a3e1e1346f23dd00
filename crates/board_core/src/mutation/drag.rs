//! Drag gesture resolution

use crate::models::Side;
use crate::pitch::{PitchGeometry, Point, ViewportTransform};

/// Turn a raw device coordinate into the position a dragged player ends
/// up at: convert into canvas space, then clamp into the side's band.
pub fn resolve_drag(
    geometry: &PitchGeometry,
    transform: &ViewportTransform,
    side: Side,
    device_x: f32,
    device_y: f32,
) -> Point {
    let raw = transform.to_canvas(device_x, device_y);
    geometry.clamp_to_side(side, raw)
}
