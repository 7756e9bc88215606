//! RGB8 color packing.

use crate::math::vec3::Vec3;

/// One packed pixel: `[r, g, b]` bytes.
pub type Rgb = [u8; 3];

/// The clear color of every frame.
pub const BACKGROUND: Rgb = [0, 0, 0];

/// Encodes a linear-range color vector as RGB8.
///
/// Each channel is clamped to `[0, 1]` and converted with round-to-nearest
/// (a truncating cast would lose up to a full level of brightness).
#[inline]
pub fn encode_rgb(color: Vec3) -> Rgb {
    [
        encode_channel(color.x),
        encode_channel(color.y),
        encode_channel(color.z),
    ]
}

#[inline]
fn encode_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
