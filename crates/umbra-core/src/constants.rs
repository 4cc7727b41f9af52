use crate::color::Hsba;
use glam::Vec2;

// Shared layout/palette constants used by both the frame model and the web
// front-end.

// Canvas geometry (logical pixels; the backing store is DPR-scaled)
pub const CANVAS_SIZE: f32 = 600.0;

// Ellipse sizing, as diameter fractions of the canvas edge
pub const DARK_DIAMETER_FACTOR: f32 = 0.4; // the Dark Self, shadow locus
pub const LIGHT_DIAMETER_FACTOR: f32 = 0.35; // the Light Self, ego form

// Torsion displacement: slider units -> logical pixels, applied with
// opposite signs to the two forms
pub const TORSION_POSITION_SCALE: f32 = 10.0;

// Fixed shadow projection offset the torsion strain is added to
pub const SHADOW_BASE_OFFSET: f32 = 5.0;

// Palette
pub const BACKGROUND: Hsba = Hsba::new(10.0, 0.0, 5.0, 1.0); // near-black
pub const EGO_HUE: f32 = 40.0; // gold
pub const EGO_SATURATION: f32 = 70.0;
pub const DARK_FILL_BRIGHTNESS: f32 = 20.0;
pub const SHADOW_BRIGHTNESS: f32 = 10.0;
pub const SHADOW_ALPHA: f32 = 0.8;

// Readout text
pub const READOUT_COLOR: Hsba = Hsba::new(0.0, 0.0, 80.0, 1.0);
pub const READOUT_FONT: &str = "14px sans-serif";
pub const READOUT_ANCHOR: Vec2 = Vec2::new(12.0, 24.0);
pub const READOUT_LINE_HEIGHT: f32 = 20.0;

#[inline]
pub fn canvas_center() -> Vec2 {
    Vec2::splat(CANVAS_SIZE * 0.5)
}
