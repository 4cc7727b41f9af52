//! Input model: the three slider-owned scalars and their declared ranges.
//!
//! The specs below are the whole configuration surface of the sketch. The web
//! layer builds its `<input type="range">` elements from them, so the DOM and
//! the derivation math can never disagree about range, step, or default.

/// Declared range, step, and default of one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl SliderSpec {
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Ego visibility, 0 (suppressed) to 255 (fully present).
pub const LIGHT_RATIO: SliderSpec = SliderSpec {
    min: 0.0,
    max: 255.0,
    step: 1.0,
    default: 150.0,
};

/// Repression level; drives shadow blur and saturation.
pub const SHADOW_DENSITY: SliderSpec = SliderSpec {
    min: 0.0,
    max: 50.0,
    step: 1.0,
    default: 35.0,
};

/// Tension between the two forms, -10 (confrontation) to 10 (avoidance).
/// Step 0.1 for smooth movement.
pub const INTEGRATION_TORSION: SliderSpec = SliderSpec {
    min: -10.0,
    max: 10.0,
    step: 0.1,
    default: 0.0,
};

/// One frame's worth of inputs, read fresh from the sliders every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchInputs {
    pub light_ratio: f32,
    pub shadow_density: f32,
    pub torsion: f32,
}

impl SketchInputs {
    pub fn new(light_ratio: f32, shadow_density: f32, torsion: f32) -> Self {
        Self {
            light_ratio,
            shadow_density,
            torsion,
        }
        .clamped()
    }

    /// Clamp every field to its declared slider range. The sliders enforce
    /// this themselves; clamping here keeps the derivation total even for
    /// values that never went through the DOM.
    pub fn clamped(self) -> Self {
        Self {
            light_ratio: LIGHT_RATIO.clamp(self.light_ratio),
            shadow_density: SHADOW_DENSITY.clamp(self.shadow_density),
            torsion: INTEGRATION_TORSION.clamp(self.torsion),
        }
    }
}

impl Default for SketchInputs {
    fn default() -> Self {
        Self {
            light_ratio: LIGHT_RATIO.default,
            shadow_density: SHADOW_DENSITY.default,
            torsion: INTEGRATION_TORSION.default,
        }
    }
}

/// Linear interpolation of `value` from `[in_min, in_max]` to
/// `[out_min, out_max]`. Unclamped; callers feed it range-bound slider
/// values.
#[inline]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}
