//! Per-frame derivation and draw-command emission.
//!
//! `compute_frame` is a pure function of the current slider values: identical
//! inputs yield an identical command list, with no frame counter or other
//! hidden state. Side effects live entirely in whatever executes the
//! commands (the web painter); that split keeps the math testable on the
//! host without a browser.

use glam::Vec2;
use smallvec::SmallVec;

use crate::color::Hsba;
use crate::constants::{
    canvas_center, BACKGROUND, CANVAS_SIZE, DARK_DIAMETER_FACTOR, DARK_FILL_BRIGHTNESS, EGO_HUE,
    EGO_SATURATION, LIGHT_DIAMETER_FACTOR, READOUT_ANCHOR, READOUT_LINE_HEIGHT, SHADOW_ALPHA,
    SHADOW_BASE_OFFSET, SHADOW_BRIGHTNESS, TORSION_POSITION_SCALE,
};
use crate::params::{remap, SketchInputs, LIGHT_RATIO, SHADOW_DENSITY};

/// Quantities derived from the sliders, all via the fixed mappings below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    /// HSB brightness of the Light Self, in [10, 100].
    pub ego_brightness: f32,
    /// Fill alpha of the Light Self, in [0.1, 1.0].
    pub ego_alpha: f32,
    /// Fill alpha of the Dark Self; always `1 - ego_alpha`.
    pub dark_alpha: f32,
    /// Shadow blur radius in logical pixels, in [0, 50].
    pub shadow_blur: f32,
    /// HSB saturation of the shadow color, in [10, 80].
    pub shadow_saturation: f32,
    /// Torsion displacement, x = torsion, y = torsion * -0.5.
    pub offset: Vec2,
}

/// Map the raw inputs to the visual parameters.
///
/// The blur mapping is intentionally quadratic rather than linear: repression
/// reads as subtle below roughly 60% density and grows sharply above it.
pub fn derive_params(inputs: &SketchInputs) -> FrameParams {
    let ego_alpha = remap(
        inputs.light_ratio,
        LIGHT_RATIO.min,
        LIGHT_RATIO.max,
        0.1,
        1.0,
    );
    let density_norm = inputs.shadow_density / SHADOW_DENSITY.max;
    FrameParams {
        ego_brightness: remap(
            inputs.light_ratio,
            LIGHT_RATIO.min,
            LIGHT_RATIO.max,
            10.0,
            100.0,
        ),
        ego_alpha,
        dark_alpha: 1.0 - ego_alpha,
        shadow_blur: density_norm * density_norm * SHADOW_DENSITY.max,
        shadow_saturation: remap(
            inputs.shadow_density,
            SHADOW_DENSITY.min,
            SHADOW_DENSITY.max,
            10.0,
            80.0,
        ),
        offset: Vec2::new(inputs.torsion, inputs.torsion * -0.5),
    }
}

/// Shadow state applied to the drawing context for one shadowed draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowConfig {
    pub blur: f32,
    pub color: Hsba,
    pub offset: Vec2,
}

/// A filled ellipse in logical canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseSpec {
    pub center: Vec2,
    pub radius: Vec2,
    pub fill: Hsba,
}

/// One drawing-surface operation.
///
/// The shadow travels inside `ShadowedEllipse` rather than as separate
/// set/reset commands, so a frame that configures a shadow and forgets to
/// clear it cannot be expressed; executors restore the default (disabled)
/// shadow state before moving to the next command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Hsba),
    ShadowedEllipse {
        shadow: ShadowConfig,
        ellipse: EllipseSpec,
    },
    Ellipse(EllipseSpec),
    Text {
        line: String,
        anchor: Vec2,
    },
}

/// Command list for one frame. Small and fixed-shape, so it stays inline.
pub type CommandList = SmallVec<[DrawCommand; 8]>;

/// Produce the full, ordered command list for one frame.
pub fn compute_frame(inputs: &SketchInputs) -> CommandList {
    let p = derive_params(inputs);
    let center = canvas_center();
    let strain = p.offset * TORSION_POSITION_SCALE;

    let mut commands = CommandList::new();
    commands.push(DrawCommand::Clear(BACKGROUND));

    // The Dark Self carries the projected shadow; its displacement opposes
    // the Light Self's.
    commands.push(DrawCommand::ShadowedEllipse {
        shadow: ShadowConfig {
            blur: p.shadow_blur,
            color: Hsba::new(0.0, p.shadow_saturation, SHADOW_BRIGHTNESS, SHADOW_ALPHA),
            offset: Vec2::splat(SHADOW_BASE_OFFSET) + p.offset,
        },
        ellipse: EllipseSpec {
            center: center + Vec2::new(-strain.x, strain.y),
            radius: Vec2::splat(CANVAS_SIZE * DARK_DIAMETER_FACTOR * 0.5),
            fill: Hsba::new(0.0, 0.0, DARK_FILL_BRIGHTNESS, p.dark_alpha),
        },
    });

    commands.push(DrawCommand::Ellipse(EllipseSpec {
        center: center + Vec2::new(strain.x, -strain.y),
        radius: Vec2::splat(CANVAS_SIZE * LIGHT_DIAMETER_FACTOR * 0.5),
        fill: Hsba::new(EGO_HUE, EGO_SATURATION, p.ego_brightness, p.ego_alpha),
    }));

    for (i, line) in readout_lines(inputs, &p).into_iter().enumerate() {
        commands.push(DrawCommand::Text {
            line,
            anchor: READOUT_ANCHOR + Vec2::new(0.0, i as f32 * READOUT_LINE_HEIGHT),
        });
    }

    commands
}

/// The three readout lines shown in the corner of the sketch.
pub fn readout_lines(inputs: &SketchInputs, params: &FrameParams) -> [String; 3] {
    [
        format!("Light Ratio (Ego Visibility): {:.0}", inputs.light_ratio),
        format!("Shadow Density (Blur): {:.2}", params.shadow_blur),
        format!("Torsion (Offset): {:.1}", inputs.torsion),
    ]
}
