use crate::dom;
use crate::painter::Painter;
use umbra_core::{compute_frame, SketchInputs, INTEGRATION_TORSION, LIGHT_RATIO, SHADOW_DENSITY};
use web_sys as web;

/// Handles to the three range inputs owned by the page.
pub struct SliderBank {
    pub light: web::HtmlInputElement,
    pub density: web::HtmlInputElement,
    pub integration: web::HtmlInputElement,
}

impl SliderBank {
    /// Snapshot the current slider values, clamped to their declared ranges.
    pub fn read(&self) -> SketchInputs {
        SketchInputs {
            light_ratio: dom::slider_value(&self.light, &LIGHT_RATIO),
            shadow_density: dom::slider_value(&self.density, &SHADOW_DENSITY),
            torsion: dom::slider_value(&self.integration, &INTEGRATION_TORSION),
        }
        .clamped()
    }
}

pub struct FrameContext {
    pub sliders: SliderBank,
    pub painter: Painter,
}

impl FrameContext {
    /// Render one frame from the current slider values. Pure derivation in
    /// the core, side effects in the painter.
    pub fn frame(&mut self) {
        let inputs = self.sliders.read();
        let commands = compute_frame(&inputs);
        self.painter.paint(&commands);
    }
}
