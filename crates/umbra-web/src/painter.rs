//! Executes draw commands against a `CanvasRenderingContext2d`.
//!
//! Shadow state on the 2D context is global and sticky, so it is only ever
//! touched through [`ShadowScope`], which restores the disabled state when it
//! goes out of scope. After `paint` returns, blur and offsets are back at
//! zero and the shadow color is fully transparent.

use umbra_core::{DrawCommand, EllipseSpec, ShadowConfig, CANVAS_SIZE, READOUT_COLOR, READOUT_FONT};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    /// Execute one frame's command list in order.
    pub fn paint(&self, commands: &[DrawCommand]) {
        // Backing store is DPR-scaled; commands are in logical coordinates
        let scale = self.canvas.width() as f64 / CANVAS_SIZE as f64;
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);

        for command in commands {
            match command {
                DrawCommand::Clear(color) => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    self.ctx
                        .fill_rect(0.0, 0.0, CANVAS_SIZE as f64, CANVAS_SIZE as f64);
                }
                DrawCommand::ShadowedEllipse { shadow, ellipse } => {
                    let _shadow = ShadowScope::apply(&self.ctx, shadow);
                    self.fill_ellipse(ellipse);
                }
                DrawCommand::Ellipse(ellipse) => self.fill_ellipse(ellipse),
                DrawCommand::Text { line, anchor } => {
                    self.ctx.set_font(READOUT_FONT);
                    self.ctx.set_fill_style_str(&READOUT_COLOR.to_css());
                    let _ = self
                        .ctx
                        .fill_text(line, anchor.x as f64, anchor.y as f64);
                }
            }
        }
    }

    fn fill_ellipse(&self, ellipse: &EllipseSpec) {
        self.ctx.set_fill_style_str(&ellipse.fill.to_css());
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            ellipse.center.x as f64,
            ellipse.center.y as f64,
            ellipse.radius.x as f64,
            ellipse.radius.y as f64,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }
}

/// Applies a shadow configuration for the lifetime of the guard and restores
/// the disabled shadow state on every exit path.
struct ShadowScope<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> ShadowScope<'a> {
    fn apply(ctx: &'a web::CanvasRenderingContext2d, shadow: &ShadowConfig) -> Self {
        ctx.set_shadow_blur(f64::from(shadow.blur));
        ctx.set_shadow_color(&shadow.color.to_css());
        ctx.set_shadow_offset_x(f64::from(shadow.offset.x));
        ctx.set_shadow_offset_y(f64::from(shadow.offset.y));
        Self { ctx }
    }
}

impl Drop for ShadowScope<'_> {
    fn drop(&mut self) {
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_shadow_offset_x(0.0);
        self.ctx.set_shadow_offset_y(0.0);
        self.ctx.set_shadow_color("rgba(0, 0, 0, 0)");
    }
}
