//! DOM plumbing: canvas and slider construction, slider reads, listeners.

use umbra_core::{SliderSpec, CANVAS_SIZE};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

/// Create the sketch canvas and attach it under the given container.
pub fn create_canvas(
    document: &web::Document,
    container_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id("sketch-canvas");
    element_by_id(document, container_id)?
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    sync_canvas_backing_size(&canvas);
    Ok(canvas)
}

/// Create an `<input type="range">` from a slider spec and attach it under
/// the given container. Range, step, and default all come from the spec, so
/// the DOM control enforces exactly the ranges the derivation assumes.
pub fn create_slider(
    document: &web::Document,
    container_id: &str,
    spec: &SliderSpec,
) -> anyhow::Result<web::HtmlInputElement> {
    let slider: web::HtmlInputElement = document
        .create_element("input")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    slider.set_type("range");
    slider.set_min(&spec.min.to_string());
    slider.set_max(&spec.max.to_string());
    slider.set_step(&spec.step.to_string());
    slider.set_value(&spec.default.to_string());
    slider.set_class_name("visualization-slider");
    element_by_id(document, container_id)?
        .append_child(&slider)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(slider)
}

/// Read a slider as f32, falling back to the spec default when the control
/// reports NaN (empty or detached input).
pub fn slider_value(slider: &web::HtmlInputElement, spec: &SliderSpec) -> f32 {
    let raw = slider.value_as_number();
    if raw.is_nan() {
        spec.default
    } else {
        spec.clamp(raw as f32)
    }
}

#[inline]
pub fn add_input_listener(element: &web::HtmlInputElement, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the canvas backing store at the fixed logical size times the device
/// pixel ratio; drawing stays in logical coordinates.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let px = (CANVAS_SIZE as f64 * dpr) as u32;
        canvas.set_width(px.max(1));
        canvas.set_height(px.max(1));
    }
}
