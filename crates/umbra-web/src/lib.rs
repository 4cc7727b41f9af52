#![cfg(target_arch = "wasm32")]

pub mod dom;
pub mod frame;
pub mod painter;

use std::cell::RefCell;
use std::rc::Rc;
use umbra_core::{INTEGRATION_TORSION, LIGHT_RATIO, SHADOW_DENSITY};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("umbra-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::create_canvas(&document, "canvas-container")?;

    // Re-sync the backing store when the window (and with it the device
    // pixel ratio) changes
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            w.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
                .ok();
        }
        resize_closure.forget();
    }

    let sliders = frame::SliderBank {
        light: dom::create_slider(&document, "light-slider-container", &LIGHT_RATIO)?,
        density: dom::create_slider(&document, "density-slider-container", &SHADOW_DENSITY)?,
        integration: dom::create_slider(
            &document,
            "integration-slider-container",
            &INTEGRATION_TORSION,
        )?,
    };
    wire_slider_logging(&sliders);

    let painter = painter::Painter::new(&canvas)?;
    let mut cx = frame::FrameContext { sliders, painter };

    // Render loop driven by requestAnimationFrame
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        cx.frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }

    Ok(())
}

fn wire_slider_logging(sliders: &frame::SliderBank) {
    for (name, slider) in [
        ("light-ratio", &sliders.light),
        ("shadow-density", &sliders.density),
        ("integration-torsion", &sliders.integration),
    ] {
        let handle = slider.clone();
        dom::add_input_listener(slider, move || {
            log::debug!("[slider] {} = {}", name, handle.value());
        });
    }
}
