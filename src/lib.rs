#![cfg(target_arch = "wasm32")]
use crate::core::{CameraSequencer, FieldParams, FrameClock, InstanceRaw, SequencerConfig};
use bytemuck::Zeroable;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// One-time gesture: clicking the start overlay fires the sequencer's
/// Idle -> Intro transition. The FSM guards repeats itself, so the listener
/// lifecycle does not matter.
fn wire_start_gesture(
    document: &web::Document,
    sequencer: Rc<RefCell<CameraSequencer>>,
    audio_ctx: web::AudioContext,
) {
    dom::add_click_listener(document, "start-overlay", move || {
        if sequencer.borrow_mut().trigger() {
            log::info!("[gesture] intro triggered");
            _ = audio_ctx.resume();
            if let Some(doc) = dom::window_document() {
                overlay::hide(&doc);
            }
        } else {
            log::warn!("[gesture] intro already triggered; ignoring extra click");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("torus-field starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Shared single-threaded state: panel and sequencer write, generator reads.
    let params = Rc::new(RefCell::new(FieldParams::default()));
    let sequencer = Rc::new(RefCell::new(CameraSequencer::new(SequencerConfig::default())));

    overlay::show(&document);
    {
        let p = params.borrow();
        overlay::update_hint(&document, p.distortion_power, p.volume_scale);
    }
    wire_start_gesture(&document, sequencer.clone(), audio_ctx.clone());
    events::wire_global_keydown(params.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        params,
        sequencer,
        clock: FrameClock::new(),
        canvas,
        audio_ctx,
        audio: Rc::new(RefCell::new(None)),
        gpu,
        instances: vec![InstanceRaw::zeroed(); constants::INSTANCE_COUNT],
        amplitude: 0.0,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
