use crate::audio;
use crate::constants::{AMPLITUDE_TAU_SEC, ANALYSER_TAKE_BINS};
use crate::core::level;
use crate::core::panel;
use crate::core::{CameraSequencer, FieldParams, FrameClock, InstanceRaw};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything one frame needs, owned explicitly instead of hanging off a
/// global app object. The render loop borrows this once per tick.
pub struct FrameContext<'a> {
    pub params: Rc<RefCell<FieldParams>>,
    pub sequencer: Rc<RefCell<CameraSequencer>>,
    pub clock: FrameClock,

    pub canvas: web::HtmlCanvasElement,
    pub audio_ctx: web::AudioContext,
    /// Becomes `Some` once the post-intro asset load finishes; stays `None`
    /// on decode failure, leaving the amplitude at its default of zero.
    pub audio: Rc<RefCell<Option<audio::AudioGraph>>>,

    pub gpu: Option<render::GpuState<'a>>,
    pub instances: Vec<InstanceRaw>,
    pub amplitude: f32,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();
        self.clock.advance(dt.as_secs_f64());

        let step = self.sequencer.borrow_mut().advance(dt_sec);
        self.params.borrow_mut().rotation_bias = step.rotation_bias;

        if step.intro_completed {
            log::info!("[sequencer] intro complete; starting audio");
            _ = self.audio_ctx.resume();
            let audio_ctx = self.audio_ctx.clone();
            let slot = self.audio.clone();
            spawn_local(async move {
                match audio::load_and_play(&audio_ctx).await {
                    Ok(graph) => *slot.borrow_mut() = Some(graph),
                    Err(e) => log::error!("audio load error: {:?}", e),
                }
            });
        }

        // Amplitude sample: zero until the analyser exists.
        let target = match &*self.audio.borrow() {
            Some(graph) => level::amplitude_from_db_bins(&graph.read_bins(), ANALYSER_TAKE_BINS),
            None => 0.0,
        };
        self.amplitude = level::smooth_amplitude(self.amplitude, target, dt_sec, AMPLITUDE_TAU_SEC);

        // All instance updates complete before the draw call.
        let elapsed = self.clock.elapsed_f32();
        {
            let p = self.params.borrow();
            crate::core::write_instances(&mut self.instances, elapsed, self.amplitude, &p);
        }

        if let Some(g) = &mut self.gpu {
            g.set_camera(step.eye, step.target);
            let background = panel::background_color(self.params.borrow().background_index);
            g.set_clear_color(background);
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.instances, elapsed, self.amplitude) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
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
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
