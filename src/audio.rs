use crate::constants::{ANALYSER_FFT_SIZE, AUDIO_ASSET_URL, MASTER_GAIN};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Playback and analysis graph for the looped music asset:
/// source -> master gain -> analyser -> destination.
pub struct AudioGraph {
    pub master_gain: web::GainNode,
    pub analyser: web::AnalyserNode,
    pub analyser_buf: Rc<RefCell<Vec<f32>>>,
    pub source: web::AudioBufferSourceNode,
}

impl AudioGraph {
    /// Latest dBFS frequency bins, refreshed in place.
    pub fn read_bins(&self) -> std::cell::Ref<'_, Vec<f32>> {
        {
            let mut buf = self.analyser_buf.borrow_mut();
            let bins = self.analyser.frequency_bin_count() as usize;
            if buf.len() != bins {
                buf.resize(bins, 0.0);
            }
            self.analyser.get_float_frequency_data(&mut buf);
        }
        self.analyser_buf.borrow()
    }
}

/// Fetch, decode and loop the music asset. While this is pending (or after a
/// failure) the amplitude sample stays at its default of zero.
pub async fn load_and_play(audio_ctx: &web::AudioContext) -> anyhow::Result<AudioGraph> {
    let document = dom::window_document();
    if let Some(doc) = &document {
        overlay::set_progress(doc, "loading audio\u{2026}");
    }

    let buffer = fetch_audio_buffer(audio_ctx, AUDIO_ASSET_URL).await;
    let buffer = match buffer {
        Ok(b) => b,
        Err(e) => {
            if let Some(doc) = &document {
                overlay::set_progress(doc, "audio unavailable");
            }
            return Err(e);
        }
    };

    let master_gain = web::GainNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    master_gain.gain().set_value(MASTER_GAIN);

    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    let analyser_buf = Rc::new(RefCell::new(vec![
        0.0;
        analyser.frequency_bin_count() as usize
    ]));

    let source = audio_ctx
        .create_buffer_source()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    source.set_buffer(Some(&buffer));
    source.set_loop(true);

    source
        .connect_with_audio_node(&master_gain)
        .map_err(|e| anyhow::anyhow!("connect error: {:?}", e))?;
    master_gain
        .connect_with_audio_node(&analyser)
        .map_err(|e| anyhow::anyhow!("connect error: {:?}", e))?;
    analyser
        .connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| anyhow::anyhow!("connect error: {:?}", e))?;

    source.start().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[audio] loop playing");

    if let Some(doc) = &document {
        overlay::set_progress(doc, "");
    }

    Ok(AudioGraph {
        master_gain,
        analyser,
        analyser_buf,
        source,
    })
}

async fn fetch_audio_buffer(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} failed: HTTP {}", url, resp.status());
    }
    let array_buffer = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let array_buffer: js_sys::ArrayBuffer = array_buffer
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let decoded = JsFuture::from(
        audio_ctx
            .decode_audio_data(&array_buffer)
            .map_err(|e| anyhow::anyhow!("decode_audio_data error: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("audio decode failed: {:?}", e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
