use crate::core::{AudioAccessError, AudioSampler, SnapshotSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Microphone analyser. Keeps the context and source node alive alongside
/// the analyser so the graph is not collected.
pub struct MicAnalyser {
    _audio_ctx: web::AudioContext,
    _source: web::MediaStreamAudioSourceNode,
    analyser: web::AnalyserNode,
    fft_size: u32,
}

impl SnapshotSource for MicAnalyser {
    fn frequency_bin_count(&self) -> usize {
        self.analyser.frequency_bin_count() as usize
    }

    fn time_domain_len(&self) -> usize {
        self.fft_size as usize
    }

    fn fill_frequency(&self, out: &mut [u8]) {
        self.analyser.get_byte_frequency_data(out);
    }

    fn fill_time_domain(&self, out: &mut [u8]) {
        self.analyser.get_byte_time_domain_data(out);
    }
}

fn classify(err: JsValue) -> AudioAccessError {
    match err.dyn_ref::<web::DomException>() {
        Some(ex) => AudioAccessError::from_dom_exception(&ex.name(), ex.message()),
        None => AudioAccessError::Unavailable(format!("{:?}", err)),
    }
}

// Mono microphone constraints: { audio: { channelCount: 1 }, video: false }
fn mono_constraints() -> Result<web::MediaStreamConstraints, AudioAccessError> {
    let audio = js_sys::Object::new();
    js_sys::Reflect::set(&audio, &JsValue::from_str("channelCount"), &JsValue::from(1))
        .map_err(|e| AudioAccessError::Unavailable(format!("{:?}", e)))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&audio);
    constraints.set_video(&JsValue::FALSE);
    Ok(constraints)
}

/// Ask for the microphone and wire it into an analyser with `fft_size`.
pub async fn open_microphone(fft_size: u32) -> Result<AudioSampler<MicAnalyser>, AudioAccessError> {
    let window = web::window()
        .ok_or_else(|| AudioAccessError::Unavailable("no window".to_string()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| AudioAccessError::Unavailable(format!("mediaDevices: {:?}", e)))?;
    let promise = devices
        .get_user_media_with_constraints(&mono_constraints()?)
        .map_err(classify)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(classify)?
        .dyn_into()
        .map_err(|v| AudioAccessError::Unavailable(format!("not a MediaStream: {:?}", v)))?;

    let audio_ctx = web::AudioContext::new()
        .map_err(|e| AudioAccessError::Unavailable(format!("AudioContext: {:?}", e)))?;
    _ = audio_ctx.resume();
    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(|e| AudioAccessError::Unavailable(format!("stream source: {:?}", e)))?;
    let analyser = create_analyser(&audio_ctx, fft_size)?;
    source
        .connect_with_audio_node(&analyser)
        .map_err(|e| AudioAccessError::Unavailable(format!("connect: {:?}", e)))?;
    log::info!(
        "[audio] microphone open: fft_size={} bins={} sample_rate={}",
        fft_size,
        analyser.frequency_bin_count(),
        audio_ctx.sample_rate()
    );

    Ok(AudioSampler::new(MicAnalyser {
        _audio_ctx: audio_ctx,
        _source: source,
        analyser,
        fft_size,
    }))
}

fn create_analyser(
    audio_ctx: &web::AudioContext,
    fft_size: u32,
) -> Result<web::AnalyserNode, AudioAccessError> {
    let analyser = web::AnalyserNode::new(audio_ctx)
        .map_err(|e| AudioAccessError::Unavailable(format!("AnalyserNode: {:?}", e)))?;
    analyser.set_fft_size(fft_size);
    Ok(analyser)
}
