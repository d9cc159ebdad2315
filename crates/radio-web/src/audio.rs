use radio_core::{
    AudioClock, PercussionEvent, PercussionKind, ENVELOPE_FLOOR, ENVELOPE_PEAK, KICK_DURATION_SEC,
    KICK_END_HZ, KICK_START_HZ, SNARE_DURATION_SEC, SNARE_HIGHPASS_HZ,
};
use wasm_bindgen::JsValue;
use web_sys as web;

/// The page's `AudioContext` as the radio's time source.
#[derive(Clone)]
pub struct AudioCtxClock(pub web::AudioContext);

impl AudioClock for AudioCtxClock {
    fn current_time(&self) -> f64 {
        self.0.current_time()
    }
}

/// Fire-and-forget percussion on a WebAudio graph.
///
/// Every hit builds its own short-lived nodes, scheduled at the event's clock
/// time and released by the browser once they stop.
pub struct WebVoices {
    ctx: web::AudioContext,
}

fn create_gain(ctx: &web::AudioContext, label: &str) -> Result<web::GainNode, JsValue> {
    ctx.create_gain().map_err(|e| {
        log::error!("[radio] {} GainNode error: {:?}", label, e);
        e
    })
}

/// Peak-to-floor exponential decay on `param`, starting at `t`.
fn decay(param: &web::AudioParam, from: f32, to: f32, t: f64, duration: f64) -> Result<(), JsValue> {
    param.set_value_at_time(from, t)?;
    param.exponential_ramp_to_value_at_time(to, t + duration)?;
    Ok(())
}

impl WebVoices {
    pub fn new(ctx: web::AudioContext) -> Self {
        Self { ctx }
    }

    /// Queue one hit. Node failures are logged and the hit is dropped.
    pub fn play(&self, event: &PercussionEvent) {
        let result = match event.kind {
            PercussionKind::Kick => self.play_kick(event.scheduled_time),
            PercussionKind::Snare => self.play_snare(event.scheduled_time),
        };
        if let Err(e) = result {
            log::warn!(
                "[radio] dropped {:?} at t={:.3}: {:?}",
                event.kind,
                event.scheduled_time,
                e
            );
        }
    }

    fn play_kick(&self, t: f64) -> Result<(), JsValue> {
        let osc = self.ctx.create_oscillator()?;
        let gain = create_gain(&self.ctx, "kick")?;
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;

        decay(&osc.frequency(), KICK_START_HZ, KICK_END_HZ, t, KICK_DURATION_SEC)?;
        decay(&gain.gain(), ENVELOPE_PEAK, ENVELOPE_FLOOR, t, KICK_DURATION_SEC)?;

        let src: &web::AudioScheduledSourceNode = osc.as_ref();
        src.start_with_when(t)?;
        src.stop_with_when(t + KICK_DURATION_SEC)?;
        Ok(())
    }

    fn play_snare(&self, t: f64) -> Result<(), JsValue> {
        let sr = self.ctx.sample_rate();
        let mut noise = radio_core::noise_buffer(sr, &mut rand::thread_rng());
        let buffer = self.ctx.create_buffer(1, noise.len() as u32, sr)?;
        buffer.copy_to_channel(&mut noise, 0)?;

        let source = self.ctx.create_buffer_source()?;
        source.set_buffer(Some(&buffer));

        let filter = self.ctx.create_biquad_filter()?;
        filter.set_type(web::BiquadFilterType::Highpass);
        filter.frequency().set_value(SNARE_HIGHPASS_HZ);

        let gain = create_gain(&self.ctx, "snare")?;
        decay(&gain.gain(), ENVELOPE_PEAK, ENVELOPE_FLOOR, t, SNARE_DURATION_SEC)?;

        source.connect_with_audio_node(&filter)?;
        filter.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;

        let src: &web::AudioScheduledSourceNode = source.as_ref();
        src.start_with_when(t)?;
        Ok(())
    }
}

/// Resume a context the browser suspended before the first user gesture.
pub fn resume_if_suspended(ctx: &web::AudioContext) {
    if ctx.state() == web::AudioContextState::Suspended {
        match ctx.resume() {
            Ok(_promise) => log::info!("[radio] resuming suspended audio context"),
            Err(e) => log::warn!("[radio] audio context resume failed: {:?}", e),
        }
    }
}
