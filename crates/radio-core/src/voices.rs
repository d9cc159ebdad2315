//! Kick and snare voices.
//!
//! The envelope math here is shared by both front-ends: the web build hands
//! the same breakpoints to WebAudio param ramps, while the native build
//! renders samples itself through [`VoiceMixer`].

use crate::constants::{
    ENVELOPE_FLOOR, ENVELOPE_PEAK, KICK_DURATION_SEC, KICK_END_HZ, KICK_START_HZ,
    SNARE_DURATION_SEC, SNARE_HIGHPASS_HZ,
};
use crate::scheduler::{PercussionEvent, PercussionKind};
use rand::Rng;
use std::f32::consts::PI;

/// Exponential ramp between two breakpoints, following the WebAudio
/// `exponentialRampToValueAtTime` curve. Holds `v0` before `t0` and `v1`
/// after `t1`. Both values must share a sign and be non-zero.
pub fn exp_ramp(v0: f32, v1: f32, t0: f64, t1: f64, t: f64) -> f32 {
    if t <= t0 {
        return v0;
    }
    if t >= t1 || t1 <= t0 {
        return v1;
    }
    let progress = ((t - t0) / (t1 - t0)) as f32;
    v0 * (v1 / v0).powf(progress)
}

/// Kick pitch `offset_sec` after its start.
pub fn kick_frequency_at(offset_sec: f64) -> f32 {
    exp_ramp(KICK_START_HZ, KICK_END_HZ, 0.0, KICK_DURATION_SEC, offset_sec)
}

pub fn kick_gain_at(offset_sec: f64) -> f32 {
    exp_ramp(ENVELOPE_PEAK, ENVELOPE_FLOOR, 0.0, KICK_DURATION_SEC, offset_sec)
}

pub fn snare_gain_at(offset_sec: f64) -> f32 {
    exp_ramp(ENVELOPE_PEAK, ENVELOPE_FLOOR, 0.0, SNARE_DURATION_SEC, offset_sec)
}

/// Frames in one snare noise burst at `sample_rate`.
pub fn snare_buffer_len(sample_rate: f32) -> usize {
    (sample_rate as f64 * SNARE_DURATION_SEC).floor() as usize
}

/// Fresh uniform white noise in `[-1, 1)` for one snare hit.
pub fn noise_buffer<R: Rng>(sample_rate: f32, rng: &mut R) -> Vec<f32> {
    (0..snare_buffer_len(sample_rate))
        .map(|_| rng.gen::<f32>() * 2.0 - 1.0)
        .collect()
}

/// Second-order high-pass (RBJ cookbook), with `q_db` interpreted in dB the
/// way WebAudio's `BiquadFilterNode` does for its high-pass type.
#[derive(Clone, Debug)]
pub struct HighPass {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl HighPass {
    /// WebAudio's default biquad Q.
    pub const DEFAULT_Q_DB: f32 = 1.0;

    pub fn new(cutoff_hz: f32, sample_rate: f32, q_db: f32) -> Self {
        let nyquist = sample_rate * 0.5;
        let cutoff = cutoff_hz.clamp(1.0, nyquist * 0.999);
        let w0 = 2.0 * PI * cutoff / sample_rate;
        let (sin_w0, cos_w0) = w0.sin_cos();
        let q = 10.0_f32.powf(q_db / 20.0);
        let alpha = sin_w0 / (2.0 * q);
        let a0 = 1.0 + alpha;
        Self {
            b0: (1.0 + cos_w0) / 2.0 / a0,
            b1: -(1.0 + cos_w0) / a0,
            b2: (1.0 + cos_w0) / 2.0 / a0,
            a1: -2.0 * cos_w0 / a0,
            a2: (1.0 - alpha) / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }
}

/// Result of pulling one frame from a voice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VoiceFrame {
    Pending,
    Sample(f32),
    Finished,
}

/// Pitch-swept sine kick.
///
/// A kick first pulled after its scheduled frame starts from that frame
/// instead, so late hits still play their full envelope.
#[derive(Clone, Debug)]
pub struct KickVoice {
    start_frame: u64,
    len: u64,
    anchored: bool,
    sample_rate: f32,
    phase: f32,
}

impl KickVoice {
    pub fn new(start_frame: u64, sample_rate: f32) -> Self {
        Self {
            start_frame,
            len: (KICK_DURATION_SEC * sample_rate as f64).round() as u64,
            anchored: false,
            sample_rate,
            phase: 0.0,
        }
    }

    pub fn frame(&mut self, frame: u64) -> VoiceFrame {
        if !self.anchored {
            if frame < self.start_frame {
                return VoiceFrame::Pending;
            }
            self.start_frame = frame;
            self.anchored = true;
        }
        if frame < self.start_frame {
            return VoiceFrame::Pending;
        }
        if frame >= self.start_frame + self.len {
            return VoiceFrame::Finished;
        }
        let offset = (frame - self.start_frame) as f64 / self.sample_rate as f64;
        let freq = kick_frequency_at(offset);
        let out = self.phase.sin() * kick_gain_at(offset);
        self.phase += 2.0 * PI * freq / self.sample_rate;
        if self.phase > 2.0 * PI {
            self.phase -= 2.0 * PI;
        }
        VoiceFrame::Sample(out)
    }
}

/// High-passed noise burst. Late hits are re-anchored like [`KickVoice`].
#[derive(Clone, Debug)]
pub struct SnareVoice {
    start_frame: u64,
    anchored: bool,
    sample_rate: f32,
    noise: Vec<f32>,
    filter: HighPass,
}

impl SnareVoice {
    pub fn new(start_frame: u64, sample_rate: f32, noise: Vec<f32>) -> Self {
        Self {
            start_frame,
            anchored: false,
            sample_rate,
            noise,
            filter: HighPass::new(SNARE_HIGHPASS_HZ, sample_rate, HighPass::DEFAULT_Q_DB),
        }
    }

    pub fn frame(&mut self, frame: u64) -> VoiceFrame {
        if !self.anchored {
            if frame < self.start_frame {
                return VoiceFrame::Pending;
            }
            self.start_frame = frame;
            self.anchored = true;
        }
        if frame < self.start_frame {
            return VoiceFrame::Pending;
        }
        let i = (frame - self.start_frame) as usize;
        let Some(&x) = self.noise.get(i) else {
            return VoiceFrame::Finished;
        };
        let offset = i as f64 / self.sample_rate as f64;
        VoiceFrame::Sample(self.filter.process(x) * snare_gain_at(offset))
    }
}

#[derive(Clone, Debug)]
pub enum ActiveVoice {
    Kick(KickVoice),
    Snare(SnareVoice),
}

impl ActiveVoice {
    fn frame(&mut self, frame: u64) -> VoiceFrame {
        match self {
            ActiveVoice::Kick(k) => k.frame(frame),
            ActiveVoice::Snare(s) => s.frame(frame),
        }
    }
}

/// Software mix of scheduled voices, addressed by absolute frame index.
#[derive(Clone, Debug)]
pub struct VoiceMixer {
    sample_rate: f32,
    voices: Vec<ActiveVoice>,
}

impl VoiceMixer {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Queue a hit to start at its scheduled clock time, or on the next
    /// rendered frame if that time has already passed.
    pub fn schedule<R: Rng>(&mut self, event: &PercussionEvent, rng: &mut R) {
        let start_frame = (event.scheduled_time.max(0.0) * self.sample_rate as f64).round() as u64;
        let voice = match event.kind {
            PercussionKind::Kick => ActiveVoice::Kick(KickVoice::new(start_frame, self.sample_rate)),
            PercussionKind::Snare => ActiveVoice::Snare(SnareVoice::new(
                start_frame,
                self.sample_rate,
                noise_buffer(self.sample_rate, rng),
            )),
        };
        self.voices.push(voice);
    }

    /// Mix one frame, dropping voices that have finished. Soft-clipped.
    pub fn next_frame(&mut self, frame: u64) -> f32 {
        let mut sum = 0.0f32;
        let mut i = 0usize;
        while i < self.voices.len() {
            match self.voices[i].frame(frame) {
                VoiceFrame::Finished => {
                    self.voices.swap_remove(i);
                    continue;
                }
                VoiceFrame::Sample(s) => sum += s,
                VoiceFrame::Pending => {}
            }
            i += 1;
        }
        sum.tanh()
    }
}
