// ---------------- Native audio (cpal) ----------------

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};
use radio_core::{AudioClock, InitError, VoiceMixer};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Playback clock derived from the frames the output callback has rendered.
#[derive(Clone)]
pub struct SampleClock {
    frames: Arc<AtomicU64>,
    sample_rate: f64,
}

impl SampleClock {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            frames: Arc::new(AtomicU64::new(0)),
            sample_rate: sample_rate as f64,
        }
    }
}

impl AudioClock for SampleClock {
    fn current_time(&self) -> f64 {
        self.frames.load(Ordering::Acquire) as f64 / self.sample_rate
    }
}

/// Open output stream plus the handles the main loop schedules through.
pub struct AudioOut {
    pub clock: SampleClock,
    pub mixer: Arc<Mutex<VoiceMixer>>,
    _stream: cpal::Stream,
}

pub fn start_audio_output() -> Result<AudioOut, InitError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| InitError::AudioUnavailable("no output device".into()))?;
    let config = device
        .default_output_config()
        .map_err(|e| InitError::AudioUnavailable(e.to_string()))?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    log::info!(
        "[radio] output {} sr={} ch={} fmt={:?}",
        device.name().unwrap_or_else(|_| "?".into()),
        sample_rate,
        channels,
        config.sample_format()
    );

    let clock = SampleClock::new(sample_rate);
    let mixer = Arc::new(Mutex::new(VoiceMixer::new(sample_rate)));
    let stream_config: cpal::StreamConfig = config.clone().into();
    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &stream_config, channels, &clock, &mixer)
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &stream_config, channels, &clock, &mixer)
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &stream_config, channels, &clock, &mixer)
        }
        other => {
            return Err(InitError::AudioUnavailable(format!(
                "unsupported sample format {other:?}"
            )))
        }
    }
    .map_err(|e| InitError::AudioUnavailable(e.to_string()))?;
    stream
        .play()
        .map_err(|e| InitError::AudioUnavailable(e.to_string()))?;

    Ok(AudioOut {
        clock,
        mixer,
        _stream: stream,
    })
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    clock: &SampleClock,
    mixer: &Arc<Mutex<VoiceMixer>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let frames = Arc::clone(&clock.frames);
    let mixer = Arc::clone(mixer);
    let channels = channels.max(1);
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let start = frames.load(Ordering::Acquire);
            let frame_count = data.len() / channels;
            match mixer.lock() {
                Ok(mut mixer) => {
                    for (i, out) in data.chunks_mut(channels).enumerate() {
                        let value = T::from_sample(mixer.next_frame(start + i as u64));
                        out.fill(value);
                    }
                }
                Err(_) => data.fill(T::from_sample(0.0f32)),
            }
            frames.store(start + frame_count as u64, Ordering::Release);
        },
        |err| log::error!("[radio] audio stream error: {err}"),
        None,
    )
}
