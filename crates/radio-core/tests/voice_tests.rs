// Host-side tests for kick/snare envelopes and the software voice mixer.

use radio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SR: f32 = 44_100.0;

#[test]
fn exp_ramp_hits_both_breakpoints() {
    assert_eq!(exp_ramp(1.0, 0.01, 2.0, 2.5, 1.0), 1.0);
    assert_eq!(exp_ramp(1.0, 0.01, 2.0, 2.5, 2.0), 1.0);
    assert_eq!(exp_ramp(1.0, 0.01, 2.0, 2.5, 2.5), 0.01);
    assert_eq!(exp_ramp(1.0, 0.01, 2.0, 2.5, 9.0), 0.01);
    // Geometric midpoint halfway through.
    let mid = exp_ramp(1.0, 0.01, 0.0, 1.0, 0.5);
    assert!((mid - 0.1).abs() < 1e-5, "mid={mid}");
}

#[test]
fn exp_ramp_decays_monotonically() {
    let mut prev = f32::MAX;
    for i in 0..=100 {
        let v = exp_ramp(150.0, 0.01, 0.0, 0.5, i as f64 * 0.005);
        assert!(v <= prev);
        prev = v;
    }
}

#[test]
fn kick_sweeps_from_150hz_over_half_a_second() {
    assert_eq!(kick_frequency_at(0.0), KICK_START_HZ);
    assert!((kick_frequency_at(KICK_DURATION_SEC) - KICK_END_HZ).abs() < 1e-6);
    assert_eq!(kick_gain_at(0.0), 1.0);
    assert!((kick_gain_at(0.5) - 0.01).abs() < 1e-6);
}

#[test]
fn snare_buffer_is_two_hundred_ms_of_noise() {
    assert_eq!(snare_buffer_len(SR), 8820);
    assert_eq!(snare_buffer_len(48_000.0), 9600);
    let mut rng = StdRng::seed_from_u64(1);
    let noise = noise_buffer(SR, &mut rng);
    assert_eq!(noise.len(), 8820);
    assert!(noise.iter().all(|s| (-1.0..=1.0).contains(s)));
    let mean = noise.iter().sum::<f32>() / noise.len() as f32;
    assert!(mean.abs() < 0.05, "noise should be roughly zero-mean, got {mean}");
}

#[test]
fn fresh_noise_per_hit() {
    let mut rng = StdRng::seed_from_u64(9);
    let a = noise_buffer(SR, &mut rng);
    let b = noise_buffer(SR, &mut rng);
    assert_ne!(a, b);
}

#[test]
fn highpass_blocks_dc_and_passes_fast_alternation() {
    let mut hp = HighPass::new(SNARE_HIGHPASS_HZ, SR, HighPass::DEFAULT_Q_DB);
    let mut last = 0.0;
    for _ in 0..4410 {
        last = hp.process(1.0);
    }
    assert!(last.abs() < 1e-3, "DC should settle to zero, got {last}");

    let mut hp = HighPass::new(SNARE_HIGHPASS_HZ, SR, HighPass::DEFAULT_Q_DB);
    let mut peak = 0.0f32;
    for i in 0..4410 {
        let x = if i % 2 == 0 { 1.0 } else { -1.0 };
        let y = hp.process(x);
        if i > 100 {
            peak = peak.max(y.abs());
        }
    }
    assert!(peak > 0.9, "near-Nyquist signal should pass, peak={peak}");
}

#[test]
fn kick_voice_is_silent_before_start_and_ends_after_half_second() {
    let start = 1000;
    let mut kick = KickVoice::new(start, SR);
    assert_eq!(kick.frame(0), VoiceFrame::Pending);
    assert_eq!(kick.frame(start), VoiceFrame::Sample(0.0));
    let end = start + (0.5 * SR as f64).round() as u64;
    assert!(matches!(kick.frame(end - 1), VoiceFrame::Sample(_)));
    assert_eq!(kick.frame(end), VoiceFrame::Finished);
}

#[test]
fn snare_voice_ends_with_its_buffer() {
    let mut rng = StdRng::seed_from_u64(3);
    let noise = noise_buffer(SR, &mut rng);
    let len = noise.len() as u64;
    let mut snare = SnareVoice::new(10, SR, noise);
    assert_eq!(snare.frame(9), VoiceFrame::Pending);
    for f in 10..10 + len {
        assert!(matches!(snare.frame(f), VoiceFrame::Sample(_)));
    }
    assert_eq!(snare.frame(10 + len), VoiceFrame::Finished);
}

#[test]
fn mixer_starts_voices_at_their_scheduled_frame() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut mixer = VoiceMixer::new(SR);
    mixer.schedule(
        &PercussionEvent {
            kind: PercussionKind::Kick,
            scheduled_time: 1.0,
        },
        &mut rng,
    );
    assert_eq!(mixer.active_voices(), 1);
    // Silent until one second in.
    for f in 0..44_100 {
        assert_eq!(mixer.next_frame(f), 0.0);
    }
    let mut energy = 0.0f32;
    for f in 44_100..44_100 + 2_000 {
        energy += mixer.next_frame(f).abs();
    }
    assert!(energy > 1.0, "kick should be audible after its start");
}

#[test]
fn mixer_retires_finished_voices() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut mixer = VoiceMixer::new(SR);
    for (kind, t) in [(PercussionKind::Kick, 0.0), (PercussionKind::Snare, 0.5)] {
        mixer.schedule(
            &PercussionEvent {
                kind,
                scheduled_time: t,
            },
            &mut rng,
        );
    }
    assert_eq!(mixer.active_voices(), 2);
    for f in 0..(0.75 * SR) as u64 {
        let s = mixer.next_frame(f);
        assert!((-1.0..=1.0).contains(&s));
    }
    assert_eq!(mixer.active_voices(), 0);
}

#[test]
fn late_kick_plays_in_full_from_first_pulled_frame() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut mixer = VoiceMixer::new(SR);
    mixer.schedule(
        &PercussionEvent {
            kind: PercussionKind::Kick,
            scheduled_time: 0.0,
        },
        &mut rng,
    );
    // The output callback is already half a second past the hit.
    let late_start = 22_050u64;
    let mut energy = 0.0f32;
    for f in late_start..late_start + 2_000 {
        energy += mixer.next_frame(f).abs();
    }
    assert!(energy > 1.0, "late kick must still be audible, energy={energy}");
    assert_eq!(mixer.active_voices(), 1);

    // Same samples as an on-time kick, shifted to the first pulled frame.
    let mut on_time = KickVoice::new(0, SR);
    let mut late = KickVoice::new(0, SR);
    for i in 0..4_000u64 {
        assert_eq!(late.frame(late_start + i), on_time.frame(i), "frame offset {i}");
    }
    let len = (0.5 * SR as f64).round() as u64;
    assert!(matches!(late.frame(late_start + len - 1), VoiceFrame::Sample(_)));
    assert_eq!(late.frame(late_start + len), VoiceFrame::Finished);
}

#[test]
fn late_snare_keeps_its_attack() {
    let mut rng = StdRng::seed_from_u64(9);
    let noise = noise_buffer(SR, &mut rng);
    let len = noise.len() as u64;
    let mut on_time = SnareVoice::new(100, SR, noise.clone());
    let mut late = SnareVoice::new(100, SR, noise);
    let late_start = 100 + 512;
    for i in 0..len {
        assert_eq!(late.frame(late_start + i), on_time.frame(100 + i));
    }
    assert_eq!(late.frame(late_start + len), VoiceFrame::Finished);
}
