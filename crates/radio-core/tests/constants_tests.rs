// Host-side tests for constants and their relationships.

use radio_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lookahead_is_shorter_than_a_beat() {
    assert!(LOOKAHEAD_SEC > 0.0);
    assert!(LOOKAHEAD_SEC < BEAT_STEP_SEC);
    // 120 BPM
    assert!((60.0 / BEAT_STEP_SEC - 120.0).abs() < 1e-9);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn voices_fit_their_slot() {
    assert!(KICK_DURATION_SEC <= BEAT_STEP_SEC);
    assert!(SNARE_DURATION_SEC < KICK_DURATION_SEC);
    assert!(KICK_END_HZ > 0.0 && KICK_END_HZ < KICK_START_HZ);
    assert!(ENVELOPE_FLOOR > 0.0 && ENVELOPE_FLOOR < ENVELOPE_PEAK);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    // Cards float above the ground without clipping it.
    assert!(CARD_BASE_HEIGHT - CARD_HEIGHT / 2.0 - CARD_FLOAT_AMPLITUDE > 0.0);
}
