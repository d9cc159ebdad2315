// Host-side tests for the loading screen and menu intro timeline.

use radio_core::*;

#[test]
fn progress_bar_steps_at_half_and_full() {
    let timeline = LoadingTimeline;
    assert_eq!(timeline.state_at(0.0).bar_percent, 0.0);
    assert_eq!(timeline.state_at(0.49).bar_percent, 0.0);
    assert_eq!(timeline.state_at(0.5).bar_percent, 50.0);
    assert_eq!(timeline.state_at(1.49).bar_percent, 50.0);
    assert_eq!(timeline.state_at(1.5).bar_percent, 100.0);
}

#[test]
fn overlay_fades_then_is_removed() {
    let timeline = LoadingTimeline;
    let before = timeline.state_at(1.99);
    assert_eq!(before.overlay_opacity, 1.0);
    assert!(before.intro_elapsed.is_none());

    let fading = timeline.state_at(2.0);
    assert_eq!(fading.overlay_opacity, 0.0);
    assert!(!fading.overlay_removed);
    assert_eq!(fading.intro_elapsed, Some(0.0));

    assert!(timeline.state_at(3.0).overlay_removed);
}

#[test]
fn intro_items_are_staggered() {
    let (x0, o0) = intro_item_at(0, 0.0);
    assert_eq!((x0, o0), (INTRO_OFFSET_PX, 0.0));
    // Second item has not started after 0.05 s.
    assert_eq!(intro_item_at(1, 0.05), (INTRO_OFFSET_PX, 0.0));
    let (x1, o1) = intro_item_at(1, 0.6);
    assert!(x1 > INTRO_OFFSET_PX && x1 < 0.0);
    assert!(o1 > 0.0 && o1 < 1.0);
    assert_eq!(intro_item_at(3, 1.3), (0.0, 1.0));
}

#[test]
fn timeline_completes_after_last_item_settles() {
    let timeline = LoadingTimeline;
    assert!(!timeline.is_complete(2.5, 5));
    // Fade at 2.0 + last of five items starts at 0.4 and runs 1 s.
    assert!(!timeline.is_complete(3.3, 5));
    assert!(timeline.is_complete(3.45, 5));
    assert!(timeline.is_complete(3.0, 0));
}
