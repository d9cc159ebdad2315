// Host-side tests for the look-ahead beat scheduler and transport.

use radio_core::*;

fn pass(
    scheduler: &BeatScheduler,
    transport: &mut Transport,
    now: f64,
) -> (PassReport, Vec<PercussionEvent>) {
    let mut events = Vec::new();
    let report = scheduler.run_pass(transport, now, &mut events);
    (report, events)
}

#[test]
fn pattern_over_three_bars_is_kick_rest_snare_rest() {
    let expected = ["K", "_", "S", "_", "K", "_", "S", "_", "K", "_", "S", "_"];
    for (beat, want) in expected.iter().enumerate() {
        let kinds = kinds_for_beat(beat as u64);
        let got = match kinds.as_slice() {
            [PercussionKind::Kick] => "K",
            [PercussionKind::Snare] => "S",
            [] => "_",
            other => panic!("unexpected hits {other:?} at beat {beat}"),
        };
        assert_eq!(got, *want, "beat {beat}");
    }
}

#[test]
fn first_pass_after_play_emits_kick_at_play_time() {
    let scheduler = BeatScheduler::default();
    let mut transport = Transport::new();
    transport.play(3.25);
    let (report, events) = pass(&scheduler, &mut transport, 3.25);
    assert_eq!(report.beats, 1);
    assert_eq!(report.status, SchedulerStatus::Armed);
    assert_eq!(
        events,
        vec![PercussionEvent {
            kind: PercussionKind::Kick,
            scheduled_time: 3.25
        }]
    );
    assert!((transport.next_event_time() - 3.75).abs() < 1e-12);
}

#[test]
fn steady_passes_never_skip_a_beat() {
    let scheduler = BeatScheduler::default();
    let mut transport = Transport::new();
    let initial = 1.0;
    transport.play(initial);

    let mut now = initial;
    let mut total_beats = 0usize;
    let mut last_index = 0u64;
    for i in 0..600 {
        // Uneven gaps, all at or below the look-ahead window.
        now += [0.016, 0.033, 0.1, 0.05][i % 4];
        let before = transport.beat_index();
        let (report, _) = pass(&scheduler, &mut transport, now);
        total_beats += report.beats;
        assert_eq!(transport.beat_index(), before + report.beats as u64);
        assert!(report.beats <= 1, "gap <= lookahead must not burst");
        last_index = transport.beat_index();
        let expected = initial + BEAT_STEP_SEC * total_beats as f64;
        assert!(
            (transport.next_event_time() - expected).abs() < 1e-9,
            "pass {i}: next={} expected={expected}",
            transport.next_event_time()
        );
        // Window is always covered.
        assert!(transport.next_event_time() >= now + LOOKAHEAD_SEC);
    }
    assert_eq!(last_index as usize, total_beats);
}

#[test]
fn late_pass_catches_up_in_one_burst() {
    let scheduler = BeatScheduler::default();
    let mut transport = Transport::new();
    transport.play(0.0);
    let (_, first) = pass(&scheduler, &mut transport, 0.0);
    assert_eq!(first.len(), 1);

    // Callback stalls for five seconds.
    let (report, events) = pass(&scheduler, &mut transport, 5.0);
    // Beats at 0.5 .. 5.0 inclusive fall before 5.1.
    assert_eq!(report.beats, 10);
    assert_eq!(transport.beat_index(), 11);
    let times: Vec<f64> = events.iter().map(|e| e.scheduled_time).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]), "events out of order: {times:?}");
    let kicks = events.iter().filter(|e| e.kind == PercussionKind::Kick).count();
    let snares = events.iter().filter(|e| e.kind == PercussionKind::Snare).count();
    // Beat indices 1..=10: kicks at 4, 8; snares at 2, 6, 10.
    assert_eq!((kicks, snares), (2, 3));
}

#[test]
fn pass_while_paused_reports_stop() {
    let scheduler = BeatScheduler::default();
    let mut transport = Transport::new();
    transport.play(0.0);
    pass(&scheduler, &mut transport, 0.0);
    transport.pause();
    let (report, _) = pass(&scheduler, &mut transport, 0.01);
    assert_eq!(report.status, SchedulerStatus::Stopped);
}

#[test]
fn resume_reseeds_from_clock_without_backlog() {
    let scheduler = BeatScheduler::default();
    let mut transport = Transport::new();
    transport.toggle(0.0);
    pass(&scheduler, &mut transport, 0.0);
    assert!(!transport.toggle(0.2));

    // Thirty seconds later the user resumes.
    let resume_at = 30.0;
    assert!(transport.toggle(resume_at));
    assert!(transport.next_event_time() >= resume_at);
    let (report, events) = pass(&scheduler, &mut transport, resume_at);
    assert_eq!(report.beats, 1, "stale schedule must not burst");
    assert!(events.iter().all(|e| e.scheduled_time >= resume_at));
}

#[test]
fn non_finite_clock_is_ignored() {
    let scheduler = BeatScheduler::default();
    let mut transport = Transport::new();
    transport.play(0.0);
    let (report, events) = pass(&scheduler, &mut transport, f64::INFINITY);
    assert_eq!(report.beats, 0);
    assert!(events.is_empty());
    let (report, _) = pass(&scheduler, &mut transport, f64::NAN);
    assert_eq!(report.beats, 0);
}

#[test]
fn radio_reads_clock_for_toggle_and_tick() {
    let clock = ManualClock::new(12.0);
    let mut radio = Radio::new(&clock, SchedulerParams::default());
    assert!(!radio.is_playing());
    assert!(radio.toggle());
    assert_eq!(radio.transport().next_event_time(), 12.0);

    let mut events = Vec::new();
    let report = radio.tick(&mut events);
    assert_eq!(report.status, SchedulerStatus::Armed);
    assert_eq!(events.len(), 1);

    clock.advance(0.45);
    events.clear();
    radio.tick(&mut events);
    // Beat 1 at 12.5 is inside [12.45, 12.55) but has no hit.
    assert!(events.is_empty());
    assert_eq!(radio.transport().beat_index(), 2);

    assert!(!radio.toggle());
    let report = radio.tick(&mut events);
    assert_eq!(report.status, SchedulerStatus::Stopped);
}

#[test]
fn custom_tempo_spacing_is_respected() {
    let scheduler = BeatScheduler::new(SchedulerParams {
        step_sec: 0.25,
        lookahead_sec: 0.1,
    });
    let mut transport = Transport::new();
    transport.play(0.0);
    let (report, _) = pass(&scheduler, &mut transport, 1.0);
    // 0.0, 0.25, ... 1.0 are all before 1.1
    assert_eq!(report.beats, 5);
    assert!((transport.next_event_time() - 1.25).abs() < 1e-12);
}

#[test]
fn degenerate_params_skip_the_pass() {
    for params in [
        SchedulerParams {
            step_sec: 0.5,
            lookahead_sec: f64::INFINITY,
        },
        SchedulerParams {
            step_sec: 0.5,
            lookahead_sec: f64::NAN,
        },
        SchedulerParams {
            step_sec: 1e-300,
            lookahead_sec: 0.1,
        },
        SchedulerParams {
            step_sec: f64::NAN,
            lookahead_sec: 0.1,
        },
    ] {
        let scheduler = BeatScheduler::new(params.clone());
        let mut transport = Transport::new();
        transport.play(1.0);
        let (report, events) = pass(&scheduler, &mut transport, 1.0);
        assert_eq!(report.beats, 0, "{params:?}");
        assert_eq!(report.status, SchedulerStatus::Armed);
        assert!(events.is_empty());
        assert_eq!(transport.next_event_time(), 1.0);
    }
}

#[test]
fn burst_report_counts_beats_around_warn_threshold() {
    let scheduler = BeatScheduler::default();

    // Beats at 0.0 ..= 3.5 fall before 3.5 + 0.1.
    let mut transport = Transport::new();
    transport.play(0.0);
    let (report, _) = pass(&scheduler, &mut transport, 3.5);
    assert_eq!(report.beats, BURST_WARN_BEATS);
    assert!(report.beats <= BURST_WARN_BEATS);

    // One more step of lateness tips it over.
    let mut transport = Transport::new();
    transport.play(0.0);
    let (report, events) = pass(&scheduler, &mut transport, 4.0);
    assert_eq!(report.beats, BURST_WARN_BEATS + 1);
    assert!(report.beats > BURST_WARN_BEATS);
    // Every overdue beat is still emitted: kicks on 0, 4, 8 and snares on 2, 6.
    assert_eq!(events.len(), 5);
}
