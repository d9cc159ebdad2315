use crate::constants::{BEATS_PER_BAR, BEAT_STEP_SEC, BURST_WARN_BEATS, LOOKAHEAD_SEC};
use crate::transport::Transport;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PercussionKind {
    Kick,
    Snare,
}

/// One drum hit, stamped in audio-clock seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercussionEvent {
    pub kind: PercussionKind,
    pub scheduled_time: f64,
}

#[derive(Clone, Debug)]
pub struct SchedulerParams {
    pub step_sec: f64,
    pub lookahead_sec: f64,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            step_sec: BEAT_STEP_SEC,
            lookahead_sec: LOOKAHEAD_SEC,
        }
    }
}

/// Whether the scheduler task should run again on the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerStatus {
    Armed,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassReport {
    pub beats: usize,
    pub status: SchedulerStatus,
}

/// Hits for a beat of the 4-step pattern: kick on 0, snare on 2.
pub fn kinds_for_beat(beat_index: u64) -> SmallVec<[PercussionKind; 2]> {
    let mut kinds = SmallVec::new();
    let step = beat_index % BEATS_PER_BAR;
    if step == 0 {
        kinds.push(PercussionKind::Kick);
    }
    if step == 2 {
        kinds.push(PercussionKind::Snare);
    }
    kinds
}

/// Look-ahead beat scheduler.
///
/// Each pass drains every beat whose start falls before `now + lookahead`,
/// where `now` is read once from the audio clock by the caller. Late passes
/// emit all overdue beats at once so the pattern never drifts behind the
/// clock.
#[derive(Clone, Debug, Default)]
pub struct BeatScheduler {
    pub params: SchedulerParams,
}

impl BeatScheduler {
    pub fn new(params: SchedulerParams) -> Self {
        Self { params }
    }

    pub fn run_pass(
        &self,
        transport: &mut Transport,
        now: f64,
        out_events: &mut Vec<PercussionEvent>,
    ) -> PassReport {
        let status = if transport.is_playing() {
            SchedulerStatus::Armed
        } else {
            SchedulerStatus::Stopped
        };
        let step = self.params.step_sec;
        let next = transport.next_event_time();
        let horizon = now + self.params.lookahead_sec;
        // A step too small to move `next` would never leave the loop.
        let advances = next + step > next && horizon + step > horizon;
        if !horizon.is_finite() || !advances {
            log::warn!(
                "[radio] skipping pass: now={now} next={next} step={step} lookahead={}",
                self.params.lookahead_sec
            );
            return PassReport { beats: 0, status };
        }

        let mut beats = 0usize;
        while transport.next_event_time() < horizon {
            let scheduled_time = transport.next_event_time();
            for kind in kinds_for_beat(transport.beat_index()) {
                out_events.push(PercussionEvent {
                    kind,
                    scheduled_time,
                });
            }
            transport.advance(step);
            beats += 1;
        }
        if beats > BURST_WARN_BEATS {
            log::warn!("[radio] catch-up burst of {beats} beats (now={now:.3})");
        }

        PassReport { beats, status }
    }
}
