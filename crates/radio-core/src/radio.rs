use crate::clock::AudioClock;
use crate::scheduler::{BeatScheduler, PassReport, PercussionEvent, SchedulerParams};
use crate::transport::Transport;

/// Owns the transport and scheduler for one audio clock.
///
/// Front-ends call [`Radio::toggle`] from the play button and [`Radio::tick`]
/// from their scheduler task; the clock is read exactly once per call.
pub struct Radio<C> {
    clock: C,
    transport: Transport,
    scheduler: BeatScheduler,
}

impl<C: AudioClock> Radio<C> {
    pub fn new(clock: C, params: SchedulerParams) -> Self {
        Self {
            clock,
            transport: Transport::new(),
            scheduler: BeatScheduler::new(params),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    /// Flip play/pause. Resuming re-seeds the schedule at the clock's now.
    pub fn toggle(&mut self) -> bool {
        let now = self.clock.current_time();
        let playing = self.transport.toggle(now);
        log::info!(
            "[radio] {} at t={now:.3} beat={}",
            if playing { "play" } else { "pause" },
            self.transport.beat_index()
        );
        playing
    }

    /// Run one scheduler pass against the clock's current time.
    pub fn tick(&mut self, out_events: &mut Vec<PercussionEvent>) -> PassReport {
        let now = self.clock.current_time();
        self.scheduler
            .run_pass(&mut self.transport, now, out_events)
    }
}
