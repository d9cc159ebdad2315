use std::cell::Cell;

/// Monotonic time source in seconds, e.g. an audio device's playback clock.
pub trait AudioClock {
    fn current_time(&self) -> f64;
}

impl<C: AudioClock + ?Sized> AudioClock for &C {
    fn current_time(&self) -> f64 {
        (**self).current_time()
    }
}

/// Clock that only moves when told to. Handy for driving the radio offline.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl AudioClock for ManualClock {
    fn current_time(&self) -> f64 {
        self.now.get()
    }
}
