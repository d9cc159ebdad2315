/// Play/pause position of the beat radio.
///
/// `next_event_time` lives in the audio-clock domain (seconds). It only moves
/// forward while playing and is re-seeded from the clock on every resume so a
/// stale schedule never produces a catch-up burst.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transport {
    is_playing: bool,
    next_event_time: f64,
    beat_index: u64,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn next_event_time(&self) -> f64 {
        self.next_event_time
    }

    pub fn beat_index(&self) -> u64 {
        self.beat_index
    }

    /// Start playback at `now`. No-op if already playing.
    pub fn play(&mut self, now: f64) {
        if self.is_playing {
            return;
        }
        self.is_playing = true;
        self.next_event_time = now;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    /// Flip play/pause, returning the new playing state.
    pub fn toggle(&mut self, now: f64) -> bool {
        if self.is_playing {
            self.pause();
        } else {
            self.play(now);
        }
        self.is_playing
    }

    pub(crate) fn advance(&mut self, step_sec: f64) {
        self.next_event_time += step_sec;
        self.beat_index = self.beat_index.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_at_origin() {
        let t = Transport::new();
        assert!(!t.is_playing());
        assert_eq!(t.next_event_time(), 0.0);
        assert_eq!(t.beat_index(), 0);
    }

    #[test]
    fn play_twice_keeps_first_seed() {
        let mut t = Transport::new();
        t.play(1.0);
        t.play(5.0);
        assert_eq!(t.next_event_time(), 1.0);
    }

    #[test]
    fn advance_moves_time_and_index_together() {
        let mut t = Transport::new();
        t.play(2.0);
        t.advance(0.5);
        t.advance(0.5);
        assert_eq!(t.beat_index(), 2);
        assert!((t.next_event_time() - 3.0).abs() < 1e-12);
    }
}
