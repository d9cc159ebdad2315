use crate::constants::{POINTER_FOLLOW_SEC, POINTER_TILT};
use glam::Vec2;

/// Easing curves, named after their common animation-library equivalents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
    Power2Out,
}

impl Ease {
    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Time-based interpolation of a 2D value.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: Vec2,
    to: Vec2,
    start: f32,
    duration: f32,
    ease: Ease,
}

impl Tween {
    /// A tween already at rest on `value`.
    pub fn settled(value: Vec2) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn new(from: Vec2, to: Vec2, start: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration: duration.max(0.0),
            ease,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    pub fn progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f32) -> Vec2 {
        self.from
            .lerp(self.to, self.ease.apply(self.progress(now)))
    }

    pub fn is_finished(&self, now: f32) -> bool {
        self.progress(now) >= 1.0
    }

    /// Head for a new target, starting from wherever the tween is at `now`.
    pub fn retarget(&mut self, now: f32, to: Vec2, duration: f32) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration.max(0.0);
    }
}

/// Camera tilt target for a pointer offset from the viewport center.
///
/// `offset` is the pointer position normalized to the viewport minus 0.5 on
/// each axis. Returns (pitch, yaw) in radians.
pub fn pointer_tilt_target(offset: Vec2) -> Vec2 {
    Vec2::new(-offset.y * POINTER_TILT, -offset.x * POINTER_TILT)
}

/// Eases the camera tilt toward the latest pointer target.
#[derive(Clone, Copy, Debug)]
pub struct PointerFollow {
    tween: Tween,
}

impl Default for PointerFollow {
    fn default() -> Self {
        Self {
            tween: Tween::settled(Vec2::ZERO),
        }
    }
}

impl PointerFollow {
    pub fn pointer_moved(&mut self, now: f32, offset: Vec2) {
        self.tween
            .retarget(now, pointer_tilt_target(offset), POINTER_FOLLOW_SEC);
    }

    pub fn tilt(&self, now: f32) -> Vec2 {
        self.tween.value_at(now)
    }

    pub fn target(&self) -> Vec2 {
        self.tween.target()
    }
}
