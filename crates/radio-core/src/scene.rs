//! Per-frame scene animation.
//!
//! Everything here is a pure function of the seconds elapsed since the render
//! loop started, so evaluating the same `elapsed` twice yields the same frame.

use crate::constants::*;
use glam::Vec3;
use smallvec::SmallVec;

/// Horizontal camera sway.
pub fn camera_offset_x(elapsed: f32) -> f32 {
    (elapsed * CAMERA_SWAY_RATE).sin() * CAMERA_SWAY_AMPLITUDE
}

/// Floating height of the card with identity `index`.
pub fn card_height(base_height: f32, elapsed: f32, index: usize) -> f32 {
    base_height + (elapsed + index as f32).sin() * CARD_FLOAT_AMPLITUDE
}

/// Yaw wobble of the card with identity `index`, in radians.
pub fn card_rotation(elapsed: f32, index: usize) -> f32 {
    (elapsed * CARD_SPIN_RATE + index as f32).sin() * CARD_SPIN_AMPLITUDE
}

/// Sky/fog hue in `[0.05, 0.25]`: orange through red and back.
pub fn sky_hue(elapsed: f32) -> f32 {
    ((elapsed * SKY_CYCLE_RATE).sin() + 1.0) * SKY_HUE_SPAN + SKY_HUE_BASE
}

/// HSL to RGB, with hue wrapping into `[0, 1)` and saturation and
/// lightness clamped to `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let high = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let low = 2.0 * l - high;
    [
        hue_to_channel(low, high, h + 1.0 / 3.0),
        hue_to_channel(low, high, h),
        hue_to_channel(low, high, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(low: f32, high: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        low + (high - low) * 6.0 * t
    } else if t < 0.5 {
        high
    } else if t < 2.0 / 3.0 {
        low + (high - low) * 6.0 * (2.0 / 3.0 - t)
    } else {
        low
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub height: f32,
    pub rotation_y: f32,
}

/// Derived quantities for one rendered frame.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub elapsed: f32,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
    pub cards: SmallVec<[CardPose; 4]>,
    pub hue: f32,
    /// Shared by the background clear and the fog.
    pub sky_rgb: [f32; 3],
}

impl SceneFrame {
    pub fn at(elapsed: f32, card_count: usize) -> Self {
        let mut camera_eye = camera_eye_vec3();
        camera_eye.x = camera_offset_x(elapsed);
        let cards = (0..card_count)
            .map(|i| CardPose {
                height: card_height(CARD_BASE_HEIGHT, elapsed, i),
                rotation_y: card_rotation(elapsed, i),
            })
            .collect();
        let hue = sky_hue(elapsed);
        Self {
            elapsed,
            camera_eye,
            camera_target: camera_look_at_vec3(),
            cards,
            hue,
            sky_rgb: hsl_to_rgb(hue, SKY_SATURATION, SKY_LIGHTNESS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primaries() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);
        let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
        assert!((green[1] - 1.0).abs() < 1e-5 && green[0].abs() < 1e-5);
        let grey = hsl_to_rgb(0.7, 0.0, 0.25);
        assert_eq!(grey, [0.25, 0.25, 0.25]);
    }

    #[test]
    fn hsl_hue_wraps() {
        let a = hsl_to_rgb(0.1, 1.0, 0.5);
        let b = hsl_to_rgb(1.1, 1.0, 0.5);
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-5);
        }
    }
}
