//! Camera and viewport state shared with the frontends.
//!
//! These types avoid platform-specific APIs so both the native and the web
//! frontends build their matrices and surface sizes from the same code.

use crate::constants::{
    camera_eye_vec3, camera_look_at_vec3, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR,
    MAX_PIXEL_RATIO,
};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Right-handed perspective camera aimed at a fixed point.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Extra (pitch, yaw) in radians applied after aiming at `target`.
    pub tilt: Vec2,
}

impl Camera {
    /// The landing-scene camera for a surface of the given size.
    pub fn landing(width: u32, height: u32) -> Self {
        let mut camera = Self {
            eye: camera_eye_vec3(),
            target: camera_look_at_vec3(),
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
            tilt: Vec2::ZERO,
        };
        camera.set_aspect_from(width, height);
        camera
    }

    /// Set `aspect = width / height`. Degenerate sizes are ignored.
    pub fn set_aspect_from(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = width as f32 / height as f32;
        true
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World to view space, including the pointer tilt.
    pub fn view_matrix(&self) -> Mat4 {
        let look = Mat4::look_at_rh(self.eye, self.target, self.up);
        let tilt = Mat4::from_quat(Quat::from_euler(
            glam::EulerRot::YXZ,
            self.tilt.y,
            self.tilt.x,
            0.0,
        ));
        tilt.inverse() * look
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Pixel size of the render surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// Apply a viewport resize to the camera and surface together.
///
/// Returns `true` when the surface needs reconfiguring. Zero-sized requests
/// (minimized windows, hidden canvases) leave both untouched.
pub fn apply_resize(camera: &mut Camera, surface: &mut SurfaceSize, width: u32, height: u32) -> bool {
    if !camera.set_aspect_from(width, height) {
        return false;
    }
    let next = SurfaceSize { width, height };
    if *surface == next {
        return false;
    }
    *surface = next;
    true
}

/// Backing-store size for a CSS-sized canvas, with the pixel ratio capped.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> SurfaceSize {
    let dpr = device_pixel_ratio.clamp(1.0, MAX_PIXEL_RATIO);
    SurfaceSize::new((css_width * dpr) as u32, (css_height * dpr) as u32)
}
