//! Plain-old-data layouts shared by the wgpu renderers of both frontends.
//!
//! Colors are authored in sRGB and converted to linear here, since both
//! frontends render into sRGB surfaces.

use crate::camera::Camera;
use crate::city::{EntityKind, EntityRegistry};
use crate::constants::{AMBIENT_INTENSITY, FOG_DENSITY, SUN_COLOR, SUN_INTENSITY, SUN_POSITION};
use crate::scene::SceneFrame;
use glam::{Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// rgb = fog color, a = fog density
    pub fog: [f32; 4],
    /// xyz = direction towards the sun, w = ambient intensity
    pub sun_dir: [f32; 4],
    /// rgb = sun color, a = sun intensity
    pub sun_color: [f32; 4],
}

impl SceneUniforms {
    pub fn new(camera: &Camera, frame: &SceneFrame) -> Self {
        let [r, g, b] = linear_rgb(frame.sky_rgb);
        let [sr, sg, sb] = linear_rgb(SUN_COLOR);
        let sun = Vec3::from(SUN_POSITION).normalize();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            fog: [r, g, b, FOG_DENSITY],
            sun_dir: [sun.x, sun.y, sun.z, AMBIENT_INTENSITY],
            sun_color: [sr, sg, sb, SUN_INTENSITY],
        }
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn linear_rgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(srgb_to_linear)
}

/// Background clear color for `frame`, in linear space.
pub fn clear_color(frame: &SceneFrame) -> [f64; 3] {
    linear_rgb(frame.sky_rgb).map(f64::from)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// 1.0 for unlit materials (ground, grid, trees, cards), 0.0 for lit.
    pub unlit: f32,
    pub _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Unit cube centered on the origin, 36 vertices with flat normals.
pub fn cube_vertices() -> Vec<CubeVertex> {
    // (normal, u axis, v axis) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let corners = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
        for (cu, cv) in corners {
            let p = n * 0.5 + u * cu + v * cv;
            out.push(CubeVertex {
                position: p.to_array(),
                normal: n.to_array(),
            });
        }
    }
    out
}

/// Pack the registry into instances for `frame`.
///
/// Cards take their animated height and yaw from the frame; child entities
/// follow their parent's placement but keep their own size. Translucent cards
/// and their frames are emitted last so they blend over the city.
pub fn build_instances(registry: &EntityRegistry, frame: &SceneFrame) -> Vec<InstanceRaw> {
    let entities = registry.entities();
    // Placement without size, so children are not stretched by the parent.
    let mut placement: Vec<Mat4> = Vec::with_capacity(entities.len());
    for (i, e) in entities.iter().enumerate() {
        let mut translation = e.translation;
        let mut rotation = Quat::IDENTITY;
        if let Some(card) = registry.card_identity(i) {
            if let Some(pose) = frame.cards.get(card) {
                translation.y = pose.height;
                rotation = Quat::from_rotation_y(pose.rotation_y);
            }
        }
        let local = Mat4::from_rotation_translation(rotation, translation);
        let world = match e.parent {
            Some(p) if p < i => placement[p] * local,
            _ => local,
        };
        placement.push(world);
    }

    let mut opaque = Vec::with_capacity(entities.len());
    let mut translucent = Vec::new();
    for (e, world) in entities.iter().zip(placement.iter()) {
        let [r, g, b] = linear_rgb([e.color[0], e.color[1], e.color[2]]);
        let instance = InstanceRaw {
            model: (*world * Mat4::from_scale(e.scale)).to_cols_array_2d(),
            color: [r, g, b, e.color[3]],
            unlit: if e.kind == EntityKind::Building { 0.0 } else { 1.0 },
            _pad: [0.0; 3],
        };
        match e.kind {
            EntityKind::Card | EntityKind::CardBorder => translucent.push(instance),
            _ => opaque.push(instance),
        }
    }
    opaque.extend(translucent);
    opaque
}
