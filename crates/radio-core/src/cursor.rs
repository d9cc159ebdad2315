//! Pointer helpers shared by the page glue.

use glam::Vec2;

/// Pointer position normalized to the viewport, minus 0.5 on each axis.
///
/// Returns zero for a degenerate viewport.
pub fn pointer_offset(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(client_x / width - 0.5, client_y / height - 0.5)
}

/// Stylesheet text that places the custom cursor at a client position.
pub fn cursor_rule(client_x: f32, client_y: f32) -> String {
    format!("body::after {{ left: {client_x}px; top: {client_y}px; }}")
}

/// Elements whose hover toggles the cursor's `hovering` state.
pub const HOVER_TARGETS: &str = "a, button, li";
pub const HOVER_CLASS: &str = "hovering";
