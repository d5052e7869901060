use glam::Vec2;
use web_sys as web;

/// Pointer offset from the viewport centre, each axis in `[-0.5, 0.5]`.
///
/// Returns zero for a degenerate viewport so the parallax simply switches off.
#[inline]
pub fn normalized_offset(client: Vec2, viewport: Vec2) -> Vec2 {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return Vec2::ZERO;
    }
    let half = Vec2::splat(0.5);
    (client / viewport - half).clamp(-half, half)
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
