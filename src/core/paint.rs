use crate::constants::LINE_WIDTH;
use crate::core::config::ClearMode;
use crate::core::field::Field;
use glam::Vec2;
use rand::Rng;

/// Immediate-mode 2D target the field is painted onto.
pub trait Surface {
    fn clear(&mut self, size: Vec2, mode: ClearMode);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, rgb: [u8; 3], alpha: f32);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub dots: usize,
    pub lines: usize,
}

/// Repaint `field` with every point displaced by the pointer parallax.
///
/// Lines are chosen from simulated positions but drawn between the displaced
/// ones so they stay attached to their dots.
pub fn paint_frame<R: Rng, S: Surface + ?Sized>(
    field: &Field<R>,
    pointer: Vec2,
    surface: &mut S,
) -> FrameStats {
    let cfg = field.config();
    let move_factor = field.move_factor();
    let drawn: Vec<Vec2> = field
        .points()
        .iter()
        .map(|p| p.pos + p.parallax(pointer, move_factor))
        .collect();

    surface.clear(field.size(), cfg.clear);

    let mut stats = FrameStats::default();
    for c in field.connections() {
        surface.stroke_line(
            drawn[c.a],
            drawn[c.b],
            LINE_WIDTH,
            cfg.line_rgb,
            c.opacity,
        );
        stats.lines += 1;
    }
    for (p, at) in field.points().iter().zip(&drawn) {
        surface.fill_circle(*at, p.radius, cfg.dot_rgb, p.opacity(cfg.alpha_amplitude));
        stats.dots += 1;
    }
    stats
}

/// CSS colour string understood by canvas fill/stroke styles.
pub fn css_rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        rgb[0],
        rgb[1],
        rgb[2],
        alpha.clamp(0.0, 1.0)
    )
}

#[inline]
pub fn css_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}
