use crate::core::config::{BoundaryPolicy, FieldConfig};
use glam::Vec2;
use rand::prelude::*;

/// One animated node of the field.
///
/// Everything except `pos`, `vel` and `phase` is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub phase: f32,
    pub pulse_rate: f32,
    pub depth: f32,
    pub base_alpha: f32,
}

impl Point {
    #[inline]
    pub fn opacity(&self, amplitude: f32) -> f32 {
        pulse_opacity(self.base_alpha, amplitude, self.phase)
    }

    /// Displacement for a pointer offset in `[-0.5, 0.5]²`.
    #[inline]
    pub fn parallax(&self, pointer: Vec2, move_factor: f32) -> Vec2 {
        -(pointer * move_factor * self.depth)
    }
}

#[inline]
pub fn pulse_opacity(base: f32, amplitude: f32, phase: f32) -> f32 {
    (base + phase.sin() * amplitude).clamp(0.0, 1.0)
}

/// Line opacity for two points `distance` apart, or `None` when too far.
#[inline]
pub fn connection_opacity(distance: f32, threshold: f32, scale: f32) -> Option<f32> {
    (distance < threshold).then(|| (1.0 - distance / threshold) * scale)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

pub struct Field<R: Rng = StdRng> {
    config: FieldConfig,
    size: Vec2,
    points: Vec<Point>,
    generation: u64,
    rng: R,
}

impl<R: Rng> Field<R> {
    pub fn new(config: FieldConfig, width: f32, height: f32, rng: R) -> Self {
        let mut field = Self {
            config,
            size: Vec2::ONE,
            points: Vec::new(),
            generation: 0,
            rng,
        };
        field.regenerate(width, height);
        field
    }

    /// Adopt a new surface size and replace every point.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.generation += 1;
        self.regenerate(width, height);
    }

    fn regenerate(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(sanitize_extent(width), sanitize_extent(height));
        let count = self.config.count_for_width(self.size.x);
        let radius_span = self.config.radius_span_for_width(self.size.x);
        let cfg = &self.config;
        let rng = &mut self.rng;
        let size = self.size;
        let max_pos = Vec2::new(below(size.x), below(size.y));

        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let pos = Vec2::new(rng.gen::<f32>() * size.x, rng.gen::<f32>() * size.y);
            let vel = Vec2::new(
                sample(rng, -cfg.max_speed, cfg.max_speed),
                sample(rng, -cfg.max_speed, cfg.max_speed),
            );
            points.push(Point {
                pos: pos.min(max_pos),
                vel,
                radius: cfg.radius_min + sample(rng, 0.0, radius_span),
                phase: 0.0,
                pulse_rate: sample(rng, cfg.pulse_rate_min, cfg.pulse_rate_max),
                depth: sample(rng, cfg.depth_min, cfg.depth_max),
                base_alpha: sample(rng, cfg.alpha_base_min, cfg.alpha_base_max),
            });
        }
        self.points = points;
    }

    /// Advance every point by one frame.
    pub fn step(&mut self) {
        let size = self.size;
        let policy = self.config.boundary;
        for p in &mut self.points {
            p.pos += p.vel;
            match policy {
                BoundaryPolicy::Wrap => {
                    p.pos.x = wrap(p.pos.x, size.x);
                    p.pos.y = wrap(p.pos.y, size.y);
                }
                BoundaryPolicy::Reflect => {
                    (p.pos.x, p.vel.x) = reflect(p.pos.x, p.vel.x, size.x);
                    (p.pos.y, p.vel.y) = reflect(p.pos.y, p.vel.y, size.y);
                }
            }
            p.phase += p.pulse_rate;
            if p.phase > std::f32::consts::TAU {
                p.phase -= std::f32::consts::TAU;
            }
        }
    }

    /// Every unordered pair closer than the connection distance, `a < b`.
    pub fn connections(&self) -> Vec<Connection> {
        let mut out = Vec::new();
        if !self.config.lines {
            return out;
        }
        let threshold = self.config.connection_distance;
        let scale = self.config.line_opacity_scale;
        for (i, a) in self.points.iter().enumerate() {
            for (j, b) in self.points.iter().enumerate().skip(i + 1) {
                let d = a.pos.distance(b.pos);
                if let Some(opacity) = connection_opacity(d, threshold, scale) {
                    out.push(Connection { a: i, b: j, opacity });
                }
            }
        }
        out
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Bumped on every resize; identifies the current point set.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn move_factor(&self) -> f32 {
        self.config.move_factor_for_width(self.size.x)
    }
}

// ---------------- helpers ----------------

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v >= 1.0 {
        v
    } else {
        1.0
    }
}

/// Largest float strictly below a positive `extent`.
#[inline]
fn below(extent: f32) -> f32 {
    f32::from_bits(extent.to_bits() - 1)
}

#[inline]
fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}

#[inline]
pub fn wrap(pos: f32, extent: f32) -> f32 {
    let r = pos.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent`
    if r >= extent || !r.is_finite() {
        0.0
    } else {
        r
    }
}

/// Mirror `pos` back into `[0, extent)`, pointing `vel` inward.
#[inline]
pub fn reflect(pos: f32, vel: f32, extent: f32) -> (f32, f32) {
    if !pos.is_finite() {
        return (0.0, vel.abs());
    }
    if pos < 0.0 {
        ((-pos).min(below(extent)), vel.abs())
    } else if pos >= extent {
        ((2.0 * extent - pos).clamp(0.0, below(extent)), -vel.abs())
    } else {
        (pos, vel)
    }
}
