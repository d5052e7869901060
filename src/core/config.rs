use crate::constants::*;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown variant `{0}` (expected `neural` or `dust`)")]
    UnknownVariant(String),
    #[error("unknown boundary policy `{0}` (expected `wrap` or `reflect`)")]
    UnknownBoundary(String),
    #[error("invalid toggle `{0}` (expected on, off, true or false)")]
    InvalidToggle(String),
    #[error("invalid scroll fade `{0}` (expected on, off or a distance in px)")]
    InvalidScrollFade(String),
    #[error("invalid seed `{value}`")]
    InvalidSeed {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Named presets of the ambient renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Full-page background: pulsing nodes joined by proximity lines.
    #[default]
    Neural,
    /// Hero overlay: sparse, slow dust with pointer parallax.
    Dust,
}

impl Variant {
    pub fn config(self) -> FieldConfig {
        match self {
            Variant::Neural => FieldConfig {
                count_mobile: NEURAL_COUNT_MOBILE,
                count_desktop: NEURAL_COUNT_DESKTOP,
                breakpoint: MOBILE_BREAKPOINT_PX,
                max_speed: NEURAL_MAX_SPEED,
                radius_min: NEURAL_RADIUS_MIN,
                radius_span_mobile: NEURAL_RADIUS_MAX - NEURAL_RADIUS_MIN,
                radius_span_desktop: NEURAL_RADIUS_MAX - NEURAL_RADIUS_MIN,
                pulse_rate_min: NEURAL_PULSE_RATE_MIN,
                pulse_rate_max: NEURAL_PULSE_RATE_MAX,
                alpha_base_min: NEURAL_ALPHA_BASE,
                alpha_base_max: NEURAL_ALPHA_BASE,
                alpha_amplitude: NEURAL_ALPHA_AMPLITUDE,
                depth_min: DEPTH_MIN,
                depth_max: DEPTH_MAX,
                move_factor_mobile: MOVE_FACTOR_MOBILE,
                move_factor_desktop: MOVE_FACTOR_DESKTOP,
                lines: true,
                connection_distance: CONNECTION_DISTANCE,
                line_opacity_scale: LINE_OPACITY_SCALE,
                dot_rgb: NEURAL_DOT_RGB,
                line_rgb: NEURAL_LINE_RGB,
                clear: ClearMode::Opaque(NEURAL_CLEAR_RGB),
                boundary: BoundaryPolicy::Wrap,
                layer_opacity: LAYER_OPACITY,
                scroll_fade: None,
            },
            Variant::Dust => FieldConfig {
                count_mobile: DUST_COUNT_MOBILE,
                count_desktop: DUST_COUNT_DESKTOP,
                breakpoint: MOBILE_BREAKPOINT_PX,
                max_speed: DUST_MAX_SPEED,
                radius_min: DUST_RADIUS_MIN,
                radius_span_mobile: DUST_RADIUS_SPAN_MOBILE,
                radius_span_desktop: DUST_RADIUS_SPAN_DESKTOP,
                pulse_rate_min: 0.0,
                pulse_rate_max: 0.0,
                alpha_base_min: DUST_ALPHA_MIN,
                alpha_base_max: DUST_ALPHA_MAX,
                alpha_amplitude: 0.0,
                depth_min: DEPTH_MIN,
                depth_max: DEPTH_MAX,
                move_factor_mobile: MOVE_FACTOR_MOBILE,
                move_factor_desktop: MOVE_FACTOR_DESKTOP,
                lines: false,
                connection_distance: CONNECTION_DISTANCE,
                line_opacity_scale: LINE_OPACITY_SCALE,
                dot_rgb: DUST_DOT_RGB,
                line_rgb: DUST_DOT_RGB,
                clear: ClearMode::Transparent,
                boundary: BoundaryPolicy::Wrap,
                layer_opacity: LAYER_OPACITY,
                scroll_fade: None,
            },
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neural" => Ok(Variant::Neural),
            "dust" | "particles" => Ok(Variant::Dust),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Neural => f.write_str("neural"),
            Variant::Dust => f.write_str("dust"),
        }
    }
}

/// What happens when a point crosses an edge of the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Reappear at the opposite edge; keeps density uniform.
    #[default]
    Wrap,
    /// Mirror back inside and invert that velocity component.
    Reflect,
}

impl FromStr for BoundaryPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" | "wraparound" => Ok(BoundaryPolicy::Wrap),
            "reflect" | "bounce" => Ok(BoundaryPolicy::Reflect),
            _ => Err(ConfigError::UnknownBoundary(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearMode {
    /// Fill the whole surface with an opaque colour every frame.
    Opaque([u8; 3]),
    /// Clear to transparent so content below the canvas shows through.
    Transparent,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFade {
    pub distance: f32,
    pub start_opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    Mobile,
    Desktop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count_mobile: usize,
    pub count_desktop: usize,
    pub breakpoint: f32,

    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_span_mobile: f32,
    pub radius_span_desktop: f32,

    pub pulse_rate_min: f32,
    pub pulse_rate_max: f32,
    pub alpha_base_min: f32,
    pub alpha_base_max: f32,
    pub alpha_amplitude: f32,

    pub depth_min: f32,
    pub depth_max: f32,
    pub move_factor_mobile: f32,
    pub move_factor_desktop: f32,

    pub lines: bool,
    pub connection_distance: f32,
    pub line_opacity_scale: f32,

    pub dot_rgb: [u8; 3],
    pub line_rgb: [u8; 3],
    pub clear: ClearMode,
    pub boundary: BoundaryPolicy,
    /// CSS opacity of the whole canvas layer.
    pub layer_opacity: f32,
    /// Opt-in fade of the layer as the page scrolls; off in both presets.
    pub scroll_fade: Option<ScrollFade>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Variant::default().config()
    }
}

impl FieldConfig {
    #[inline]
    pub fn bucket(&self, width: f32) -> Bucket {
        if width < self.breakpoint {
            Bucket::Mobile
        } else {
            Bucket::Desktop
        }
    }

    pub fn count_for_width(&self, width: f32) -> usize {
        match self.bucket(width) {
            Bucket::Mobile => self.count_mobile,
            Bucket::Desktop => self.count_desktop,
        }
    }

    pub fn move_factor_for_width(&self, width: f32) -> f32 {
        match self.bucket(width) {
            Bucket::Mobile => self.move_factor_mobile,
            Bucket::Desktop => self.move_factor_desktop,
        }
    }

    pub fn radius_span_for_width(&self, width: f32) -> f32 {
        match self.bucket(width) {
            Bucket::Mobile => self.radius_span_mobile,
            Bucket::Desktop => self.radius_span_desktop,
        }
    }
}

/// Settings read from the embedding element's `data-*` attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub variant: Option<Variant>,
    pub boundary: Option<BoundaryPolicy>,
    pub lines: Option<bool>,
    /// Fade distance in px when `data-scroll-fade` enables it.
    pub scroll_fade: Option<f32>,
    pub seed: Option<u64>,
}

pub const ATTR_VARIANT: &str = "data-variant";
pub const ATTR_BOUNDARY: &str = "data-boundary";
pub const ATTR_LINES: &str = "data-lines";
pub const ATTR_SCROLL_FADE: &str = "data-scroll-fade";
pub const ATTR_SEED: &str = "data-seed";

impl ConfigOverrides {
    /// Collect overrides through `lookup` (attribute name -> value).
    ///
    /// Malformed values are skipped and reported in the returned error list so
    /// the caller can log them; they never abort mounting.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut out = Self::default();
        let mut errors = Vec::new();

        if let Some(v) = lookup(ATTR_VARIANT) {
            match v.parse() {
                Ok(variant) => out.variant = Some(variant),
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup(ATTR_BOUNDARY) {
            match v.parse() {
                Ok(policy) => out.boundary = Some(policy),
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup(ATTR_LINES) {
            match parse_toggle(&v) {
                Ok(on) => out.lines = Some(on),
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup(ATTR_SCROLL_FADE) {
            match parse_scroll_fade(&v) {
                Ok(distance) => out.scroll_fade = distance,
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup(ATTR_SEED) {
            match v.trim().parse::<u64>() {
                Ok(seed) => out.seed = Some(seed),
                Err(source) => errors.push(ConfigError::InvalidSeed { value: v, source }),
            }
        }
        (out, errors)
    }

    pub fn resolve(&self) -> FieldConfig {
        let mut cfg = self.variant.unwrap_or_default().config();
        if let Some(boundary) = self.boundary {
            cfg.boundary = boundary;
        }
        if let Some(lines) = self.lines {
            cfg.lines = lines;
        }
        if let Some(distance) = self.scroll_fade {
            cfg.scroll_fade = Some(ScrollFade {
                distance,
                start_opacity: cfg.layer_opacity,
            });
        }
        cfg
    }
}

pub fn parse_toggle(s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" | "" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidToggle(s.to_string())),
    }
}

/// `on` fades over the default distance, `off` disables, a number is the
/// distance in px.
pub fn parse_scroll_fade(s: &str) -> Result<Option<f32>, ConfigError> {
    if let Ok(on) = parse_toggle(s) {
        return Ok(on.then_some(SCROLL_FADE_DISTANCE_PX));
    }
    match s.trim().trim_end_matches("px").parse::<f32>() {
        Ok(d) if d.is_finite() && d > 0.0 => Ok(Some(d)),
        _ => Err(ConfigError::InvalidScrollFade(s.to_string())),
    }
}
