/// Field tuning constants.
///
/// These constants express intended look and feel (counts, speeds, opacity
/// curves) and keep magic numbers out of the presets in `core::config`.
// Viewports narrower than this use the mobile bucket
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Neural field (full-page background)
pub const NEURAL_COUNT_MOBILE: usize = 60;
pub const NEURAL_COUNT_DESKTOP: usize = 140;
pub const NEURAL_MAX_SPEED: f32 = 0.25; // units per frame, per axis
pub const NEURAL_RADIUS_MIN: f32 = 0.3;
pub const NEURAL_RADIUS_MAX: f32 = 2.0;
pub const NEURAL_PULSE_RATE_MIN: f32 = 0.02; // radians per frame
pub const NEURAL_PULSE_RATE_MAX: f32 = 0.05;
pub const NEURAL_ALPHA_BASE: f32 = 0.3;
pub const NEURAL_ALPHA_AMPLITUDE: f32 = 0.2;
pub const NEURAL_DOT_RGB: [u8; 3] = [99, 102, 241];
pub const NEURAL_LINE_RGB: [u8; 3] = [129, 140, 248];
pub const NEURAL_CLEAR_RGB: [u8; 3] = [0, 0, 0];

// Proximity lines
pub const CONNECTION_DISTANCE: f32 = 180.0;
pub const LINE_OPACITY_SCALE: f32 = 0.15;
pub const LINE_WIDTH: f32 = 0.5;

// Dust field (hero overlay)
pub const DUST_COUNT_MOBILE: usize = 12;
pub const DUST_COUNT_DESKTOP: usize = 40;
pub const DUST_MAX_SPEED: f32 = 0.025;
pub const DUST_RADIUS_MIN: f32 = 0.3;
pub const DUST_RADIUS_SPAN_MOBILE: f32 = 0.8;
pub const DUST_RADIUS_SPAN_DESKTOP: f32 = 1.2;
pub const DUST_ALPHA_MIN: f32 = 0.1;
pub const DUST_ALPHA_MAX: f32 = 0.3;
pub const DUST_DOT_RGB: [u8; 3] = [165, 180, 255];

// Pointer parallax
pub const DEPTH_MIN: f32 = 0.1;
pub const DEPTH_MAX: f32 = 0.5;
pub const MOVE_FACTOR_MOBILE: f32 = 10.0; // px at full pointer offset and depth 1
pub const MOVE_FACTOR_DESKTOP: f32 = 30.0;

// Canvas layer opacity
pub const LAYER_OPACITY: f32 = 0.6;
// Default distance of the opt-in scroll fade
pub const SCROLL_FADE_DISTANCE_PX: f32 = 800.0;

// Diagnostics
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;
