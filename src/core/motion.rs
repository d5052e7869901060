// Keyframe mapping for animation curves driven by a scalar input
// (scroll offset, progress fraction, elapsed time).

/// Map `input` through piecewise-linear keyframes.
///
/// `input_range` must be ascending and the same length as `output_range`.
/// Inputs outside the first/last keyframe clamp to the first/last output.
/// Empty ranges yield `0.0`; a single keyframe yields its output.
pub fn interpolate(input: f32, input_range: &[f32], output_range: &[f32]) -> f32 {
    let n = input_range.len().min(output_range.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || input <= input_range[0] || input.is_nan() {
        return output_range[0];
    }
    if input >= input_range[n - 1] {
        return output_range[n - 1];
    }
    for i in 1..n {
        let (a, b) = (input_range[i - 1], input_range[i]);
        if input <= b {
            let span = b - a;
            if span <= 0.0 {
                return output_range[i];
            }
            let t = (input - a) / span;
            return output_range[i - 1] + (output_range[i] - output_range[i - 1]) * t;
        }
    }
    output_range[n - 1]
}

/// Layer opacity for a scroll position when fading out over `distance` px.
#[inline]
pub fn scroll_fade_opacity(scroll_y: f32, distance: f32, start_opacity: f32) -> f32 {
    interpolate(scroll_y, &[0.0, distance], &[start_opacity, 0.0]).clamp(0.0, 1.0)
}
