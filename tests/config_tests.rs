// Host-side tests for presets, attribute overrides and tuning constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use crate::constants::*;
use crate::core::config::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn default_is_the_neural_preset() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg, Variant::Neural.config());
    assert_eq!(cfg.count_mobile, 60);
    assert_eq!(cfg.count_desktop, 140);
    assert!(cfg.lines);
    assert_eq!(cfg.boundary, BoundaryPolicy::Wrap);
    assert_eq!(cfg.clear, ClearMode::Opaque([0, 0, 0]));
    assert_eq!(cfg.scroll_fade, None);
}

#[test]
fn dust_preset_skips_lines_at_fixed_opacity() {
    let cfg = Variant::Dust.config();
    assert_eq!((cfg.count_mobile, cfg.count_desktop), (12, 40));
    assert!(!cfg.lines);
    assert_eq!(cfg.clear, ClearMode::Transparent);
    assert_eq!(cfg.layer_opacity, 0.6);
    assert_eq!(cfg.scroll_fade, None);
}

#[test]
fn scroll_fade_is_opt_in() {
    let (ov, errors) = ConfigOverrides::from_lookup(lookup(&[
        (ATTR_VARIANT, "dust"),
        (ATTR_SCROLL_FADE, "on"),
    ]));
    assert!(errors.is_empty());
    let fade = ov.resolve().scroll_fade.expect("enabled by attribute");
    assert_eq!(fade.distance, 800.0);
    assert_eq!(fade.start_opacity, 0.6);

    let (ov, _) = ConfigOverrides::from_lookup(lookup(&[(ATTR_SCROLL_FADE, "1200px")]));
    assert_eq!(ov.resolve().scroll_fade.map(|f| f.distance), Some(1200.0));

    let (ov, _) = ConfigOverrides::from_lookup(lookup(&[(ATTR_SCROLL_FADE, "off")]));
    assert_eq!(ov.resolve().scroll_fade, None);
}

#[test]
fn scroll_fade_rejects_non_positive_distances() {
    assert_eq!(parse_scroll_fade(""), Ok(Some(800.0)));
    assert_eq!(parse_scroll_fade("350"), Ok(Some(350.0)));
    for bad in ["-5", "0.0", "far", "NaN", "inf"] {
        assert_eq!(
            parse_scroll_fade(bad),
            Err(ConfigError::InvalidScrollFade(bad.to_string())),
            "{bad}"
        );
    }
}

#[test]
fn buckets_split_at_the_breakpoint() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.bucket(767.9), Bucket::Mobile);
    assert_eq!(cfg.bucket(768.0), Bucket::Desktop);
    assert_eq!(cfg.move_factor_for_width(500.0), 10.0);
    assert_eq!(cfg.move_factor_for_width(1200.0), 30.0);
    let dust = Variant::Dust.config();
    assert_eq!(dust.radius_span_for_width(500.0), 0.8);
    assert_eq!(dust.radius_span_for_width(1200.0), 1.2);
}

#[test]
fn variants_and_policies_parse() {
    assert_eq!("neural".parse::<Variant>(), Ok(Variant::Neural));
    assert_eq!(" Dust ".parse::<Variant>(), Ok(Variant::Dust));
    assert_eq!(
        "video".parse::<Variant>(),
        Err(ConfigError::UnknownVariant("video".into()))
    );
    assert_eq!(Variant::Dust.to_string(), "dust");

    assert_eq!("wrap".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Wrap));
    assert_eq!("REFLECT".parse::<BoundaryPolicy>(), Ok(BoundaryPolicy::Reflect));
    assert!("sticky".parse::<BoundaryPolicy>().is_err());
}

#[test]
fn toggles_accept_common_spellings() {
    for on in ["on", "true", "1", "yes", ""] {
        assert_eq!(parse_toggle(on), Ok(true), "{:?}", on);
    }
    for off in ["off", "FALSE", "0", "no"] {
        assert_eq!(parse_toggle(off), Ok(false), "{:?}", off);
    }
    assert_eq!(
        parse_toggle("maybe"),
        Err(ConfigError::InvalidToggle("maybe".into()))
    );
}

#[test]
fn overrides_apply_on_top_of_the_variant() {
    let (ov, errors) = ConfigOverrides::from_lookup(lookup(&[
        (ATTR_VARIANT, "dust"),
        (ATTR_BOUNDARY, "reflect"),
        (ATTR_LINES, "on"),
        (ATTR_SEED, "42"),
    ]));
    assert!(errors.is_empty());
    assert_eq!(ov.seed, Some(42));

    let cfg = ov.resolve();
    assert_eq!(cfg.count_desktop, 40);
    assert_eq!(cfg.boundary, BoundaryPolicy::Reflect);
    assert!(cfg.lines);
}

#[test]
fn missing_attributes_leave_defaults() {
    let (ov, errors) = ConfigOverrides::from_lookup(lookup(&[]));
    assert!(errors.is_empty());
    assert_eq!(ov, ConfigOverrides::default());
    assert_eq!(ov.resolve(), FieldConfig::default());
}

#[test]
fn bad_attributes_are_reported_and_skipped() {
    let (ov, errors) = ConfigOverrides::from_lookup(lookup(&[
        (ATTR_VARIANT, "hologram"),
        (ATTR_BOUNDARY, "reflect"),
        (ATTR_LINES, "sometimes"),
        (ATTR_SEED, "-3"),
    ]));
    assert_eq!(errors.len(), 3);
    assert!(matches!(errors[0], ConfigError::UnknownVariant(_)));
    assert!(matches!(errors[1], ConfigError::InvalidToggle(_)));
    assert!(matches!(errors[2], ConfigError::InvalidSeed { .. }));
    assert_eq!(errors[2].to_string(), "invalid seed `-3`");

    // the valid one still applies
    assert_eq!(ov.boundary, Some(BoundaryPolicy::Reflect));
    assert_eq!(ov.variant, None);
    assert_eq!(ov.resolve().count_desktop, 140);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(NEURAL_COUNT_DESKTOP > NEURAL_COUNT_MOBILE);
    assert!(DUST_COUNT_DESKTOP > DUST_COUNT_MOBILE);
    // the pairwise pass is quadratic; keep n small
    assert!(NEURAL_COUNT_DESKTOP <= 140);

    assert!(NEURAL_RADIUS_MAX > NEURAL_RADIUS_MIN && NEURAL_RADIUS_MIN > 0.0);
    assert!(NEURAL_PULSE_RATE_MAX > NEURAL_PULSE_RATE_MIN);
    assert!(NEURAL_ALPHA_BASE - NEURAL_ALPHA_AMPLITUDE >= 0.0);
    assert!(NEURAL_ALPHA_BASE + NEURAL_ALPHA_AMPLITUDE <= 1.0);
    assert!(DUST_ALPHA_MAX > DUST_ALPHA_MIN && DUST_ALPHA_MAX <= 1.0);

    assert!(DEPTH_MAX > DEPTH_MIN && DEPTH_MIN > 0.0);
    assert!(MOVE_FACTOR_DESKTOP > MOVE_FACTOR_MOBILE);
    assert!(CONNECTION_DISTANCE > 0.0);
    assert!(LINE_OPACITY_SCALE > 0.0 && LINE_OPACITY_SCALE <= 1.0);
    assert!(LAYER_OPACITY > 0.0 && LAYER_OPACITY <= 1.0);
    assert!(SCROLL_FADE_DISTANCE_PX > 0.0);
}
