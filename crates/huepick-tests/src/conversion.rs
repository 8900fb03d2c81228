//! Integration tests for the color conversion library.
//!
//! Exercises conversions, canonical keys and serde together, the way the
//! picker keeps several color-model displays in sync.

use std::collections::{BTreeMap, HashMap};

use huepick_color::{
    color_as_str, component_8bit, hsl_to_rgb, hsv_to_rgb, normalized_component, rgb_as_rgb24,
    rgb_from_rgb24, rgb_to_hsl, ColorKey, Hsl, Hsv, NormalizedComponent, Rgb, Rgb24,
};

// ── Concrete scenarios ─────────────────────────────────────────

#[test]
fn hsl_red_to_rgb24() {
    let rgb24 = rgb_as_rgb24(hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)));
    assert_eq!(rgb24.to_array(), [255, 0, 0]);
}

#[test]
fn hsl_green_to_rgb24() {
    let [r, g, b] = rgb_as_rgb24(hsl_to_rgb(Hsl::new(1.0 / 3.0, 1.0, 0.5))).to_array();
    assert!(r <= 1);
    assert!(g >= 254);
    assert!(b <= 1);
}

#[test]
fn hsv_white_to_rgb24() {
    let rgb24 = rgb_as_rgb24(hsv_to_rgb(Hsv::new(0.0, 0.0, 1.0)));
    assert_eq!(rgb24.to_array(), [255, 255, 255]);
}

#[test]
fn rgb_white_to_hsl() {
    let hsl = rgb_to_hsl(Rgb::new(1.0, 1.0, 1.0));
    assert_eq!(hsl.to_array(), [0.0, 0.0, 1.0]);
}

#[test]
fn full_component_is_255() {
    assert_eq!(component_8bit(normalized_component(1.0)).get(), 255);
}

#[test]
fn rgb24_red_expands_exactly() {
    let rgb = rgb_from_rgb24(Rgb24::new(255, 0, 0));
    assert_eq!(rgb.to_array(), [1.0, 0.0, 0.0]);
}

// ── Model synchronization ──────────────────────────────────────

#[test]
fn hsv_and_hsl_agree_on_primaries() {
    for (hue, expected) in [
        (0.0, [255, 0, 0]),
        (1.0 / 6.0, [255, 255, 0]),
        (0.5, [0, 255, 255]),
        (5.0 / 6.0, [255, 0, 255]),
    ] {
        let from_hsl = rgb_as_rgb24(hsl_to_rgb(Hsl::new(hue, 1.0, 0.5))).to_array();
        let from_hsv = rgb_as_rgb24(hsv_to_rgb(Hsv::new(hue, 1.0, 1.0))).to_array();
        for i in 0..3 {
            assert!(from_hsl[i].abs_diff(expected[i]) <= 1, "hsl hue {hue}");
            assert!(from_hsv[i].abs_diff(expected[i]) <= 1, "hsv hue {hue}");
        }
    }
}

#[test]
fn every_rgb24_survives_hsl_roundtrip() {
    // Walk a coarse grid of the RGB cube through HSL and back.
    for r in (0..=255u8).step_by(17) {
        for g in (0..=255u8).step_by(51) {
            for b in (0..=255u8).step_by(85) {
                let x = Rgb24::new(r, g, b);
                let back = rgb_as_rgb24(hsl_to_rgb(rgb_to_hsl(rgb_from_rgb24(x))));
                let (a, c) = (x.to_array(), back.to_array());
                for i in 0..3 {
                    assert!(a[i].abs_diff(c[i]) <= 1, "{x:?} -> {back:?}");
                }
            }
        }
    }
}

#[test]
fn gray_hsl_keeps_zero_hue_after_roundtrip() {
    let hsl = rgb_to_hsl(hsl_to_rgb(Hsl::new(0.7, 0.0, 0.4)));
    assert_eq!(hsl.hue, NormalizedComponent::ZERO);
    assert_eq!(hsl.saturation, NormalizedComponent::ZERO);
    assert!((hsl.luminosity.get() - 0.4).abs() < 1e-12);
}

// ── Canonical keys ─────────────────────────────────────────────

#[test]
fn key_matches_across_map_and_struct() {
    let rgb = Rgb::new(0.25, 0.5, 0.75);

    let mut map = HashMap::new();
    map.insert("blue".to_string(), normalized_component(0.75));
    map.insert("red".to_string(), normalized_component(0.25));
    map.insert("green".to_string(), normalized_component(0.5));

    assert_eq!(color_as_str(&rgb), color_as_str(&map));
}

#[test]
fn key_parses_with_generic_json() {
    let key = color_as_str(&Hsv::new(0.1, 0.2, 0.3));
    let value: serde_json::Value = serde_json::from_str(key.as_str()).unwrap();
    assert_eq!(value["hue"], 0.1);
    assert_eq!(value["saturation"], 0.2);
    assert_eq!(value["value"], 0.3);
}

#[test]
fn keys_dedupe_colors() {
    let keys: BTreeMap<ColorKey, usize> = [
        Hsl::new(0.5, 0.5, 0.5),
        Hsl::new(0.5, 0.5, 0.5),
        Hsl::new(0.5, 0.5, 0.6),
    ]
    .iter()
    .enumerate()
    .map(|(i, hsl)| (color_as_str(hsl), i))
    .collect();
    assert_eq!(keys.len(), 2);
}

#[test]
fn key_decodes_into_model() {
    let rgb = rgb_from_rgb24(Rgb24::new(12, 34, 56));
    let key = color_as_str(&rgb);
    let decoded: Rgb = key.decode().unwrap();
    assert_eq!(decoded, rgb);
    assert_eq!(rgb_as_rgb24(decoded), Rgb24::new(12, 34, 56));
}
