/// Deterministic label-to-color mapping for pill badges.
use crate::types::ColorPair;

/// Saturation and lightness of the badge fill.
pub const PILL_DARK: (f64, f64) = (0.5, 0.35);
/// Saturation and lightness of the badge text.
pub const PILL_LIGHT: (f64, f64) = (0.9, 0.9);

/// 32-bit string hash: `h = c + ((h << 5) - h)`, i.e. `h * 31 + c` over the
/// label's character codes, with wrapping arithmetic.
///
/// The empty string hashes to 0. Earlier versions substituted a random
/// value here, which broke determinism for that one input; the fixed
/// sentinel keeps the mapping pure.
pub fn get_hash(value: &str) -> i32 {
    let mut hash: i32 = 0;
    for c in value.chars() {
        hash = (c as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

/// Spreads a hash over the hue circle: `(hash * 137) mod 360`, using a true
/// mathematical modulo so negative hashes still land in `[0, 360)`. 137 is
/// coprime to 360, which pushes nearby hashes far apart on the circle.
pub fn hue_from_hash(hash: i32) -> f64 {
    (hash as i64 * 137).rem_euclid(360) as f64
}

/// Converts an HSL color to RGB. `h` is in degrees `[0, 360)`, `s` and `l`
/// in `[0, 1]`; each channel comes out in `[0, 255]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h / 360.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_channel(p, q, h) * 255.0).round() as u8,
        (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Formats an RGB triple as `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parses a `#rrggbb` (or bare `rrggbb`) string back into an RGB triple.
pub fn hex_to_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Maps a hash straight to a hex color at the given saturation/lightness.
pub fn hash_to_hex(hash: i32, saturation: f64, lightness: f64) -> String {
    let (r, g, b) = hsl_to_rgb(hue_from_hash(hash), saturation, lightness);
    rgb_to_hex(r, g, b)
}

/// Resolves the badge colors for a label. Background and foreground derive
/// from the same hue and differ only in saturation/lightness, so the light
/// text stays legible on the dark fill across the whole hue range.
pub fn resolve_colours(label: &str, case_insensitive: bool) -> ColorPair {
    let hash = if case_insensitive {
        get_hash(&label.to_uppercase())
    } else {
        get_hash(label)
    };
    ColorPair {
        background: hash_to_hex(hash, PILL_DARK.0, PILL_DARK.1),
        foreground: hash_to_hex(hash, PILL_LIGHT.0, PILL_LIGHT.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_deterministic() {
        for label in ["todo", "Shopping List", "ünïcödé", ""] {
            for case_insensitive in [false, true] {
                assert_eq!(
                    resolve_colours(label, case_insensitive),
                    resolve_colours(label, case_insensitive),
                );
            }
        }
    }

    #[test]
    fn case_insensitive_mode_unifies_case_variants() {
        assert_eq!(resolve_colours("todo", true), resolve_colours("TODO", true));
        assert_eq!(
            resolve_colours("Shopping List", true),
            resolve_colours("shopping list", true),
        );
    }

    #[test]
    fn case_sensitive_default_distinguishes_case_variants() {
        assert_ne!(resolve_colours("todo", false), resolve_colours("TODO", false));
    }

    #[test]
    fn hue_stays_in_range_for_any_hash() {
        for hash in [i32::MIN, -3_565_638, -360, -137, -1, 0, 1, 137, 359, 360, i32::MAX] {
            let hue = hue_from_hash(hash);
            assert!(
                (0.0..360.0).contains(&hue),
                "hue {hue} out of range for hash {hash}"
            );
        }
    }

    #[test]
    fn zero_saturation_is_achromatic_gray() {
        assert_eq!(hsl_to_rgb(210.0, 0.0, 0.5), (128, 128, 128));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), (0, 0, 0));
        assert_eq!(hsl_to_rgb(42.0, 0.0, 1.0), (255, 255, 255));
    }

    #[test]
    fn channels_survive_a_full_hue_sweep_at_both_ramps() {
        for step in 0..360 {
            let hue = step as f64;
            let (r, g, b) = hsl_to_rgb(hue, PILL_DARK.0, PILL_DARK.1);
            let dark_max = r.max(g).max(b);
            let (r, g, b) = hsl_to_rgb(hue, PILL_LIGHT.0, PILL_LIGHT.1);
            let light_min = r.min(g).min(b);
            // the light ramp always ends up brighter than the dark ramp
            assert!(light_min > dark_max, "ramps overlap at hue {hue}");
        }
    }

    #[test]
    fn known_label_mapping_is_locked() {
        assert_eq!(get_hash("todo"), 3_565_638);
        assert_eq!(hue_from_hash(3_565_638), 126.0);
        let pair = resolve_colours("todo", false);
        assert_eq!(pair.background, "#2d8636");
        assert_eq!(pair.foreground, "#cffcd3");
    }

    #[test]
    fn empty_label_is_stable() {
        assert_eq!(get_hash(""), 0);
        let first = resolve_colours("", false);
        let second = resolve_colours("", false);
        assert_eq!(first, second);
        assert_eq!(first.background, "#862d2d");
        assert_eq!(first.foreground, "#fccfcf");
    }

    #[test]
    fn pair_shares_one_hue() {
        let hash = get_hash("alpha");
        let pair = resolve_colours("alpha", false);
        assert_eq!(pair.background, hash_to_hex(hash, PILL_DARK.0, PILL_DARK.1));
        assert_eq!(pair.foreground, hash_to_hex(hash, PILL_LIGHT.0, PILL_LIGHT.1));
    }

    #[test]
    fn hex_round_trips() {
        assert_eq!(hex_to_rgb("#2d8636"), Some((0x2d, 0x86, 0x36)));
        assert_eq!(hex_to_rgb("cffcd3"), Some((0xcf, 0xfc, 0xd3)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("not-a-color"), None);
    }
}
