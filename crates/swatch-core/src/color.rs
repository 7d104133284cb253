// ABOUTME: Color representation and conversion utilities.
// ABOUTME: Converts between hex strings, HSB, RGB, and an optional alpha channel.

use serde::{Deserialize, Serialize};

/// Mean luminance (0-255) of the #CCCCCC/#FFFFFF transparency checkerboard
pub const CHECKERBOARD_LUMINANCE: f64 = 230.0;

/// Foreground for light backgrounds
pub const BLACK: &str = "#000000";

/// Foreground for dark backgrounds
pub const WHITE: &str = "#FFFFFF";

/// Hue/saturation/brightness triple.
///
/// Hue is in degrees `[0, 360)`, saturation and brightness are percentages
/// `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: u16,
    pub saturation: u8,
    pub brightness: u8,
}

impl Hsb {
    /// Build a triple, wrapping hue and capping the percentages
    pub fn new(hue: u16, saturation: u8, brightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            brightness: brightness.min(100),
        }
    }

    pub fn to_hex(&self) -> String {
        hsb_to_hex(self.hue, self.saturation, self.brightness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceptual luminance over 0-255
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    pub fn to_hsb(&self) -> Hsb {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut hue = 0.0;
        if delta != 0.0 {
            hue = if max == r {
                ((g - b) / delta + 6.0) % 6.0
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            hue *= 60.0;
        }

        // Black has no saturation; avoid dividing by zero
        let saturation = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

        Hsb {
            // 359.5 and up rounds onto 360, which is red again
            hue: (hue.round() as u16) % 360,
            saturation: saturation.round() as u8,
            brightness: (max * 100.0).round() as u8,
        }
    }
}

/// Strip a single leading `#`
fn digits(hex: &str) -> &str {
    hex.strip_prefix('#').unwrap_or(hex)
}

fn is_hex_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Convert HSB to `#RRGGBB` (uppercase).
///
/// Uses the sector formula `f(n) = b * (1 - s * clamp(min(k, 4 - k, 1), 0, 1))`
/// with `k = (n + h / 60) mod 6` for n = 5, 3, 1 (red, green, blue).
pub fn hsb_to_hex(hue: u16, saturation: u8, brightness: u8) -> String {
    let h = f64::from(hue % 360);
    let s = f64::from(saturation.min(100)) / 100.0;
    let v = f64::from(brightness.min(100)) / 100.0;

    let channel = |n: f64| -> u8 {
        let k = (n + h / 60.0) % 6.0;
        let f = v * (1.0 - s * k.min(4.0 - k).min(1.0).clamp(0.0, 1.0));
        (f * 255.0).round() as u8
    };

    Rgb::new(channel(5.0), channel(3.0), channel(1.0)).to_hex()
}

/// Parse a 3, 6 or 8 digit hex (with or without `#`) into HSB.
///
/// Alpha digits are ignored. Returns `None` for anything else.
pub fn hex_to_hsb(hex: &str) -> Option<Hsb> {
    hex_to_rgb(hex).map(|rgb| rgb.to_hsb())
}

/// Parse the red/green/blue pairs of a 3, 6 or 8 digit hex.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let d = digits(hex);
    if !is_hex_digits(d) {
        return None;
    }

    match d.len() {
        3 => {
            // Shorthand: each digit doubles, 0xF -> 0xFF
            let nibble = |i: usize| u8::from_str_radix(&d[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 | 8 => {
            let pair = |i: usize| u8::from_str_radix(&d[i..i + 2], 16).ok();
            Some(Rgb::new(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

/// Exactly 6 or 8 hex digits, optional leading `#`
pub fn is_valid_hex(hex: &str) -> bool {
    let d = digits(hex);
    matches!(d.len(), 6 | 8) && is_hex_digits(d)
}

/// Exactly 6 hex digits, optional leading `#` (no alpha)
pub fn is_valid_hex6(hex: &str) -> bool {
    let d = digits(hex);
    d.len() == 6 && is_hex_digits(d)
}

/// Uppercase, `#`-prefixed form of a valid 6 or 8 digit hex
pub fn normalize_hex(hex: &str) -> Option<String> {
    if !is_valid_hex(hex) {
        return None;
    }
    Some(format!("#{}", digits(hex).to_ascii_uppercase()))
}

/// Read the alpha pair of an 8 digit hex as a 0-100 percentage.
///
/// Anything without an alpha pair is fully opaque (100).
pub fn parse_alpha_from_hex(hex: &str) -> u8 {
    let d = digits(hex);
    if d.len() != 8 || !is_hex_digits(d) {
        return 100;
    }
    match u8::from_str_radix(&d[6..8], 16) {
        Ok(a) => (f64::from(a) / 255.0 * 100.0).round() as u8,
        Err(_) => 100,
    }
}

/// Reduce `hex` to its 6 digit base and append `alpha` (0-100) as a hex pair.
/// Shorthand `#RGB` is expanded first.
pub fn append_alpha_to_hex(hex: &str, alpha: u8) -> String {
    let d = digits(hex);
    let base: String = if d.len() == 3 {
        d.chars().flat_map(|c| [c, c]).collect()
    } else {
        d.chars().take(6).collect()
    };
    let a = (f64::from(alpha.min(100)) / 100.0 * 255.0).round() as u8;
    format!("#{}{:02X}", base.to_ascii_uppercase(), a)
}

/// CSS `rgba(...)` string for fills
pub fn hex_to_rgba(hex: &str, alpha: u8) -> String {
    let rgb = hex_to_rgb(hex).unwrap_or(Rgb::new(0, 0, 0));
    format!(
        "rgba({}, {}, {}, {})",
        rgb.r,
        rgb.g,
        rgb.b,
        f64::from(alpha.min(100)) / 100.0
    )
}

/// Pick black or white text for a swatch of `hex` at `alpha` percent.
///
/// Translucent colors are blended toward the checkerboard shown behind them
/// before the luminance check. Unparseable input counts as black.
pub fn contrast_color(hex: &str, alpha: u8) -> &'static str {
    let rgb = hex_to_rgb(hex).unwrap_or(Rgb::new(0, 0, 0));
    let mut luminance = rgb.luminance();

    if alpha < 100 {
        let a = f64::from(alpha) / 100.0;
        luminance = luminance * a + CHECKERBOARD_LUMINANCE * (1.0 - a);
    }

    if luminance > 0.5 * 255.0 {
        BLACK
    } else {
        WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b);
        d.min(360 - d)
    }

    #[test]
    fn hsb_to_hex_primaries() {
        assert_eq!(hsb_to_hex(0, 100, 100), "#FF0000");
        assert_eq!(hsb_to_hex(120, 100, 100), "#00FF00");
        assert_eq!(hsb_to_hex(240, 100, 100), "#0000FF");
        assert_eq!(hsb_to_hex(0, 0, 0), "#000000");
        assert_eq!(hsb_to_hex(0, 0, 100), "#FFFFFF");
    }

    #[test]
    fn hex_to_hsb_green() {
        assert_eq!(hex_to_hsb("#00FF00"), Some(Hsb::new(120, 100, 100)));
    }

    #[test]
    fn hex_to_hsb_accepts_all_lengths() {
        assert_eq!(hex_to_hsb("f00"), Some(Hsb::new(0, 100, 100)));
        assert_eq!(hex_to_hsb("#0000ff"), Some(Hsb::new(240, 100, 100)));
        // Alpha digits are dropped
        assert_eq!(hex_to_hsb("#0000FF80"), Some(Hsb::new(240, 100, 100)));
        assert_eq!(hex_to_hsb("#000000"), Some(Hsb::new(0, 0, 0)));
    }

    #[test]
    fn hex_to_hsb_rejects_garbage() {
        assert_eq!(hex_to_hsb(""), None);
        assert_eq!(hex_to_hsb("#12345"), None);
        assert_eq!(hex_to_hsb("#GG0000"), None);
        assert_eq!(hex_to_hsb("#+F0000"), None);
    }

    #[test]
    fn hex_to_rgb_ignores_alpha() {
        assert_eq!(hex_to_rgb("#336699CC"), Some(Rgb::new(0x33, 0x66, 0x99)));
        assert_eq!(hex_to_rgb("abc"), Some(Rgb::new(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn roundtrip_brightness_everywhere() {
        for hue in (0..360).step_by(7) {
            for s in 0..=100 {
                for b in 0..=100 {
                    let back = hex_to_hsb(&hsb_to_hex(hue, s, b)).unwrap();
                    assert!(back.brightness.abs_diff(b) <= 1, "{hue} {s} {b} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn roundtrip_within_rounding() {
        // Below ~50% saturation/brightness the 8-bit channels are too coarse
        // to pin hue and saturation within one unit.
        for hue in 0..360 {
            for s in 50..=100 {
                for b in 50..=100 {
                    let back = hex_to_hsb(&hsb_to_hex(hue, s, b)).unwrap();
                    assert!(hue_distance(back.hue, hue) <= 1, "{hue} {s} {b} -> {back:?}");
                    assert!(back.saturation.abs_diff(s) <= 1, "{hue} {s} {b} -> {back:?}");
                    assert!(back.brightness.abs_diff(b) <= 1, "{hue} {s} {b} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn hueless_colors_decode_to_zero_hue() {
        let gray = hex_to_hsb(&hsb_to_hex(200, 0, 50)).unwrap();
        assert_eq!(gray.hue, 0);
        assert_eq!(gray.saturation, 0);
        let black = hex_to_hsb(&hsb_to_hex(200, 80, 0)).unwrap();
        assert_eq!(black, Hsb::new(0, 0, 0));
    }

    #[test]
    fn repeated_conversion_settles() {
        for hex in ["#007AFF", "#336699", "#FF0000", "#808080", "#00FF00"] {
            let first = hex_to_hsb(hex).unwrap();
            let second = hex_to_hsb(&first.to_hex()).unwrap();
            let third = hex_to_hsb(&second.to_hex()).unwrap();
            assert_eq!(second, third, "{hex}");
            assert_eq!(first.to_hex(), second.to_hex(), "{hex}");
        }
    }

    #[test]
    fn hex_validation_boundary() {
        assert!(is_valid_hex("ABC123"));
        assert!(is_valid_hex("#abc123"));
        assert!(is_valid_hex("#ABC12380"));
        assert!(!is_valid_hex("#ABC12"));
        assert!(!is_valid_hex("#ABC1234"));
        assert!(!is_valid_hex("#ABC123456"));
        assert!(!is_valid_hex("#ABCXYZ"));
        assert!(!is_valid_hex("##ABC123"));
        assert!(!is_valid_hex("abc"));

        assert!(is_valid_hex6("#ABC123"));
        assert!(!is_valid_hex6("#ABC12380"));
    }

    #[test]
    fn normalize_uppercases_and_prefixes() {
        assert_eq!(normalize_hex("aabbcc").as_deref(), Some("#AABBCC"));
        assert_eq!(normalize_hex("#aabbcc80").as_deref(), Some("#AABBCC80"));
        assert_eq!(normalize_hex("#abc"), None);
    }

    #[test]
    fn append_alpha_replaces_existing_pair() {
        assert_eq!(append_alpha_to_hex("#336699", 50), "#33669980");
        assert_eq!(append_alpha_to_hex("#336699", 100), "#336699FF");
        assert_eq!(append_alpha_to_hex("#336699", 0), "#33669900");
        // Existing alpha is replaced
        assert_eq!(append_alpha_to_hex("#33669912", 100), "#336699FF");
        assert_eq!(append_alpha_to_hex("aabbcc", 100), "#AABBCCFF");
    }

    #[test]
    fn append_alpha_expands_shorthand() {
        assert_eq!(append_alpha_to_hex("abc", 100), "#AABBCCFF");
        assert_eq!(append_alpha_to_hex("#F00", 50), "#FF000080");
        assert!(is_valid_hex(&append_alpha_to_hex("#abc", 0)));
    }

    #[test]
    fn alpha_append_parse_inverse() {
        for alpha in 0..=100 {
            let parsed = parse_alpha_from_hex(&append_alpha_to_hex("#102030", alpha));
            assert!(parsed.abs_diff(alpha) <= 1, "{alpha} -> {parsed}");
        }
    }

    #[test]
    fn parse_alpha_defaults_opaque() {
        assert_eq!(parse_alpha_from_hex("#102030"), 100);
        assert_eq!(parse_alpha_from_hex("#10203000"), 0);
        assert_eq!(parse_alpha_from_hex("#10203080"), 50);
        assert_eq!(parse_alpha_from_hex("nonsense"), 100);
    }

    #[test]
    fn rgba_fill_uses_fractional_alpha() {
        assert_eq!(hex_to_rgba("#FF8000", 50), "rgba(255, 128, 0, 0.5)");
        assert_eq!(hex_to_rgba("#FF8000", 100), "rgba(255, 128, 0, 1)");
    }

    #[test]
    fn contrast_blends_toward_checkerboard() {
        assert_eq!(contrast_color("#000000", 100), WHITE);
        assert_eq!(contrast_color("#000000", 0), BLACK);
        assert_eq!(contrast_color("#FFFFFF", 100), BLACK);
        assert_eq!(contrast_color("#FFFF00", 100), BLACK);
        assert_eq!(contrast_color("#0000FF", 100), WHITE);
        // Half transparent black over the checkerboard: 115 < 127.5
        assert_eq!(contrast_color("#000000", 50), WHITE);
        assert_eq!(contrast_color("#000000", 40), BLACK);
    }
}
