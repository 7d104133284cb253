// ABOUTME: Maps pointer positions on the picker controls to channel values.
// ABOUTME: Covers the hue strip, saturation/brightness pad, and alpha strip.

/// Hue under `x` on a strip of `width`, red at the left edge
pub fn hue_at(x: f32, width: f32) -> u16 {
    if width.is_nan() || width <= 0.0 {
        return 0;
    }
    let x = x.clamp(0.0, width);
    // The right edge is red again; stop just short of it
    ((x / width * 360.0).round() as u16).min(359)
}

/// Saturation (left to right) and brightness (bottom to top) under a point
/// on a square pad of `size`
pub fn saturation_brightness_at(x: f32, y: f32, size: f32) -> (u8, u8) {
    if size.is_nan() || size <= 0.0 {
        return (0, 100);
    }
    let x = x.clamp(0.0, size);
    let y = y.clamp(0.0, size);
    let saturation = (x / size * 100.0).round() as u8;
    let brightness = (100.0 - y / size * 100.0).round() as u8;
    (saturation, brightness)
}

/// Alpha under `x` on a strip of `width`, transparent at the left edge
pub fn alpha_at(x: f32, width: f32) -> u8 {
    if width.is_nan() || width <= 0.0 {
        return 0;
    }
    let x = x.clamp(0.0, width);
    (x / width * 100.0).round() as u8
}

/// Thumb position for `hue` on a strip of `width`
pub fn hue_offset(hue: u16, width: f32) -> f32 {
    f32::from(hue.min(360)) / 360.0 * width
}

/// Thumb position for the pad
pub fn saturation_brightness_offset(saturation: u8, brightness: u8, size: f32) -> (f32, f32) {
    let x = f32::from(saturation.min(100)) / 100.0 * size;
    let y = (100.0 - f32::from(brightness.min(100))) / 100.0 * size;
    (x, y)
}

/// Thumb position for `alpha` on a strip of `width`
pub fn alpha_offset(alpha: u8, width: f32) -> f32 {
    f32::from(alpha.min(100)) / 100.0 * width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_clamps_to_strip() {
        assert_eq!(hue_at(-20.0, 300.0), 0);
        assert_eq!(hue_at(150.0, 300.0), 180);
        assert_eq!(hue_at(300.0, 300.0), 359);
        assert_eq!(hue_at(900.0, 300.0), 359);
    }

    #[test]
    fn pad_maps_both_axes() {
        assert_eq!(saturation_brightness_at(0.0, 0.0, 200.0), (0, 100));
        assert_eq!(saturation_brightness_at(200.0, 200.0, 200.0), (100, 0));
        assert_eq!(saturation_brightness_at(50.0, 150.0, 200.0), (25, 25));
        assert_eq!(saturation_brightness_at(-5.0, 500.0, 200.0), (0, 0));
    }

    #[test]
    fn alpha_clamps_to_strip() {
        assert_eq!(alpha_at(-1.0, 200.0), 0);
        assert_eq!(alpha_at(100.0, 200.0), 50);
        assert_eq!(alpha_at(250.0, 200.0), 100);
    }

    #[test]
    fn degenerate_extent_maps_to_origin() {
        assert_eq!(hue_at(10.0, 0.0), 0);
        assert_eq!(alpha_at(10.0, 0.0), 0);
        assert_eq!(saturation_brightness_at(10.0, 10.0, 0.0), (0, 100));
        assert_eq!(hue_at(10.0, f32::NAN), 0);
    }

    #[test]
    fn offsets_invert_positions() {
        assert!((hue_offset(180, 300.0) - 150.0).abs() < 0.001);
        assert!((alpha_offset(50, 200.0) - 100.0).abs() < 0.001);
        let (x, y) = saturation_brightness_offset(25, 25, 200.0);
        assert!((x - 50.0).abs() < 0.001);
        assert!((y - 150.0).abs() < 0.001);
        assert_eq!(hue_at(hue_offset(90, 300.0), 300.0), 90);
    }
}
