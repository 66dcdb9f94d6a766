//! Hue/saturation/brightness conversions for the HSB model

/// Hue (degrees, 0..360) and saturation (0..1) of an RGB color; value is
/// dropped because the pixel intensity supplies it.
pub fn rgb_to_hue_saturation(rgb: [u8; 3]) -> (f64, f64) {
    let r = rgb[0] as f64 / 255.0;
    let g = rgb[1] as f64 / 255.0;
    let b = rgb[2] as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    (hue, saturation)
}

/// Standard HSV-style conversion; all inputs in their canonical ranges
/// (hue in degrees, saturation and brightness in 0..1), output channels
/// in 0..1.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> [f64; 3] {
    let c = brightness * saturation;
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = brightness - c;
    [r + m, g + m, b + m]
}
