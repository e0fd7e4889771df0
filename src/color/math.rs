//! Numeric core shared by the parser and animated colors: ARGB packing and HSV conversion.
//!
//! Hue is carried as a fraction of a full turn in `[0, 1)` by the float API and in degrees
//! by the integer API. Saturation and value are `[0, 1]` floats or `[0, 255]` integers.

use super::Color;

/// Scale a unit float to a byte-ranged integer, rounding half up.
#[inline]
fn unit_to_byte(value: f32) -> i32 {
    (value * 255.0 + 0.5) as i32
}

/// Pack four channels into a color, clamping each one to `[0, 255]` independently.
pub fn combine_argb(alpha: i32, red: i32, green: i32, blue: i32) -> Color {
    let a = alpha.clamp(0, 255) as u32;
    let r = red.clamp(0, 255) as u32;
    let g = green.clamp(0, 255) as u32;
    let b = blue.clamp(0, 255) as u32;
    Color::from_argb((a << 24) | (r << 16) | (g << 8) | b)
}

/// Pack an opaque color from three channels.
pub fn combine_rgb(red: i32, green: i32, blue: i32) -> Color {
    combine_argb(255, red, green, blue)
}

/// Convert byte channels to `[hue, saturation, value]`, each in `[0, 1]` (hue in `[0, 1)`).
pub fn rgb_to_hsv(red: u8, green: u8, blue: u8) -> [f32; 3] {
    let (r, g, b) = (i32::from(red), i32::from(green), i32::from(blue));
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let value = cmax as f32 / 255.0;
    let saturation = if cmax != 0 { (cmax - cmin) as f32 / cmax as f32 } else { 0.0 };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let delta = (cmax - cmin) as f32;
        let red_c = (cmax - r) as f32 / delta;
        let green_c = (cmax - g) as f32 / delta;
        let blue_c = (cmax - b) as f32 / delta;
        let sextant = if r == cmax {
            blue_c - green_c
        } else if g == cmax {
            2.0 + red_c - blue_c
        } else {
            4.0 + green_c - red_c
        };
        let hue = sextant / 6.0;
        if hue < 0.0 { hue + 1.0 } else { hue }
    };

    [hue, saturation, value]
}

/// Convert unit-range alpha, hue, saturation and value to a packed color.
///
/// Hue wraps by keeping only its fractional part; every other input is clamped to `[0, 1]`.
pub fn ahsv_to_argb(alpha: f32, hue: f32, saturation: f32, value: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let hue = hue - hue.floor();
    // A tiny negative hue wraps to exactly 1.0 in f32.
    let hue = if hue >= 1.0 { 0.0 } else { hue };
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);

    let (r, g, b) = if saturation == 0.0 {
        let v = unit_to_byte(value);
        (v, v, v)
    } else {
        let scaled = hue * 6.0;
        let sextant = scaled.floor();
        let fraction = scaled - sextant;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));
        let (r, g, b) = match sextant as i32 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            5 => (value, p, q),
            _ => (value, t, p),
        };
        (unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    };

    combine_argb(unit_to_byte(alpha), r, g, b)
}

/// Integer form of [`ahsv_to_argb`]: hue in degrees, every other channel in `[0, 255]`.
pub fn ahsv_to_argb_degrees(alpha: i32, hue: i32, saturation: i32, value: i32) -> Color {
    ahsv_to_argb(alpha as f32 / 255.0, hue as f32 / 360.0, saturation as f32 / 255.0, value as f32 / 255.0)
}

/// Linearly interpolate one channel, truncating toward zero.
#[inline]
pub fn lerp_channel(fraction: f32, from: u8, to: u8) -> i32 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + fraction * (to - from)) as i32
}
