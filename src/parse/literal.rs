use crate::color::{Color, NamedColor};
use crate::palette::PaletteRegistry;

/// What a base literal (the part before any modifiers) resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum BaseColor {
    /// A hex code, decimal code or number.
    Code(Color),
    /// The literal `transparent`, which must never be made opaque by alpha repair.
    Transparent,
    /// A palette entry.
    Named(NamedColor),
}

impl BaseColor {
    pub(crate) fn color(&self) -> Color {
        match self {
            Self::Code(color) => *color,
            Self::Transparent => Color::TRANSPARENT,
            Self::Named(named) => named.color(),
        }
    }
}

/// Classify a base literal: hex code, then decimal code, then `transparent`, then palette names.
pub(crate) fn classify(text: &str, palettes: &PaletteRegistry) -> Option<BaseColor> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(color) = parse_hex_code(text) {
        return Some(BaseColor::Code(color));
    }
    if let Some(color) = parse_decimal_code(text) {
        return Some(BaseColor::Code(color));
    }
    if text.eq_ignore_ascii_case("transparent") {
        return Some(BaseColor::Transparent);
    }

    let name = text.strip_prefix('#').unwrap_or(text);
    palettes.find(name).map(BaseColor::Named)
}

/// Resolve a number to a packed color; anything outside the 32 bit range doesn't resolve.
pub(crate) fn color_from_integer(value: i64) -> Option<Color> {
    u32::try_from(value).ok().map(Color::from_argb)
}

/// Floats truncate toward zero.
pub(crate) fn color_from_float(value: f64) -> Option<Color> {
    if !value.is_finite() {
        return None;
    }
    color_from_integer(value.trunc() as i64)
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB` (also with a `0x` prefix).
///
/// Shorthand forms double every digit, so `#F4C` is `#FF44CC`.
pub(crate) fn parse_hex_code(text: &str) -> Option<Color> {
    let digits = text
        .strip_prefix('#')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))?;

    if !matches!(digits.len(), 3 | 4 | 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = if digits.len() <= 4 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let bytes = hex::decode(expanded).ok()?;

    let mut packed = [0u8; 4];
    packed[4 - bytes.len()..].copy_from_slice(&bytes);
    Some(Color::from_argb(u32::from_be_bytes(packed)))
}

fn parse_decimal_code(text: &str) -> Option<Color> {
    if text.len() > 10 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u64 = text.parse().ok()?;
    u32::try_from(value).ok().map(Color::from_argb)
}

/// Codes written without alpha (`#7FFF00`) are meant to be opaque; only a value of exactly
/// zero is left transparent.
pub(crate) fn repair_alpha(color: Color) -> Color {
    if color.argb() > 0 && color.argb() <= 0x00FF_FFFF {
        color.opaque()
    } else {
        color
    }
}
