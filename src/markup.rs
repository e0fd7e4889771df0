use crate::palette::GameColor;

/// The legacy formatting escape marker.
pub const FORMAT_MARKER: char = '§';

/// Non-color legacy format codes: obfuscated, bold, strikethrough, underline, italic and reset.
const STYLE_CODES: &[char] = &['k', 'l', 'm', 'n', 'o', 'r'];

/// Find the color set by a legacy escape code at the very start of `text`.
///
/// Only a marker and code pair at the very start counts. The scan gives up at the first
/// character that isn't an escape marker and at the first escape that isn't a color, so
/// `"§cHello"` is red while `"Hello §c"` and `"§l§cHello"` have no color.
///
/// A leading style code such as `§l` ends the scan instead of being skipped, so only text
/// whose very first escape is a color counts as colored.
pub fn find_first_color_code(text: &str) -> Option<GameColor> {
    let mut chars = text.chars();
    if chars.next()? != FORMAT_MARKER {
        return None;
    }
    let code = chars.next()?;
    let color = GameColor::from_code(code);
    if color.is_none() && !is_style_code(code) {
        tracing::trace!("unknown format code {code:?}");
    }
    color
}

/// Whether `code` is a legacy format code that changes style rather than color.
pub fn is_style_code(code: char) -> bool {
    STYLE_CODES.contains(&code.to_ascii_lowercase())
}
