use crate::color::{Color, NamedColor};

/// The bundled web color records, one `name,hexValue` pair per line.
pub(crate) const BUNDLED_RECORDS: &str = include_str!("../../assets/webcolors.csv");

/// Parse `name,hexValue` records, skipping any line that doesn't form a valid entry.
///
/// Six digit values are stored opaque, eight digit values keep their alpha.
pub fn parse_records(records: &str) -> Vec<NamedColor> {
    let mut colors = Vec::new();
    for (index, line) in records.lines().enumerate() {
        match parse_record(line) {
            Some(color) => colors.push(color),
            None => {
                if !line.trim().is_empty() {
                    tracing::trace!("skipping web color record {}: {line:?}", index + 1);
                }
            }
        }
    }
    colors
}

fn parse_record(line: &str) -> Option<NamedColor> {
    let mut components = line.split(',');
    let name = components.next()?.trim();
    let value = components.next()?.trim();
    if name.is_empty() {
        return None;
    }

    let digits = value.strip_prefix('#').unwrap_or(value);
    let color = match hex::decode(digits).ok()?.as_slice() {
        [r, g, b] => Color::from_rgb(u32::from_be_bytes([0, *r, *g, *b])),
        [a, r, g, b] => Color::from_argb(u32::from_be_bytes([*a, *r, *g, *b])),
        _ => return None,
    };
    Some(NamedColor::new(name, color))
}
