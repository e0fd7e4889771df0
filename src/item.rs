//! Picking the color an item's name is drawn in.
//!
//! Items get their color from several places, and mods override each of them. The host
//! exposes those places through [`ItemAppearance`] and [`color_for_item`] walks them in
//! precedence order.

use crate::color::{Color, NamedColor, ResolvedColor};
use crate::markup::find_first_color_code;
use once_cell::sync::OnceCell;
use std::fmt;

/// Set the first time a tooltip can't be fetched; later failures aren't logged.
static TOOLTIP_ERROR_REPORTED: OnceCell<()> = OnceCell::new();

/// Style flags of a piece of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
}

impl TextStyle {
    pub fn colored(color: Color) -> Self {
        Self { color: Some(color), ..Default::default() }
    }

    /// Whether no style was set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A run of text sharing one style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: TextStyle,
}

/// A line of text: a root style plus spans that inherit from it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub style: TextStyle,
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// An unstyled line with a single span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self { style: TextStyle::default(), spans: vec![StyledSpan { text: text.into(), style: TextStyle::default() }] }
    }

    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_span(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.spans.push(StyledSpan { text: text.into(), style });
        self
    }

    /// The text with all styling dropped. Legacy escape codes are kept.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// The color of the first character that has one, taking inherited color into account.
    pub fn first_char_color(&self) -> Option<Color> {
        self.spans
            .iter()
            .filter(|span| !span.text.is_empty())
            .find_map(|span| span.style.color.or(self.style.color))
    }
}

/// Fetching the tooltip failed on the host side.
#[derive(thiserror::Error, Debug)]
#[error("failed to fetch tooltip: {0}")]
pub struct TooltipError(pub String);

/// What the host knows about how an item's name is styled.
pub trait ItemAppearance: fmt::Debug {
    /// The display name, styled by the item's rarity.
    fn display_name(&self) -> StyledLine;

    /// The name the item's class reports, which some mods override.
    fn class_name(&self) -> Option<StyledLine>;

    /// The name shown on hover, which may be renamed and restyled.
    fn hover_name(&self) -> StyledLine;

    /// The full tooltip. Expensive, and may fail when called too early.
    fn tooltip_lines(&self) -> Result<Vec<StyledLine>, TooltipError>;
}

/// Resolve the color an item's name should be drawn in.
///
/// Later sources win: rarity, the class name, the hover name style, a legacy color code at
/// the start of the hover name, and the first per-character color of the hover name. If
/// that still leaves the rarity color (or nothing), the first tooltip line gets a say.
/// Without any color the `default` is used, and without a default the result is
/// `transparent`.
pub fn color_for_item(item: &dyn ItemAppearance, default: Option<Color>) -> ResolvedColor {
    let rarity = item.display_name().style.color;
    let mut result = rarity;

    if let Some(color) = item.class_name().and_then(|name| name.style.color) {
        result = Some(color);
    }

    let hover_name = item.hover_name();
    if !hover_name.style.is_empty() {
        if let Some(color) = hover_name.style.color {
            result = Some(color);
        }
    }
    if let Some(code) = find_first_color_code(&hover_name.plain_text()) {
        result = Some(code.color());
    }
    if let Some(color) = hover_name.first_char_color() {
        result = Some(color);
    }

    if result.is_none() || result == rarity {
        match item.tooltip_lines() {
            Ok(lines) => {
                if let Some(color) = lines.first().and_then(|line| line.style.color) {
                    result = Some(color);
                }
            }
            Err(e) => {
                if TOOLTIP_ERROR_REPORTED.set(()).is_ok() {
                    tracing::error!("error getting tooltip for item {item:?}: {e}");
                }
            }
        }
    }

    match result.or(default) {
        Some(color) => ResolvedColor::Computed(color),
        None => NamedColor::new("transparent", Color::TRANSPARENT).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorLike;
    use crate::palette::GameColor;

    const RARE: Color = Color::from_argb(0xFF_55_FF_FF);
    const CUSTOM: Color = Color::from_argb(0xFF_12_34_56);

    #[derive(Debug, Default)]
    struct Item {
        display_name: StyledLine,
        class_name: Option<StyledLine>,
        hover_name: StyledLine,
        tooltip: Option<Vec<StyledLine>>,
    }

    impl ItemAppearance for Item {
        fn display_name(&self) -> StyledLine {
            self.display_name.clone()
        }

        fn class_name(&self) -> Option<StyledLine> {
            self.class_name.clone()
        }

        fn hover_name(&self) -> StyledLine {
            self.hover_name.clone()
        }

        fn tooltip_lines(&self) -> Result<Vec<StyledLine>, TooltipError> {
            self.tooltip.clone().ok_or_else(|| TooltipError("too early".to_string()))
        }
    }

    fn rare_item() -> Item {
        Item {
            display_name: StyledLine::plain("Trident").with_style(TextStyle::colored(RARE)),
            hover_name: StyledLine::plain("Trident"),
            tooltip: Some(vec![StyledLine::plain("Trident")]),
            ..Default::default()
        }
    }

    #[test]
    fn rarity_color_is_the_baseline() {
        let color = color_for_item(&rare_item(), None);
        assert_eq!(color.value(), RARE);
    }

    #[test]
    fn class_name_overrides_rarity() {
        let item = Item { class_name: Some(StyledLine::plain("x").with_style(TextStyle::colored(CUSTOM))), ..rare_item() };
        assert_eq!(color_for_item(&item, None).value(), CUSTOM);
    }

    #[test]
    fn hover_name_style_overrides_class_name() {
        let item = Item {
            class_name: Some(StyledLine::plain("x").with_style(TextStyle::colored(RARE))),
            hover_name: StyledLine::default().with_style(TextStyle::colored(CUSTOM)),
            ..rare_item()
        };
        assert_eq!(color_for_item(&item, None).value(), CUSTOM);
    }

    #[test]
    fn color_code_overrides_hover_style() {
        let item = Item {
            hover_name: StyledLine::default()
                .with_style(TextStyle { bold: true, ..Default::default() })
                .with_span("§6Renamed", TextStyle::default()),
            ..rare_item()
        };
        assert_eq!(color_for_item(&item, None).value(), GameColor::Gold.color());
    }

    #[test]
    fn per_character_color_wins() {
        let item = Item {
            hover_name: StyledLine::default()
                .with_span("", TextStyle::colored(RARE))
                .with_span("§6Re", TextStyle::colored(CUSTOM))
                .with_span("named", TextStyle::default()),
            ..rare_item()
        };
        assert_eq!(color_for_item(&item, None).value(), CUSTOM);
    }

    #[test]
    fn tooltip_breaks_rarity_ties() {
        let item = Item { tooltip: Some(vec![StyledLine::plain("x").with_style(TextStyle::colored(CUSTOM))]), ..rare_item() };
        assert_eq!(color_for_item(&item, None).value(), CUSTOM);

        let unstyled = Item { tooltip: Some(Vec::new()), ..rare_item() };
        assert_eq!(color_for_item(&unstyled, None).value(), RARE);
    }

    #[test]
    fn fallbacks() {
        let plain = Item { display_name: StyledLine::plain("Stick"), tooltip: None, ..Default::default() };
        assert_eq!(color_for_item(&plain, Some(CUSTOM)).value(), CUSTOM);

        let transparent = color_for_item(&plain, None);
        assert_eq!(transparent.value(), Color::TRANSPARENT);
        assert_eq!(transparent.name(), Some("transparent"));
        assert!(TOOLTIP_ERROR_REPORTED.get().is_some());
    }

    #[test]
    fn styled_line_helpers() {
        let line = StyledLine::default()
            .with_style(TextStyle::colored(RARE))
            .with_span("§c", TextStyle::default())
            .with_span("Hi", TextStyle::colored(CUSTOM));
        assert_eq!(line.plain_text(), "§cHi");
        assert_eq!(line.first_char_color(), Some(RARE));
        assert!(TextStyle::default().is_empty());
        assert!(!TextStyle::colored(RARE).is_empty());
    }
}
