use crate::color::math::{ahsv_to_argb_degrees, combine_argb};
use crate::color::Color;

/// How a modifier combines its amount with the current channel reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifierOp {
    Add,
    Subtract,
    Set,
}

impl ModifierOp {
    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '=' => Some(Self::Set),
            _ => None,
        }
    }

    fn apply(self, current: i32, amount: i32) -> i32 {
        match self {
            Self::Add => current.saturating_add(amount),
            Self::Subtract => current.saturating_sub(amount),
            Self::Set => amount,
        }
    }
}

/// The channel a modifier reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Value,
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'h' => Some(Self::Hue),
            's' => Some(Self::Saturation),
            'v' => Some(Self::Value),
            'r' => Some(Self::Red),
            'g' => Some(Self::Green),
            'b' => Some(Self::Blue),
            'a' => Some(Self::Alpha),
            _ => None,
        }
    }
}

/// A post-hoc channel adjustment such as `+h15` or `=a40`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modifier {
    pub op: ModifierOp,
    pub channel: Channel,
    pub amount: i32,
}

impl Modifier {
    /// Parse a single `<op><channel><amount>` token.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let op = ModifierOp::from_symbol(chars.next()?)?;
        let channel = Channel::from_letter(chars.next()?)?;
        let amount = chars.as_str().parse().ok()?;
        Some(Self { op, channel, amount })
    }

    /// Apply this modifier to a color.
    ///
    /// Hue, saturation and value are read from the color's current RGB channels, so each
    /// modifier sees the result of the ones before it.
    pub fn apply(&self, color: Color) -> Color {
        let alpha = i32::from(color.alpha());
        let red = i32::from(color.red());
        let green = i32::from(color.green());
        let blue = i32::from(color.blue());
        let op = |current| self.op.apply(current, self.amount);

        match self.channel {
            Channel::Hue => ahsv_to_argb_degrees(alpha, op(color.hue()), color.saturation(), color.value()),
            Channel::Saturation => ahsv_to_argb_degrees(alpha, color.hue(), op(color.saturation()), color.value()),
            Channel::Value => ahsv_to_argb_degrees(alpha, color.hue(), color.saturation(), op(color.value())),
            Channel::Red => combine_argb(alpha, op(red), green, blue),
            Channel::Green => combine_argb(alpha, red, op(green), blue),
            Channel::Blue => combine_argb(alpha, red, green, op(blue)),
            Channel::Alpha => combine_argb(op(alpha), red, green, blue),
        }
    }

    /// Apply modifiers left to right.
    pub fn apply_all(modifiers: &[Modifier], color: Color) -> Color {
        modifiers.iter().fold(color, |color, modifier| modifier.apply(color))
    }
}

/// Split a literal such as `"#F4C-r15-v10=a40"` into its base (`"#F4C"`) and modifiers.
///
/// Every `+`, `-` or `=` starts a new token. Tokens shorter than three characters or that
/// don't parse are dropped.
pub fn split_modifiers(literal: &str) -> (&str, Vec<Modifier>) {
    let Some(start) = literal.find(is_modifier_symbol) else {
        return (literal, Vec::new());
    };

    let (base, mut rest) = literal.split_at(start);
    let mut modifiers = Vec::new();
    while !rest.is_empty() {
        let end = rest[1..].find(is_modifier_symbol).map(|i| i + 1).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        rest = tail;

        if token.chars().count() < 3 {
            tracing::trace!("skipping short modifier {token:?}");
            continue;
        }
        match Modifier::parse(token) {
            Some(modifier) => modifiers.push(modifier),
            None => tracing::trace!("skipping unparseable modifier {token:?}"),
        }
    }
    (base, modifiers)
}

fn is_modifier_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn apply(argb: u32, literal: &str) -> u32 {
        let (_, modifiers) = split_modifiers(literal);
        Modifier::apply_all(&modifiers, Color::from_argb(argb)).argb()
    }

    #[test]
    fn splits_base_and_modifiers() {
        let (base, modifiers) = split_modifiers("#F4C-r15-v10=a40");
        assert_eq!(base, "#F4C");
        assert_eq!(
            modifiers,
            [
                Modifier { op: ModifierOp::Subtract, channel: Channel::Red, amount: 15 },
                Modifier { op: ModifierOp::Subtract, channel: Channel::Value, amount: 10 },
                Modifier { op: ModifierOp::Set, channel: Channel::Alpha, amount: 40 },
            ]
        );
    }

    #[test]
    fn literal_without_modifiers_is_untouched() {
        let (base, modifiers) = split_modifiers("saddlebrown");
        assert_eq!(base, "saddlebrown");
        assert!(modifiers.is_empty());
    }

    #[rstest]
    #[case("red+h", 0)]
    #[case("red+h5x", 0)]
    #[case("red*h5", 0)]
    #[case("red+q5", 0)]
    #[case("red++h5", 1)]
    #[case("red+H5", 1)]
    fn bad_tokens_are_skipped(#[case] literal: &str, #[case] expected: usize) {
        let (base, modifiers) = split_modifiers(literal);
        assert!(base.starts_with("red"));
        assert_eq!(modifiers.len(), expected);
    }

    #[rstest]
    #[case(0xFF_10_20_30, "+r15", 0xFF_1F_20_30)]
    #[case(0xFF_10_20_30, "-g40", 0xFF_10_00_30)]
    #[case(0xFF_10_20_30, "=b255", 0xFF_10_20_FF)]
    #[case(0xFF_10_20_30, "=a40", 0x28_10_20_30)]
    #[case(0xFF_10_20_30, "+a10", 0xFF_10_20_30)]
    fn rgb_channel_modifiers_clamp(#[case] argb: u32, #[case] literal: &str, #[case] expected: u32) {
        assert_eq!(apply(argb, literal), expected);
    }

    #[test]
    fn hue_shift_wraps() {
        assert_eq!(apply(0xFF_FF_00_00, "+h120"), 0xFF_00_FF_00);
        assert_eq!(apply(0xFF_FF_00_00, "-h120"), 0xFF_00_00_FF);
    }

    #[test]
    fn set_is_idempotent() {
        for argb in [0xFF_8B_45_13, 0xFF_33_66_CC, 0xFF_FF_55_55] {
            let once = apply(argb, "=v128");
            assert_eq!(apply(once, "=v128"), once);
        }
    }

    #[test]
    fn opposite_hue_shifts_cancel() {
        assert_eq!(apply(0xFF_FF_00_00, "+h10-h10"), 0xFF_FF_00_00);
        assert_eq!(apply(0xFF_8B_45_13, "+h10-h10"), 0xFF_8B_45_13);

        let original = Color::from_argb(0xFF_33_66_CC);
        let shifted = Color::from_argb(apply(original.argb(), "+h10-h10"));
        assert!((shifted.hue() - original.hue()).abs() <= 2);
    }

    #[test]
    fn hue_and_saturation_order_matters() {
        let hue_first = apply(0xFF_8B_45_13, "+h10+s10");
        let saturation_first = apply(0xFF_8B_45_13, "+s10+h10");
        assert_eq!(hue_first, 0xFF_8B_57_0E);
        assert_eq!(saturation_first, 0xFF_8B_55_0E);
        assert_ne!(hue_first, saturation_first);
    }

    #[test]
    fn alpha_survives_hsv_modifiers() {
        assert_eq!(apply(0x80_FF_00_00, "+h120") >> 24, 0x80);
    }
}
