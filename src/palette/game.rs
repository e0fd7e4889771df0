use crate::color::Color;
use strum::{EnumIter, IntoStaticStr};

/// The sixteen built-in game text colors, in legacy format code order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum GameColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl GameColor {
    /// Look a color up by its legacy format code (`0`-`9`, `a`-`f`, case-insensitive).
    pub fn from_code(code: char) -> Option<Self> {
        use GameColor::*;
        let color = match code.to_ascii_lowercase() {
            '0' => Black,
            '1' => DarkBlue,
            '2' => DarkGreen,
            '3' => DarkAqua,
            '4' => DarkRed,
            '5' => DarkPurple,
            '6' => Gold,
            '7' => Gray,
            '8' => DarkGray,
            '9' => Blue,
            'a' => Green,
            'b' => Aqua,
            'c' => Red,
            'd' => LightPurple,
            'e' => Yellow,
            'f' => White,
            _ => return None,
        };
        Some(color)
    }

    pub fn code(self) -> char {
        char::from_digit(self as u32, 16).unwrap_or('f')
    }

    /// The registered name, such as `dark_purple`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The opaque color drawn for this entry.
    pub fn color(self) -> Color {
        use GameColor::*;
        let rgb = match self {
            Black => 0x00_00_00,
            DarkBlue => 0x00_00_AA,
            DarkGreen => 0x00_AA_00,
            DarkAqua => 0x00_AA_AA,
            DarkRed => 0xAA_00_00,
            DarkPurple => 0xAA_00_AA,
            Gold => 0xFF_AA_00,
            Gray => 0xAA_AA_AA,
            DarkGray => 0x55_55_55,
            Blue => 0x55_55_FF,
            Green => 0x55_FF_55,
            Aqua => 0x55_FF_FF,
            Red => 0xFF_55_55,
            LightPurple => 0xFF_55_FF,
            Yellow => 0xFF_FF_55,
            White => 0xFF_FF_FF,
        };
        Color::from_rgb(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn sixteen_entries_with_distinct_codes() {
        let codes: Vec<char> = GameColor::iter().map(GameColor::code).collect();
        assert_eq!(codes.len(), 16);
        assert_eq!(codes.iter().collect::<String>(), "0123456789abcdef");
        for color in GameColor::iter() {
            assert_eq!(GameColor::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(GameColor::DarkPurple.name(), "dark_purple");
        assert_eq!(GameColor::Gold.name(), "gold");
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(GameColor::from_code('C'), Some(GameColor::Red));
        assert_eq!(GameColor::from_code('l'), None);
    }

    #[test]
    fn black_is_opaque() {
        assert_eq!(GameColor::Black.color().argb(), 0xFF_00_00_00);
    }
}
