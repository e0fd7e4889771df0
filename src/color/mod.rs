pub mod math;

use crate::animation::DynamicColor;
use std::fmt;

/// A packed 32 bit ARGB color, alpha in the most significant byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Build an opaque color from a 24 bit RGB value; any bits above the low 24 are ignored.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn rgb(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same color with its alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Same color with alpha forced to 0xFF.
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(0xFF)
    }

    /// Hue in whole degrees, truncated.
    pub fn hue(self) -> i32 {
        (self.hsv()[0] * 360.0) as i32
    }

    /// Saturation in `[0, 255]`, truncated.
    pub fn saturation(self) -> i32 {
        (self.hsv()[1] * 255.0) as i32
    }

    /// HSV value in `[0, 255]`, truncated.
    pub fn value(self) -> i32 {
        (self.hsv()[2] * 255.0) as i32
    }

    fn hsv(self) -> [f32; 3] {
        math::rgb_to_hsv(self.red(), self.green(), self.blue())
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Capabilities shared by every kind of resolved color.
pub trait ColorLike {
    /// The color to draw right now.
    fn value(&self) -> Color;

    /// Human readable name, absent for computed colors.
    fn name(&self) -> Option<&str>;

    fn is_animated(&self) -> bool {
        false
    }
}

impl ColorLike for Color {
    fn value(&self) -> Color {
        *self
    }

    fn name(&self) -> Option<&str> {
        None
    }
}

/// A palette color that keeps the name it was registered under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedColor {
    name: String,
    color: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self { name: name.into(), color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the color while keeping the name.
    #[must_use]
    pub(crate) fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl ColorLike for NamedColor {
    fn value(&self) -> Color {
        self.color
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The outcome of resolving a color descriptor.
#[derive(Debug)]
pub enum ResolvedColor {
    /// A palette color used as-is.
    Named(NamedColor),
    /// A color produced from a code, a number, or by applying modifiers.
    Computed(Color),
    /// Two or more stops faded between over time.
    Animated(DynamicColor),
}

impl ResolvedColor {
    pub fn as_animated(&self) -> Option<&DynamicColor> {
        match self {
            Self::Animated(color) => Some(color),
            _ => None,
        }
    }

    pub fn into_animated(self) -> Option<DynamicColor> {
        match self {
            Self::Animated(color) => Some(color),
            _ => None,
        }
    }
}

impl ColorLike for ResolvedColor {
    fn value(&self) -> Color {
        match self {
            Self::Named(color) => color.value(),
            Self::Computed(color) => *color,
            Self::Animated(color) => color.value(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Self::Named(color) => color.name(),
            Self::Computed(_) => None,
            Self::Animated(color) => color.name(),
        }
    }

    fn is_animated(&self) -> bool {
        match self {
            Self::Animated(color) => color.is_animated(),
            _ => false,
        }
    }
}

impl From<Color> for ResolvedColor {
    fn from(color: Color) -> Self {
        Self::Computed(color)
    }
}

impl From<NamedColor> for ResolvedColor {
    fn from(color: NamedColor) -> Self {
        Self::Named(color)
    }
}

impl From<DynamicColor> for ResolvedColor {
    fn from(color: DynamicColor) -> Self {
        Self::Animated(color)
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(color) => fmt::Display::fmt(color, f),
            Self::Computed(color) => fmt::Display::fmt(color, f),
            Self::Animated(color) => fmt::Display::fmt(color, f),
        }
    }
}
