//! Turning loosely written color descriptors into colors.
//!
//! A descriptor is a string, a number, or a sequence of those. Strings may hold several
//! stops joined by `_`, optionally led by a duration: `"10_black_#7FFF00"` fades from black to
//! chartreuse and back over ten seconds. Every stop may carry channel modifiers such as
//! `"#saddlebrown-v20+s5"`.
//!
//! Parsing never fails loudly: anything that doesn't resolve yields `None`, and the first stop
//! that doesn't resolve makes the whole descriptor fail.

pub mod literal;
pub mod modifier;

pub use modifier::{split_modifiers, Channel, Modifier, ModifierOp};

use crate::animation::{AnimationRegistry, DynamicColor};
use crate::color::{Color, ColorLike, NamedColor, ResolvedColor};
use crate::palette::PaletteRegistry;
use literal::{classify, color_from_float, color_from_integer, repair_alpha, BaseColor};
use serde::{Deserialize, Serialize};

/// Total animation duration, in seconds, when a descriptor doesn't specify one.
pub const DEFAULT_DURATION: f32 = 10.0;

/// A color as written in a config value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ColorDescriptor {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Sequence(Vec<ColorDescriptor>),
}

impl ColorDescriptor {
    /// Read this descriptor as an animation duration in seconds.
    fn as_duration(&self) -> Option<f32> {
        match self {
            Self::Integer(value) => Some(*value as f32),
            Self::Float(value) if value.is_finite() => Some(*value as f32),
            Self::Text(text) => parse_duration(text),
            _ => None,
        }
    }
}

impl From<&str> for ColorDescriptor {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ColorDescriptor {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for ColorDescriptor {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ColorDescriptor {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for ColorDescriptor {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<ColorDescriptor>> From<Vec<T>> for ColorDescriptor {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Whether resolved colors may keep a non-opaque alpha channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphaPolicy {
    #[default]
    Allow,
    /// Force alpha to 0xFF on every resolved stop.
    ForceOpaque,
}

impl From<bool> for AlphaPolicy {
    fn from(allow_alpha: bool) -> Self {
        if allow_alpha { Self::Allow } else { Self::ForceOpaque }
    }
}

/// One stop waiting to be resolved.
#[derive(Clone, Copy, Debug)]
enum Literal<'d> {
    /// A `_` separated segment of a string.
    Segment(&'d str),
    /// A bare descriptor or a sequence element.
    Value(&'d ColorDescriptor),
}

/// Resolves [`ColorDescriptor`]s against a set of palettes.
#[derive(Clone, Debug)]
pub struct ColorParser<'a> {
    palettes: &'a PaletteRegistry,
    animations: Option<&'a AnimationRegistry>,
    alpha_policy: AlphaPolicy,
    default_duration: f32,
}

impl<'a> ColorParser<'a> {
    pub fn new(palettes: &'a PaletteRegistry) -> Self {
        Self { palettes, animations: None, alpha_policy: AlphaPolicy::Allow, default_duration: DEFAULT_DURATION }
    }

    /// Attach every animated color this parser creates to `animations`.
    #[must_use]
    pub fn with_animations(mut self, animations: &'a AnimationRegistry) -> Self {
        self.animations = Some(animations);
        self
    }

    #[must_use]
    pub fn with_alpha_policy(mut self, alpha_policy: AlphaPolicy) -> Self {
        self.alpha_policy = alpha_policy;
        self
    }

    #[must_use]
    pub fn with_default_duration(mut self, default_duration: f32) -> Self {
        self.default_duration = default_duration;
        self
    }

    pub fn alpha_policy(&self) -> AlphaPolicy {
        self.alpha_policy
    }

    /// Resolve a descriptor to a single color or, for two or more stops, an animated one.
    pub fn parse(&self, descriptor: &ColorDescriptor) -> Option<ResolvedColor> {
        let (duration, literals) = self.segment(descriptor);
        let mut resolved: Vec<ResolvedColor> =
            literals.into_iter().map(|literal| self.resolve(literal)).collect::<Option<_>>()?;

        match resolved.len() {
            0 | 1 => resolved.pop(),
            _ => {
                let stops = resolved.iter().map(ColorLike::value).collect();
                let mut color = DynamicColor::new(stops, duration);
                if let Some(animations) = self.animations {
                    color.attach(animations);
                }
                Some(ResolvedColor::Animated(color))
            }
        }
    }

    pub fn parse_str(&self, text: &str) -> Option<ResolvedColor> {
        self.parse(&ColorDescriptor::from(text))
    }

    /// Resolve one literal, modifiers included, without looking for `_` separated stops.
    pub fn parse_literal(&self, text: &str) -> Option<Color> {
        self.resolve(Literal::Segment(text)).map(|color| color.value())
    }

    /// Whether `descriptor` resolves at all.
    pub fn validate(&self, descriptor: &ColorDescriptor) -> bool {
        self.parse(descriptor).is_some()
    }

    pub fn parse_or(&self, descriptor: &ColorDescriptor, fallback: Color) -> ResolvedColor {
        self.parse(descriptor).unwrap_or(ResolvedColor::Computed(fallback))
    }

    fn segment<'d>(&self, descriptor: &'d ColorDescriptor) -> (f32, Vec<Literal<'d>>) {
        match descriptor {
            // Palette names such as `dark_purple` are a single stop.
            ColorDescriptor::Text(text) if text.contains('_') && !self.is_single_literal(text) => {
                let mut segments: Vec<&str> = text.split('_').collect();
                while segments.last().is_some_and(|segment| segment.trim().is_empty()) {
                    segments.pop();
                }
                let duration = segments.first().and_then(|segment| parse_duration(segment));
                self.split_duration(duration, segments.into_iter().map(Literal::Segment).collect())
            }
            ColorDescriptor::Sequence(items) => {
                let duration = items.first().and_then(ColorDescriptor::as_duration);
                self.split_duration(duration, items.iter().map(Literal::Value).collect())
            }
            other => (self.default_duration, vec![Literal::Value(other)]),
        }
    }

    fn is_single_literal(&self, text: &str) -> bool {
        let (base, _) = split_modifiers(text.trim());
        matches!(classify(base, self.palettes), Some(BaseColor::Named(_)))
    }

    /// Drop the leading literal if it was a duration. Otherwise every literal is a stop.
    fn split_duration<'d>(&self, duration: Option<f32>, mut literals: Vec<Literal<'d>>) -> (f32, Vec<Literal<'d>>) {
        match duration {
            Some(duration) => {
                literals.remove(0);
                (duration, literals)
            }
            None => (self.default_duration, literals),
        }
    }

    fn resolve(&self, literal: Literal<'_>) -> Option<ResolvedColor> {
        let resolved = match literal {
            Literal::Segment(text) => self.resolve_text(text),
            Literal::Value(ColorDescriptor::Text(text)) => self.resolve_text(text),
            Literal::Value(ColorDescriptor::Integer(value)) => color_from_integer(*value).map(computed),
            Literal::Value(ColorDescriptor::Float(value)) => color_from_float(*value).map(computed),
            Literal::Value(ColorDescriptor::Null | ColorDescriptor::Sequence(_)) => None,
        };

        let Some(resolved) = resolved else {
            tracing::debug!("color literal {literal:?} did not resolve");
            return None;
        };
        Some(match self.alpha_policy {
            AlphaPolicy::Allow => resolved,
            AlphaPolicy::ForceOpaque => force_opaque(resolved),
        })
    }

    fn resolve_text(&self, text: &str) -> Option<ResolvedColor> {
        let (base, modifiers) = split_modifiers(text.trim());
        let base = classify(base, self.palettes)?;
        let color = match &base {
            BaseColor::Transparent => Color::TRANSPARENT,
            other => repair_alpha(other.color()),
        };
        let color = Modifier::apply_all(&modifiers, color);

        Some(match base {
            BaseColor::Named(named) if modifiers.is_empty() => ResolvedColor::Named(named.with_color(color)),
            BaseColor::Transparent if modifiers.is_empty() => NamedColor::new("transparent", color).into(),
            _ => ResolvedColor::Computed(color),
        })
    }
}

fn parse_duration(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|duration| duration.is_finite())
}

fn computed(color: Color) -> ResolvedColor {
    ResolvedColor::Computed(repair_alpha(color))
}

fn force_opaque(resolved: ResolvedColor) -> ResolvedColor {
    match resolved {
        ResolvedColor::Named(named) => {
            let color = named.color().opaque();
            ResolvedColor::Named(named.with_color(color))
        }
        ResolvedColor::Computed(color) => ResolvedColor::Computed(color.opaque()),
        animated @ ResolvedColor::Animated(_) => animated,
    }
}
