use crate::color::ResolvedColor;
use crate::palette::{PaletteError, PaletteRegistry};
use crate::parse::{AlphaPolicy, ColorDescriptor, ColorParser, DEFAULT_DURATION};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading color settings
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}

#[derive(Clone, Debug, Deserialize)]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
#[serde(default, deny_unknown_fields)]
pub struct ColorSettings {
    /// Whether colors may be translucent. When false every color is forced opaque.
    pub allow_alpha: bool,

    /// The total duration, in seconds, of animated colors that don't specify one.
    pub default_duration: f32,

    /// A `name,hexValue` record file replacing the bundled web colors.
    pub web_palette: Option<PathBuf>,

    /// Named colors, each in any descriptor form.
    pub colors: BTreeMap<String, ColorDescriptor>,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self { allow_alpha: true, default_duration: DEFAULT_DURATION, web_palette: None, colors: BTreeMap::new() }
    }
}

impl ColorSettings {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Build the palettes. An unreadable web palette file leaves the web palette empty.
    pub fn palette_registry(&self) -> PaletteRegistry {
        match &self.web_palette {
            Some(path) => PaletteRegistry::load(path),
            None => PaletteRegistry::new(),
        }
    }

    /// Like [`Self::palette_registry`], but an unreadable web palette file is an error.
    pub fn try_palette_registry(&self) -> Result<PaletteRegistry, ConfigError> {
        match &self.web_palette {
            Some(path) => Ok(PaletteRegistry::from_web_file(path)?),
            None => Ok(PaletteRegistry::new()),
        }
    }

    pub fn parser<'a>(&self, palettes: &'a PaletteRegistry) -> ColorParser<'a> {
        ColorParser::new(palettes)
            .with_alpha_policy(AlphaPolicy::from(self.allow_alpha))
            .with_default_duration(self.default_duration)
    }

    /// Resolve every configured color. Entries that don't resolve are left out.
    pub fn resolve_colors(&self, parser: &ColorParser<'_>) -> BTreeMap<String, ResolvedColor> {
        let mut resolved = BTreeMap::new();
        for (name, descriptor) in &self.colors {
            match parser.parse(descriptor) {
                Some(color) => {
                    resolved.insert(name.clone(), color);
                }
                None => tracing::warn!("color '{name}' could not be resolved from {descriptor:?}"),
            }
        }
        resolved
    }
}
