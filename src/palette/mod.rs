//! Immutable name to color lookup tables.
//!
//! A [`PaletteRegistry`] is built once at startup and handed to the parser by reference.
//! Names are matched exactly after [`normalize_name`].

pub mod game;
pub mod web;

pub use game::GameColor;

use crate::color::NamedColor;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

/// Errors that can occur when loading a palette file
#[derive(thiserror::Error, Debug)]
pub enum PaletteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("palette file '{0}' contains no valid records")]
    EmptyPalette(PathBuf),
}

/// Which table a lookup goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteKind {
    /// The sixteen built-in game colors.
    Game,
    /// The web/HTML named colors.
    Web,
}

/// Lowercase a color name and strip spaces and underscores: `"Dark Blue"` and `"DARK_BLUE"`
/// both become `"darkblue"`.
pub fn normalize_name(name: &str) -> String {
    name.chars().filter(|c| *c != ' ' && *c != '_').flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    game: HashMap<String, NamedColor>,
    web: HashMap<String, NamedColor>,
}

impl PaletteRegistry {
    /// Build the game palette and the bundled web palette.
    pub fn new() -> Self {
        Self::with_web_records(web::BUNDLED_RECORDS)
    }

    /// Build the game palette and a web palette from the given `name,hexValue` records.
    pub fn with_web_records(records: &str) -> Self {
        Self::from_parts(web::parse_records(records))
    }

    /// Build the game palette and a web palette read from a record file.
    pub fn from_web_file(path: &Path) -> Result<Self, PaletteError> {
        let records = std::fs::read_to_string(path)?;
        let colors = web::parse_records(&records);
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette(path.to_path_buf()));
        }
        Ok(Self::from_parts(colors))
    }

    /// Like [`Self::from_web_file`], but a missing or corrupt file yields an empty web palette.
    pub fn load(path: &Path) -> Self {
        match Self::from_web_file(path) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::warn!("failed to load web palette from {}: {e}", path.display());
                Self::from_parts(Vec::new())
            }
        }
    }

    fn from_parts(web_colors: Vec<NamedColor>) -> Self {
        let game: HashMap<_, _> = GameColor::iter()
            .map(|color| (normalize_name(color.name()), NamedColor::new(color.name(), color.color())))
            .collect();

        let mut web = HashMap::with_capacity(web_colors.len());
        for color in web_colors {
            let key = normalize_name(&color.to_string());
            web.insert(key, color);
        }

        tracing::debug!("built palettes with {} game and {} web colors", game.len(), web.len());
        Self { game, web }
    }

    /// Exact lookup of a name in one table. The returned color is a copy.
    pub fn lookup(&self, kind: PaletteKind, name: &str) -> Option<NamedColor> {
        let table = match kind {
            PaletteKind::Game => &self.game,
            PaletteKind::Web => &self.web,
        };
        table.get(&normalize_name(name)).cloned()
    }

    /// Look a name up in the game palette first, then the web palette.
    pub fn find(&self, name: &str) -> Option<NamedColor> {
        self.lookup(PaletteKind::Game, name).or_else(|| self.lookup(PaletteKind::Web, name))
    }

    pub fn len(&self, kind: PaletteKind) -> usize {
        match kind {
            PaletteKind::Game => self.game.len(),
            PaletteKind::Web => self.web.len(),
        }
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorLike;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case("Dark Blue", "darkblue")]
    #[case("DARK_BLUE", "darkblue")]
    #[case("dark_purple", "darkpurple")]
    #[case("  Light Gray ", "lightgray")]
    #[case("#F4C", "#f4c")]
    fn names_are_normalized(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(input), expected);
    }

    #[test]
    fn game_palette_has_sixteen_entries() {
        let palettes = PaletteRegistry::new();
        assert_eq!(palettes.len(PaletteKind::Game), 16);
        assert!(palettes.len(PaletteKind::Web) >= 140);
    }

    #[test]
    fn game_palette_wins_over_web() {
        let palettes = PaletteRegistry::new();
        let red = palettes.find("red").expect("red missing");
        assert_eq!(red.value().argb(), 0xFF_FF_55_55);
        assert_eq!(red.name(), Some("red"));

        let web_red = palettes.lookup(PaletteKind::Web, "RED").expect("web red missing");
        assert_eq!(web_red.value().argb(), 0xFF_FF_00_00);
    }

    #[test]
    fn lookup_is_exact() {
        let palettes = PaletteRegistry::new();
        assert!(palettes.find("Dark Purple").is_some());
        assert!(palettes.find("deep_sky_blue").is_some());
        assert!(palettes.find("reddish").is_none());
        assert!(palettes.find("").is_none());
    }

    #[test]
    fn file_palette_replaces_bundled_one() {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        writeln!(file, "Custom Teal,008081\ngarbage line").expect("failed to write");

        let palettes = PaletteRegistry::from_web_file(file.path()).expect("failed to load");
        assert_eq!(palettes.len(PaletteKind::Web), 1);
        assert_eq!(palettes.find("customteal").map(|c| c.value().argb()), Some(0xFF_00_80_81));
        assert!(palettes.lookup(PaletteKind::Web, "chartreuse").is_none());
    }

    #[test]
    fn missing_file_yields_empty_web_palette() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.csv");

        assert!(matches!(PaletteRegistry::from_web_file(&path), Err(PaletteError::Io(_))));
        let palettes = PaletteRegistry::load(&path);
        assert_eq!(palettes.len(PaletteKind::Web), 0);
        assert_eq!(palettes.len(PaletteKind::Game), 16);
        assert!(palettes.find("chartreuse").is_none());
    }

    #[test]
    fn corrupt_file_is_reported_as_empty() {
        let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        writeln!(file, "not,a,color\nstill nothing").expect("failed to write");

        assert!(matches!(PaletteRegistry::from_web_file(file.path()), Err(PaletteError::EmptyPalette(_))));
        assert_eq!(PaletteRegistry::load(file.path()).len(PaletteKind::Web), 0);
    }
}
