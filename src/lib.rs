//! Color parsing engine for game text and tooltips.
//!
//! Config values like `"#F4C"`, `"saddlebrown-v20"`, `4278251143` or `"10_black_#7FFF00"` are
//! resolved against the built-in game and web palettes into plain or animated colors:
//!
//! ```
//! use prism_color::{ColorLike, ColorParser, PaletteRegistry};
//!
//! let palettes = PaletteRegistry::new();
//! let parser = ColorParser::new(&palettes);
//! let color = parser.parse_str("#F4C").expect("should resolve");
//! assert_eq!(color.value().argb(), 0xFF_FF_44_CC);
//! ```

pub mod animation;
pub mod color;
pub mod config;
pub mod docs;
pub mod image_analysis;
pub mod item;
pub mod markup;
pub mod palette;
pub mod parse;

pub use animation::{AnimationRegistry, DynamicColor, TickListener};
pub use color::{Color, ColorLike, NamedColor, ResolvedColor};
pub use config::{ColorSettings, ConfigError};
pub use palette::{GameColor, PaletteError, PaletteKind, PaletteRegistry};
pub use parse::{AlphaPolicy, ColorDescriptor, ColorParser};
