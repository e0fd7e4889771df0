use anyhow::{bail, Context};
use clap::{Parser, ValueHint};
use crossterm::style::{Print, ResetColor, SetBackgroundColor};
use crossterm::QueueableCommand;
use prism_color::docs::{format_documentation, DocContext};
use prism_color::{
    AlphaPolicy, AnimationRegistry, Color, ColorDescriptor, ColorLike, ColorParser, PaletteRegistry, ResolvedColor,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve a color descriptor and preview it in the terminal.
#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Cli {
    /// The descriptor, e.g. "#F4C", "gold+h15" or "10_black_#7FFF00". A value starting with
    /// '[' is read as a JSON sequence.
    #[clap(required_unless_present = "formats", allow_hyphen_values = true)]
    descriptor: Option<String>,

    /// Force every color opaque.
    #[clap(long)]
    opaque: bool,

    /// How many ticks to run animated colors for.
    #[clap(long, default_value_t = 200)]
    ticks: u32,

    /// Print every n-th animation frame.
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    every: u32,

    /// A `name,hexValue` file replacing the bundled web colors.
    #[clap(long, value_hint = ValueHint::FilePath, env = "PRISM_WEB_PALETTE")]
    palette: Option<PathBuf>,

    /// Describe the accepted formats and exit.
    #[clap(long)]
    formats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let cli = Cli::parse();
    if cli.formats {
        for doc in format_documentation(DocContext::Value) {
            println!("{doc}\n");
        }
        return Ok(());
    }
    let Some(text) = cli.descriptor.as_deref() else {
        bail!("no descriptor given");
    };

    let palettes = match &cli.palette {
        Some(path) => PaletteRegistry::from_web_file(path).with_context(|| format!("loading {}", path.display()))?,
        None => PaletteRegistry::new(),
    };
    let descriptor = if text.trim_start().starts_with('[') {
        serde_json::from_str(text).context("invalid JSON sequence")?
    } else {
        ColorDescriptor::from(text)
    };

    let animations = AnimationRegistry::new();
    let alpha_policy = if cli.opaque { AlphaPolicy::ForceOpaque } else { AlphaPolicy::Allow };
    let parser = ColorParser::new(&palettes).with_alpha_policy(alpha_policy).with_animations(&animations);
    let Some(color) = parser.parse(&descriptor) else {
        bail!("'{text}' is not a color");
    };

    let mut stdout = io::stdout().lock();
    match &color {
        ResolvedColor::Animated(animated) => {
            writeln!(stdout, "{animated}")?;
            for tick in 0..=cli.ticks {
                if tick % cli.every == 0 {
                    let label = format!("tick {tick:>4}  stop {}  {:.2}s", animated.current_index(), animated.elapsed());
                    print_swatch(&mut stdout, animated.value(), &label)?;
                }
                animations.tick(0.0);
            }
        }
        other => {
            let label = other.name().map(str::to_string).unwrap_or_default();
            print_swatch(&mut stdout, other.value(), &label)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn print_swatch<W: Write>(out: &mut W, color: Color, label: &str) -> io::Result<()> {
    let swatch = crossterm::style::Color::Rgb { r: color.red(), g: color.green(), b: color.blue() };
    out.queue(SetBackgroundColor(swatch))?;
    out.queue(Print("      "))?;
    out.queue(ResetColor)?;
    out.queue(Print(format!(" {color} {label}\n")))?;
    Ok(())
}
