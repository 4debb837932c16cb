//! cskin-preview entry point.
//!
//! One-shot offline renderer: given a skin package (a `.cskin` archive
//! or an extracted directory), a theme, and a keyboard name, write an
//! SVG approximation of that keyboard to a file or stdout.
//!
//! Usage:
//!   cskin-preview skin.cskin light pinyinPortrait
//!   cskin-preview ./extracted dark alphabet --ascii --out preview.svg

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use cskin_render::style::ConditionContext;
use cskin_render::{SkinDocument, layout, svg};
use cskin_source::open_source;
use cskin_types::config::LayoutConfig;

#[derive(Parser)]
#[command(name = "cskin-preview")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Preview a keyboard skin layout as SVG (approximate)", long_about = None)]
struct Cli {
    /// Path to a .cskin archive or an extracted skin directory
    source: PathBuf,

    /// Skin theme to preview
    #[arg(value_enum)]
    theme: Theme,

    /// Keyboard name, e.g. pinyinPortrait
    keyboard: String,

    /// Skin root folder name (auto-detected when omitted)
    #[arg(long)]
    root: Option<String>,

    /// Preview with ascii mode active
    #[arg(long)]
    ascii: bool,

    /// Simulated $returnKeyType value
    #[arg(long)]
    return_key_type: Option<i64>,

    /// Output SVG path (default: stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let source = open_source(&cli.source, cli.root.as_deref())
        .with_context(|| format!("opening skin source {}", cli.source.display()))?;
    log::info!("Skin root: {}", source.root());

    // The per-keyboard files carry a .yaml extension but hold JSON.
    let rel = format!("{}/{}.yaml", cli.theme.as_str(), cli.keyboard);
    let raw = source
        .read_text(&rel)
        .with_context(|| format!("reading {rel}"))?;
    let doc = SkinDocument::parse(&raw).with_context(|| format!("parsing {rel}"))?;

    let config = LayoutConfig::default();
    let keyboard = layout::compute(&doc, &config).with_context(|| format!("laying out {rel}"))?;
    log::info!(
        "Rendered {} buttons on a {}x{} canvas",
        keyboard.buttons.len(),
        keyboard.width,
        keyboard.height
    );

    let ctx = ConditionContext {
        ascii_mode: cli.ascii,
        return_key_type: cli.return_key_type,
    };
    let primitives = svg::render(&doc, &keyboard, &ctx);
    let markup = svg::to_svg(&primitives, keyboard.width, keyboard.height);

    match &cli.out {
        Some(path) => {
            std::fs::write(path, &markup)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            std::io::stdout().write_all(markup.as_bytes())?;
        }
    }
    Ok(())
}
