//! CLI tool that writes the GigLift Brand Ambassador Plan deck.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_core::Deck;
use deck_plan::{BACKGROUND_FILE_NAME, OUTPUT_FILE_NAME};
use deck_pptx::{PptxReader, PptxWriter, SlideOutline};
use std::path::{Path, PathBuf};

/// Generate the Brand Ambassador Program presentation.
#[derive(Parser, Debug)]
#[command(name = "ambassador-deck")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    build: BuildArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the deck (the default when no subcommand is given)
    Build(BuildArgs),

    /// Print the slide count and text of a .pptx file
    Inspect {
        /// PowerPoint file to read
        input: PathBuf,
    },
}

#[derive(clap::Args, Debug, Clone)]
struct BuildArgs {
    /// Output file (default: docs/GigLift_Brand_Ambassador_Plan.pptx in the workspace the
    /// binary was built from, or next to the executable when that source tree is gone)
    #[arg(short, long, env = "AMBASSADOR_DECK_OUTPUT")]
    output: Option<PathBuf>,

    /// Background picture drawn behind every slide; skipped if unreadable
    #[arg(short, long, env = "AMBASSADOR_DECK_BACKGROUND")]
    background: Option<PathBuf>,

    /// Print a JSON outline of the deck after writing it
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match args.command {
        Some(Command::Build(build)) => run_build(&build),
        Some(Command::Inspect { input }) => run_inspect(&input),
        None => run_build(&args.build),
    }
}

/// Build the deck and write it out.
fn run_build(args: &BuildArgs) -> Result<()> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| workspace_root().join("docs").join(OUTPUT_FILE_NAME));
    let background = args
        .background
        .clone()
        .unwrap_or_else(|| workspace_root().join("assets").join(BACKGROUND_FILE_NAME));

    log::debug!("Background candidate: {}", background.display());
    let deck = deck_plan::build_deck(Some(&background));

    PptxWriter::new()
        .save(&deck, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if args.json {
        println!("{}", deck_outline(&deck)?);
    }

    println!("✅ Saved: {}", output.display());
    println!("   {} slides", deck.slide_count());
    Ok(())
}

/// Print what a written deck contains.
fn run_inspect(input: &Path) -> Result<()> {
    let slides = PptxReader::new()
        .read_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    print!("{}", format_inspection(input, &slides));
    Ok(())
}

/// JSON outline of a deck, as printed by `--json`.
fn deck_outline(deck: &Deck) -> Result<String> {
    serde_json::to_string_pretty(deck).context("Failed to serialize deck")
}

fn format_inspection(input: &Path, slides: &[SlideOutline]) -> String {
    let mut out = format!("{}: {} slides\n", input.display(), slides.len());
    for slide in slides {
        out.push_str(&format!(
            "\nSlide {} ({} pictures, background {})\n",
            slide.number,
            slide.pictures,
            slide.background.as_deref().unwrap_or("none")
        ));
        for line in &slide.lines {
            out.push_str(&format!("  {}\n", line));
        }
    }
    out
}

/// Directory the deck is written relative to: the workspace this binary was
/// built from, or the executable's directory once that tree no longer exists.
fn workspace_root() -> PathBuf {
    base_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
}

fn base_dir(manifest_dir: &Path) -> PathBuf {
    if manifest_dir.is_dir() {
        if let Some(root) = manifest_dir.ancestors().nth(2) {
            return root.to_path_buf();
        }
    }
    log::debug!("{} is gone, using the executable's directory", manifest_dir.display());
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
