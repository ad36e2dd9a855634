//! otio-svg CLI Tool
//!
//! Command-line interface for rendering JSON timelines as SVG.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use otio_core::{Composable, Item, Timeline};
use otio_svg::{Encoder, EncoderConfig};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "otio-svg")]
#[command(about = "Render timelines as SVG diagrams")]
#[command(version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a timeline to SVG
    Render {
        /// Input timeline JSON path
        input: PathBuf,

        /// Output SVG path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long, default_value_t = otio_svg::theme::DEFAULT_WIDTH)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = otio_svg::theme::DEFAULT_HEIGHT)]
        height: u32,
    },

    /// Show a summary of a timeline
    Info {
        /// Input timeline JSON path
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Render {
            input,
            output,
            width,
            height,
        } => render_timeline(&input, output.as_deref(), EncoderConfig { width, height })?,

        Commands::Info { input } => print_info(&load_timeline(&input)?),
    }

    Ok(())
}

fn load_timeline(input: &Path) -> Result<Timeline> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open timeline file {}", input.display()))?;
    Timeline::from_json_reader(BufReader::new(file)).context("Failed to parse timeline JSON")
}

fn render_timeline(input: &Path, output: Option<&Path>, config: EncoderConfig) -> Result<()> {
    let timeline = load_timeline(input)?;
    log::info!(
        "Rendering '{}' at {}x{}",
        timeline.name(),
        config.width,
        config.height
    );

    match output {
        Some(path) => {
            let file = File::create(path).context("Failed to create output file")?;
            encode_to(BufWriter::new(file), &timeline, config)?;
            log::info!("Wrote {}", path.display());
        }
        None => encode_to(io::stdout().lock(), &timeline, config)?,
    }

    Ok(())
}

fn encode_to<W: Write>(writer: W, timeline: &Timeline, config: EncoderConfig) -> Result<()> {
    let mut encoder = Encoder::with_config(writer, config);
    encoder
        .encode(timeline)
        .context("Failed to render timeline")?;
    encoder
        .into_inner()
        .flush()
        .context("Failed to flush output")?;
    Ok(())
}

fn print_info(timeline: &Timeline) {
    println!("\n=== Timeline Information ===");
    println!("Name: {}", timeline.name());
    match timeline.duration() {
        Ok(duration) => println!("Duration: {:.2} seconds", duration.to_seconds()),
        Err(err) => println!("Duration: unavailable ({err})"),
    }

    let Some(stack) = timeline.tracks() else {
        println!("No track stack");
        return;
    };

    println!("\n=== Tracks ===");
    for (i, child) in stack.children().iter().enumerate() {
        let track = match child {
            Composable::Track(track) => track,
            Composable::Stack(nested) => {
                println!("  [{}] nested stack '{}' (not rendered)", i, nested.name);
                continue;
            }
        };

        println!(
            "  [{}] {} track '{}', {} items",
            i,
            track.kind(),
            track.name(),
            track.children().len()
        );
        for item in track.children() {
            let duration = item
                .duration()
                .map(|d| format!("{:.2}s", d.to_seconds()))
                .unwrap_or_else(|_| "?".to_string());
            let hidden = match item {
                Item::Transition(_) => "",
                _ if item.visible() => "",
                _ => " (hidden)",
            };
            println!("      {} '{}' {}{}", item.kind(), item.name(), duration, hidden);
        }
    }
}
