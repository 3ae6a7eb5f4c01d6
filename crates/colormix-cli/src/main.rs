// ABOUTME: Command line entry point for colormix.
// ABOUTME: Gathers colors from arguments and colors.txt, then prints the blend.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use colormix_core::{parse_color, Blend, Color, Mode};

/// Supplementary color list read from the working directory.
const COLOR_FILE: &str = "colors.txt";

/// Combine colors into a single result under a selectable strategy.
#[derive(Debug, Parser)]
#[command(name = "colormix", version, about)]
struct Cli {
    /// Aggregation strategy: mix, lowest, highest, or mix-saturate
    #[arg(short = 'm', long = "mode", value_name = "MODE")]
    mode: Option<String>,

    /// Colors as lowercase hex (f0a, ff8100, ff8100ff) or decimal r,g,b,a
    #[arg(value_name = "COLOR")]
    colors: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mode = select_mode(cli.mode.as_deref());

    let mut colors = Vec::new();
    for word in &cli.colors {
        match parse_color(word) {
            Ok(color) => colors.push(color),
            Err(err) => bail!("Unrecognized value {word:?}: {err}"),
        }
    }

    colors.extend(read_color_file(Path::new(COLOR_FILE))?);

    if colors.is_empty() {
        bail!("No colors provided!");
    }

    print_blend(&mode.apply(&colors));

    Ok(())
}

/// Resolve the requested mode label, keeping the default on unknown labels.
fn select_mode(label: Option<&str>) -> Mode {
    match label {
        None => Mode::default(),
        Some(label) => Mode::from_label(label).unwrap_or_else(|| {
            tracing::warn!("Unrecognized mode: {label:?}");
            Mode::default()
        }),
    }
}

/// Read colors from the supplementary file, skipping malformed lines.
fn read_color_file(path: &Path) -> Result<Vec<Color>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => bail!("Couldn't open {}: {err}", path.display()),
    };

    let mut colors = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => bail!("Couldn't read {}: {err}", path.display()),
        };

        match parse_color(&line) {
            Ok(color) => colors.push(color),
            Err(_) => tracing::debug!("Skipping malformed line: {line:?}"),
        }
    }

    Ok(colors)
}

/// Print the fixed eight-line report for a blend result.
fn print_blend(blend: &Blend) {
    println!("RED: {}", blend.color.red);
    println!("GREEN: {}", blend.color.green);
    println!("BLUE: {}", blend.color.blue);
    println!("ALPHA: {}", blend.color.alpha);
    println!("HEX: #{:x}", blend.color.to_bits());
    println!("HUE: {:.2}", blend.hsl.hue);
    println!("SATURATION: {:.2}", blend.hsl.sat);
    println!("LIGHTNESS: {:.2}", blend.hsl.light);
}
