//! Astviz CLI
//!
//! Reads a parse tree in S-expression form from stdin and renders it.
//!
//! ```text
//! compiler --tree program.cps | astviz --format svg -o out/
//! ```
//!
//! On success the artifact path is printed on stdout. Any failure is printed
//! on stderr as `[ERROR] <message>` and the process exits with status 1.

use anyhow::Context;
use astviz::{pipeline, OutputFormat, RenderConfig};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astviz")]
#[command(about = "Render an S-expression parse tree read from stdin as a Graphviz diagram")]
#[command(version)]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Artifact format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Directory the artifact is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Artifact file name, without extension
    #[arg(short, long)]
    name: Option<String>,

    /// Graphviz rank direction (TB, LR, BT, RL)
    #[arg(long)]
    rankdir: Option<String>,

    /// Layout executable to run for image formats
    #[arg(long)]
    dot_binary: Option<PathBuf>,

    /// Keep the intermediate .dot file next to the image
    #[arg(long)]
    keep_dot: bool,

    /// End-of-stream marker stripped from the input
    #[arg(long)]
    sentinel: Option<String>,

    /// Print the parsed tree back as S-expression text instead of rendering
    #[arg(long)]
    print_tree: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn render_config(&self) -> anyhow::Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RenderConfig::default(),
        };

        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(name) = &self.name {
            config.output_stem = name.clone();
        }
        if let Some(rankdir) = &self.rankdir {
            config.rankdir = rankdir.clone();
        }
        if let Some(binary) = &self.dot_binary {
            config.dot_binary = binary.clone();
        }
        if let Some(sentinel) = &self.sentinel {
            config.sentinel = sentinel.clone();
        }
        if self.keep_dot {
            config.cleanup = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.render_config()?;

    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("reading stdin")?;
    // Undecodable bytes become U+FFFD inside whatever symbol holds them
    let text = String::from_utf8_lossy(&bytes);

    if cli.print_tree {
        let root = pipeline::parse_tree(&text, &config.sentinel)?;
        println!("{}", root);
        return Ok(());
    }

    let path = pipeline::run(&text, &config)?;
    println!("{}", path.display());
    Ok(())
}

/// `--verbose` wins over `RUST_LOG`; otherwise `RUST_LOG` applies, defaulting to warnings
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            ExitCode::FAILURE
        }
    }
}
