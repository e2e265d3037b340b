//! `qd3` CLI entry point.

mod commands;
mod manifest;
mod source;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::{config::HookBuilder, eyre::Result};
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter, fmt::format::FmtSpan};

use commands::{ir, render, tree};
use manifest::{MANIFEST_FILE, Manifest};

/// Build qd3 scenes and run them through either renderer.
#[derive(Parser, Debug)]
#[command(name = "qd3", version, about, long_about = None)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the project manifest.
    #[arg(long, global = true, default_value = MANIFEST_FILE)]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the frozen selection tree as JSON.
    Ir(ir::Args),
    /// Render through the virtual renderer.
    Virtual(tree::Args),
    /// Render into a host document and print it.
    Render(render::Args),
}

fn main() -> Result<()> {
    HookBuilder::default()
        .display_env_section(false)
        .issue_url("https://github.com/water-rs/qd3/issues/new")
        .panic_section("It looks like qd3 encountered a bug")
        .install()?;

    let cli = Cli::parse();
    let manifest = Manifest::open(&cli.manifest)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(raise(manifest.log_level()?, cli.verbose))
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Ir(args) => ir::run(args),
        Commands::Virtual(args) => tree::run(args),
        Commands::Render(args) => render::run(args, &manifest),
    }
}

/// Raises `base` by one level per `-v`, never lowering it.
fn raise(base: LevelFilter, verbose: u8) -> LevelFilter {
    let requested = match verbose {
        0 => base,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    requested.max(base)
}
