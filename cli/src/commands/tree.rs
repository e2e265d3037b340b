//! `qd3 virtual` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::Result;
use qd3::RenderPass;

use crate::source::SourceArgs;

/// Arguments for the virtual command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    source: SourceArgs,

    /// Print the virtual elements as JSON instead of markup.
    #[arg(long)]
    json: bool,
}

/// Runs the virtual renderer and prints its output.
pub fn run(args: Args) -> Result<()> {
    let element = RenderPass::from(args.source.load()?.tree).into_virtual();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&element)?);
    } else {
        println!("{}", element.to_markup()?);
    }
    Ok(())
}
