//! `qd3 ir` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::Result;

use crate::source::SourceArgs;

/// Arguments for the ir command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    source: SourceArgs,

    /// Print the tree on a single line.
    #[arg(long)]
    compact: bool,
}

/// Prints the frozen tree as JSON.
pub fn run(args: Args) -> Result<()> {
    let tree = args.source.load()?.tree;
    let json = if args.compact {
        serde_json::to_string(&tree)?
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    println!("{json}");
    Ok(())
}
