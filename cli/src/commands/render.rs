//! `qd3 render` command implementation.

use clap::Args as ClapArgs;
use color_eyre::eyre::{Result, WrapErr};
use qd3::RenderPass;
use qd3_web::MemoryDocument;

use crate::manifest::Manifest;
use crate::source::SourceArgs;

/// Arguments for the render command.
#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    source: SourceArgs,
}

/// Builds the host document, applies the tree to it and prints the document.
pub fn run(args: Args, manifest: &Manifest) -> Result<()> {
    let source = args.source.load()?;
    let document = render(source.tree, source.scene, manifest)?;
    println!("{}", document.to_markup()?);
    Ok(())
}

fn render(
    tree: qd3_core::Sel,
    scene: Option<qd3::scenes::Scene>,
    manifest: &Manifest,
) -> Result<MemoryDocument> {
    let mut document = MemoryDocument::new();
    match scene {
        Some(scene) if !manifest.declares_host() => {
            scene.prepare_host(&mut document)?;
        }
        _ => manifest.build_host(&mut document)?,
    }
    tracing::debug!(elements = document.len(), "host document ready");

    RenderPass::from(tree)
        .mount(&mut document)
        .wrap_err("Failed to render into the host document")?;
    Ok(document)
}
