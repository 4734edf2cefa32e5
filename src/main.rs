//! tsxdoc — generate component READMEs from `.jsx`/`.tsx` source files.
//!
//! Walks a directory tree, runs an external type-aware docgen command on each
//! component file, and writes the rendered Markdown as `README.md` next to
//! the source. One pass, synchronous, keeps going past per-file failures.

mod config;
mod extract;
mod model;
mod render;
mod walker;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tsxdoc",
    about = "Generate per-component README.md files from .jsx/.tsx sources"
)]
struct Cli {
    /// Root directory to scan for component files
    directory: PathBuf,

    /// External docgen command emitting a JSON array of component docs
    #[arg(long, default_value = "react-docgen-typescript")]
    docgen: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Missing tsconfig is fine (defaults apply); a malformed one is fatal.
    let ts_config = config::TsConfig::resolve(&cli.directory)?;
    let extractor = extract::DocgenCommand::new(&cli.docgen);

    walker::process_tree(&cli.directory, &ts_config, &extractor);
    Ok(())
}
