//! CLI entrypoint: load the project settings once, synthesize the stack, and
//! write it for the provisioning engine to plan and apply.

use anyhow::{Context, Result};
use clap::Parser;
use firebase_stack::{config, logging, FirebaseStack};
use std::path::PathBuf;
use tracing::info;

/// Synthesize the Google Cloud + Firebase stack from a project.yaml.
#[derive(Debug, Parser)]
#[command(name = "firebase-stack", version, about)]
struct Cli {
    /// Directory scanned for the project settings document.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Directory the synthesized stack is written under.
    #[arg(long, default_value = "cdktf.out")]
    out: PathBuf,

    /// Stack name, used as the output subdirectory.
    #[arg(long, default_value = "cdktf")]
    stack: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(".");
    info!("starting stack synthesis");

    let settings = config::load_project_info(&cli.dir);
    let stack = FirebaseStack::new(settings);

    let doc = stack.synth().context("stack synthesis failed")?;
    let path = doc
        .write_to(&cli.out, &cli.stack)
        .context("failed to write synthesized stack")?;

    println!("Synthesized stack written to {}", path.display());
    println!(
        "Outputs: {}",
        doc.output_names().collect::<Vec<_>>().join(", ")
    );

    Ok(())
}
