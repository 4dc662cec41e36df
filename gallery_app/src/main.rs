use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plotters::prelude::*;

use signals::catalog;
use signals::pipeline;
use signals::sampling::SamplingConfig;

#[derive(Debug, Parser)]
struct Args {
    /// Where to write the rendered figure
    #[arg(short, long, default_value = "fourier_transforms.png")]
    output: PathBuf,
    /// Figure width in pixels
    #[arg(long, default_value_t = 1920)]
    width: u32,
    /// Figure height in pixels
    #[arg(long, default_value_t = 1080)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SamplingConfig::default();
    let cells = pipeline::run(&config)?;

    let root = BitMapBackend::new(&args.output, (args.width, args.height)).into_drawing_area();
    root.fill(&WHITE)?;
    charts::render_gallery(&root, 2, catalog::catalog().len(), &cells)?;
    root.present()?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}
