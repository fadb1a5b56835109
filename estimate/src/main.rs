use std::path::PathBuf;

use clap::Parser;
use estimate::{render_with_options, EstimateRecord, RenderError, RenderOptions, DEFAULT_LOGO};

/// Write the Chardonnay Hills estimate to a PDF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Output file [default: Estimate_<number>.pdf]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logo image (PNG or JPEG); skipped if the file is missing
    #[arg(long, default_value = DEFAULT_LOGO)]
    logo: PathBuf,

    /// Leave content streams uncompressed
    #[arg(long)]
    no_compress: bool,
}

fn main() -> Result<(), RenderError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let record = EstimateRecord::sample();
    let mut options = RenderOptions::for_record(&record)
        .with_logo(cli.logo)
        .with_compression(!cli.no_compress);
    if let Some(output) = cli.output {
        options = options.with_output(output);
    }

    let summary = render_with_options(&record, &options)?;
    println!("PDF created: {}", summary.path.display());
    Ok(())
}
