//! asciihtml CLI - Convert an image into a colored ASCII art HTML page

use asciihtml::{html, Converter, SampleSize, SourceImage};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "asciihtml", about = "Convert an image to colored ASCII art in HTML")]
struct Args {
    /// Block edge length in pixels; values <= 0 keep the default of 15
    #[arg(allow_negative_numbers = true)]
    sample_size: Option<i64>,
    /// Input image file
    #[arg(short, long, default_value = "input.png")]
    input: PathBuf,
    /// Output HTML file, overwritten on each run
    #[arg(short, long, default_value = "embedded.html")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> asciihtml::Result<()> {
    let sample_size = args.sample_size.map_or(SampleSize::DEFAULT, SampleSize::from_arg);
    log::debug!("sample size {}", sample_size.get());

    let image = SourceImage::open(&args.input)?;
    let grid = Converter::new().with_sample_size(sample_size).convert(&image);
    drop(image);

    html::render_to_file(&grid, &args.output)
}
