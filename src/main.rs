use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;
use imgconv::{ConvertRequest, DEFAULT_JPEG_QUALITY, Limits};

#[derive(FromArgs)]
/// Convert an image between JPEG, PPM and BMP; formats come from the file extensions.
struct Args {
    /// source image (.jpg, .jpeg, .ppm or .bmp)
    #[argh(positional)]
    input: PathBuf,

    /// destination image (.jpg, .jpeg, .ppm or .bmp)
    #[argh(positional)]
    output: PathBuf,

    /// JPEG quality 1-100 when writing .jpg/.jpeg
    #[argh(option, default = "DEFAULT_JPEG_QUALITY")]
    quality: u8,

    /// refuse inputs with more than this many pixels
    #[argh(option)]
    max_pixels: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Args = argh::from_env();

    let limits = Limits {
        max_pixels: args.max_pixels,
        ..Default::default()
    };
    let result = ConvertRequest::new(&args.input, &args.output)
        .with_limits(&limits)
        .with_jpeg_quality(args.quality)
        .run();

    match result {
        Ok(_) => {
            println!("Successfully converted");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
