// SPDX-License-Identifier: GPL-3.0-only

//! Command-line interface
//!
//! Argument definitions and the top-level benchmark command. `-h` is
//! help; the height option uses `-H`.

use crate::backends::camera::V4l2Session;
use crate::benchmark::{BenchmarkOutcome, run_benchmark};
use crate::config::CaptureConfig;
use crate::constants::{
    DEFAULT_DEVICE, DEFAULT_FORMAT, DEFAULT_FPS, DEFAULT_HEIGHT, DEFAULT_WIDTH, EXIT_FAILURE,
};
use crate::errors::AppResult;
use clap::Parser;
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "camtest")]
#[command(about = "Measure the frame rate a V4L2 camera delivers")]
#[command(version = env!("GIT_VERSION"))]
pub struct CaptureArgs {
    /// Camera device: index or /dev/videoN path
    #[arg(short, long, value_name = "DEV", default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// Frame width
    #[arg(
        short,
        long,
        value_name = "WIDTH",
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,

    /// Frame height
    #[arg(
        short = 'H',
        long,
        value_name = "HEIGHT",
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: u32,

    /// Pixel format (e.g., MJPG, YUYV)
    #[arg(short, long, value_name = "FOURCC", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Resolution and FPS as WIDTHxHEIGHT@FPS (e.g., 640x480@60); overrides
    /// --width, --height and --fps
    #[arg(short, long, value_name = "RES")]
    pub resolution: Option<String>,

    /// Target frames per second
    #[arg(
        short = 's',
        long,
        value_name = "FPS",
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fps: u32,
}

/// Parse the process arguments, exiting on help, version or usage errors
///
/// Help and version exit with 0; every usage error exits with
/// [`EXIT_FAILURE`] like the other startup failures.
pub fn parse_or_exit() -> CaptureArgs {
    match CaptureArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Nothing useful to do if stdout/stderr are gone
            let _ = err.print();
            std::process::exit(exit_code_for(&err));
        }
    }
}

/// Exit code for a clap parse result that did not produce arguments
pub fn exit_code_for(err: &clap::Error) -> i32 {
    if err.use_stderr() { EXIT_FAILURE } else { 0 }
}

/// Process exit code for the result of [`run`]
///
/// A run cut short by a capture failure still exits with 0; its partial
/// report is already printed. Input and device-open errors exit with
/// [`EXIT_FAILURE`].
pub fn exit_code(result: &AppResult<BenchmarkOutcome>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => EXIT_FAILURE as u8,
    }
}

/// Validate the arguments, open the camera and run the benchmark.
///
/// Input errors are returned before the device is opened. Once the device
/// is open, failing to start or read the stream ends the run with
/// [`BenchmarkOutcome::Failed`].
pub fn run(args: &CaptureArgs) -> AppResult<BenchmarkOutcome> {
    let config = CaptureConfig::from_args(args)?;
    debug!(?config, "Capture configuration");

    let session = V4l2Session::open(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Testing camera: {}x{} @{}fps, format={}",
        config.width, config.height, config.fps, config.fourcc
    )?;

    match session.stream() {
        Ok(mut stream) => run_benchmark(&mut stream, Instant::now, &mut out),
        Err(error) => Ok(BenchmarkOutcome::not_started(error)),
    }
}
