// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for command-line parsing

use camtest::cli::{CaptureArgs, exit_code, exit_code_for, run};
use camtest::{
    AppError, AppResult, BenchmarkOutcome, BenchmarkSummary, CameraError, ConfigError,
};
use clap::Parser;
use clap::error::ErrorKind;
use std::io;

#[test]
fn test_help_first_wins() {
    // Anything after --help is ignored, even garbage
    let err = CaptureArgs::try_parse_from(["camtest", "--help", "-w", "abc", "--bogus"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert_eq!(exit_code_for(&err), 0);
}

#[test]
fn test_short_h_is_help() {
    let err = CaptureArgs::try_parse_from(["camtest", "-h", "720"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    assert_eq!(exit_code_for(&err), 0);
}

#[test]
fn test_help_lists_options() {
    let err = CaptureArgs::try_parse_from(["camtest", "--help"]).unwrap_err();
    let help = err.to_string();
    for option in [
        "--device",
        "--width",
        "--height",
        "--format",
        "--resolution",
        "--fps",
    ] {
        assert!(help.contains(option), "help should mention {option}");
    }
}

#[test]
fn test_height_short_flag() {
    let args = CaptureArgs::try_parse_from(["camtest", "-H", "720"]).unwrap();
    assert_eq!(args.height, 720);

    let args = CaptureArgs::try_parse_from(["camtest", "--height", "1080"]).unwrap();
    assert_eq!(args.height, 1080);
}

#[test]
fn test_missing_value_is_an_error() {
    for flag in ["-d", "--width", "-H", "--format", "-r", "--fps"] {
        let err = CaptureArgs::try_parse_from(["camtest", flag]).unwrap_err();
        assert_eq!(exit_code_for(&err), 1, "{flag} without a value");
    }
}

#[test]
fn test_non_numeric_size_is_an_error() {
    let err = CaptureArgs::try_parse_from(["camtest", "--width", "wide"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert_eq!(exit_code_for(&err), 1);

    let err = CaptureArgs::try_parse_from(["camtest", "--fps", "0"]).unwrap_err();
    assert_eq!(exit_code_for(&err), 1);
}

#[test]
fn test_unknown_option_is_an_error() {
    let err = CaptureArgs::try_parse_from(["camtest", "--bogus"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    assert_eq!(exit_code_for(&err), 1);
}

#[test]
fn test_resolution_is_kept_raw() {
    // Validation happens when the configuration is built
    let args = CaptureArgs::try_parse_from(["camtest", "-r", "not-a-resolution"]).unwrap();
    assert_eq!(args.resolution.as_deref(), Some("not-a-resolution"));
}

// Input errors are returned before any device is opened
fn run_args(argv: &[&str]) -> AppResult<BenchmarkOutcome> {
    let args = CaptureArgs::try_parse_from(argv).expect("arguments should parse");
    run(&args)
}

#[test]
fn test_invalid_resolution_exits_with_failure() {
    let result = run_args(&["camtest", "-r", "640x480"]);
    assert!(matches!(result, Err(AppError::Config(ConfigError::InvalidResolution(_)))));
    assert_eq!(exit_code(&result), 1);
}

#[test]
fn test_invalid_format_exits_with_failure() {
    let result = run_args(&["camtest", "-f", "MJPEG"]);
    assert!(matches!(result, Err(AppError::Config(ConfigError::InvalidFormat(_)))));
    assert_eq!(exit_code(&result), 1);
}

#[test]
fn test_open_failure_exits_with_failure() {
    let result: AppResult<BenchmarkOutcome> = Err(AppError::from(CameraError::Open {
        device: 7,
        source: io::Error::from(io::ErrorKind::NotFound),
    }));
    assert_eq!(exit_code(&result), 1);
}

#[test]
fn test_capture_failure_exits_with_success() {
    let result: AppResult<BenchmarkOutcome> = Ok(BenchmarkOutcome::Failed {
        total_frames: 42,
        error: CameraError::Read(io::Error::from(io::ErrorKind::BrokenPipe)),
    });
    assert_eq!(exit_code(&result), 0);
}

#[test]
fn test_stream_start_failure_exits_with_success() {
    let outcome = BenchmarkOutcome::not_started(CameraError::Stream(io::Error::from(
        io::ErrorKind::InvalidInput,
    )));
    assert!(matches!(
        outcome,
        BenchmarkOutcome::Failed { total_frames: 0, error: CameraError::Stream(_) }
    ));
    assert_eq!(exit_code(&Ok(outcome)), 0);
}

#[test]
fn test_completed_run_exits_with_success() {
    let result: AppResult<BenchmarkOutcome> = Ok(BenchmarkOutcome::Completed(BenchmarkSummary {
        total_frames: 150,
        elapsed_secs: 5,
        average_fps: 30.0,
    }));
    assert_eq!(exit_code(&result), 0);
}
