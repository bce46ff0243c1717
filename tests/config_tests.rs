// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use camtest::cli::CaptureArgs;
use camtest::config::fourcc_code;
use camtest::{CaptureConfig, ConfigError};
use clap::Parser;

fn config_from(argv: &[&str]) -> Result<CaptureConfig, ConfigError> {
    let args = CaptureArgs::try_parse_from(argv).expect("arguments should parse");
    CaptureConfig::from_args(&args)
}

#[test]
fn test_config_default() {
    let config = config_from(&["camtest"]).unwrap();

    assert_eq!(config.device, 0);
    assert_eq!(config.width, 640);
    assert_eq!(config.height, 480);
    assert_eq!(config.fps, 30);
    assert_eq!(config.fourcc.to_string(), "MJPG");
    assert_eq!(config.device_path(), "/dev/video0");
}

#[test]
fn test_config_explicit_values() {
    let config = config_from(&[
        "camtest", "-d", "2", "-w", "1280", "-H", "720", "-f", "YUYV", "-s", "60",
    ])
    .unwrap();

    assert_eq!(config.device, 2);
    assert_eq!((config.width, config.height, config.fps), (1280, 720, 60));
    assert_eq!(fourcc_code(&config.fourcc), 0x56595559);
}

#[test]
fn test_config_device_path() {
    let config = config_from(&["camtest", "--device", "/dev/video3"]).unwrap();
    assert_eq!(config.device, 3);
    assert_eq!(config.device_path(), "/dev/video3");
}

#[test]
fn test_resolution_overrides_size_and_fps() {
    let config = config_from(&[
        "camtest",
        "--width",
        "320",
        "--fps",
        "15",
        "--resolution",
        "1920x1080@60",
    ])
    .unwrap();

    assert_eq!((config.width, config.height, config.fps), (1920, 1080, 60));
}

#[test]
fn test_invalid_resolution_is_rejected() {
    let err = config_from(&["camtest", "-r", "1920*1080@60"]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidResolution("1920*1080@60".into()));
    assert_eq!(
        err.to_string(),
        "Invalid resolution format. Use WIDTHxHEIGHT@FPS (e.g., 640x480@60)."
    );
}

#[test]
fn test_invalid_format_is_rejected() {
    let err = config_from(&["camtest", "-f", "MJPEG"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid format: MJPEG");
}

#[test]
fn test_invalid_device_is_rejected() {
    let err = config_from(&["camtest", "-d", "/dev/media0"]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidDevice("/dev/media0".into()));
}
