// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the camera diagnostic

use std::io;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Top-level error; every variant ends the run with a non-zero exit code
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Camera(#[from] CameraError),

    /// Writing the report to stdout failed
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Errors in user input, detected before any device is opened
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Not of the form `WIDTHxHEIGHT@FPS`
    #[error("Invalid resolution format. Use WIDTHxHEIGHT@FPS (e.g., 640x480@60).")]
    InvalidResolution(String),

    /// Not exactly four printable ASCII characters
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Neither a bare index nor a `/dev/videoN` path
    #[error("Invalid camera device: {0}")]
    InvalidDevice(String),
}

/// Camera-specific errors
#[derive(thiserror::Error, Debug)]
pub enum CameraError {
    #[error("Failed to open camera device {device}")]
    Open {
        device: u32,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start capture stream: {0}")]
    Stream(#[source] io::Error),

    #[error("Frame capture failed: {0}")]
    Read(#[source] io::Error),
}
