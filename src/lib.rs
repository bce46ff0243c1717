// SPDX-License-Identifier: GPL-3.0-only

//! camtest - frame rate diagnostic for V4L2 cameras
//!
//! Opens a capture device, requests a resolution, pixel format and frame
//! rate, then counts the frames it delivers for a fixed time.
//!
//! # Architecture
//!
//! - [`cli`]: argument definitions and the benchmark command
//! - [`config`]: validation of arguments into a [`CaptureConfig`]
//! - [`backends`]: the [`FrameSource`] trait and the V4L2 capture session
//! - [`benchmark`]: frame counting state machine and report output
//! - [`errors`]: error types
//!
//! # Example
//!
//! ```text
//! camtest --device /dev/video2 --resolution 1280x720@60 --format YUYV
//! ```

pub mod backends;
pub mod benchmark;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export commonly used types
pub use backends::camera::{FrameInfo, FrameSource};
pub use benchmark::{BenchmarkOutcome, BenchmarkState, BenchmarkSummary};
pub use config::CaptureConfig;
pub use errors::{AppError, AppResult, CameraError, ConfigError};
