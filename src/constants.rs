// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Device index used when `--device` is not given
pub const DEFAULT_DEVICE: &str = "0";

/// Capture width used when neither `--width` nor `--resolution` is given
pub const DEFAULT_WIDTH: u32 = 640;

/// Capture height used when neither `--height` nor `--resolution` is given
pub const DEFAULT_HEIGHT: u32 = 480;

/// Pixel format requested when `--format` is not given
pub const DEFAULT_FORMAT: &str = "MJPG";

/// Target frame rate used when neither `--fps` nor `--resolution` is given
pub const DEFAULT_FPS: u32 = 30;

/// Device node prefix accepted in place of a bare index
pub const VIDEO_DEVICE_PREFIX: &str = "/dev/video";

/// How long a benchmark run captures frames
pub const TEST_DURATION: Duration = Duration::from_secs(5);

/// Cadence of the "Current FPS" report lines
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Number of memory-mapped buffers queued with the driver
pub const MMAP_BUFFER_COUNT: u32 = 4;

/// Process exit code for every startup failure
pub const EXIT_FAILURE: i32 = 1;
