// SPDX-License-Identifier: GPL-3.0-only

//! Camera backend abstraction
//!
//! ```text
//! ┌─────────────────────┐
//! │   Benchmark loop    │
//! └──────────┬──────────┘
//!            │ read_frame()
//!            ▼
//! ┌─────────────────────┐
//! │  FrameSource trait  │
//! └──────────┬──────────┘
//!            │
//!            ▼
//!      ┌───────────┐
//!      │ V4l2Stream│  ← mmap stream borrowed from a V4l2Session
//!      └───────────┘
//! ```

pub mod types;
pub mod v4l2;

pub use types::*;
pub use v4l2::{V4l2Session, V4l2Stream};

use crate::errors::CameraError;

/// Anything that hands out frames one blocking read at a time
pub trait FrameSource {
    /// Block until the next frame is available.
    ///
    /// An error means the source is unusable (device unplugged, stream
    /// stopped); callers do not retry.
    fn read_frame(&mut self) -> Result<FrameInfo, CameraError>;
}
