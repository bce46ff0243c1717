// SPDX-License-Identifier: GPL-3.0-only

//! V4L2 capture session
//!
//! Opens `/dev/video<N>`, requests the configured size, pixel format and
//! frame rate, and reads frames through a memory-mapped buffer stream.
//! The driver is free to clamp, substitute or refuse any of the requested
//! values; what it settles on is logged but never treated as an error.

use std::io;

use tracing::{debug, info, warn};
use v4l::Fraction;
use v4l::buffer::Type;
use v4l::io::traits::CaptureStream;
use v4l::prelude::*;
use v4l::video::Capture;
use v4l::video::capture::Parameters;

use super::FrameSource;
use super::types::{DeviceInfo, FrameInfo};
use crate::config::CaptureConfig;
use crate::constants::MMAP_BUFFER_COUNT;
use crate::errors::CameraError;

/// An open V4L2 capture device
///
/// The device node is closed when the session is dropped.
pub struct V4l2Session {
    device: Device,
    index: u32,
}

impl V4l2Session {
    /// Open the configured device and request format and frame rate
    ///
    /// Only opening the device can fail; rejected settings are logged and
    /// the device keeps whatever it was using.
    pub fn open(config: &CaptureConfig) -> Result<Self, CameraError> {
        let device = Device::new(config.device as usize).map_err(|source| CameraError::Open {
            device: config.device,
            source,
        })?;

        let session = Self {
            device,
            index: config.device,
        };

        match session.device_info() {
            Some(info) => info!(
                device = %config.device_path(),
                card = %info.card,
                driver = %info.driver,
                bus = %info.bus,
                "Opened V4L2 device"
            ),
            None => info!(device = %config.device_path(), "Opened V4L2 device"),
        }

        session.apply_format(config);
        session.apply_frame_rate(config);

        Ok(session)
    }

    /// Query card, driver and bus names, if the driver answers
    pub fn device_info(&self) -> Option<DeviceInfo> {
        match self.device.query_caps() {
            Ok(caps) => Some(DeviceInfo {
                card: caps.card,
                driver: caps.driver,
                bus: caps.bus,
            }),
            Err(e) => {
                debug!(device = self.index, error = %e, "VIDIOC_QUERYCAP failed");
                None
            }
        }
    }

    fn apply_format(&self, config: &CaptureConfig) {
        let Some(current) = accept_setting(self.index, "format", self.device.format()) else {
            return;
        };
        debug!(
            width = current.width,
            height = current.height,
            fourcc = %current.fourcc,
            "Current device format"
        );

        let mut requested = current;
        requested.width = config.width;
        requested.height = config.height;
        requested.fourcc = config.fourcc;
        let result = self.device.set_format(&requested);
        let Some(applied) = accept_setting(self.index, "format", result) else {
            return;
        };

        if applied.width != config.width
            || applied.height != config.height
            || applied.fourcc != config.fourcc
        {
            warn!(
                requested = %format!("{}x{} {}", config.width, config.height, config.fourcc),
                applied = %format!("{}x{} {}", applied.width, applied.height, applied.fourcc),
                "Driver adjusted the capture format"
            );
        } else {
            debug!(
                width = applied.width,
                height = applied.height,
                fourcc = %applied.fourcc,
                "Set V4L2 format"
            );
        }
    }

    fn apply_frame_rate(&self, config: &CaptureConfig) {
        let result = self.device.set_params(&Parameters::with_fps(config.fps));
        let Some(applied) = accept_setting(self.index, "frame rate", result) else {
            return;
        };

        match fps_from_interval(applied.interval) {
            Some(fps) if fps == config.fps => debug!(fps, "Set V4L2 frame rate"),
            applied_fps => warn!(
                requested = config.fps,
                applied = ?applied_fps,
                "Driver adjusted the frame rate"
            ),
        }
    }

    /// Start streaming into memory-mapped buffers
    pub fn stream(&self) -> Result<V4l2Stream<'_>, CameraError> {
        let stream = MmapStream::with_buffers(&self.device, Type::VideoCapture, MMAP_BUFFER_COUNT)
            .map_err(CameraError::Stream)?;

        debug!(
            device = self.index,
            buffers = MMAP_BUFFER_COUNT,
            "V4L2 capture stream created"
        );

        Ok(V4l2Stream { stream })
    }
}

/// Memory-mapped frame stream of a [`V4l2Session`]
pub struct V4l2Stream<'a> {
    stream: MmapStream<'a>,
}

impl FrameSource for V4l2Stream<'_> {
    fn read_frame(&mut self) -> Result<FrameInfo, CameraError> {
        let (buf, meta) = self.stream.next().map_err(CameraError::Read)?;
        Ok(FrameInfo {
            bytes: buf.len(),
            sequence: meta.sequence,
        })
    }
}

/// Unwrap the driver's answer to a settings ioctl, logging a refusal.
///
/// Drivers such as v4l2loopback answer some requests with `ENOTTY` or
/// `EINVAL`; capture still works with the device's current settings.
pub fn accept_setting<T>(device: u32, setting: &'static str, result: io::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(device, setting, error = %e, "Driver rejected setting, keeping current value");
            None
        }
    }
}

/// Frames per second of a frame interval (`1/30` is 30 fps)
///
/// Returns `None` for intervals that do not describe a rate.
pub fn fps_from_interval(interval: Fraction) -> Option<u32> {
    if interval.numerator == 0 || interval.denominator == 0 {
        return None;
    }
    Some((interval.denominator as f64 / interval.numerator as f64).round() as u32)
}
