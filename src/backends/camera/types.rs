// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for camera backends

/// Metadata of one captured frame
///
/// The pixel data itself stays in the driver's buffer and is handed back
/// before the next read; only the fact that a frame arrived is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Bytes in the dequeued buffer
    pub bytes: usize,
    /// Driver sequence number
    pub sequence: u32,
}

/// Card, driver and bus reported by `VIDIOC_QUERYCAP`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub card: String,
    pub driver: String,
    pub bus: String,
}
