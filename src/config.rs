// SPDX-License-Identifier: GPL-3.0-only

//! Capture configuration
//!
//! Turns the raw command-line values into a validated [`CaptureConfig`].
//! Every check happens here so that nothing touches the device until the
//! whole configuration is known to be well formed.

use crate::cli::CaptureArgs;
use crate::constants::VIDEO_DEVICE_PREFIX;
use crate::errors::ConfigError;
use std::fmt;
use tracing::debug;
use v4l::FourCC;

/// Validated capture settings, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Video device index (`/dev/video<device>`)
    pub device: u32,
    pub width: u32,
    pub height: u32,
    /// Requested pixel format
    pub fourcc: FourCC,
    /// Requested frames per second
    pub fps: u32,
}

/// Width, height and frame rate decoded from `WIDTHxHEIGHT@FPS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionRate {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl fmt::Display for ResolutionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}@{}", self.width, self.height, self.fps)
    }
}

impl CaptureConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// `--resolution`, when present, overrides `--width`, `--height` and
    /// `--fps` as a whole.
    pub fn from_args(args: &CaptureArgs) -> Result<Self, ConfigError> {
        let device = parse_device(&args.device)?;

        let (width, height, fps) = match args.resolution.as_deref() {
            Some(res) => {
                let res = parse_resolution(res)?;
                debug!(resolution = %res, "Resolution overrides size and frame rate");
                (res.width, res.height, res.fps)
            }
            None => (args.width, args.height, args.fps),
        };

        let fourcc = parse_fourcc(&args.format)?;

        Ok(Self {
            device,
            width,
            height,
            fourcc,
            fps,
        })
    }

    /// Device node path for this configuration
    pub fn device_path(&self) -> String {
        format!("{}{}", VIDEO_DEVICE_PREFIX, self.device)
    }
}

/// Parse a `WIDTHxHEIGHT@FPS` string such as `640x480@60`.
///
/// The separators must be a literal lowercase `x` and `@`, and all three
/// numbers must be positive.
pub fn parse_resolution(s: &str) -> Result<ResolutionRate, ConfigError> {
    let invalid = || ConfigError::InvalidResolution(s.to_string());

    let (width, rest) = s.split_once('x').ok_or_else(invalid)?;
    let (height, fps) = rest.split_once('@').ok_or_else(invalid)?;

    let number = |part: &str| match part.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid()),
    };

    Ok(ResolutionRate {
        width: number(width)?,
        height: number(height)?,
        fps: number(fps)?,
    })
}

/// Parse a four-character pixel format tag such as `MJPG` or `YUYV`.
///
/// Trailing spaces are significant (`Y16 ` is a valid tag). Whether the
/// device supports the format is only known once it is applied.
pub fn parse_fourcc(s: &str) -> Result<FourCC, ConfigError> {
    let bytes: [u8; 4] = s
        .as_bytes()
        .try_into()
        .map_err(|_| ConfigError::InvalidFormat(s.to_string()))?;

    if !bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        return Err(ConfigError::InvalidFormat(s.to_string()));
    }

    Ok(FourCC::new(&bytes))
}

/// Packed 32-bit code of a fourcc, in the `v4l2_fourcc()` byte order
pub fn fourcc_code(fourcc: &FourCC) -> u32 {
    u32::from_le_bytes(fourcc.repr)
}

/// Parse a device argument: a bare index (`2`) or a node path (`/dev/video2`).
pub fn parse_device(s: &str) -> Result<u32, ConfigError> {
    let index = s.strip_prefix(VIDEO_DEVICE_PREFIX).unwrap_or(s);
    index
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidDevice(s.to_string()))
}
