// SPDX-License-Identifier: GPL-3.0-only
// Shared types for capture-device abstraction

//! Shared types for camera backends

use crate::media::PixelEncoding;
use serde::{Deserialize, Serialize};

/// Device information from V4L2 capability
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Name of the device (V4L2 card)
    pub card: String,
    /// Driver name (V4L2 driver)
    pub driver: String,
    /// Device path (e.g., /dev/video0)
    pub path: String,
    /// Bus the device is attached to
    pub bus: String,
}

/// Sensor rotation in degrees (clockwise)
///
/// Camera sensors may be physically mounted at various angles relative to the device.
/// This is common on mobile devices where sensors are rotated 90° or 270° relative
/// to the display orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorRotation {
    /// No rotation (sensor is oriented correctly)
    #[default]
    None,
    /// 90 degrees clockwise
    Rotate90,
    /// 180 degrees (upside down)
    Rotate180,
    /// 270 degrees clockwise (90 degrees counter-clockwise)
    Rotate270,
}

impl SensorRotation {
    /// Create rotation from an integer degree value (normalised to 0-360).
    pub fn from_degrees_int(degrees: i32) -> Self {
        match degrees.rem_euclid(360) {
            90 => SensorRotation::Rotate90,
            180 => SensorRotation::Rotate180,
            270 => SensorRotation::Rotate270,
            _ => SensorRotation::None,
        }
    }

    /// Get the rotation in degrees
    pub fn degrees(&self) -> u32 {
        match self {
            SensorRotation::None => 0,
            SensorRotation::Rotate90 => 90,
            SensorRotation::Rotate180 => 180,
            SensorRotation::Rotate270 => 270,
        }
    }

    /// Check if rotation swaps width and height
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, SensorRotation::Rotate90 | SensorRotation::Rotate270)
    }
}

impl std::fmt::Display for SensorRotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Frame size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count; computed in 64 bits so 4-byte dimensions cannot overflow
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Frame size as seen upright once the sensor rotation is undone
    pub fn oriented(&self, rotation: SensorRotation) -> Self {
        if rotation.swaps_dimensions() {
            Self::new(self.height, self.width)
        } else {
            *self
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Frame-rate bounds a configuration can run at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRateRange {
    pub min: f64,
    pub max: f64,
}

impl FrameRateRange {
    /// Build a range, swapping the bounds if they arrive reversed
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// A single fixed rate
    pub fn fixed(fps: f64) -> Self {
        Self { min: fps, max: fps }
    }
}

impl Default for FrameRateRange {
    fn default() -> Self {
        Self::fixed(0.0)
    }
}

/// One operating mode a capture device reports
///
/// Values are produced by a [`CaptureDevice`](super::CaptureDevice) and are
/// read-only to the selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfiguration {
    pub resolution: Resolution,
    pub pixel_encoding: PixelEncoding,
    #[serde(default)]
    pub frame_rate: FrameRateRange,
    /// FourCC exactly as the driver reported it
    ///
    /// Several FourCCs map onto one encoding (`JPEG` and `MJPG`, `I420` and
    /// `YU12`); applying must hand the driver back the code it listed.
    #[serde(skip)]
    pub driver_fourcc: Option<[u8; 4]>,
}

impl CaptureConfiguration {
    pub fn new(
        width: u32,
        height: u32,
        pixel_encoding: PixelEncoding,
        frame_rate: FrameRateRange,
    ) -> Self {
        Self {
            resolution: Resolution::new(width, height),
            pixel_encoding,
            frame_rate,
            driver_fourcc: None,
        }
    }

    /// Build a configuration from a FourCC a driver enumerated
    pub fn from_driver(
        width: u32,
        height: u32,
        fourcc: [u8; 4],
        frame_rate: FrameRateRange,
    ) -> Self {
        Self {
            driver_fourcc: Some(fourcc),
            ..Self::new(width, height, PixelEncoding::from_fourcc(fourcc), frame_rate)
        }
    }

    /// FourCC to request when applying this configuration
    pub fn apply_fourcc(&self) -> [u8; 4] {
        self.driver_fourcc
            .unwrap_or_else(|| self.pixel_encoding.fourcc())
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    /// Frame area (width × height), the selection metric
    pub fn area(&self) -> u64 {
        self.resolution.area()
    }
}

impl std::fmt::Display for CaptureConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} : {} (fps from {} to {})",
            self.resolution, self.pixel_encoding, self.frame_rate.min, self.frame_rate.max
        )
    }
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Error types for backend operations
#[derive(Debug, Clone, PartialEq)]
pub enum BackendError {
    /// Capture device not found
    DeviceNotFound(String),
    /// Device refused to report its configurations
    EnumerationFailed(String),
    /// Device rejected a configuration
    FormatNotSupported(String),
    /// General I/O error
    IoError(String),
    /// Other errors
    Other(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::DeviceNotFound(msg) => write!(f, "Device not found: {}", msg),
            BackendError::EnumerationFailed(msg) => write!(f, "Enumeration failed: {}", msg),
            BackendError::FormatNotSupported(msg) => write!(f, "Format not supported: {}", msg),
            BackendError::IoError(msg) => write!(f, "I/O error: {}", msg),
            BackendError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        BackendError::IoError(err.to_string())
    }
}
