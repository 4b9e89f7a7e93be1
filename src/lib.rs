// SPDX-License-Identifier: GPL-3.0-only

//! Viewfinder - capture-mode selection for camera devices
//!
//! Given the capture configurations a camera reports (resolution, pixel
//! encoding, frame-rate range), pick the largest-area configuration whose
//! encoding the target platform can consume, and apply it to the device.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`selection`]: the selection function and encoding preferences
//! - [`backends`]: capture-device abstraction (V4L2, file fixtures)
//! - [`viewfinder`]: enumerate, select, apply, propagate orientation
//! - [`frame_handler`]: orientation hook for downstream frame processing
//! - [`media`]: pixel encoding metadata
//! - [`config`]: user configuration handling
//!
//! # Example
//!
//! ```
//! use viewfinder::backends::camera::{CaptureConfiguration, FrameRateRange};
//! use viewfinder::media::PixelEncoding;
//! use viewfinder::selection::{EncodingPreferenceList, select_viewfinder_configuration};
//!
//! let configs = vec![
//!     CaptureConfiguration::new(640, 480, PixelEncoding::NV12, FrameRateRange::fixed(30.0)),
//!     CaptureConfiguration::new(1280, 720, PixelEncoding::NV12, FrameRateRange::fixed(30.0)),
//! ];
//! let preferred = EncodingPreferenceList::new([PixelEncoding::NV12]);
//! let best = select_viewfinder_configuration(&configs, &preferred).unwrap();
//! assert_eq!(best.width(), 1280);
//! ```

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod frame_handler;
pub mod media;
pub mod selection;
pub mod viewfinder;

// Re-export commonly used types
pub use backends::camera::{CaptureConfiguration, CaptureDevice, SensorRotation};
pub use config::Config;
pub use errors::{AppError, AppResult, SelectionError};
pub use media::PixelEncoding;
pub use selection::{EncodingPreferenceList, TargetPlatform, select_viewfinder_configuration};
pub use viewfinder::configure_viewfinder;
