// SPDX-License-Identifier: GPL-3.0-only

//! Capture-device abstraction
//!
//! The selector never talks to hardware. It consumes the configurations a
//! [`CaptureDevice`] enumerates and hands the winner back to the same device.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │ Viewfinder bootstrap│
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │ CaptureDevice trait │  ← enumerate / apply / orientation
//! └──────────┬──────────┘
//!            │
//!       ┌────┴─────┐
//!       ▼          ▼
//!   ┌──────┐  ┌─────────┐
//!   │ V4L2 │  │ Fixture │
//!   └──────┘  └─────────┘
//! ```

pub mod fixture;
pub mod types;
#[cfg(target_os = "linux")]
pub mod v4l2;
#[cfg(target_os = "linux")]
pub mod v4l2_controls;

pub use fixture::FixtureDevice;
pub use types::*;
#[cfg(target_os = "linux")]
pub use v4l2::{V4l2Device, enumerate_v4l2_devices};

/// A capture device the viewfinder can be configured on
pub trait CaptureDevice: Send {
    /// Human-readable device name
    fn name(&self) -> &str;

    /// Enumerate every configuration the device reports, in driver order
    ///
    /// The order is hardware dependent and is what the selector's
    /// first-wins tie-break runs over.
    fn enumerate_supported_configurations(&self) -> BackendResult<Vec<CaptureConfiguration>>;

    /// Switch the device to the given configuration
    ///
    /// # Returns
    /// * `Ok(())` - Device accepted the configuration
    /// * `Err(BackendError::FormatNotSupported)` - Device rejected it
    fn apply_configuration(&mut self, config: &CaptureConfiguration) -> BackendResult<()>;

    /// Physical mounting rotation of the sensor
    fn orientation(&self) -> SensorRotation;
}
