// SPDX-License-Identifier: GPL-3.0-only

//! File-backed capture device
//!
//! Replays a configuration list captured from real hardware (or written by
//! hand) so selection can be reproduced without the camera attached.
//!
//! ```json
//! {
//!   "name": "Front camera",
//!   "orientation": 270,
//!   "configurations": [
//!     { "resolution": { "width": 1280, "height": 720 },
//!       "pixel_encoding": "NV12",
//!       "frame_rate": { "min": 15.0, "max": 30.0 } }
//!   ]
//! }
//! ```

use super::CaptureDevice;
use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// On-disk fixture document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureDocument {
    #[serde(default)]
    pub name: String,
    /// Sensor rotation in degrees
    #[serde(default)]
    pub orientation: i32,
    pub configurations: Vec<CaptureConfiguration>,
}

/// In-memory capture device
///
/// Every applied configuration is recorded so callers can check what the
/// bootstrap handed back to the device.
#[derive(Debug, Clone, Default)]
pub struct FixtureDevice {
    name: String,
    orientation: SensorRotation,
    configurations: Vec<CaptureConfiguration>,
    applied: Vec<CaptureConfiguration>,
    reject_apply: bool,
}

impl FixtureDevice {
    pub fn new(name: impl Into<String>, configurations: Vec<CaptureConfiguration>) -> Self {
        Self {
            name: name.into(),
            configurations,
            ..Default::default()
        }
    }

    pub fn with_orientation(mut self, orientation: SensorRotation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Make every `apply_configuration` call fail, as a busy device would
    pub fn rejecting_apply(mut self) -> Self {
        self.reject_apply = true;
        self
    }

    /// Load a fixture document from a JSON file
    pub fn load(path: &Path) -> BackendResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BackendError::DeviceNotFound(format!("{}: {}", path.display(), e)))?;
        let document: FixtureDocument = serde_json::from_str(&contents)
            .map_err(|e| BackendError::EnumerationFailed(format!("{}: {}", path.display(), e)))?;

        let name = if document.name.is_empty() {
            path.display().to_string()
        } else {
            document.name
        };

        info!(
            path = %path.display(),
            count = document.configurations.len(),
            "Loaded capture fixture"
        );

        Ok(Self::new(name, document.configurations)
            .with_orientation(SensorRotation::from_degrees_int(document.orientation)))
    }

    /// Configurations applied so far, oldest first
    pub fn applied(&self) -> &[CaptureConfiguration] {
        &self.applied
    }
}

impl CaptureDevice for FixtureDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn enumerate_supported_configurations(&self) -> BackendResult<Vec<CaptureConfiguration>> {
        Ok(self.configurations.clone())
    }

    fn apply_configuration(&mut self, config: &CaptureConfiguration) -> BackendResult<()> {
        if self.reject_apply {
            return Err(BackendError::FormatNotSupported(config.to_string()));
        }
        if !self.configurations.contains(config) {
            return Err(BackendError::FormatNotSupported(format!(
                "{} is not offered by {}",
                config, self.name
            )));
        }

        debug!(device = %self.name, config = %config, "Fixture applied configuration");
        self.applied.push(config.clone());
        Ok(())
    }

    fn orientation(&self) -> SensorRotation {
        self.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::PixelEncoding;
    use std::io::Write;

    #[test]
    fn test_load_fixture_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Back camera",
                "orientation": 90,
                "configurations": [
                    {{ "resolution": {{ "width": 640, "height": 480 }}, "pixel_encoding": "NV21",
                       "frame_rate": {{ "min": 7.5, "max": 30.0 }} }},
                    {{ "resolution": {{ "width": 1920, "height": 1080 }}, "pixel_encoding": "MJPG" }}
                ]
            }}"#
        )
        .unwrap();

        let device = FixtureDevice::load(file.path()).unwrap();
        assert_eq!(device.name(), "Back camera");
        assert_eq!(device.orientation(), SensorRotation::Rotate90);

        let configs = device.enumerate_supported_configurations().unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].pixel_encoding, PixelEncoding::NV21);
        assert_eq!(configs[0].frame_rate.min, 7.5);
        assert_eq!(configs[1].pixel_encoding, PixelEncoding::MJPEG);
    }

    #[test]
    fn test_load_missing_file() {
        let result = FixtureDevice::load(Path::new("/nonexistent/fixture.json"));
        assert!(matches!(result, Err(BackendError::DeviceNotFound(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = FixtureDevice::load(file.path());
        assert!(matches!(result, Err(BackendError::EnumerationFailed(_))));
    }

    #[test]
    fn test_apply_records_only_offered_configurations() {
        let offered = CaptureConfiguration::new(
            640,
            480,
            PixelEncoding::YUYV,
            FrameRateRange::fixed(30.0),
        );
        let mut device = FixtureDevice::new("test", vec![offered.clone()]);

        device.apply_configuration(&offered).unwrap();
        assert_eq!(device.applied(), &[offered]);

        let foreign = CaptureConfiguration::new(
            320,
            240,
            PixelEncoding::YUYV,
            FrameRateRange::fixed(30.0),
        );
        assert!(device.apply_configuration(&foreign).is_err());
        assert_eq!(device.applied().len(), 1);
    }
}
