// SPDX-License-Identifier: GPL-3.0-only

//! V4L2 capture devices
//!
//! Enumerates formats, frame sizes and frame intervals through the `v4l`
//! crate and flattens them into [`CaptureConfiguration`] values, one per
//! (format, frame size) pair, in the order the driver reports them.

use super::types::*;
use super::{CaptureDevice, v4l2_controls};
use crate::media::PixelEncoding;
use tracing::{debug, info, warn};
use v4l::fraction::Fraction;
use v4l::frameinterval::FrameIntervalEnum;
use v4l::framesize::FrameSizeEnum;
use v4l::prelude::*;
use v4l::video::Capture;
use v4l::video::capture::Parameters;
use v4l::{Format, FourCC};

/// A V4L2 video capture node (e.g. `/dev/video0`)
pub struct V4l2Device {
    device: Device,
    info: DeviceInfo,
}

impl V4l2Device {
    /// Open a capture node by path
    pub fn open(path: &str) -> BackendResult<Self> {
        let device = Device::with_path(path)
            .map_err(|e| BackendError::DeviceNotFound(format!("{}: {}", path, e)))?;

        let caps = device.query_caps()?;
        let info = DeviceInfo {
            card: caps.card,
            driver: caps.driver,
            path: path.to_string(),
            bus: caps.bus,
        };

        debug!(path, card = %info.card, driver = %info.driver, "Opened V4L2 device");
        Ok(Self { device, info })
    }

    /// Capability information queried when the device was opened
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Frame-rate bounds the driver reports for one format and size
    fn frame_rate_range(&self, fourcc: FourCC, width: u32, height: u32) -> FrameRateRange {
        let intervals = match self.device.enum_frameintervals(fourcc, width, height) {
            Ok(intervals) => intervals,
            Err(e) => {
                debug!(width, height, error = %e, "No frame intervals reported");
                return FrameRateRange::default();
            }
        };

        let mut rates = Vec::new();
        for interval in intervals {
            match interval.interval {
                FrameIntervalEnum::Discrete(frac) => rates.extend(fraction_to_fps(frac)),
                // Longest interval is the slowest rate and vice versa
                FrameIntervalEnum::Stepwise(step) => {
                    rates.extend(fraction_to_fps(step.max));
                    rates.extend(fraction_to_fps(step.min));
                }
            }
        }

        let min = rates.iter().copied().fold(f64::INFINITY, f64::min);
        let max = rates.iter().copied().fold(0.0, f64::max);
        if rates.is_empty() {
            FrameRateRange::default()
        } else {
            FrameRateRange::new(min, max)
        }
    }
}

/// Convert a frame interval (seconds per frame) to frames per second
fn fraction_to_fps(frac: Fraction) -> Option<f64> {
    if frac.numerator == 0 {
        None
    } else {
        Some(frac.denominator as f64 / frac.numerator as f64)
    }
}

/// Frame sizes worth offering for a stepwise/continuous range
///
/// Only the two corners are listed; the selector only needs the largest
/// area and the smallest keeps low-bandwidth modes visible.
fn stepwise_corners(min: (u32, u32), max: (u32, u32)) -> Vec<(u32, u32)> {
    if min == max { vec![min] } else { vec![min, max] }
}

impl CaptureDevice for V4l2Device {
    fn name(&self) -> &str {
        if self.info.card.is_empty() {
            &self.info.path
        } else {
            &self.info.card
        }
    }

    fn enumerate_supported_configurations(&self) -> BackendResult<Vec<CaptureConfiguration>> {
        let descriptions = self
            .device
            .enum_formats()
            .map_err(|e| BackendError::EnumerationFailed(e.to_string()))?;

        let mut configurations = Vec::new();

        for desc in descriptions {
            let encoding = PixelEncoding::from_fourcc(desc.fourcc.repr);
            debug!(encoding = %encoding, description = %desc.description, "Format");

            let frame_sizes = match self.device.enum_framesizes(desc.fourcc) {
                Ok(sizes) => sizes,
                Err(e) => {
                    warn!(encoding = %encoding, error = %e, "Failed to enumerate frame sizes");
                    continue;
                }
            };

            for size in frame_sizes {
                let dimensions = match size.size {
                    FrameSizeEnum::Discrete(discrete) => vec![(discrete.width, discrete.height)],
                    FrameSizeEnum::Stepwise(step) => stepwise_corners(
                        (step.min_width, step.min_height),
                        (step.max_width, step.max_height),
                    ),
                };

                for (width, height) in dimensions {
                    let frame_rate = self.frame_rate_range(desc.fourcc, width, height);
                    configurations.push(CaptureConfiguration::from_driver(
                        width,
                        height,
                        desc.fourcc.repr,
                        frame_rate,
                    ));
                }
            }
        }

        Ok(configurations)
    }

    fn apply_configuration(&mut self, config: &CaptureConfiguration) -> BackendResult<()> {
        info!(device = %self.info.path, config = %config, "Applying viewfinder configuration");

        let requested = Format::new(
            config.width(),
            config.height(),
            FourCC::new(&config.apply_fourcc()),
        );
        let applied = self.device.set_format(&requested)?;

        if applied.width != requested.width
            || applied.height != requested.height
            || applied.fourcc != requested.fourcc
        {
            return Err(BackendError::FormatNotSupported(format!(
                "requested {}, driver chose {}x{} {}",
                config,
                applied.width,
                applied.height,
                PixelEncoding::from_fourcc(applied.fourcc.repr)
            )));
        }

        let fps = config.frame_rate.max.round();
        if fps >= 1.0 {
            // Not every driver supports VIDIOC_S_PARM; the format is already set
            if let Err(e) = self.device.set_params(&Parameters::with_fps(fps as u32)) {
                warn!(fps, error = %e, "Driver refused frame rate");
            }
        }

        Ok(())
    }

    fn orientation(&self) -> SensorRotation {
        v4l2_controls::get_control(
            &self.info.path,
            v4l2_controls::V4L2_CID_CAMERA_SENSOR_ROTATION,
        )
        .map(SensorRotation::from_degrees_int)
        .unwrap_or_default()
    }
}

/// Open every V4L2 node that can capture video, sorted by path
///
/// Metadata nodes (UVC cameras expose one next to each capture node) report
/// no capture formats and are skipped.
pub fn enumerate_v4l2_devices() -> Vec<V4l2Device> {
    let mut devices = Vec::new();

    for node in v4l::context::enum_devices() {
        let path = node.path().to_string_lossy().to_string();

        let device = match V4l2Device::open(&path) {
            Ok(device) => device,
            Err(e) => {
                debug!(path = %path, error = %e, "Skipping V4L2 node");
                continue;
            }
        };

        match device.device.enum_formats() {
            Ok(formats) if !formats.is_empty() => devices.push(device),
            _ => debug!(path = %path, "Skipping node without capture formats"),
        }
    }

    devices.sort_by(|a, b| a.info.path.cmp(&b.info.path));
    devices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_to_fps() {
        assert_eq!(
            fraction_to_fps(Fraction {
                numerator: 1,
                denominator: 30
            }),
            Some(30.0)
        );
        assert_eq!(
            fraction_to_fps(Fraction {
                numerator: 1001,
                denominator: 30000
            }),
            Some(30000.0 / 1001.0)
        );
        assert_eq!(
            fraction_to_fps(Fraction {
                numerator: 0,
                denominator: 30
            }),
            None
        );
    }

    #[test]
    fn test_stepwise_corners() {
        assert_eq!(stepwise_corners((320, 240), (320, 240)), vec![(320, 240)]);
        assert_eq!(
            stepwise_corners((160, 120), (1920, 1080)),
            vec![(160, 120), (1920, 1080)]
        );
    }

    #[test]
    fn test_enumerated_devices_are_open_and_sorted() {
        // Empty on machines without cameras; the invariants hold either way
        let devices = enumerate_v4l2_devices();
        for device in &devices {
            assert!(device.info().path.starts_with("/dev/"));
            assert!(!device.name().is_empty());
        }
        assert!(
            devices
                .windows(2)
                .all(|pair| pair[0].info().path <= pair[1].info().path)
        );
    }

    #[test]
    fn test_open_missing_device_fails() {
        assert!(matches!(
            V4l2Device::open("/dev/does-not-exist"),
            Err(BackendError::DeviceNotFound(_))
        ));
    }
}
