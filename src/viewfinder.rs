// SPDX-License-Identifier: GPL-3.0-only

//! Viewfinder bootstrap
//!
//! Enumerates a device's configurations, selects one, applies it, then tells
//! the frame handlers (if any) how the sensor is mounted.

use crate::backends::camera::{CaptureConfiguration, CaptureDevice};
use crate::errors::AppResult;
use crate::frame_handler::FrameHandlerManager;
use crate::selection::{EncodingPreferenceList, select_viewfinder_configuration};
use tracing::{info, warn};

/// Configure the viewfinder of `device`
///
/// Nothing is applied when selection fails, and orientation is only
/// propagated after the device accepted the configuration.
///
/// # Returns
/// * `Ok(CaptureConfiguration)` - The configuration now active on the device
/// * `Err(AppError::Selection)` - No configuration used an acceptable encoding
/// * `Err(AppError::Backend)` - Enumeration or apply failed
pub fn configure_viewfinder(
    device: &mut dyn CaptureDevice,
    preferred: &EncodingPreferenceList,
    frame_handlers: Option<&dyn FrameHandlerManager>,
) -> AppResult<CaptureConfiguration> {
    let configurations = device.enumerate_supported_configurations()?;

    info!(
        device = %device.name(),
        count = configurations.len(),
        "# of settings"
    );
    for config in &configurations {
        info!(
            resolution = %config.resolution,
            encoding = %config.pixel_encoding,
            min_fps = config.frame_rate.min,
            max_fps = config.frame_rate.max,
            "settings"
        );
    }

    let best = match select_viewfinder_configuration(&configurations, preferred) {
        Ok(best) => best.clone(),
        Err(e) => {
            warn!(device = %device.name(), error = %e, "No viewfinder configuration selected");
            return Err(e.into());
        }
    };

    device.apply_configuration(&best)?;
    info!(device = %device.name(), config = %best, "Viewfinder configured");

    if let Some(handlers) = frame_handlers {
        let rotation = device.orientation();
        info!(rotation = %rotation, "Propagating camera orientation to frame handlers");
        handlers.set_orientation(rotation);
    }

    Ok(best)
}
