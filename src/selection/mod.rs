// SPDX-License-Identifier: GPL-3.0-only

//! Viewfinder configuration selection
//!
//! Picks the capture configuration with the largest frame area among those
//! whose pixel encoding is acceptable. Ties keep the configuration the device
//! listed first.

pub mod preferences;

pub use preferences::{EncodingPreferenceList, ParsePlatformError, TargetPlatform};

use crate::backends::camera::CaptureConfiguration;
use crate::errors::{SelectionError, SelectionResult};
use tracing::debug;

/// Select the acceptable configuration with the largest frame area
///
/// Candidates are visited in input order. The first acceptable candidate
/// seeds the running best; later ones replace it only with a strictly larger
/// area, so the earliest of several equal-area candidates is kept.
///
/// The returned reference points into `configurations`.
pub fn select_viewfinder_configuration<'a>(
    configurations: &'a [CaptureConfiguration],
    preferred: &EncodingPreferenceList,
) -> SelectionResult<&'a CaptureConfiguration> {
    let mut best: Option<(u64, &'a CaptureConfiguration)> = None;

    for candidate in configurations {
        if !preferred.contains(&candidate.pixel_encoding) {
            continue;
        }

        let area = candidate.area();
        match best {
            Some((best_area, _)) if area <= best_area => {}
            _ => best = Some((area, candidate)),
        }
    }

    match best {
        Some((area, config)) => {
            debug!(config = %config, area, "Selected viewfinder configuration");
            Ok(config)
        }
        None => {
            debug!(
                candidates = configurations.len(),
                preferred = %preferred,
                "No acceptable viewfinder configuration"
            );
            Err(SelectionError::NoAcceptableConfiguration {
                candidates: configurations.len(),
                preferred: preferred.clone(),
            })
        }
    }
}
