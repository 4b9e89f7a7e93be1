// SPDX-License-Identifier: GPL-3.0-only

//! Frame-handler orientation hook
//!
//! Whatever processes frames downstream of the viewfinder needs to know how
//! the sensor is mounted. The manager is passed in by the caller rather than
//! looked up from process-wide state, so configuring a camera without any
//! frame processing attached is just `None`.

use crate::backends::camera::SensorRotation;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Receives the sensor orientation once a viewfinder configuration is applied
pub trait FrameHandlerManager: Send + Sync {
    fn set_orientation(&self, rotation: SensorRotation);
}

/// Cloneable orientation slot shared between the bootstrap and frame handlers
#[derive(Debug, Clone, Default)]
pub struct SharedOrientation {
    rotation: Arc<Mutex<SensorRotation>>,
}

impl SharedOrientation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last orientation set, `SensorRotation::None` until then
    pub fn orientation(&self) -> SensorRotation {
        match self.rotation.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl FrameHandlerManager for SharedOrientation {
    fn set_orientation(&self, rotation: SensorRotation) {
        debug!(rotation = %rotation, "Frame handlers orientation updated");
        match self.rotation.lock() {
            Ok(mut guard) => *guard = rotation,
            Err(poisoned) => *poisoned.into_inner() = rotation,
        }
    }
}
