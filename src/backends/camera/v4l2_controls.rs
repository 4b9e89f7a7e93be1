// SPDX-License-Identifier: GPL-3.0-only

//! V4L2 control access
//!
//! Only the controls the viewfinder needs are exposed: reading the sensor
//! mounting rotation.

use std::fs::File;
use std::os::unix::io::AsRawFd;
use tracing::debug;

// ===== V4L2 Control Class Bases =====
const V4L2_CTRL_CLASS_CAMERA: u32 = 0x009a0000;

const V4L2_CID_CAMERA_CLASS_BASE: u32 = V4L2_CTRL_CLASS_CAMERA | 0x900;

// ===== V4L2 Control IDs (Camera Class) =====

/// Sensor mounting rotation in degrees
pub const V4L2_CID_CAMERA_SENSOR_ROTATION: u32 = V4L2_CID_CAMERA_CLASS_BASE + 35;

// ===== V4L2 ioctl Numbers =====
// Calculated as: (dir << 30) | (size << 16) | ('V' << 8) | nr
// where dir: 2=READ, 1=WRITE, 3=READ|WRITE

/// Get control value (v4l2_control: 8 bytes)
const VIDIOC_G_CTRL: libc::c_ulong = 0xC008561B;

/// V4L2 control get/set structure
#[repr(C)]
struct V4l2Control {
    id: u32,
    value: i32,
}

/// Get current value of a control
pub fn get_control(device_path: &str, control_id: u32) -> Option<i32> {
    let file = File::open(device_path).ok()?;
    let fd = file.as_raw_fd();

    let mut ctrl = V4l2Control {
        id: control_id,
        value: 0,
    };

    let result = unsafe { libc::ioctl(fd, VIDIOC_G_CTRL as _, &mut ctrl as *mut V4l2Control) };

    if result < 0 {
        debug!(device_path, control_id, "Failed to get V4L2 control");
        return None;
    }

    Some(ctrl.value)
}
