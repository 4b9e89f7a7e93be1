// SPDX-License-Identifier: GPL-3.0-only

//! Backend abstraction layer for capture devices
//!
//! - [`camera`]: the [`CaptureDevice`](camera::CaptureDevice) trait with V4L2
//!   and file-backed implementations

pub mod camera;
