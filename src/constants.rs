// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use crate::media::PixelEncoding;

/// Application name, used for the config directory
pub const APP_NAME: &str = "viewfinder";

/// Config file name inside the application config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Current config schema version
pub const CONFIG_VERSION: u32 = 1;

/// iOS delivers bi-planar YUV; both chroma orders are usable
pub const IOS_PREFERRED_ENCODINGS: &[PixelEncoding] = &[PixelEncoding::NV12, PixelEncoding::NV21];

/// Android camera HALs commonly offer NV21 and YV12 alongside NV12
pub const ANDROID_PREFERRED_ENCODINGS: &[PixelEncoding] = &[
    PixelEncoding::NV12,
    PixelEncoding::NV21,
    PixelEncoding::YV12,
];

/// Desktop frame pipelines consume packed 32-bit RGB
pub const DESKTOP_PREFERRED_ENCODINGS: &[PixelEncoding] = &[PixelEncoding::ARGB32];

/// Application version string (from git describe at build time)
pub fn app_version() -> &'static str {
    env!("GIT_VERSION")
}
