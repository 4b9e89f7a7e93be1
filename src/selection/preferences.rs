// SPDX-License-Identifier: GPL-3.0-only

//! Acceptable pixel encodings and their per-platform defaults

use crate::constants::{
    ANDROID_PREFERRED_ENCODINGS, DESKTOP_PREFERRED_ENCODINGS, IOS_PREFERRED_ENCODINGS,
};
use crate::media::PixelEncoding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered set of acceptable pixel encodings
///
/// The first-listed encoding is nominally the most wanted one, but selection
/// only tests membership: between two acceptable configurations of equal
/// area, encoding order does not decide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PixelEncoding>", into = "Vec<PixelEncoding>")]
pub struct EncodingPreferenceList {
    encodings: Vec<PixelEncoding>,
}

impl EncodingPreferenceList {
    /// Build a list, dropping repeated encodings (first occurrence wins)
    pub fn new(encodings: impl IntoIterator<Item = PixelEncoding>) -> Self {
        let mut list = Vec::new();
        for encoding in encodings {
            if !list.contains(&encoding) {
                list.push(encoding);
            }
        }
        Self { encodings: list }
    }

    pub fn contains(&self, encoding: &PixelEncoding) -> bool {
        self.encodings.contains(encoding)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PixelEncoding> {
        self.encodings.iter()
    }

    pub fn as_slice(&self) -> &[PixelEncoding] {
        &self.encodings
    }

    pub fn len(&self) -> usize {
        self.encodings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encodings.is_empty()
    }
}

impl From<Vec<PixelEncoding>> for EncodingPreferenceList {
    fn from(encodings: Vec<PixelEncoding>) -> Self {
        Self::new(encodings)
    }
}

impl From<EncodingPreferenceList> for Vec<PixelEncoding> {
    fn from(list: EncodingPreferenceList) -> Self {
        list.encodings
    }
}

impl FromIterator<PixelEncoding> for EncodingPreferenceList {
    fn from_iter<T: IntoIterator<Item = PixelEncoding>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for EncodingPreferenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.encodings.is_empty() {
            return write!(f, "(none)");
        }
        let names: Vec<String> = self.encodings.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Deployment target whose camera stack decides which encodings are usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    /// iOS camera stack (bi-planar NV12/NV21 buffers)
    Ios,
    /// Android camera stack
    Android,
    /// Desktop targets (Linux, macOS, Windows)
    Desktop,
}

impl TargetPlatform {
    pub const ALL: [TargetPlatform; 3] = [
        TargetPlatform::Ios,
        TargetPlatform::Android,
        TargetPlatform::Desktop,
    ];

    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            TargetPlatform::Ios
        } else if cfg!(target_os = "android") {
            TargetPlatform::Android
        } else {
            TargetPlatform::Desktop
        }
    }

    /// Encodings the platform's frame pipeline can consume directly
    pub fn default_preferences(&self) -> EncodingPreferenceList {
        let encodings = match self {
            TargetPlatform::Ios => IOS_PREFERRED_ENCODINGS,
            TargetPlatform::Android => ANDROID_PREFERRED_ENCODINGS,
            TargetPlatform::Desktop => DESKTOP_PREFERRED_ENCODINGS,
        };
        EncodingPreferenceList::new(encodings.iter().copied())
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetPlatform::Ios => write!(f, "ios"),
            TargetPlatform::Android => write!(f, "android"),
            TargetPlatform::Desktop => write!(f, "desktop"),
        }
    }
}

/// Error returned when a platform name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlatformError(pub String);

impl fmt::Display for ParsePlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown platform '{}': expected ios, android or desktop",
            self.0
        )
    }
}

impl std::error::Error for ParsePlatformError {}

impl FromStr for TargetPlatform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ios" => Ok(TargetPlatform::Ios),
            "android" => Ok(TargetPlatform::Android),
            "desktop" | "linux" | "macos" | "windows" => Ok(TargetPlatform::Desktop),
            _ => Err(ParsePlatformError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_are_dropped_in_order() {
        let list = EncodingPreferenceList::new([
            PixelEncoding::NV21,
            PixelEncoding::NV12,
            PixelEncoding::NV21,
        ]);
        assert_eq!(list.as_slice(), &[PixelEncoding::NV21, PixelEncoding::NV12]);
        assert!(list.contains(&PixelEncoding::NV12));
        assert!(!list.contains(&PixelEncoding::YV12));
    }

    #[test]
    fn test_platform_defaults() {
        assert_eq!(
            TargetPlatform::Ios.default_preferences().as_slice(),
            &[PixelEncoding::NV12, PixelEncoding::NV21]
        );
        assert_eq!(
            TargetPlatform::Android.default_preferences().as_slice(),
            &[PixelEncoding::NV12, PixelEncoding::NV21, PixelEncoding::YV12]
        );
        assert_eq!(
            TargetPlatform::Desktop.default_preferences().as_slice(),
            &[PixelEncoding::ARGB32]
        );
    }

    #[test]
    fn test_platform_parsing() {
        for platform in TargetPlatform::ALL {
            assert_eq!(platform.to_string().parse(), Ok(platform));
        }
        assert_eq!("Linux".parse(), Ok(TargetPlatform::Desktop));
        assert!("amiga".parse::<TargetPlatform>().is_err());
    }

    #[test]
    fn test_display() {
        let list = EncodingPreferenceList::new([PixelEncoding::NV12, PixelEncoding::YV12]);
        assert_eq!(list.to_string(), "NV12, YV12");
        assert_eq!(EncodingPreferenceList::default().to_string(), "(none)");
    }

    #[test]
    fn test_deserialize_dedups() {
        let list: EncodingPreferenceList =
            serde_json::from_str(r#"["NV12", "NV12", "YUYV"]"#).unwrap();
        assert_eq!(list.len(), 2);
    }
}
