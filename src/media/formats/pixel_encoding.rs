// SPDX-License-Identifier: GPL-3.0-only

//! Pixel encodings reported by capture devices

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw sample layout of a captured frame
///
/// Known layouts get their own variant so preference lists can name them.
/// Anything else the driver reports is kept verbatim as its FourCC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PixelEncoding {
    // ===== Planar/Semi-planar YUV 4:2:0 =====
    /// NV12 4:2:0 - Semi-planar (Y plane + interleaved UV)
    NV12,
    /// NV21 4:2:0 - Semi-planar (Y plane + interleaved VU)
    NV21,
    /// YV12 4:2:0 - Planar (Y + V + U planes)
    YV12,
    /// I420 4:2:0 - Planar (Y + U + V planes)
    I420,

    // ===== Packed YUV 4:2:2 =====
    /// YUYV 4:2:2 - Packed (Y0 U Y1 V)
    YUYV,
    /// UYVY 4:2:2 - Packed (U Y0 V Y1)
    UYVY,

    // ===== Packed RGB =====
    /// 32-bit ARGB, stored B G R A in memory
    ARGB32,
    /// 32-bit RGB with padding byte, stored B G R X in memory
    RGB32,
    /// 24-bit RGB (3 bytes per pixel)
    RGB24,

    // ===== Compressed =====
    /// Motion JPEG
    MJPEG,
    /// H.264/AVC
    H264,

    /// Any other FourCC
    Other([u8; 4]),
}

impl PixelEncoding {
    /// Map a V4L2 FourCC to an encoding
    pub fn from_fourcc(fourcc: [u8; 4]) -> Self {
        match &fourcc {
            b"NV12" => Self::NV12,
            b"NV21" => Self::NV21,
            b"YV12" => Self::YV12,
            b"YU12" | b"I420" => Self::I420,
            b"YUYV" | b"YUY2" => Self::YUYV,
            b"UYVY" => Self::UYVY,
            b"AR24" => Self::ARGB32,
            b"XR24" | b"RGB4" => Self::RGB32,
            b"RGB3" => Self::RGB24,
            b"MJPG" | b"JPEG" => Self::MJPEG,
            b"H264" | b"AVC1" => Self::H264,
            _ => Self::Other(fourcc),
        }
    }

    /// V4L2 FourCC used when applying this encoding to a device
    pub fn fourcc(&self) -> [u8; 4] {
        match self {
            Self::NV12 => *b"NV12",
            Self::NV21 => *b"NV21",
            Self::YV12 => *b"YV12",
            Self::I420 => *b"YU12",
            Self::YUYV => *b"YUYV",
            Self::UYVY => *b"UYVY",
            Self::ARGB32 => *b"AR24",
            Self::RGB32 => *b"XR24",
            Self::RGB24 => *b"RGB3",
            Self::MJPEG => *b"MJPG",
            Self::H264 => *b"H264",
            Self::Other(fourcc) => *fourcc,
        }
    }

    /// Check if frames in this encoding need a decoder
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::MJPEG | Self::H264)
    }
}

impl fmt::Display for PixelEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NV12 => write!(f, "NV12"),
            Self::NV21 => write!(f, "NV21"),
            Self::YV12 => write!(f, "YV12"),
            Self::I420 => write!(f, "I420"),
            Self::YUYV => write!(f, "YUYV"),
            Self::UYVY => write!(f, "UYVY"),
            Self::ARGB32 => write!(f, "ARGB32"),
            Self::RGB32 => write!(f, "RGB32"),
            Self::RGB24 => write!(f, "RGB24"),
            Self::MJPEG => write!(f, "MJPG"),
            Self::H264 => write!(f, "H264"),
            // Big-endian variants set bit 31, so not every FourCC is printable
            Self::Other(fourcc) if fourcc.iter().all(|b| b.is_ascii_graphic() || *b == b' ') => {
                let text = String::from_utf8_lossy(fourcc);
                write!(f, "{}", text.trim_end())
            }
            Self::Other(fourcc) => write!(f, "0x{:08X}", u32::from_le_bytes(*fourcc)),
        }
    }
}

/// Error returned when an encoding name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEncodingError(pub String);

impl fmt::Display for ParseEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid pixel encoding '{}': expected a known name, a FourCC of at most 4 ASCII characters, or 0x followed by 8 hex digits",
            self.0
        )
    }
}

impl std::error::Error for ParseEncodingError {}

impl FromStr for PixelEncoding {
    type Err = ParseEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "ARGB32" | "ARGB" => return Ok(Self::ARGB32),
            "RGB32" | "XRGB" => return Ok(Self::RGB32),
            "RGB24" | "RGB" => return Ok(Self::RGB24),
            "MJPEG" => return Ok(Self::MJPEG),
            _ => {}
        }

        // Hex form of a raw V4L2 FourCC value
        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .filter(|hex| hex.len() == 8 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            let value =
                u32::from_str_radix(hex, 16).map_err(|_| ParseEncodingError(s.to_string()))?;
            return Ok(Self::from_fourcc(value.to_le_bytes()));
        }

        if trimmed.is_empty() || trimmed.len() > 4 || !trimmed.is_ascii() {
            return Err(ParseEncodingError(s.to_string()));
        }

        // Known FourCCs are matched case-insensitively, unknown ones keep their case
        let mut upper = *b"    ";
        let mut raw = *b"    ";
        for (i, byte) in trimmed.bytes().enumerate() {
            upper[i] = byte.to_ascii_uppercase();
            raw[i] = byte;
        }

        match Self::from_fourcc(upper) {
            Self::Other(_) => Ok(Self::Other(raw)),
            known => Ok(known),
        }
    }
}

impl TryFrom<String> for PixelEncoding {
    type Error = ParseEncodingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PixelEncoding> for String {
    fn from(encoding: PixelEncoding) -> Self {
        encoding.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc_parsing() {
        assert_eq!(PixelEncoding::from_fourcc(*b"NV12"), PixelEncoding::NV12);
        assert_eq!(PixelEncoding::from_fourcc(*b"YU12"), PixelEncoding::I420);
        assert_eq!(PixelEncoding::from_fourcc(*b"YUY2"), PixelEncoding::YUYV);
        assert_eq!(PixelEncoding::from_fourcc(*b"AR24"), PixelEncoding::ARGB32);
        assert_eq!(PixelEncoding::from_fourcc(*b"JPEG"), PixelEncoding::MJPEG);
        assert_eq!(
            PixelEncoding::from_fourcc(*b"GRBG"),
            PixelEncoding::Other(*b"GRBG")
        );
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!("nv21".parse(), Ok(PixelEncoding::NV21));
        assert_eq!("ARGB32".parse(), Ok(PixelEncoding::ARGB32));
        assert_eq!("mjpeg".parse(), Ok(PixelEncoding::MJPEG));
        assert_eq!("Y16".parse(), Ok(PixelEncoding::Other(*b"Y16 ")));
        assert!("".parse::<PixelEncoding>().is_err());
        assert!("TOOLONG".parse::<PixelEncoding>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for encoding in [
            PixelEncoding::NV12,
            PixelEncoding::I420,
            PixelEncoding::ARGB32,
            PixelEncoding::RGB24,
            PixelEncoding::MJPEG,
            PixelEncoding::Other(*b"Y16 "),
        ] {
            assert_eq!(encoding.to_string().parse(), Ok(encoding));
        }
    }

    #[test]
    fn test_unprintable_fourcc_round_trips_as_hex() {
        // ARGB555X: v4l2_fourcc_be('A', 'R', '1', '5')
        let encoding = PixelEncoding::from_fourcc([b'A', b'R', b'1', b'5' | 0x80]);
        assert_eq!(encoding.to_string(), "0xB5315241");

        let json = serde_json::to_string(&encoding).unwrap();
        assert_eq!(json, "\"0xB5315241\"");
        let parsed: PixelEncoding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, encoding);
        assert_eq!(parsed.fourcc(), [b'A', b'R', b'1', 0xB5]);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!("0x3231564E".parse(), Ok(PixelEncoding::NV12));
        assert_eq!("0x12".parse(), Ok(PixelEncoding::Other(*b"0x12")));
        assert!("0x0000".parse::<PixelEncoding>().is_err());
        assert!("0xZZZZZZZZ".parse::<PixelEncoding>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&PixelEncoding::NV12).unwrap();
        assert_eq!(json, "\"NV12\"");
        let parsed: PixelEncoding = serde_json::from_str("\"YV12\"").unwrap();
        assert_eq!(parsed, PixelEncoding::YV12);
        assert!(serde_json::from_str::<PixelEncoding>("\"NOT-A-FORMAT\"").is_err());
    }

    #[test]
    fn test_compressed_detection() {
        assert!(PixelEncoding::MJPEG.is_compressed());
        assert!(PixelEncoding::H264.is_compressed());
        assert!(!PixelEncoding::NV12.is_compressed());
    }
}
