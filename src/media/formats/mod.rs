// SPDX-License-Identifier: GPL-3.0-only

//! Pixel format utilities

pub mod pixel_encoding;

pub use pixel_encoding::{ParseEncodingError, PixelEncoding};
