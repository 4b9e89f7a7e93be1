// SPDX-License-Identifier: GPL-3.0-only

//! Media format metadata
//!
//! - [`formats`]: pixel encodings reported by capture devices

pub mod formats;

pub use formats::PixelEncoding;
