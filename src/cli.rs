// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for viewfinder configuration
//!
//! This module provides command-line functionality for:
//! - Listing capture devices and the configurations they report
//! - Selecting (and optionally applying) a viewfinder configuration
//! - Showing the effective encoding preferences

use std::path::PathBuf;
use viewfinder::backends::camera::{CaptureDevice, FixtureDevice};
use viewfinder::frame_handler::SharedOrientation;
use viewfinder::{
    Config, PixelEncoding, TargetPlatform, configure_viewfinder, select_viewfinder_configuration,
};

/// Options shared by `select`
pub struct SelectOptions {
    pub device: Option<String>,
    pub fixture: Option<PathBuf>,
    pub platform: Option<TargetPlatform>,
    pub encodings: Vec<PixelEncoding>,
    pub apply: bool,
}

/// List all capture devices with their configurations
#[cfg(target_os = "linux")]
pub fn list_devices() -> Result<(), Box<dyn std::error::Error>> {
    use viewfinder::backends::camera::enumerate_v4l2_devices;

    let devices = enumerate_v4l2_devices();

    if devices.is_empty() {
        println!("No capture devices found.");
        return Ok(());
    }

    println!("Capture devices:");
    println!();
    for device in devices {
        let info = device.info();
        println!("  {} ({}, driver {})", info.path, info.card, info.driver);
        if !info.bus.is_empty() {
            println!("      Bus: {}", info.bus);
        }
        println!("      Orientation: {}", device.orientation());
        match device.enumerate_supported_configurations() {
            Ok(configs) => {
                println!("      # of settings: {}", configs.len());
                for config in configs {
                    let note = if config.pixel_encoding.is_compressed() {
                        " [compressed]"
                    } else {
                        ""
                    };
                    println!("      {}{}", config, note);
                }
            }
            Err(e) => println!("      {}", e),
        }
        println!();
    }

    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn list_devices() -> Result<(), Box<dyn std::error::Error>> {
    Err("Device listing needs V4L2, which is only available on Linux".into())
}

/// Select a viewfinder configuration and optionally apply it
pub fn select(options: SelectOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;

    let (platform, preferred) = config.resolve_preferences(options.platform, &options.encodings);

    let (mut device, device_path) = open_device(&options, &config)?;

    println!("Device: {}", device.name());
    println!("Platform: {}", platform);
    println!("Accepted encodings: {}", preferred);

    if options.apply {
        let handlers = SharedOrientation::new();
        let applied = configure_viewfinder(device.as_mut(), &preferred, Some(&handlers))?;
        let rotation = handlers.orientation();
        println!("Applied: {}", applied);
        println!("Orientation: {}", rotation);
        println!("Upright frame: {}", applied.resolution.oriented(rotation));

        if let Some(path) = device_path {
            config.last_device_path = Some(path);
            if let Err(e) = config.save() {
                tracing::warn!(error = %e, "Failed to remember last device");
            }
        }
    } else {
        let configs = device.enumerate_supported_configurations()?;
        let best = select_viewfinder_configuration(&configs, &preferred)?;
        println!("Selected: {} (area {})", best, best.area());
    }

    Ok(())
}

/// Print the config file location and the preferences per platform
pub fn show_config() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match Config::default_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no config directory)"),
    }
    println!("Effective platform: {}", config.effective_platform());
    if let Some(path) = &config.last_device_path {
        println!("Last device: {}", path);
    }
    println!();
    for platform in TargetPlatform::ALL {
        let source = if config.preferred_encodings.contains_key(&platform) {
            "override"
        } else {
            "default"
        };
        println!(
            "  {:<8} {} ({})",
            platform,
            config.preferences_for(platform),
            source
        );
    }

    Ok(())
}

/// Open the fixture or V4L2 device named by the options
///
/// Returns the device and, for real hardware, its path.
fn open_device(
    options: &SelectOptions,
    config: &Config,
) -> Result<(Box<dyn CaptureDevice>, Option<String>), Box<dyn std::error::Error>> {
    if let Some(fixture) = &options.fixture {
        return Ok((Box::new(FixtureDevice::load(fixture)?), None));
    }

    let path = options
        .device
        .clone()
        .or_else(|| config.last_device_path.clone());
    open_v4l2(path)
}

#[cfg(target_os = "linux")]
fn open_v4l2(
    path: Option<String>,
) -> Result<(Box<dyn CaptureDevice>, Option<String>), Box<dyn std::error::Error>> {
    use viewfinder::backends::camera::{V4l2Device, enumerate_v4l2_devices};

    let device = match path {
        Some(path) => V4l2Device::open(&path)?,
        None => enumerate_v4l2_devices()
            .into_iter()
            .next()
            .ok_or("No capture devices found")?,
    };

    let path = device.info().path.clone();
    Ok((Box::new(device), Some(path)))
}

#[cfg(not(target_os = "linux"))]
fn open_v4l2(
    _path: Option<String>,
) -> Result<(Box<dyn CaptureDevice>, Option<String>), Box<dyn std::error::Error>> {
    Err("V4L2 devices are only available on Linux; use --fixture".into())
}
