use std::fs;
use std::io;

use evdev::Device;
use thiserror::Error;

/// Base path of the input event subsystem
const INPUT_PATH: &str = "/dev/input";

/// Failure to list the input devices present on the system. This aborts a
/// scan; individual devices that cannot be read do not.
#[derive(Debug, Error)]
#[error("failed to enumerate input devices at {path}: {source}")]
pub struct EnumerateError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Snapshot of a single input device as reported by the kernel: identity
/// plus the capability codes it claims, flattened per event category.
#[derive(Debug, Clone, Default)]
pub struct RawDevice {
    pub name: String,
    pub path: String,
    pub vendor_id: u16,
    pub product_id: u16,
    pub key_codes: Vec<u16>,
    pub abs_codes: Vec<u16>,
    pub ff_codes: Vec<u16>,
}

impl RawDevice {
    /// Snapshot the given open evdev device.
    pub fn from_evdev(path: &str, device: &Device) -> Self {
        let id = device.input_id();
        let key_codes = device
            .supported_keys()
            .map(|keys| keys.iter().map(|key| key.0).collect())
            .unwrap_or_default();
        let abs_codes = device
            .supported_absolute_axes()
            .map(|axes| axes.iter().map(|axis| axis.0).collect())
            .unwrap_or_default();
        let ff_codes = device
            .supported_ff()
            .map(|effects| effects.iter().map(|effect| effect.0).collect())
            .unwrap_or_default();

        Self {
            name: device.name().unwrap_or_default().to_string(),
            path: path.to_string(),
            vendor_id: id.vendor(),
            product_id: id.product(),
            key_codes,
            abs_codes,
            ff_codes,
        }
    }
}

/// Source of raw input devices. The production implementation reads the
/// kernel's input subsystem; tests substitute their own listings.
pub trait DeviceEnumerator {
    fn enumerate(&self) -> Result<Vec<RawDevice>, EnumerateError>;
}

/// Enumerates input devices by walking '/dev/input' and opening each
/// event device.
pub struct EvdevEnumerator;

impl DeviceEnumerator for EvdevEnumerator {
    fn enumerate(&self) -> Result<Vec<RawDevice>, EnumerateError> {
        let entries = fs::read_dir(INPUT_PATH).map_err(|source| EnumerateError {
            path: INPUT_PATH.to_string(),
            source,
        })?;

        let mut devices: Vec<RawDevice> = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            let filename = entry.file_name();
            let Some(filename) = filename.to_str() else {
                continue;
            };

            // Ignore non event devices
            if !filename.starts_with("event") {
                log::debug!("Ignoring device: {}", entry.path().display());
                continue;
            }

            let path = entry.path().display().to_string();
            let device = match Device::open(&path) {
                Ok(device) => device,
                Err(err) => {
                    log::debug!("Unable to open event device {}: {}", path, err);
                    continue;
                }
            };

            devices.push(RawDevice::from_evdev(&path, &device));
        }

        // read_dir order is arbitrary; keep scans stable across runs
        devices.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(devices)
    }
}
