use std::io;

use evdev::Device;
use thiserror::Error;

use super::capability::{self, ControllerCapability};
use super::database::{self, ControllerType};

/// Sentinel causes for a device that could not be turned into a
/// controller record. The device manager classifies these structurally.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("device not found or disconnected: {0}")]
    NotFound(String),
    #[error("permission denied accessing device: {0}")]
    PermissionDenied(String),
    #[error("device is not a valid controller: {0}")]
    InvalidDevice(String),
    #[error("failed to open device {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Detection record for a single controller.
#[derive(Debug, Clone)]
pub struct ControllerInfo {
    pub path: String,
    pub name: String,
    pub controller_type: ControllerType,
    pub vendor_id: u16,
    pub vendor_name: String,
    pub product_id: u16,
    pub capabilities: Vec<ControllerCapability>,
}

/// Opens a device path and assembles a [Controller] with a previously
/// resolved vendor name attached.
pub struct ControllerBuilder {
    path: String,
    vendor_name: Option<String>,
}

impl ControllerBuilder {
    pub fn new(path: String) -> Self {
        Self {
            path,
            vendor_name: None,
        }
    }

    pub fn with_vendor_name(mut self, name: String) -> Self {
        self.vendor_name = Some(name);
        self
    }

    /// Open the device and wrap it. The open handle is the authoritative
    /// source for ids and capabilities; enumeration data may be stale by
    /// the time a device is built.
    pub fn build(self) -> Result<Controller, OpenError> {
        log::debug!("Opening device at: {}", self.path);
        let device = Device::open(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => OpenError::NotFound(self.path.clone()),
            io::ErrorKind::PermissionDenied => OpenError::PermissionDenied(self.path.clone()),
            _ => OpenError::Open {
                path: self.path.clone(),
                source: err,
            },
        })?;

        // Opened but reporting no keys at all cannot be a controller
        let has_keys = device
            .supported_keys()
            .map(|keys| keys.iter().next().is_some())
            .unwrap_or(false);
        if !has_keys {
            return Err(OpenError::InvalidDevice(self.path));
        }

        Ok(Controller {
            device,
            path: self.path,
            vendor_name: self.vendor_name.unwrap_or_else(|| "Unknown".to_string()),
        })
    }
}

/// An open handle to a physical game controller. The underlying device
/// is released when the value is dropped.
pub struct Controller {
    device: Device,
    path: String,
    vendor_name: String,
}

impl Controller {
    /// Assemble the detection record from the open handle.
    pub fn get_info(&self) -> ControllerInfo {
        let id = self.device.input_id();
        let key_codes: Vec<u16> = self
            .device
            .supported_keys()
            .map(|keys| keys.iter().map(|key| key.0).collect())
            .unwrap_or_default();
        let ff_codes: Vec<u16> = self
            .device
            .supported_ff()
            .map(|effects| effects.iter().map(|effect| effect.0).collect())
            .unwrap_or_default();

        ControllerInfo {
            path: self.path.clone(),
            name: self.device.name().unwrap_or_default().to_string(),
            controller_type: database::identify_controller(id.vendor(), id.product()),
            vendor_id: id.vendor(),
            vendor_name: self.vendor_name.clone(),
            product_id: id.product(),
            capabilities: capability::detect(&key_codes, &ff_codes),
        }
    }
}
