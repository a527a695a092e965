use thiserror::Error;

use crate::vendor::VendorResolver;

use super::controller::{ControllerBuilder, ControllerInfo, OpenError};
use super::enumerate::{DeviceEnumerator, EnumerateError, EvdevEnumerator};
use super::filter::is_game_controller;

/// Classification of a per-device failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Permission,
    NotFound,
    InvalidDevice,
    Unknown,
}

impl From<&OpenError> for ErrorType {
    fn from(err: &OpenError) -> Self {
        match err {
            OpenError::PermissionDenied(_) => ErrorType::Permission,
            OpenError::NotFound(_) => ErrorType::NotFound,
            OpenError::InvalidDevice(_) => ErrorType::InvalidDevice,
            OpenError::Open { .. } => ErrorType::Unknown,
        }
    }
}

/// A single device's failure during a scan. Recorded in the result
/// instead of aborting the scan.
#[derive(Debug, Error)]
#[error("{error_type:?} error at {path}: {source}")]
pub struct DeviceError {
    pub path: String,
    pub error_type: ErrorType,
    #[source]
    pub source: OpenError,
}

/// The outcome of one full enumeration pass. Both lists preserve the
/// scan order of the underlying device listing.
#[derive(Debug, Default)]
pub struct DetectionResult {
    pub controllers: Vec<ControllerInfo>,
    pub errors: Vec<DeviceError>,
}

/// Orchestrates controller detection: enumerates input devices, filters
/// out everything that is not a game controller, and builds a record for
/// each match.
pub struct Manager {
    enumerator: Box<dyn DeviceEnumerator>,
    resolver: VendorResolver,
}

impl Manager {
    pub fn new() -> Self {
        Self::with_enumerator(Box::new(EvdevEnumerator))
    }

    pub fn with_enumerator(enumerator: Box<dyn DeviceEnumerator>) -> Self {
        Self {
            enumerator,
            resolver: VendorResolver::with_default_sources(),
        }
    }

    /// Run one detection pass over all input devices currently present.
    ///
    /// Enumeration failure is the only hard error. Devices that pass the
    /// filter but cannot be opened are recorded in the result and the
    /// scan moves on.
    pub fn list_controllers(&self) -> Result<DetectionResult, EnumerateError> {
        let devices = self.enumerator.enumerate()?;

        let mut result = DetectionResult::default();
        for device in devices {
            if !is_game_controller(&device) {
                log::debug!("Skipping non-controller device: {}", device.path);
                continue;
            }

            let vendor_name = self.resolver.vendor_name(device.vendor_id);
            let builder = ControllerBuilder::new(device.path.clone()).with_vendor_name(vendor_name);
            match builder.build() {
                Ok(controller) => {
                    result.controllers.push(controller.get_info());
                }
                Err(err) => {
                    log::debug!("Failed to build controller for {}: {}", device.path, err);
                    result.errors.push(DeviceError {
                        path: device.path,
                        error_type: ErrorType::from(&err),
                        source: err,
                    });
                }
            }
        }

        Ok(result)
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::input::enumerate::RawDevice;

    struct FakeEnumerator {
        devices: Vec<RawDevice>,
    }

    impl DeviceEnumerator for FakeEnumerator {
        fn enumerate(&self) -> Result<Vec<RawDevice>, EnumerateError> {
            Ok(self.devices.clone())
        }
    }

    struct FailingEnumerator;

    impl DeviceEnumerator for FailingEnumerator {
        fn enumerate(&self) -> Result<Vec<RawDevice>, EnumerateError> {
            Err(EnumerateError {
                path: "/dev/input".to_string(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            })
        }
    }

    fn controller_shaped(name: &str, path: &str) -> RawDevice {
        RawDevice {
            name: name.to_string(),
            path: path.to_string(),
            vendor_id: 0x045e,
            product_id: 0x02dd,
            key_codes: vec![0x130, 0x131],
            abs_codes: vec![0, 1],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_enumeration_is_not_an_error() {
        let manager = Manager::with_enumerator(Box::new(FakeEnumerator { devices: vec![] }));
        let result = manager.list_controllers().unwrap();
        assert!(result.controllers.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_enumeration_failure_aborts_the_scan() {
        let manager = Manager::with_enumerator(Box::new(FailingEnumerator));
        assert!(manager.list_controllers().is_err());
    }

    #[test]
    fn test_filtered_devices_leave_no_trace() {
        let mut keyboard = controller_shaped("AT Translated Set 2 keyboard", "/dev/input/event0");
        keyboard.abs_codes.clear();
        let manager = Manager::with_enumerator(Box::new(FakeEnumerator {
            devices: vec![keyboard],
        }));

        let result = manager.list_controllers().unwrap();
        assert!(result.controllers.is_empty());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_unopenable_device_is_recorded_and_scan_continues() {
        let devices = vec![
            controller_shaped("Pad One", "/dev/input/event-gone-1"),
            controller_shaped("Pad Two", "/dev/input/event-gone-2"),
        ];
        let manager = Manager::with_enumerator(Box::new(FakeEnumerator { devices }));

        let result = manager.list_controllers().unwrap();
        assert!(result.controllers.is_empty());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].path, "/dev/input/event-gone-1");
        assert_eq!(result.errors[0].error_type, ErrorType::NotFound);
        assert_eq!(result.errors[1].path, "/dev/input/event-gone-2");
    }

    #[test]
    fn test_error_classification() {
        let classify = |err: OpenError| ErrorType::from(&err);
        assert_eq!(
            classify(OpenError::PermissionDenied("/dev/input/event0".into())),
            ErrorType::Permission
        );
        assert_eq!(
            classify(OpenError::NotFound("/dev/input/event0".into())),
            ErrorType::NotFound
        );
        assert_eq!(
            classify(OpenError::InvalidDevice("/dev/input/event0".into())),
            ErrorType::InvalidDevice
        );
        assert_eq!(
            classify(OpenError::Open {
                path: "/dev/input/event0".into(),
                source: io::Error::from(io::ErrorKind::Interrupted),
            }),
            ErrorType::Unknown
        );
    }
}
