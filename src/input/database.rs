use std::fmt::Display;

/// Known controller models, derived purely from the USB vendor and
/// product id pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerType {
    #[default]
    Unknown,
    XboxOne,
    XboxSeries,
    XboxElite,
    DualShock4,
    DualSense,
    Generic,
}

impl Display for ControllerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerType::Unknown => write!(f, "Unknown"),
            ControllerType::XboxOne => write!(f, "Xbox One"),
            ControllerType::XboxSeries => write!(f, "Xbox Series X/S"),
            ControllerType::XboxElite => write!(f, "Xbox Elite"),
            ControllerType::DualShock4 => write!(f, "DualShock 4"),
            ControllerType::DualSense => write!(f, "DualSense"),
            ControllerType::Generic => write!(f, "Generic"),
        }
    }
}

/// Signatures of controllers with model-specific handling. Pairs not in
/// this table are still perfectly usable, they just classify as Generic.
const KNOWN_CONTROLLERS: &[(u16, u16, ControllerType)] = &[
    // Xbox One
    (0x045e, 0x02dd, ControllerType::XboxOne), // Xbox One Controller (2013, fw 2015)
    (0x045e, 0x02ea, ControllerType::XboxOne), // Xbox One S (dongle)
    (0x045e, 0x02fd, ControllerType::XboxOne), // Xbox One S (Bluetooth)
    // Xbox Series
    (0x045e, 0x0b12, ControllerType::XboxSeries), // Xbox Series X/S (USB)
    (0x045e, 0x0b13, ControllerType::XboxSeries), // Xbox Series X/S (Bluetooth)
    // Xbox Elite
    (0x045e, 0x02e3, ControllerType::XboxElite), // Elite Series 1
    (0x045e, 0x0b00, ControllerType::XboxElite), // Elite Series 2
    // PlayStation
    (0x054c, 0x05c4, ControllerType::DualShock4), // DualShock 4 gen 1
    (0x054c, 0x09cc, ControllerType::DualShock4), // DualShock 4 gen 2
    (0x054c, 0x0ce6, ControllerType::DualSense),  // DualSense (PS5)
];

/// Returns the controller model for the given vendor/product id pair.
pub fn identify_controller(vendor_id: u16, product_id: u16) -> ControllerType {
    for (vid, pid, controller_type) in KNOWN_CONTROLLERS {
        if *vid == vendor_id && *pid == product_id {
            return *controller_type;
        }
    }
    ControllerType::Generic
}
