use evdev::AbsoluteAxisCode;

use super::enumerate::RawDevice;

// BTN_SOUTH/A through BTN_THUMBR
const BTN_GAMEPAD_MIN: u16 = 0x130;
const BTN_GAMEPAD_MAX: u16 = 0x13f;
// BTN_JOYSTICK range
const BTN_JOYSTICK_MIN: u16 = 0x120;
const BTN_JOYSTICK_MAX: u16 = 0x12f;

/// Name fragments that identify devices which expose gamepad-shaped
/// capabilities without being game controllers.
const EXCLUDE_KEYWORDS: &[&str] = &[
    "keyboard",
    "mouse",
    "touchpad",
    "power button",
    "sleep button",
    "hdmi",
    "audio",
    "speaker",
    "headphone",
    "microphone",
    "line out",
    "line in",
    "led",
    "lamplight",
    "rgb",
    "system control",
    "consumer control",
];

/// Returns true if the given raw device looks like a game controller.
///
/// A controller must report both key and absolute-axis capabilities, at
/// least one button in the gamepad or joystick code range, and at least
/// one analog stick axis. Multi-function peripherals that pass those
/// shape checks are rejected by name keyword.
pub fn is_game_controller(device: &RawDevice) -> bool {
    if device.key_codes.is_empty() || device.abs_codes.is_empty() {
        return false;
    }

    let has_gamepad_button = device.key_codes.iter().any(|code| {
        (BTN_GAMEPAD_MIN..=BTN_GAMEPAD_MAX).contains(code)
            || (BTN_JOYSTICK_MIN..=BTN_JOYSTICK_MAX).contains(code)
    });
    if !has_gamepad_button {
        return false;
    }

    let stick_axes = [
        AbsoluteAxisCode::ABS_X.0,
        AbsoluteAxisCode::ABS_Y.0,
        AbsoluteAxisCode::ABS_RX.0,
        AbsoluteAxisCode::ABS_RY.0,
    ];
    let has_gamepad_axis = device
        .abs_codes
        .iter()
        .any(|code| stick_axes.contains(code));
    if !has_gamepad_axis {
        return false;
    }

    !is_excluded_by_name(&device.name)
}

/// Returns true if the device name matches the exclusion list.
fn is_excluded_by_name(name: &str) -> bool {
    let name = name.to_lowercase();
    EXCLUDE_KEYWORDS
        .iter()
        .any(|keyword| name.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gamepad_device(name: &str) -> RawDevice {
        RawDevice {
            name: name.to_string(),
            path: "/dev/input/event0".to_string(),
            key_codes: vec![0x130, 0x131, 0x133],
            abs_codes: vec![0, 1, 3, 4],
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_gamepad_shape() {
        assert!(is_game_controller(&gamepad_device("Xbox Wireless Controller")));
    }

    #[test]
    fn test_accepts_joystick_button_range() {
        let mut device = gamepad_device("Flight Stick");
        device.key_codes = vec![0x120];
        assert!(is_game_controller(&device));
    }

    #[test]
    fn test_rejects_missing_buttons() {
        let mut device = gamepad_device("Mystery Device");
        device.key_codes.clear();
        assert!(!is_game_controller(&device));
    }

    #[test]
    fn test_rejects_missing_axes() {
        let mut device = gamepad_device("Mystery Device");
        device.abs_codes.clear();
        assert!(!is_game_controller(&device));
    }

    #[test]
    fn test_rejects_buttons_outside_gamepad_ranges() {
        let mut device = gamepad_device("Mystery Device");
        // KEY_A and friends, no gamepad or joystick codes
        device.key_codes = vec![30, 31, 32];
        assert!(!is_game_controller(&device));
    }

    #[test]
    fn test_rejects_axes_outside_stick_set() {
        let mut device = gamepad_device("Mystery Device");
        // ABS_MT_* multitouch axes only
        device.abs_codes = vec![0x2f, 0x35, 0x36];
        assert!(!is_game_controller(&device));
    }

    #[test]
    fn test_rejects_excluded_names_case_insensitive() {
        for name in [
            "AT Translated Set 2 keyboard",
            "Logitech USB Optical Mouse",
            "SynPS/2 Synaptics TouchPad",
            "Power Button",
            "HDA Intel HDMI",
            "RGB Lighting Controller",
            "Consumer Control",
        ] {
            // Capability shape matches a controller, name wins
            assert!(
                !is_game_controller(&gamepad_device(name)),
                "{name} should be excluded"
            );
        }
    }

    #[test]
    fn test_exclusion_does_not_hit_controller_names() {
        assert!(is_game_controller(&gamepad_device("Sony Interactive Entertainment Wireless Controller")));
    }
}
