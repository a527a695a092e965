use std::fmt::Display;

use evdev::KeyCode;

/// Number of codes in the BTN_TRIGGER_HAPPY1-4 block a device must
/// report before it counts as having rear paddles. Fewer codes show up
/// on devices that reuse the trigger-happy range for unrelated buttons.
const ELITE_PADDLE_COUNT: usize = 4;

/// Hardware capabilities a controller can report beyond the basic
/// button/axis set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerCapability {
    ForceFeedback,
    ElitePaddles,
}

impl Display for ControllerCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerCapability::ForceFeedback => write!(f, "Force Feedback"),
            ControllerCapability::ElitePaddles => write!(f, "Elite Paddles"),
        }
    }
}

/// Infer controller capabilities from the reported key and force
/// feedback code lists. The key group is checked first, then the force
/// feedback group, so the result is stable for a given device.
pub fn detect(key_codes: &[u16], ff_codes: &[u16]) -> Vec<ControllerCapability> {
    let mut capabilities = Vec::with_capacity(2);
    if has_elite_paddles(key_codes) {
        capabilities.push(ControllerCapability::ElitePaddles);
    }
    if !ff_codes.is_empty() {
        capabilities.push(ControllerCapability::ForceFeedback);
    }
    capabilities
}

/// Returns true if the device reports the full paddle block.
fn has_elite_paddles(key_codes: &[u16]) -> bool {
    let min = KeyCode::BTN_TRIGGER_HAPPY1.0;
    let max = KeyCode::BTN_TRIGGER_HAPPY4.0;
    let paddle_count = key_codes
        .iter()
        .filter(|code| (min..=max).contains(*code))
        .count();
    paddle_count >= ELITE_PADDLE_COUNT
}
