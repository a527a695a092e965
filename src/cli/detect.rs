use std::error::Error;
use std::fmt::Write;

use crate::input::controller::ControllerInfo;
use crate::input::manager::Manager;

/// Scan for connected game controllers and print a report for each one
/// that was found.
pub fn handle_detect() -> Result<(), Box<dyn Error>> {
    let manager = Manager::new();
    let result = manager.list_controllers()?;

    for err in result.errors.iter() {
        log::warn!("Unable to query device: {err}");
    }

    println!("Found {} controller(s):", result.controllers.len());
    println!();
    for (i, info) in result.controllers.iter().enumerate() {
        print!("{}", format_controller(i, info));
    }

    Ok(())
}

/// Render a single controller record in the tree layout used by the
/// `detect` subcommand.
fn format_controller(index: usize, info: &ControllerInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {} ({})", index, info.name, info.path);
    let _ = writeln!(out, " ├─ Type: {}", info.controller_type);
    let _ = writeln!(out, " ├─ Vendor:");
    let _ = writeln!(out, " │  ├─ ID: {:04X}", info.vendor_id);
    let _ = writeln!(out, " │  └─ Name: {}", info.vendor_name);
    let _ = writeln!(out, " ├─ Product ID: {:04X}", info.product_id);
    let _ = writeln!(out, " └─ Capabilities:");
    let count = info.capabilities.len();
    for (i, cap) in info.capabilities.iter().enumerate() {
        let prefix = if i == count - 1 {
            "    └─ "
        } else {
            "    ├─ "
        };
        let _ = writeln!(out, "{}{}", prefix, cap);
    }
    out
}
