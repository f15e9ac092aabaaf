//! Panel discovery through the sysfs hidraw class.
//!
//! Each `/sys/class/hidraw/hidrawN/device/uevent` carries a `HID_ID` line
//! of the form `HID_ID=0003:000004D9:0000FD01` (bus : vendor : product,
//! 32-bit hex fields). Matching on vendor and product is enough — the
//! panel is the only HID interface with these IDs.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TransportError};

/// USB vendor ID of the panel (Holtek).
pub const VENDOR_ID: u16 = 0x04D9;

/// USB product ID of the panel LCD interface.
pub const PRODUCT_ID: u16 = 0xFD01;

const HIDRAW_CLASS: &str = "/sys/class/hidraw";

/// Locate the panel's `/dev/hidrawN` node.
pub fn find_panel() -> Result<PathBuf> {
    find_device(VENDOR_ID, PRODUCT_ID)
}

/// Locate the device node of an arbitrary hidraw device by USB IDs.
pub fn find_device(vendor: u16, product: u16) -> Result<PathBuf> {
    scan_class_dir(Path::new(HIDRAW_CLASS), vendor, product)
}

fn scan_class_dir(class_dir: &Path, vendor: u16, product: u16) -> Result<PathBuf> {
    let entries = std::fs::read_dir(class_dir).map_err(|source| TransportError::Scan {
        path: class_dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| TransportError::Scan {
            path: class_dir.to_path_buf(),
            source,
        })?;
        let uevent = entry.path().join("device/uevent");
        // Entries without a readable uevent are not HID devices of interest.
        let Ok(content) = std::fs::read_to_string(&uevent) else {
            continue;
        };
        if uevent_matches(&content, vendor, product) {
            let node = PathBuf::from("/dev").join(entry.file_name());
            debug!(node = %node.display(), "matched panel device");
            return Ok(node);
        }
    }

    Err(TransportError::NoDevice { vendor, product })
}

fn uevent_matches(content: &str, vendor: u16, product: u16) -> bool {
    let suffix = format!("{vendor:08X}:{product:08X}");
    content
        .lines()
        .filter_map(|line| line.strip_prefix("HID_ID="))
        .any(|id| id.ends_with(&suffix))
}
