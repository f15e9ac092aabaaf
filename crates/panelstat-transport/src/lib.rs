//! Transport layer for the front-panel LCD.
//!
//! The panel enumerates as a USB HID device; on Linux the kernel exposes it
//! as a `/dev/hidrawN` character device that accepts raw output reports via
//! `write(2)`. This crate opens that node write-only ([`PanelDevice`]) and
//! locates it by USB VID:PID through sysfs ([`find_panel`]).
//!
//! Packets are written by the protocol layer; the device never sends
//! anything we read.

pub mod device;
pub mod discover;
pub mod error;

pub use device::PanelDevice;
pub use discover::{find_device, find_panel, PRODUCT_ID, VENDOR_ID};
pub use error::{Result, TransportError};
