//! Filesystem usage via `statvfs(3)`.

use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::error::{MetricsError, Result};
use crate::units::percent_of;

/// Filesystem totals in bytes for one mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    /// Bytes available to unprivileged users (`f_bavail`).
    pub available: u64,
}

impl DiskUsage {
    /// Used share as a rounded percentage.
    pub fn used_percent(&self) -> u32 {
        percent_of(self.used, self.total)
    }
}

/// Query usage of the filesystem containing `path`.
pub fn usage(path: &Path) -> Result<DiskUsage> {
    let c_path =
        CString::new(path.as_os_str().as_bytes()).map_err(|_| MetricsError::InvalidPath {
            path: path.to_path_buf(),
        })?;

    let mut vfs: libc::statvfs = unsafe { std::mem::zeroed() };
    // SAFETY: `c_path` is a valid NUL-terminated string and `vfs` is a
    // writable out-parameter of the type statvfs expects.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut vfs) };
    if rc != 0 {
        return Err(MetricsError::Sys {
            call: "statvfs",
            source: std::io::Error::last_os_error(),
        });
    }

    // f_frsize is the fundamental block size; fall back to f_bsize when a
    // filesystem reports zero.
    let block = if vfs.f_frsize > 0 {
        vfs.f_frsize
    } else {
        vfs.f_bsize
    } as u64;

    let total = vfs.f_blocks as u64 * block;
    let free = vfs.f_bfree as u64 * block;
    Ok(DiskUsage {
        total,
        used: total.saturating_sub(free),
        available: vfs.f_bavail as u64 * block,
    })
}
