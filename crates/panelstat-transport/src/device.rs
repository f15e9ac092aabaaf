use std::fs::File;
use std::io::Write;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, TransportError};

/// A write-only handle on the panel's hidraw character device.
///
/// The handle offers plain blocking `Write`; the protocol layer above it
/// owns the write-it-all loop, so a `PanelDevice` behaves like any other
/// byte sink. The device sends nothing back.
pub struct PanelDevice {
    file: File,
    path: PathBuf,
}

impl PanelDevice {
    /// Open the device node at `path` write-only.
    ///
    /// Refuses paths that are not character devices — writing a packet
    /// stream into an ordinary file silently accomplishes nothing, so that
    /// mistake is caught here.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let metadata = std::fs::metadata(&path).map_err(|source| TransportError::Open {
            path: path.clone(),
            source,
        })?;
        if !metadata.file_type().is_char_device() {
            return Err(TransportError::NotACharDevice { path });
        }

        let file = File::options()
            .write(true)
            .open(&path)
            .map_err(|source| TransportError::Open {
                path: path.clone(),
                source,
            })?;

        info!(?path, "opened panel device");

        Ok(Self { file, path })
    }

    /// The device node path this handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for PanelDevice {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

impl std::fmt::Debug for PanelDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelDevice")
            .field("path", &self.path)
            .finish()
    }
}
