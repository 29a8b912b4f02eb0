use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// An open serial link to the driver board. Implements `Write`.
///
/// This is the only capability the frame layer needs from its environment:
/// bytes in, transmitted out.
pub struct SerialStream {
    inner: SerialStreamInner,
    path: PathBuf,
}

enum SerialStreamInner {
    /// Serial line configured for 8N1. `flush` waits for the UART to drain.
    Line(Box<dyn serialport::SerialPort>),
    /// Anything else: a capture file, a FIFO, a pre-configured descriptor.
    File(File),
}

impl Write for SerialStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            SerialStreamInner::Line(port) => port.write(buf),
            SerialStreamInner::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.inner {
            SerialStreamInner::Line(port) => port.flush(),
            SerialStreamInner::File(file) => file.flush(),
        }
    }
}

impl SerialStream {
    pub(crate) fn from_line(port: Box<dyn serialport::SerialPort>, path: PathBuf) -> Self {
        Self {
            inner: SerialStreamInner::Line(port),
            path,
        }
    }

    /// Wrap an already-open file without touching its line settings.
    pub fn from_file(file: File, path: impl Into<PathBuf>) -> Self {
        Self {
            inner: SerialStreamInner::File(file),
            path: path.into(),
        }
    }

    /// True when the stream is a configured serial line.
    pub fn is_line(&self) -> bool {
        matches!(self.inner, SerialStreamInner::Line(_))
    }

    /// Path the stream was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Try to clone this stream (creates a new handle to the same device).
    pub fn try_clone(&self) -> Result<Self> {
        let inner = match &self.inner {
            SerialStreamInner::Line(port) => {
                SerialStreamInner::Line(port.try_clone().map_err(std::io::Error::from)?)
            }
            SerialStreamInner::File(file) => SerialStreamInner::File(file.try_clone()?),
        };
        Ok(Self {
            inner,
            path: self.path.clone(),
        })
    }
}

impl std::fmt::Debug for SerialStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_line() { "line" } else { "file" };
        f.debug_struct("SerialStream")
            .field("type", &kind)
            .field("path", &self.path)
            .finish()
    }
}
