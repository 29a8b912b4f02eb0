use std::fs::{Metadata, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serialport::{DataBits, FlowControl, Parity, StopBits};
use tracing::{debug, info};

use crate::config::SerialConfig;
use crate::error::{Result, TransportError};
use crate::traits::SerialStream;

/// Opens serial devices.
///
/// Serial lines (`/dev/ttyUSB0`, `/dev/ttyACM0`, `COM3`, ...) are opened
/// through `serialport` as 8N1 without flow control at the configured baud
/// rate. Existing regular files and FIFOs are opened for appending and
/// written as-is, so repeated opens accumulate frames in order.
pub struct SerialPort;

impl SerialPort {
    /// Open `path` for writing with the default line settings.
    pub fn open_default(path: impl AsRef<Path>) -> Result<SerialStream> {
        Self::open(path, &SerialConfig::default())
    }

    /// Open `path` for writing and apply `config` if it is a serial line.
    ///
    /// Capture files must already exist; a mistyped device name is an
    /// error, never a new file.
    pub fn open(path: impl AsRef<Path>, config: &SerialConfig) -> Result<SerialStream> {
        let path = path.as_ref().to_path_buf();

        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Err(TransportError::Open {
                path,
                source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            }),
            Ok(meta) if is_capture_target(&meta) => open_capture(path),
            Ok(_) => open_line(path, config),
            // Windows COM ports have no filesystem entry.
            Err(_) if cfg!(windows) => open_line(path, config),
            Err(source) => Err(TransportError::Open { path, source }),
        }
    }
}

fn open_capture(path: PathBuf) -> Result<SerialStream> {
    let file = OpenOptions::new()
        .append(true)
        .open(&path)
        .map_err(|source| TransportError::Open {
            path: path.clone(),
            source,
        })?;

    debug!(?path, "not a serial line, appending frames without line configuration");
    Ok(SerialStream::from_file(file, path))
}

fn open_line(path: PathBuf, config: &SerialConfig) -> Result<SerialStream> {
    let port = serialport::new(path.to_string_lossy(), config.baud_rate.as_u32())
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(config.write_timeout)
        .open()
        .map_err(|err| open_error(path.clone(), err))?;

    info!(?path, baud = config.baud_rate.as_u32(), "serial device opened");
    Ok(SerialStream::from_line(port, path))
}

fn open_error(path: PathBuf, err: serialport::Error) -> TransportError {
    let configure = matches!(err.kind, serialport::ErrorKind::InvalidInput);
    let source = io::Error::from(err);
    if configure {
        TransportError::Configure { path, source }
    } else {
        TransportError::Open { path, source }
    }
}

#[cfg(unix)]
fn is_capture_target(meta: &Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;
    meta.is_file() || meta.file_type().is_fifo()
}

#[cfg(not(unix))]
fn is_capture_target(meta: &Metadata) -> bool {
    meta.is_file()
}
