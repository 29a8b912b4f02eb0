use std::path::Path;

use lv8548step_transport::{SerialConfig, SerialPort, SerialStream};

use crate::driver::{Driver, DriverConfig};
use crate::error::Result;

/// Open a serial device with the board's default line settings.
pub fn open(path: impl AsRef<Path>) -> Result<Driver<SerialStream>> {
    open_with_config(path, &SerialConfig::default())
}

/// Open a serial device with explicit line settings.
///
/// The returned driver has not sent anything yet; call [`Driver::init`]
/// before the first motion command.
pub fn open_with_config(
    path: impl AsRef<Path>,
    config: &SerialConfig,
) -> Result<Driver<SerialStream>> {
    let stream = SerialPort::open(path, config)?;
    Ok(Driver::with_config(stream, DriverConfig::from(config)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::DriverError;

    fn temp_device(tag: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lv8548step-driver-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        std::fs::write(&path, b"").expect("capture file should be creatable");
        path
    }

    #[test]
    fn open_file_device_and_send() {
        let path = temp_device("open");
        let config = SerialConfig {
            settle_delay: Duration::ZERO,
            ..SerialConfig::default()
        };

        let mut driver = open_with_config(&path, &config).expect("device should open");
        driver.init().expect("init should send");
        driver.free().expect("free should send");
        drop(driver);

        assert_eq!(
            std::fs::read(&path).unwrap(),
            vec![0xA5, 0xFE, 0x01, 0xA5, 0xFF, 0x03, 0x6F]
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn separate_sessions_append_to_capture_file() {
        let path = temp_device("sessions");
        let config = SerialConfig {
            settle_delay: Duration::ZERO,
            ..SerialConfig::default()
        };

        let mut first = open_with_config(&path, &config).expect("device should open");
        first.init().expect("init should send");
        drop(first);

        let mut second = open_with_config(&path, &config).expect("device should reopen");
        second.hold().expect("hold should send");
        drop(second);

        assert_eq!(
            std::fs::read(&path).unwrap(),
            vec![0xA5, 0xFE, 0x01, 0xA5, 0xFF, 0x03, 0x6E]
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn open_missing_device_fails() {
        let path = temp_device("missing");
        std::fs::remove_file(&path).unwrap();

        let err = open(&path).err().expect("open should fail");
        assert!(matches!(err, DriverError::Transport(_)));
    }
}
