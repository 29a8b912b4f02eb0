//! Serial transport for the LV8548 stepper driver.
//!
//! The driver board listens on an asynchronous UART (19200 baud, 8N1 by
//! default). This crate opens the host side of that link and exposes it as
//! a plain [`std::io::Write`] sink, [`SerialStream`]. Frames are written
//! fire-and-forget; nothing is read back.
//!
//! Serial lines are opened through `serialport` as 8N1 at the configured
//! baud rate. Existing regular files and FIFOs are opened for appending and
//! written as-is, which is handy for capturing frames or piping them into a
//! bridge process.

pub mod config;
pub mod error;
pub mod traits;
pub mod tty;

pub use config::{
    BaudRate, SerialConfig, DEFAULT_BAUD_RATE, DEFAULT_SETTLE_DELAY, DEFAULT_WRITE_TIMEOUT,
};
pub use error::{Result, TransportError};
pub use traits::SerialStream;
pub use tty::SerialPort;
