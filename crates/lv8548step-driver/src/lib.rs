//! Blocking command driver for the LV8548 stepper board.
//!
//! Pairs a serial sink with the frame encoder: open a device, call
//! [`Driver::init`] once, then issue motion commands. Every call encodes one
//! frame, writes it and returns; the board never acknowledges.

pub mod connector;
pub mod driver;
pub mod error;

pub use connector::{open, open_with_config};
pub use driver::{Driver, DriverConfig};
pub use error::{DriverError, Result};
