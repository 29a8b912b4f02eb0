//! Command encoder for the LV8548 stepper driver board.
//!
//! lv8548step turns motion requests (step angle, rotation by degrees, time
//! or steps, hold, free) into the board's fixed-layout serial frames and
//! writes them to a UART.
//!
//! # Crate Structure
//!
//! - [`transport`]: Serial device access (TTY raw mode, baud rate)
//! - [`frame`]: Frame layouts, step-angle table and the truncating float encoder
//! - [`driver`]: Blocking command driver over a serial sink (behind `driver` feature)

/// Re-export transport types.
pub mod transport {
    pub use lv8548step_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use lv8548step_frame::*;
}

/// Re-export driver types (requires `driver` feature).
#[cfg(feature = "driver")]
pub mod driver {
    pub use lv8548step_driver::*;
}
