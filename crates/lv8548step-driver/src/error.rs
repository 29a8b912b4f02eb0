/// Errors that can occur in driver operations.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Transport-level error (opening or configuring the device).
    #[error("transport error: {0}")]
    Transport(#[from] lv8548step_transport::TransportError),

    /// Frame-level error (invalid parameter or failed write).
    #[error("frame error: {0}")]
    Frame(#[from] lv8548step_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, DriverError>;
