/// Errors that can occur while building or writing command frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A raw parameter is outside the range the driver accepts.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: i64 },

    /// An I/O error occurred while writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying sink stopped accepting bytes mid-frame.
    #[error("connection closed (incomplete frame)")]
    ConnectionClosed,
}

impl FrameError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<i64>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
