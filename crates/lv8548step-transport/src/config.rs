use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::TransportError;

/// Line rate the LV8548 board ships with.
pub const DEFAULT_BAUD_RATE: BaudRate = BaudRate::B19200;

/// Pause between opening the line and sending the init frame.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Longest a single write may block on a serial line.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Standard UART line rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaudRate {
    B1200,
    B2400,
    B4800,
    B9600,
    B19200,
    B38400,
    B57600,
    B115200,
}

impl BaudRate {
    pub const ALL: [BaudRate; 8] = [
        BaudRate::B1200,
        BaudRate::B2400,
        BaudRate::B4800,
        BaudRate::B9600,
        BaudRate::B19200,
        BaudRate::B38400,
        BaudRate::B57600,
        BaudRate::B115200,
    ];

    pub fn as_u32(self) -> u32 {
        match self {
            BaudRate::B1200 => 1200,
            BaudRate::B2400 => 2400,
            BaudRate::B4800 => 4800,
            BaudRate::B9600 => 9600,
            BaudRate::B19200 => 19200,
            BaudRate::B38400 => 38400,
            BaudRate::B57600 => 57600,
            BaudRate::B115200 => 115200,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = TransportError;

    fn try_from(rate: u32) -> Result<Self, Self::Error> {
        BaudRate::ALL
            .into_iter()
            .find(|baud| baud.as_u32() == rate)
            .ok_or(TransportError::UnsupportedBaudRate(rate))
    }
}

impl FromStr for BaudRate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rate: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid baud rate: {s}"))?;
        BaudRate::try_from(rate).map_err(|err| err.to_string())
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Serial line settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialConfig {
    /// Line rate applied to serial lines. Ignored for plain files.
    pub baud_rate: BaudRate,
    /// Delay after opening before the first (init) frame may be sent.
    pub settle_delay: Duration,
    /// Write timeout on serial lines. Ignored for plain files.
    pub write_timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            settle_delay: DEFAULT_SETTLE_DELAY,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_board() {
        let config = SerialConfig::default();
        assert_eq!(config.baud_rate.as_u32(), 19200);
        assert_eq!(config.settle_delay, Duration::from_millis(100));
        assert_eq!(config.write_timeout, Duration::from_secs(1));
    }

    #[test]
    fn baud_rate_from_u32() {
        assert_eq!(BaudRate::try_from(9600).unwrap(), BaudRate::B9600);
        assert_eq!(BaudRate::try_from(115200).unwrap(), BaudRate::B115200);
        assert!(matches!(
            BaudRate::try_from(12345),
            Err(TransportError::UnsupportedBaudRate(12345))
        ));
    }

    #[test]
    fn baud_rate_parse() {
        assert_eq!("19200".parse::<BaudRate>().unwrap(), BaudRate::B19200);
        assert!("fast".parse::<BaudRate>().is_err());
        assert!("250000".parse::<BaudRate>().is_err());
    }

    #[test]
    fn display_is_numeric() {
        for baud in BaudRate::ALL {
            assert_eq!(baud.to_string(), baud.as_u32().to_string());
        }
    }
}
