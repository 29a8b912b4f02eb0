//! Step-angle selection for the `SetStepAngle` command.
//!
//! The driver understands a handful of standard motor step angles. Each is
//! sent as the single-precision bit pattern of its degree value, looked up
//! from a fixed table by selector index.

use std::fmt;
use std::str::FromStr;

use crate::error::FrameError;
use crate::float::encode_f32_bits;

/// Precomputed IEEE-754 patterns, indexed by selector.
const STEP_ANGLE_BITS: [u32; 7] = [
    0x3F66_6666, // 0.9
    0x3FE6_6666, // 1.8
    0x4066_6666, // 3.6
    0x4070_0000, // 3.75
    0x40F0_0000, // 7.5
    0x4170_0000, // 15
    0x4190_0000, // 18
];

/// Standard motor step angles, in degrees per full step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StepAngle {
    Deg0_9 = 0,
    Deg1_8 = 1,
    /// Sends the true 3.6° pattern `0x4066_6666` from table slot 2. The
    /// legacy raw selector 3, once labelled 3.6, maps to [`StepAngle::Deg3_75`].
    Deg3_6 = 2,
    Deg3_75 = 3,
    Deg7_5 = 4,
    Deg15 = 5,
    Deg18 = 6,
}

impl StepAngle {
    pub const ALL: [StepAngle; 7] = [
        StepAngle::Deg0_9,
        StepAngle::Deg1_8,
        StepAngle::Deg3_6,
        StepAngle::Deg3_75,
        StepAngle::Deg7_5,
        StepAngle::Deg15,
        StepAngle::Deg18,
    ];

    /// Table index of this angle.
    pub fn selector(self) -> u8 {
        self as u8
    }

    /// IEEE-754 bit pattern sent on the wire.
    pub fn bits(self) -> u32 {
        STEP_ANGLE_BITS[self as usize]
    }

    pub fn degrees(self) -> f32 {
        f32::from_bits(self.bits())
    }

    /// Label used on the command line and in output.
    pub fn label(self) -> &'static str {
        match self {
            StepAngle::Deg0_9 => "0.9",
            StepAngle::Deg1_8 => "1.8",
            StepAngle::Deg3_6 => "3.6",
            StepAngle::Deg3_75 => "3.75",
            StepAngle::Deg7_5 => "7.5",
            StepAngle::Deg15 => "15",
            StepAngle::Deg18 => "18",
        }
    }
}

impl TryFrom<u8> for StepAngle {
    type Error = FrameError;

    /// Map a raw table selector. Selector 3 is 3.75 degrees.
    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        StepAngle::ALL
            .get(usize::from(selector))
            .copied()
            .ok_or_else(|| FrameError::invalid("step angle selector", selector))
    }
}

impl FromStr for StepAngle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches("deg");
        StepAngle::ALL
            .into_iter()
            .find(|angle| angle.label() == s)
            .ok_or_else(|| {
                let labels: Vec<&str> = StepAngle::ALL.iter().map(|a| a.label()).collect();
                format!("unknown step angle {s:?} (expected one of {})", labels.join(", "))
            })
    }
}

impl fmt::Display for StepAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.label())
    }
}

/// Angle payload of a `SetStepAngle` frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AngleValue {
    /// One of the standard step angles, taken from the table.
    Fixed(StepAngle),
    /// A whole number of degrees, float-encoded at call time.
    Degrees(i32),
}

impl AngleValue {
    pub fn bits(self) -> u32 {
        match self {
            AngleValue::Fixed(angle) => angle.bits(),
            AngleValue::Degrees(degrees) => encode_f32_bits(degrees),
        }
    }
}

impl From<StepAngle> for AngleValue {
    fn from(angle: StepAngle) -> Self {
        AngleValue::Fixed(angle)
    }
}
