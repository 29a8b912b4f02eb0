use std::fmt;

use bytes::{Bytes, BytesMut};

use crate::angle::{AngleValue, StepAngle};
use crate::codec::{
    encode_command, INIT_FRAME_LEN, MOTION_FRAME_LEN, ROTATION_FRAME_LEN, STEP_ANGLE_FRAME_LEN,
};
use crate::error::FrameError;

/// Rotor direction byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    ClockWise = 0,
    CounterClockWise = 1,
}

impl Direction {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::ClockWise),
            1 => Ok(Direction::CounterClockWise),
            other => Err(FrameError::invalid("direction", other)),
        }
    }
}

/// Coil excitation scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Excitation {
    FullStep = 0,
    HalfStep = 1,
}

impl Excitation {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Excitation {
    type Error = FrameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Excitation::FullStep),
            1 => Ok(Excitation::HalfStep),
            other => Err(FrameError::invalid("excitation", other)),
        }
    }
}

/// Parameters shared by the three rotation commands.
///
/// `extent` is degrees, time units or a step count depending on which
/// rotation command carries it. Both integers go on the wire as raw
/// two's-complement little-endian words.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub frequency: i32,
    pub extent: i32,
    pub direction: Direction,
    pub excitation: Excitation,
}

impl Rotation {
    pub fn new(frequency: i32, extent: i32, direction: Direction, excitation: Excitation) -> Self {
        Self {
            frequency,
            extent,
            direction,
            excitation,
        }
    }
}

/// Opcode byte that follows the frame header.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Initialize = 0x01,
    SetStepAngle = 0x69,
    RotateByDegrees = 0x6A,
    RotateByTime = 0x6B,
    RotateBySteps = 0x6C,
    Hold = 0x6E,
    Free = 0x6F,
}

impl Opcode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Initialize => "initialize",
            Opcode::SetStepAngle => "set_step_angle",
            Opcode::RotateByDegrees => "rotate_by_degrees",
            Opcode::RotateByTime => "rotate_by_time",
            Opcode::RotateBySteps => "rotate_by_steps",
            Opcode::Hold => "hold",
            Opcode::Free => "free",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single command to the driver board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// One-time startup frame.
    Initialize,
    SetStepAngle(AngleValue),
    RotateByDegrees(Rotation),
    RotateByTime(Rotation),
    RotateBySteps(Rotation),
    /// Engage holding torque.
    Hold,
    /// Release the motor so it coasts.
    Free,
}

impl Command {
    pub fn set_step_angle(angle: StepAngle) -> Self {
        Command::SetStepAngle(AngleValue::Fixed(angle))
    }

    pub fn opcode(&self) -> Opcode {
        match self {
            Command::Initialize => Opcode::Initialize,
            Command::SetStepAngle(_) => Opcode::SetStepAngle,
            Command::RotateByDegrees(_) => Opcode::RotateByDegrees,
            Command::RotateByTime(_) => Opcode::RotateByTime,
            Command::RotateBySteps(_) => Opcode::RotateBySteps,
            Command::Hold => Opcode::Hold,
            Command::Free => Opcode::Free,
        }
    }

    /// Total frame length in bytes, header included.
    pub fn wire_size(&self) -> usize {
        match self {
            Command::Initialize => INIT_FRAME_LEN,
            Command::SetStepAngle(_) => STEP_ANGLE_FRAME_LEN,
            Command::RotateByDegrees(_) | Command::RotateByTime(_) | Command::RotateBySteps(_) => {
                ROTATION_FRAME_LEN
            }
            Command::Hold | Command::Free => MOTION_FRAME_LEN,
        }
    }

    /// Append this command's frame to `dst`.
    pub fn encode_into(&self, dst: &mut BytesMut) {
        encode_command(self, dst);
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.wire_size());
        self.encode_into(&mut buf);
        buf.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_and_excitation_raw_values() {
        assert_eq!(Direction::ClockWise.as_u8(), 0);
        assert_eq!(Direction::CounterClockWise.as_u8(), 1);
        assert_eq!(Excitation::FullStep.as_u8(), 0);
        assert_eq!(Excitation::HalfStep.as_u8(), 1);
    }

    #[test]
    fn raw_bytes_validated() {
        assert_eq!(Direction::try_from(1).unwrap(), Direction::CounterClockWise);
        assert_eq!(Excitation::try_from(0).unwrap(), Excitation::FullStep);
        assert!(matches!(
            Direction::try_from(2),
            Err(FrameError::InvalidParameter {
                name: "direction",
                value: 2
            })
        ));
        assert!(matches!(
            Excitation::try_from(9),
            Err(FrameError::InvalidParameter {
                name: "excitation",
                value: 9
            })
        ));
    }

    #[test]
    fn wire_size_matches_encoded_length() {
        let rotation = Rotation::new(200, 90, Direction::ClockWise, Excitation::HalfStep);
        let commands = [
            Command::Initialize,
            Command::set_step_angle(StepAngle::Deg1_8),
            Command::SetStepAngle(AngleValue::Degrees(-30)),
            Command::RotateByDegrees(rotation),
            Command::RotateByTime(rotation),
            Command::RotateBySteps(rotation),
            Command::Hold,
            Command::Free,
        ];
        for command in commands {
            assert_eq!(command.to_bytes().len(), command.wire_size(), "{command:?}");
        }
    }

    #[test]
    fn opcode_byte_follows_header() {
        let bytes = Command::Free.to_bytes();
        assert_eq!(bytes[3], Command::Free.opcode().as_u8());
        assert_eq!(Command::Initialize.to_bytes()[2], Opcode::Initialize.as_u8());
    }
}
