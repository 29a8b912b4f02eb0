use bytes::{BufMut, Bytes, BytesMut};

use crate::angle::{AngleValue, StepAngle};
use crate::command::{Command, Direction, Excitation, Opcode, Rotation};

/// First byte of every frame.
pub const SYNC: u8 = 0xA5;

/// Class byte of the one-time initialization frame.
pub const CLASS_INIT: u8 = 0xFE;

/// Class byte of every operational frame.
pub const CLASS_OPERATIONAL: u8 = 0xFF;

/// Length/flag byte preceding the `SetStepAngle` opcode.
pub const STEP_ANGLE_FLAG: u8 = 0x05;

/// Length/flag byte preceding rotation, hold and free opcodes.
pub const MOTION_FLAG: u8 = 0x03;

/// `A5 FE 01`.
pub const INIT_FRAME_LEN: usize = 3;

/// Header (4) + angle bits (4).
pub const STEP_ANGLE_FRAME_LEN: usize = 8;

/// Header (4) + frequency (4) + extent (4) + direction (1) + excitation (1).
pub const ROTATION_FRAME_LEN: usize = 14;

/// Header only: hold and free carry no payload.
pub const MOTION_FRAME_LEN: usize = 4;

/// Encode a command into the wire format.
///
/// Operational frames:
/// ```text
/// ┌──────┬───────┬───────────┬────────┬───────────────────────────┐
/// │ Sync │ Class │ Len/flag  │ Opcode │ Payload (little-endian)   │
/// │ 0xA5 │ 0xFF  │ 0x03/0x05 │ 0x69.. │ fixed layout per opcode   │
/// └──────┴───────┴───────────┴────────┴───────────────────────────┘
/// ```
///
/// The initialization frame is the three bytes `A5 FE 01`.
pub fn encode_command(command: &Command, dst: &mut BytesMut) {
    dst.reserve(command.wire_size());
    match command {
        Command::Initialize => {
            dst.put_u8(SYNC);
            dst.put_u8(CLASS_INIT);
            dst.put_u8(Opcode::Initialize.as_u8());
        }
        Command::SetStepAngle(angle) => {
            put_header(dst, STEP_ANGLE_FLAG, Opcode::SetStepAngle);
            dst.put_u32_le(angle.bits());
        }
        Command::RotateByDegrees(rotation) => {
            put_rotation(dst, Opcode::RotateByDegrees, rotation)
        }
        Command::RotateByTime(rotation) => put_rotation(dst, Opcode::RotateByTime, rotation),
        Command::RotateBySteps(rotation) => put_rotation(dst, Opcode::RotateBySteps, rotation),
        Command::Hold => put_header(dst, MOTION_FLAG, Opcode::Hold),
        Command::Free => put_header(dst, MOTION_FLAG, Opcode::Free),
    }
}

fn put_header(dst: &mut BytesMut, flag: u8, opcode: Opcode) {
    dst.put_slice(&[SYNC, CLASS_OPERATIONAL, flag, opcode.as_u8()]);
}

fn put_rotation(dst: &mut BytesMut, opcode: Opcode, rotation: &Rotation) {
    put_header(dst, MOTION_FLAG, opcode);
    dst.put_i32_le(rotation.frequency);
    dst.put_i32_le(rotation.extent);
    dst.put_u8(rotation.direction.as_u8());
    dst.put_u8(rotation.excitation.as_u8());
}

fn build(command: Command) -> Bytes {
    command.to_bytes()
}

/// `A5 FE 01`: sent once after the serial line settles.
pub fn build_initialize() -> Bytes {
    build(Command::Initialize)
}

/// Select one of the standard step angles.
pub fn build_set_step_angle(angle: StepAngle) -> Bytes {
    build(Command::SetStepAngle(AngleValue::Fixed(angle)))
}

/// Set the step angle to a whole number of degrees, float-encoded.
pub fn build_set_step_angle_degrees(degrees: i32) -> Bytes {
    build(Command::SetStepAngle(AngleValue::Degrees(degrees)))
}

pub fn build_rotate_by_degrees(
    frequency: i32,
    degrees: i32,
    direction: Direction,
    excitation: Excitation,
) -> Bytes {
    build(Command::RotateByDegrees(Rotation::new(
        frequency, degrees, direction, excitation,
    )))
}

pub fn build_rotate_by_time(
    frequency: i32,
    time: i32,
    direction: Direction,
    excitation: Excitation,
) -> Bytes {
    build(Command::RotateByTime(Rotation::new(
        frequency, time, direction, excitation,
    )))
}

pub fn build_rotate_by_steps(
    frequency: i32,
    steps: i32,
    direction: Direction,
    excitation: Excitation,
) -> Bytes {
    build(Command::RotateBySteps(Rotation::new(
        frequency, steps, direction, excitation,
    )))
}

/// `A5 FF 03 6E`: engage holding torque.
pub fn build_hold() -> Bytes {
    build(Command::Hold)
}

/// `A5 FF 03 6F`: release the motor.
pub fn build_free() -> Bytes {
    build(Command::Free)
}
