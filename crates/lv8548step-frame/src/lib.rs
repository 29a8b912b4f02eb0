//! Command-frame encoding for the LV8548 stepper driver.
//!
//! This is the core of lv8548step. Every command is a fixed-layout frame:
//! - A sync byte (`0xA5`)
//! - A class byte (`0xFE` for initialization, `0xFF` for motion commands)
//! - A length/flag byte and an opcode (the init frame folds both into one byte)
//! - A little-endian payload whose layout is fixed per opcode
//!
//! Angles sent with `SetStepAngle` travel as IEEE-754 single-precision bit
//! patterns, produced either from the fixed step-angle table or by the
//! truncating integer encoder in [`float`].

pub mod angle;
pub mod codec;
pub mod command;
pub mod error;
pub mod float;
pub mod writer;

pub use angle::{AngleValue, StepAngle};
pub use codec::{
    build_free, build_hold, build_initialize, build_rotate_by_degrees, build_rotate_by_steps,
    build_rotate_by_time, build_set_step_angle, build_set_step_angle_degrees, encode_command,
    CLASS_INIT, CLASS_OPERATIONAL, INIT_FRAME_LEN, MOTION_FLAG, MOTION_FRAME_LEN,
    ROTATION_FRAME_LEN, STEP_ANGLE_FLAG, STEP_ANGLE_FRAME_LEN, SYNC,
};
pub use command::{Command, Direction, Excitation, Opcode, Rotation};
pub use error::{FrameError, Result};
pub use float::{decode_f32_bits, encode_f32_bits};
pub use writer::FrameWriter;
