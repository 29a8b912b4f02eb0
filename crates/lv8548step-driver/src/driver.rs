use std::io::Write;
use std::time::Duration;

use lv8548step_frame::{
    AngleValue, Command, Direction, Excitation, FrameWriter, Rotation, StepAngle,
};
use lv8548step_transport::{SerialConfig, DEFAULT_SETTLE_DELAY};
use tracing::debug;

use crate::error::Result;

/// Driver behavior that is not part of the serial line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Sleep before the init frame so the line can settle.
    pub settle_delay: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl From<&SerialConfig> for DriverConfig {
    fn from(config: &SerialConfig) -> Self {
        Self {
            settle_delay: config.settle_delay,
        }
    }
}

/// Sends commands to one LV8548 board over any `Write` sink.
///
/// Holds no motor state. Methods take `&mut self`, so commands from one
/// driver are written strictly in call order.
pub struct Driver<W> {
    writer: FrameWriter<W>,
    config: DriverConfig,
}

impl<W: Write> Driver<W> {
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, DriverConfig::default())
    }

    pub fn with_config(sink: W, config: DriverConfig) -> Self {
        Self {
            writer: FrameWriter::new(sink),
            config,
        }
    }

    /// Wait for the settle delay, then send the init frame `A5 FE 01`.
    pub fn init(&mut self) -> Result<()> {
        if !self.config.settle_delay.is_zero() {
            debug!(delay = ?self.config.settle_delay, "waiting for line to settle");
            std::thread::sleep(self.config.settle_delay);
        }
        self.send(&Command::Initialize)
    }

    pub fn set_step_angle(&mut self, angle: StepAngle) -> Result<()> {
        self.send(&Command::SetStepAngle(AngleValue::Fixed(angle)))
    }

    /// Set an arbitrary whole-degree step angle (float-encoded on the wire).
    pub fn set_step_angle_degrees(&mut self, degrees: i32) -> Result<()> {
        self.send(&Command::SetStepAngle(AngleValue::Degrees(degrees)))
    }

    pub fn rotate_by_degrees(&mut self, rotation: Rotation) -> Result<()> {
        self.send(&Command::RotateByDegrees(rotation))
    }

    pub fn rotate_by_time(&mut self, rotation: Rotation) -> Result<()> {
        self.send(&Command::RotateByTime(rotation))
    }

    pub fn rotate_by_steps(&mut self, rotation: Rotation) -> Result<()> {
        self.send(&Command::RotateBySteps(rotation))
    }

    /// Rotate by `steps` steps with the given direction and excitation.
    pub fn step(
        &mut self,
        frequency: i32,
        steps: i32,
        direction: Direction,
        excitation: Excitation,
    ) -> Result<()> {
        self.rotate_by_steps(Rotation::new(frequency, steps, direction, excitation))
    }

    /// Engage holding torque.
    pub fn hold(&mut self) -> Result<()> {
        self.send(&Command::Hold)
    }

    /// Release the motor.
    pub fn free(&mut self) -> Result<()> {
        self.send(&Command::Free)
    }

    pub fn send(&mut self, command: &Command) -> Result<()> {
        debug!(
            opcode = %command.opcode(),
            len = command.wire_size(),
            "sending frame"
        );
        self.writer.write_command(command)?;
        Ok(())
    }

    pub fn frames_sent(&self) -> u64 {
        self.writer.frames_written()
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
