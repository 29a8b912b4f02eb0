use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand, ValueEnum};
use lv8548step_frame::{Direction, Excitation, Rotation, StepAngle};
use lv8548step_transport::{BaudRate, SerialConfig};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod encode;
pub mod motion;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send the one-time init frame (after the settle delay).
    Init,
    /// Select a standard step angle.
    StepAngle(StepAngleArgs),
    /// Set a whole-degree step angle, float-encoded.
    StepAngleDeg(StepAngleDegArgs),
    /// Rotate by a number of degrees.
    RotateDeg(RotationArgs),
    /// Rotate for a number of time units.
    RotateTime(RotationArgs),
    /// Rotate by a number of steps.
    RotateSteps(RotationArgs),
    /// Engage holding torque.
    Hold,
    /// Release the motor.
    Free,
    /// Print the IEEE-754 bit pattern the encoder produces for an integer.
    EncodeFloat(EncodeFloatArgs),
    /// Show version information.
    Version(VersionArgs),
}

/// Where and how frames are delivered.
#[derive(Debug, Clone)]
pub struct Session {
    pub device: Option<PathBuf>,
    pub serial: SerialConfig,
    pub dry_run: bool,
}

impl Session {
    pub fn new(device: Option<PathBuf>, baud_rate: BaudRate, settle_ms: u64, dry_run: bool) -> Self {
        Self {
            device,
            serial: SerialConfig {
                baud_rate,
                settle_delay: Duration::from_millis(settle_ms),
                ..SerialConfig::default()
            },
            dry_run,
        }
    }
}

pub fn run(command: Command, session: &Session, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::EncodeFloat(args) => encode::run(args, format),
        Command::Version(args) => version::run(args),
        other => motion::run(other, session, format),
    }
}

#[derive(Args, Debug)]
pub struct StepAngleArgs {
    /// Step angle in degrees: 0.9, 1.8, 3.6, 3.75, 7.5, 15 or 18.
    #[arg(required_unless_present = "selector", conflicts_with = "selector")]
    pub angle: Option<StepAngle>,
    /// Raw table selector (0-6) instead of an angle.
    #[arg(long)]
    pub selector: Option<u8>,
}

#[derive(Args, Debug)]
pub struct StepAngleDegArgs {
    /// Whole degrees per step.
    #[arg(allow_negative_numbers = true)]
    pub degrees: i32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum DirectionArg {
    /// Clockwise.
    Cw,
    /// Counter-clockwise.
    Ccw,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Cw => Direction::ClockWise,
            DirectionArg::Ccw => Direction::CounterClockWise,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ExcitationArg {
    Full,
    Half,
}

impl From<ExcitationArg> for Excitation {
    fn from(arg: ExcitationArg) -> Self {
        match arg {
            ExcitationArg::Full => Excitation::FullStep,
            ExcitationArg::Half => Excitation::HalfStep,
        }
    }
}

#[derive(Args, Debug)]
pub struct RotationArgs {
    /// Step frequency.
    #[arg(long, short = 'f', allow_negative_numbers = true)]
    pub freq: i32,
    /// Degrees, time units or steps, depending on the subcommand.
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub extent: i32,
    /// Rotation direction.
    #[arg(long, value_enum, default_value = "cw")]
    pub dir: DirectionArg,
    /// Excitation mode.
    #[arg(long, value_enum, default_value = "full")]
    pub excitation: ExcitationArg,
}

impl RotationArgs {
    pub fn rotation(&self) -> Rotation {
        Rotation::new(
            self.freq,
            self.extent,
            self.dir.into(),
            self.excitation.into(),
        )
    }
}

#[derive(Args, Debug)]
pub struct EncodeFloatArgs {
    /// Integer value to encode.
    #[arg(allow_negative_numbers = true)]
    pub value: i32,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
