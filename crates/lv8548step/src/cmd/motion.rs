use lv8548step_driver::open_with_config;
use lv8548step_frame::{AngleValue, Command as FrameCommand, StepAngle};
use tracing::info;

use crate::cmd::{Command, Session, StepAngleArgs};
use crate::exit::{driver_error, frame_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_frame, OutputFormat};

pub fn run(command: Command, session: &Session, format: OutputFormat) -> CliResult<i32> {
    let frame_command = to_frame_command(command)?;
    let bytes = frame_command.to_bytes();

    if session.dry_run {
        print_frame(&frame_command, &bytes, None, format);
        return Ok(SUCCESS);
    }

    let device = session.device.as_deref().ok_or_else(|| {
        CliError::new(
            USAGE,
            "no device given (use --device, LV8548STEP_DEVICE, or --dry-run)",
        )
    })?;

    let mut driver = open_with_config(device, &session.serial)
        .map_err(|err| driver_error(&format!("failed opening {}", device.display()), err))?;

    let sent = match frame_command {
        FrameCommand::Initialize => driver.init(),
        ref other => driver.send(other),
    };
    sent.map_err(|err| driver_error("send failed", err))?;

    info!(
        device = %device.display(),
        command = %frame_command.opcode(),
        "frame sent"
    );
    print_frame(&frame_command, &bytes, Some(device), format);
    Ok(SUCCESS)
}

fn to_frame_command(command: Command) -> CliResult<FrameCommand> {
    let frame_command = match command {
        Command::Init => FrameCommand::Initialize,
        Command::StepAngle(args) => FrameCommand::set_step_angle(resolve_step_angle(&args)?),
        Command::StepAngleDeg(args) => FrameCommand::SetStepAngle(AngleValue::Degrees(args.degrees)),
        Command::RotateDeg(args) => FrameCommand::RotateByDegrees(args.rotation()),
        Command::RotateTime(args) => FrameCommand::RotateByTime(args.rotation()),
        Command::RotateSteps(args) => FrameCommand::RotateBySteps(args.rotation()),
        Command::Hold => FrameCommand::Hold,
        Command::Free => FrameCommand::Free,
        Command::EncodeFloat(_) | Command::Version(_) => {
            return Err(CliError::new(USAGE, "not a frame command"));
        }
    };
    Ok(frame_command)
}

fn resolve_step_angle(args: &StepAngleArgs) -> CliResult<StepAngle> {
    match (args.angle, args.selector) {
        (Some(angle), _) => Ok(angle),
        (None, Some(selector)) => StepAngle::try_from(selector)
            .map_err(|err| frame_error("invalid step angle", err)),
        (None, None) => Err(CliError::new(USAGE, "a step angle or --selector is required")),
    }
}
