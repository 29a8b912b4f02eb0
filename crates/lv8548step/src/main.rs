mod cmd;
mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use clap::Parser;
use lv8548step_transport::BaudRate;

use crate::cmd::{Command, Session};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "lv8548step", version, about = "LV8548 stepper driver command tool")]
struct Cli {
    /// Serial device the board is attached to.
    #[arg(long, short = 'd', env = "LV8548STEP_DEVICE", global = true)]
    device: Option<PathBuf>,

    /// Line rate for serial devices.
    #[arg(long, env = "LV8548STEP_BAUD", default_value = "19200", global = true)]
    baud: BaudRate,

    /// Delay before the init frame, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 100, global = true)]
    settle_ms: u64,

    /// Encode and print frames without opening a device.
    #[arg(long, global = true)]
    dry_run: bool,

    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let session = Session::new(cli.device, cli.baud, cli.settle_ms, cli.dry_run);
    let result = cmd::run(cli.command, &session, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rotation_subcommand() {
        let cli = Cli::try_parse_from([
            "lv8548step",
            "rotate-deg",
            "--freq",
            "500",
            "--extent",
            "-90",
            "--dir",
            "ccw",
            "--excitation",
            "half",
            "--dry-run",
        ])
        .expect("rotate args should parse");

        assert!(cli.dry_run);
        match cli.command {
            Command::RotateDeg(args) => {
                assert_eq!(args.freq, 500);
                assert_eq!(args.extent, -90);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_step_angle_label() {
        let cli = Cli::try_parse_from(["lv8548step", "step-angle", "3.75"])
            .expect("step-angle should parse");
        match cli.command {
            Command::StepAngle(args) => {
                assert_eq!(args.angle, Some(lv8548step_frame::StepAngle::Deg3_75));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_step_angle() {
        let err = Cli::try_parse_from(["lv8548step", "step-angle", "2.5"])
            .expect_err("unknown angle should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_angle_with_selector() {
        let err = Cli::try_parse_from(["lv8548step", "step-angle", "1.8", "--selector", "1"])
            .expect_err("conflicting args should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_unsupported_baud() {
        let err = Cli::try_parse_from(["lv8548step", "--baud", "12345", "hold"])
            .expect_err("odd baud should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_negative_encode_value() {
        let cli = Cli::try_parse_from(["lv8548step", "encode-float", "-1"])
            .expect("negative value should parse");
        assert!(matches!(cli.command, Command::EncodeFloat(ref a) if a.value == -1));
    }
}
