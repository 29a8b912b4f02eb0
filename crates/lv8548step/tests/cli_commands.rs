#![cfg(all(unix, feature = "cli"))]

use std::path::PathBuf;
use std::process::{Command, Output};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/lv8548cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn lv8548step(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lv8548step"))
        .env_remove("LV8548STEP_DEVICE")
        .env_remove("LV8548STEP_BAUD")
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("lv8548step should run")
}

#[test]
fn dry_run_hold_prints_frame_json() {
    let output = lv8548step(&["--format", "json", "--dry-run", "hold"]);

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(json["command"], "hold");
    assert_eq!(json["opcode"], "0x6E");
    assert_eq!(json["frame"], "A5 FF 03 6E");
    assert_eq!(json["length"], 4);
    assert_eq!(json["sent"], false);
}

#[test]
fn dry_run_raw_rotation_bytes() {
    let output = lv8548step(&[
        "--format",
        "raw",
        "--dry-run",
        "rotate-steps",
        "--freq",
        "300",
        "--extent",
        "1600",
        "--dir",
        "ccw",
        "--excitation",
        "half",
    ]);

    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        vec![
            0xA5, 0xFF, 0x03, 0x6C, 0x2C, 0x01, 0x00, 0x00, 0x40, 0x06, 0x00, 0x00, 0x01, 0x01
        ]
    );
}

#[test]
fn sends_to_file_device() {
    let dir = unique_temp_dir("send");
    let device = dir.join("ttyFAKE0");
    std::fs::write(&device, b"").expect("device file should be creatable");
    let device_arg = device.to_str().expect("utf-8 path");

    let init = lv8548step(&[
        "--format", "json", "--device", device_arg, "--settle-ms", "1", "init",
    ]);
    assert!(init.status.success());

    let angle = lv8548step(&["--format", "json", "--device", device_arg, "step-angle", "1.8"]);
    assert!(angle.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&angle.stdout).expect("stdout should be json");
    assert_eq!(json["sent"], true);
    assert_eq!(json["device"], device_arg);

    let free = lv8548step(&["--format", "json", "--device", device_arg, "free"]);
    assert!(free.status.success());

    assert_eq!(
        std::fs::read(&device).expect("device file should be readable"),
        vec![
            0xA5, 0xFE, 0x01, // init
            0xA5, 0xFF, 0x05, 0x69, 0x66, 0x66, 0xE6, 0x3F, // 1.8 degrees
            0xA5, 0xFF, 0x03, 0x6F, // free
        ]
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn device_from_environment() {
    let dir = unique_temp_dir("env");
    let device = dir.join("ttyENV0");
    std::fs::write(&device, b"").expect("device file should be creatable");

    let output = Command::new(env!("CARGO_BIN_EXE_lv8548step"))
        .env("LV8548STEP_DEVICE", &device)
        .args(["--log-level", "error", "--format", "json", "hold"])
        .output()
        .expect("lv8548step should run");

    assert!(output.status.success());
    assert_eq!(std::fs::read(&device).unwrap(), vec![0xA5, 0xFF, 0x03, 0x6E]);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_device_returns_usage() {
    let output = lv8548step(&["hold"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn nonexistent_device_fails() {
    let dir = unique_temp_dir("missing");
    let device = dir.join("ttyNOPE");
    let output = lv8548step(&["--device", device.to_str().unwrap(), "free"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed opening"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn selector_out_of_range_returns_data_invalid() {
    let output = lv8548step(&["--dry-run", "step-angle", "--selector", "7"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn encode_float_reports_bits() {
    let output = lv8548step(&["--format", "json", "encode-float", "1"]);

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(json["bits"], "0x3F800000");
    assert_eq!(json["le_bytes"], "00 00 80 3F");

    let negative = lv8548step(&["--format", "json", "encode-float", "-1"]);
    let json: serde_json::Value =
        serde_json::from_slice(&negative.stdout).expect("stdout should be json");
    assert_eq!(json["bits"], "0xBF800000");
}

#[test]
fn version_prints_name() {
    let output = lv8548step(&["version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("lv8548step "));
}
