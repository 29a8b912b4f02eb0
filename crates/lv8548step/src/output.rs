use std::io::{IsTerminal, Write};
use std::path::Path;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use lv8548step_frame::{decode_f32_bits, Command};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput<'a> {
    command: &'static str,
    opcode: String,
    length: usize,
    frame: String,
    sent: bool,
    device: Option<String>,
    #[serde(skip)]
    bytes: &'a [u8],
}

/// Report one encoded frame; `device` is `None` for dry runs.
pub fn print_frame(command: &Command, bytes: &[u8], device: Option<&Path>, format: OutputFormat) {
    let out = FrameOutput {
        command: command.opcode().name(),
        opcode: format!("0x{:02X}", command.opcode().as_u8()),
        length: bytes.len(),
        frame: hex(bytes),
        sent: device.is_some(),
        device: device.map(|p| p.display().to_string()),
        bytes,
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["COMMAND", "OPCODE", "LEN", "FRAME", "DEVICE"])
                .add_row(vec![
                    out.command.to_string(),
                    out.opcode.clone(),
                    out.length.to_string(),
                    out.frame.clone(),
                    out.device.clone().unwrap_or_else(|| "(dry run)".to_string()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{} opcode={} len={} frame=[{}] {}",
                out.command,
                out.opcode,
                out.length,
                out.frame,
                match &out.device {
                    Some(device) => format!("sent to {device}"),
                    None => "dry run".to_string(),
                }
            );
        }
        OutputFormat::Raw => print_raw(out.bytes),
    }
}

#[derive(Serialize)]
struct FloatOutput {
    value: i32,
    bits: String,
    float: f32,
    le_bytes: String,
}

pub fn print_float(value: i32, bits: u32, format: OutputFormat) {
    let out = FloatOutput {
        value,
        bits: format!("0x{bits:08X}"),
        float: decode_f32_bits(bits),
        le_bytes: hex(&bits.to_le_bytes()),
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["VALUE", "BITS", "FLOAT", "WIRE (LE)"])
                .add_row(vec![
                    out.value.to_string(),
                    out.bits.clone(),
                    out.float.to_string(),
                    out.le_bytes.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{} -> {} ({}) wire=[{}]",
                out.value, out.bits, out.float, out.le_bytes
            );
        }
        OutputFormat::Raw => print_raw(&bits.to_le_bytes()),
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// Upper-case, space-separated hex, e.g. `A5 FF 03 6E`.
pub fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
