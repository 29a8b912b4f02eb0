use lv8548step_frame::encode_f32_bits;

use crate::cmd::EncodeFloatArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_float, OutputFormat};

pub fn run(args: EncodeFloatArgs, format: OutputFormat) -> CliResult<i32> {
    let bits = encode_f32_bits(args.value);
    print_float(args.value, bits, format);
    Ok(SUCCESS)
}
