//! Integer to IEEE-754 single-precision bit packing.
//!
//! The driver firmware expects angle values exactly as produced here: the
//! mantissa is truncated, never rounded to nearest. `f32::to_bits` rounds for
//! magnitudes above 2^24, so it must not be substituted.

const SIGN_BIT: u32 = 1 << 31;
const MANTISSA_BITS: i32 = 23;
const MANTISSA_MASK: u32 = 0x007F_FFFF;
const EXPONENT_BIAS: i32 = 127;

/// Encode an integer magnitude as a single-precision float bit pattern.
///
/// Layout: bit 31 sign, bits 30-23 biased exponent, bits 22-0 mantissa with
/// the implicit leading one dropped. Bits below the mantissa width are
/// discarded.
pub fn encode_f32_bits(value: i32) -> u32 {
    if value == 0 {
        return 0x0000_0000;
    }

    let sign = if value > 0 { 0 } else { SIGN_BIT };
    // unsigned_abs keeps i32::MIN representable (2^31).
    let magnitude = value.unsigned_abs();
    let msb = highest_set_bit(magnitude);

    let shift = msb - MANTISSA_BITS;
    let mantissa = if shift < 0 {
        (magnitude << (-shift) as u32) & MANTISSA_MASK
    } else {
        (magnitude >> shift as u32) & MANTISSA_MASK
    };

    // Bias the msb index, not `shift`: `shift + 127` would give 0x3400_0000 for 1.
    let exponent = (((msb + EXPONENT_BIAS) & 0xFF) as u32) << MANTISSA_BITS;
    sign | exponent | mantissa
}

/// Reinterpret a bit pattern as `f32`, for display and read-back checks.
pub fn decode_f32_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

fn highest_set_bit(magnitude: u32) -> i32 {
    (0..32)
        .rev()
        .find(|bit| magnitude & (1u32 << bit) != 0)
        .unwrap_or(0)
}
