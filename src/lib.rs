//! Bidirectional translation between raw MIPS instruction words, structured
//! instructions and assembly text, for a fixed subset of the instruction set.
//!
//! ```
//! use mipsconv::{decode, encode, format, parse};
//!
//! let inst = decode(0x012a_4021).unwrap();
//! assert_eq!(format(&inst), "addu $t0 $t1 $t2");
//!
//! let parsed = parse("addu $t0, $t1, $t2").to_instruction().unwrap();
//! assert_eq!(encode(&parsed), 0x012a_4021);
//! ```

pub mod asm;
pub mod codec;
pub mod isa;
pub mod translate;
#[cfg(test)]
mod test_utils;

pub use asm::{PartialInstruction, format, parse};
pub use codec::{
    DecodeError, EncodeError, Instruction, decode, decode_value, encode,
    encode_checked,
};
pub use translate::{
    ErrorPolicy, TranslateError, TranslateOptions, hex_to_mips, mips_to_hex,
};
