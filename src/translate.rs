//! Line-oriented translation between blocks of hexadecimal words and blocks
//! of assembly text, plus small field conversion helpers.

use tracing::warn;

use crate::asm::{self, parse_hex_word};
use crate::codec::{self, DecodeError};
use crate::isa::{FunctionCode, ImmediateOpcode, JumpOpcode};

/// What to do with a line that cannot be translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Write a marker in place of the line and keep going
    #[default]
    Annotate,
    /// Stop at the first bad line
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateOptions {
    pub errors: ErrorPolicy,
}

/// Marker written in place of a line that names no known operation.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("unrecognized instruction `{0}`")]
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("line {line}: {kind}")]
    Line { line: usize, kind: LineError },
}

/// Translates a block of hexadecimal words, one per line, into assembly.
///
/// Lines that are already assembly are parsed and written back in canonical
/// form. Empty lines stay empty.
///
/// # Errors
///
/// With [`ErrorPolicy::Abort`], fails on the first line that does not
/// decode or is not recognized.
pub fn hex_to_mips(
    text: &str,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    translate_lines(text, options, line_to_mips)
}

/// Translates a block of assembly, one instruction per line, into
/// 8-digit uppercase hexadecimal words.
///
/// # Errors
///
/// With [`ErrorPolicy::Abort`], fails on the first unrecognized line.
pub fn mips_to_hex(
    text: &str,
    options: &TranslateOptions,
) -> Result<String, TranslateError> {
    translate_lines(text, options, line_to_hex)
}

fn line_to_mips(line: &str) -> Result<String, LineError> {
    if let Some(word) = parse_hex_word(line) {
        return Ok(codec::decode(word)?.to_string());
    }

    asm::parse(line)
        .to_instruction()
        .map(|inst| inst.to_string())
        .ok_or_else(|| LineError::Unrecognized(line.to_string()))
}

fn line_to_hex(line: &str) -> Result<String, LineError> {
    // Decode errors on hex input surface as unrecognized lines here, the
    // parser does not report them.
    asm::parse(line)
        .to_instruction()
        .map(|inst| format!("{:08X}", codec::encode(&inst)))
        .ok_or_else(|| LineError::Unrecognized(line.to_string()))
}

fn translate_lines(
    text: &str,
    options: &TranslateOptions,
    translate: fn(&str) -> Result<String, LineError>,
) -> Result<String, TranslateError> {
    let mut out = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let line = line.trim();

        if line.is_empty() {
            out.push(String::new());
            continue;
        }

        match translate(line) {
            Ok(translated) => out.push(translated),
            Err(kind) => match options.errors {
                ErrorPolicy::Abort => {
                    return Err(TranslateError::Line {
                        line: index + 1,
                        kind,
                    });
                }
                ErrorPolicy::Annotate => {
                    warn!(line = index + 1, error = %kind, "cannot translate");
                    out.push(match kind {
                        LineError::Decode(e) => format!("error: {e}"),
                        LineError::Unrecognized(_) => UNKNOWN.to_string(),
                    });
                }
            },
        }
    }

    Ok(out.join("\n"))
}

/// The 6-bit binary encoding of a function code, e.g. `100000` for `add`.
pub fn funct_bits(name: &str) -> Option<String> {
    FunctionCode::from_mnemonic(name).map(|f| format!("{:06b}", f.value()))
}

/// Names a binary field value, trying the function codes first and then the
/// opcodes.
pub fn field_name(bits: &str) -> Option<&'static str> {
    let value = u8::from_str_radix(bits, 2).ok()?;

    if let Some(funct) = FunctionCode::from_value(value) {
        return Some(funct.mnemonic());
    }

    JumpOpcode::from_value(value)
        .map(JumpOpcode::mnemonic)
        .or_else(|| ImmediateOpcode::from_value(value).map(|op| op.mnemonic()))
}

/// Converts a binary string to `0x`-prefixed uppercase hex, left-padding
/// with zeros to a whole number of nibbles.
pub fn binary_to_hex(bits: &str) -> Option<String> {
    if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let pad = (4 - bits.len() % 4) % 4;
    let padded = format!("{}{bits}", "0".repeat(pad));
    let digits = padded
        .as_bytes()
        .chunks(4)
        .map(|nibble| {
            let value = nibble
                .iter()
                .fold(0u32, |acc, b| (acc << 1) | u32::from(b - b'0'));
            char::from_digit(value, 16).map(|c| c.to_ascii_uppercase())
        })
        .collect::<Option<String>>()?;

    Some(format!("0x{digits}"))
}

/// Expands each hex digit to 4 binary digits.
pub fn hex_to_binary(hex: &str) -> Option<String> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if hex.is_empty() {
        return None;
    }

    hex.chars()
        .map(|c| c.to_digit(16).map(|d| format!("{d:04b}")))
        .collect()
}
