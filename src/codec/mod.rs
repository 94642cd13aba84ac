//! Conversion between raw 32-bit words and structured instructions.
//!
//! Register type: `[opcode:6][rs:5][rt:5][rd:5][shamt:5][funct:6]`
//! Immediate type: `[opcode:6][rs:5][rt:5][imm:16]`
//! Jump type: `[opcode:6][target:26]`

mod error;
mod instruction;
mod word;

pub use error::{DecodeError, EncodeError};
pub use instruction::{
    ImmediateInstruction, Instruction, JumpInstruction, RegisterInstruction,
};
pub use word::Word;

use crate::isa::{
    FunctionCode, ImmediateOpcode, JumpOpcode, Register, SPECIAL_OPCODE,
};

const SHAMT_BITS: u32 = 5;
const TARGET_BITS: u32 = 26;

/// Decodes a raw word into its structured form.
///
/// # Errors
///
/// Fails with [`DecodeError::InvalidOpcode`] when the top 6 bits name no
/// supported opcode, and with [`DecodeError::InvalidFunctionCode`] when a
/// register-type word carries an unsupported function code.
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let word = Word(word);
    let op = word.opcode() as u8;

    if op == SPECIAL_OPCODE {
        let funct = word.funct() as u8;
        let funct = FunctionCode::from_value(funct)
            .ok_or(DecodeError::InvalidFunctionCode(funct))?;

        return Ok(Instruction::Register(RegisterInstruction {
            funct,
            rs: Register::from_bits(word.rs()),
            rt: Register::from_bits(word.rt()),
            rd: Register::from_bits(word.rd()),
            shamt: word.shamt() as u8,
        }));
    }

    if let Some(op) = JumpOpcode::from_value(op) {
        return Ok(Instruction::Jump(JumpInstruction {
            op,
            target: word.target(),
        }));
    }

    if let Some(op) = ImmediateOpcode::from_value(op) {
        return Ok(Instruction::Immediate(ImmediateInstruction {
            op,
            rs: Register::from_bits(word.rs()),
            rt: Register::from_bits(word.rt()),
            imm: word.imm16() as u16,
        }));
    }

    Err(DecodeError::InvalidOpcode(op))
}

/// Decodes a value that has not yet been narrowed to 32 bits.
///
/// # Errors
///
/// Fails with [`DecodeError::OutOfRange`] for negative values or values
/// above `u32::MAX`, otherwise as [`decode`].
pub fn decode_value(value: i64) -> Result<Instruction, DecodeError> {
    let word =
        u32::try_from(value).map_err(|_| DecodeError::OutOfRange(value))?;
    decode(word)
}

/// Encodes an instruction into a raw word.
///
/// Fields wider than their slot are silently truncated: the shift amount to
/// 5 bits and the jump target to 26 bits. Use [`encode_checked`] to reject
/// them instead.
pub fn encode(instruction: &Instruction) -> u32 {
    let mut word = Word::default();
    word.set_opcode(instruction.opcode() as u32);

    match instruction {
        Instruction::Register(inst) => {
            word.set_rs(inst.rs.value() as u32);
            word.set_rt(inst.rt.value() as u32);
            word.set_rd(inst.rd.value() as u32);
            word.set_shamt(inst.shamt as u32);
            word.set_funct(inst.funct.value() as u32);
        }
        Instruction::Immediate(inst) => {
            word.set_rs(inst.rs.value() as u32);
            word.set_rt(inst.rt.value() as u32);
            word.set_imm16(inst.imm as u32);
        }
        Instruction::Jump(inst) => {
            word.set_target(inst.target);
        }
    }

    word.0
}

/// Encodes an instruction, rejecting fields that do not fit their slot.
///
/// # Errors
///
/// Returns [`EncodeError::FieldOverflow`] naming the first oversized field.
pub fn encode_checked(instruction: &Instruction) -> Result<u32, EncodeError> {
    match instruction {
        Instruction::Register(inst) => {
            check_width("shamt", inst.shamt as u32, SHAMT_BITS)?
        }
        Instruction::Jump(inst) => check_width("target", inst.target, TARGET_BITS)?,
        Instruction::Immediate(_) => {}
    }

    Ok(encode(instruction))
}

fn check_width(
    field: &'static str,
    value: u32,
    width: u32,
) -> Result<(), EncodeError> {
    if value >> width != 0 {
        return Err(EncodeError::FieldOverflow {
            field,
            value,
            width,
        });
    }

    Ok(())
}
