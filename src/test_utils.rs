#![allow(dead_code)]
//! Raw word builders for tests, independent of the codec under test.
//! Register operands follow assembly order.

use crate::isa::Register;

fn reg(r: Register) -> u32 {
    r.value() as u32
}

/// Builds an immediate-type word: `op rt, rs, imm`.
pub fn i_type(opcode: u8, rt: Register, rs: Register, imm: u16) -> u32 {
    ((opcode as u32) << 26) | (reg(rs) << 21) | (reg(rt) << 16) | imm as u32
}

/// Builds a three-register word: `funct rd, rs, rt`.
pub fn r_type(funct: u8, rd: Register, rs: Register, rt: Register) -> u32 {
    (reg(rs) << 21) | (reg(rt) << 16) | (reg(rd) << 11) | funct as u32
}

/// Builds a shift word: `funct rd, rt, shamt`. Only the low 5 bits of
/// `shamt` are kept.
pub fn r_type_shift(funct: u8, rd: Register, rt: Register, shamt: u8) -> u32 {
    (reg(rt) << 16) | (reg(rd) << 11) | ((shamt as u32 & 0x1f) << 6) | funct as u32
}

/// Builds a jump word from its raw 26-bit target field.
pub fn j_type(opcode: u8, target: u32) -> u32 {
    ((opcode as u32) << 26) | (target & 0x03ff_ffff)
}
