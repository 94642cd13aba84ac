use std::fmt;

use crate::codec::Instruction;
use crate::isa::{FunctionCode, Role};

/// `jalr` shows its link register, even though only the source is required
/// when parsing.
const JALR_DISPLAY: &[Role] = &[Role::Destination, Role::Source];

/// Renders an instruction as canonical assembly text.
///
/// Operands are separated by single spaces. Registers are written as
/// `$name`, shift amounts as `0xNN`, immediates as `0xNNNN` and jump targets
/// as `0xNNNNNNN`. Loads and stores are written `rt imm rs`, without the
/// `imm(base)` form.
pub fn format(instruction: &Instruction) -> String {
    let roles = match instruction {
        Instruction::Register(inst) if inst.funct == FunctionCode::Jalr => {
            JALR_DISPLAY
        }
        _ => instruction.operation().schema().roles,
    };

    let mut parts = Vec::with_capacity(roles.len() + 1);
    parts.push(instruction.mnemonic().to_string());
    parts.extend(roles.iter().map(|&role| operand(instruction, role)));
    parts.join(" ")
}

fn operand(instruction: &Instruction, role: Role) -> String {
    match instruction {
        Instruction::Register(inst) => match role {
            Role::Destination => inst.rd.to_string(),
            Role::Source | Role::Base => inst.rs.to_string(),
            Role::Target => inst.rt.to_string(),
            Role::ShiftAmount | Role::Immediate => {
                format!("0x{:02X}", inst.shamt)
            }
        },
        // The immediate layout has no rd slot
        Instruction::Immediate(inst) => match role {
            Role::Source | Role::Base => inst.rs.to_string(),
            Role::Target | Role::Destination => inst.rt.to_string(),
            Role::Immediate | Role::ShiftAmount => {
                format!("0x{:04X}", inst.imm)
            }
        },
        Instruction::Jump(inst) => format!("0x{:07X}", inst.target),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}
