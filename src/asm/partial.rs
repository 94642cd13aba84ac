use crate::codec::{
    ImmediateInstruction, Instruction, JumpInstruction, RegisterInstruction,
};
use crate::isa::{
    FunctionCode, ImmediateOpcode, JumpOpcode, Register, Role,
};

/// A register-type instruction whose operands may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialRegister {
    pub funct: FunctionCode,
    pub rs: Option<Register>,
    pub rt: Option<Register>,
    pub rd: Option<Register>,
    pub shamt: Option<u8>,
}

/// An immediate-type instruction whose operands may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialImmediate {
    pub op: ImmediateOpcode,
    pub rs: Option<Register>,
    pub rt: Option<Register>,
    pub imm: Option<u16>,
}

/// A jump-type instruction whose target may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialJump {
    pub op: JumpOpcode,
    pub target: Option<u32>,
}

/// Best-effort result of parsing one line of assembly.
///
/// `Empty` means the line was not recognized at all. Otherwise the variant is
/// fixed by the mnemonic and any operand that could not be resolved is
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialInstruction {
    #[default]
    Empty,
    Register(PartialRegister),
    Immediate(PartialImmediate),
    Jump(PartialJump),
}

impl PartialRegister {
    /// Starts from an operation with every operand zeroed except the ones
    /// listed in `roles`, which are left unset.
    pub(crate) fn new(funct: FunctionCode, roles: &[Role]) -> Self {
        let zero = |role: Role| {
            (!roles.contains(&role)).then_some(Register::Zero)
        };

        PartialRegister {
            funct,
            rs: zero(Role::Source),
            rt: zero(Role::Target),
            rd: zero(Role::Destination),
            shamt: (!roles.contains(&Role::ShiftAmount)).then_some(0),
        }
    }
}

impl PartialImmediate {
    pub(crate) fn new(op: ImmediateOpcode, roles: &[Role]) -> Self {
        let rs_used = roles.contains(&Role::Source) || roles.contains(&Role::Base);

        PartialImmediate {
            op,
            rs: (!rs_used).then_some(Register::Zero),
            rt: (!roles.contains(&Role::Target)).then_some(Register::Zero),
            imm: (!roles.contains(&Role::Immediate)).then_some(0),
        }
    }
}

impl PartialInstruction {
    pub fn is_empty(&self) -> bool {
        matches!(self, PartialInstruction::Empty)
    }

    /// Widens to a complete instruction, with absent fields read as 0.
    /// Returns `None` for an unrecognized line.
    pub fn to_instruction(&self) -> Option<Instruction> {
        let inst = match *self {
            PartialInstruction::Empty => return None,
            PartialInstruction::Register(p) => {
                Instruction::Register(RegisterInstruction {
                    funct: p.funct,
                    rs: p.rs.unwrap_or(Register::Zero),
                    rt: p.rt.unwrap_or(Register::Zero),
                    rd: p.rd.unwrap_or(Register::Zero),
                    shamt: p.shamt.unwrap_or(0),
                })
            }
            PartialInstruction::Immediate(p) => {
                Instruction::Immediate(ImmediateInstruction {
                    op: p.op,
                    rs: p.rs.unwrap_or(Register::Zero),
                    rt: p.rt.unwrap_or(Register::Zero),
                    imm: p.imm.unwrap_or(0),
                })
            }
            PartialInstruction::Jump(p) => Instruction::Jump(JumpInstruction {
                op: p.op,
                target: p.target.unwrap_or(0),
            }),
        };

        Some(inst)
    }
}

impl From<Instruction> for PartialInstruction {
    fn from(inst: Instruction) -> Self {
        match inst {
            Instruction::Register(i) => {
                PartialInstruction::Register(PartialRegister {
                    funct: i.funct,
                    rs: Some(i.rs),
                    rt: Some(i.rt),
                    rd: Some(i.rd),
                    shamt: Some(i.shamt),
                })
            }
            Instruction::Immediate(i) => {
                PartialInstruction::Immediate(PartialImmediate {
                    op: i.op,
                    rs: Some(i.rs),
                    rt: Some(i.rt),
                    imm: Some(i.imm),
                })
            }
            Instruction::Jump(i) => PartialInstruction::Jump(PartialJump {
                op: i.op,
                target: Some(i.target),
            }),
        }
    }
}
