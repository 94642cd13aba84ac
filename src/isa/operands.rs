use super::{
    FunctGroup, FunctionCode, ImmediateGroup, ImmediateOpcode,
    InstructionFamily, JumpOpcode,
};

/// The meaning of one operand position in assembly text, and the field it
/// lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Destination register, stored in rd
    Destination,
    /// First source register, stored in rs
    Source,
    /// Target (or second source) register, stored in rt
    Target,
    /// Base address register of a load/store, stored in rs
    Base,
    /// 5-bit shift amount
    ShiftAmount,
    /// 16-bit immediate, or the 26-bit target of a jump
    Immediate,
}

impl Role {
    pub fn is_register(self) -> bool {
        matches!(
            self,
            Role::Destination | Role::Source | Role::Target | Role::Base
        )
    }
}

/// Operand layout required by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandSchema {
    pub family: InstructionFamily,
    pub roles: &'static [Role],
}

use Role::*;

const ARITHMETIC: &[Role] = &[Destination, Source, Target];
const MULTIPLICATION: &[Role] = &[Source, Target];
const SHIFT: &[Role] = &[Destination, Target, ShiftAmount];
const SHIFT_VARIABLE: &[Role] = &[Destination, Target, Source];
const SOURCE_ONLY: &[Role] = &[Source];
const DESTINATION_ONLY: &[Role] = &[Destination];

const IMMEDIATE_ARITHMETIC: &[Role] = &[Target, Source, Immediate];
const LOAD_IMMEDIATE: &[Role] = &[Target, Immediate];
const BRANCH: &[Role] = &[Source, Target, Immediate];
const BRANCH_ZERO: &[Role] = &[Source, Immediate];
const LOAD_STORE: &[Role] = &[Target, Immediate, Base];

const JUMP: &[Role] = &[Immediate];

/// Any supported operation, whichever table it comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Jump(JumpOpcode),
    Immediate(ImmediateOpcode),
    Register(FunctionCode),
}

impl Operation {
    /// Resolves a mnemonic, searching the jump opcodes first, then the
    /// immediate opcodes, then the function codes.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        JumpOpcode::from_mnemonic(mnemonic)
            .map(Operation::Jump)
            .or_else(|| {
                ImmediateOpcode::from_mnemonic(mnemonic)
                    .map(Operation::Immediate)
            })
            .or_else(|| {
                FunctionCode::from_mnemonic(mnemonic).map(Operation::Register)
            })
    }

    /// Resolves a non-special opcode value, jump opcodes first.
    pub fn from_opcode(value: u8) -> Option<Self> {
        JumpOpcode::from_value(value)
            .map(Operation::Jump)
            .or_else(|| {
                ImmediateOpcode::from_value(value).map(Operation::Immediate)
            })
    }

    pub fn from_funct(value: u8) -> Option<Self> {
        FunctionCode::from_value(value).map(Operation::Register)
    }

    pub fn family(self) -> InstructionFamily {
        match self {
            Operation::Jump(_) => InstructionFamily::Jump,
            Operation::Immediate(_) => InstructionFamily::Immediate,
            Operation::Register(_) => InstructionFamily::Register,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Jump(op) => op.mnemonic(),
            Operation::Immediate(op) => op.mnemonic(),
            Operation::Register(funct) => funct.mnemonic(),
        }
    }

    /// The ordered operand roles this operation takes. Roles are fixed per
    /// group, not per operation.
    pub fn schema(self) -> OperandSchema {
        let roles = match self {
            Operation::Jump(_) => JUMP,
            Operation::Immediate(op) => match op.group() {
                ImmediateGroup::Arithmetic => IMMEDIATE_ARITHMETIC,
                ImmediateGroup::LoadImmediate => LOAD_IMMEDIATE,
                ImmediateGroup::Branch => BRANCH,
                ImmediateGroup::BranchZero => BRANCH_ZERO,
                ImmediateGroup::LoadStore => LOAD_STORE,
            },
            Operation::Register(funct) => match funct.group() {
                FunctGroup::Arithmetic => ARITHMETIC,
                FunctGroup::Multiplication => MULTIPLICATION,
                FunctGroup::Shift => SHIFT,
                FunctGroup::ShiftVariable => SHIFT_VARIABLE,
                FunctGroup::Jump | FunctGroup::MoveTo => SOURCE_ONLY,
                FunctGroup::MoveFrom => DESTINATION_ONLY,
            },
        };

        OperandSchema {
            family: self.family(),
            roles,
        }
    }
}

/// Looks up the operand layout of a mnemonic. Unknown names give `None`.
pub fn required_operands(mnemonic: &str) -> Option<OperandSchema> {
    Operation::from_mnemonic(mnemonic).map(Operation::schema)
}
