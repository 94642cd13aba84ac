use crate::isa::{
    FunctionCode, ImmediateOpcode, InstructionFamily, JumpOpcode, Operation,
    Register, SPECIAL_OPCODE,
};

/// A register-type instruction. All five register-layout fields are kept,
/// whether or not the operation uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterInstruction {
    pub funct: FunctionCode,
    pub rs: Register,
    pub rt: Register,
    pub rd: Register,
    /// Shift amount. Only the low 5 bits are encoded.
    pub shamt: u8,
}

/// An immediate-type instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImmediateInstruction {
    pub op: ImmediateOpcode,
    pub rs: Register,
    pub rt: Register,
    /// Raw 16-bit pattern, never sign-extended at this layer.
    pub imm: u16,
}

/// A jump-type instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JumpInstruction {
    pub op: JumpOpcode,
    /// Jump target. Only the low 26 bits are encoded.
    pub target: u32,
}

/// A fully decoded instruction. The variant is determined by the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Register(RegisterInstruction),
    Immediate(ImmediateInstruction),
    Jump(JumpInstruction),
}

impl Instruction {
    /// The value of the 6-bit opcode field.
    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::Register(_) => SPECIAL_OPCODE,
            Instruction::Immediate(inst) => inst.op.value(),
            Instruction::Jump(inst) => inst.op.value(),
        }
    }

    pub fn family(&self) -> InstructionFamily {
        match self {
            Instruction::Register(_) => InstructionFamily::Register,
            Instruction::Immediate(_) => InstructionFamily::Immediate,
            Instruction::Jump(_) => InstructionFamily::Jump,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Instruction::Register(inst) => Operation::Register(inst.funct),
            Instruction::Immediate(inst) => Operation::Immediate(inst.op),
            Instruction::Jump(inst) => Operation::Jump(inst.op),
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        self.operation().mnemonic()
    }
}

impl From<RegisterInstruction> for Instruction {
    fn from(inst: RegisterInstruction) -> Self {
        Instruction::Register(inst)
    }
}

impl From<ImmediateInstruction> for Instruction {
    fn from(inst: ImmediateInstruction) -> Self {
        Instruction::Immediate(inst)
    }
}

impl From<JumpInstruction> for Instruction {
    fn from(inst: JumpInstruction) -> Self {
        Instruction::Jump(inst)
    }
}
