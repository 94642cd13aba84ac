/// The opcode shared by every register-type instruction. The operation is
/// selected by the function code instead.
pub const SPECIAL_OPCODE: u8 = 0;

mnemonic_table! {
    /// Opcodes encoded with the 26-bit jump layout.
    pub enum JumpOpcode {
        J = 2 => "j",
        Jal = 3 => "jal",
        Trap = 26 => "trap",
    }
}

mnemonic_table! {
    /// Opcodes encoded with the immediate layout (rs, rt, 16-bit immediate).
    pub enum ImmediateOpcode {
        Beq = 4 => "beq",
        Bne = 5 => "bne",
        Blez = 6 => "blez",
        Bgtz = 7 => "bgtz",
        Addi = 8 => "addi",
        Addiu = 9 => "addiu",
        Slti = 10 => "slti",
        Sltiu = 11 => "sltiu",
        Andi = 12 => "andi",
        Ori = 13 => "ori",
        Xori = 14 => "xori",
        /// Load the immediate into the low half of rt
        Llo = 24 => "llo",
        /// Load the immediate into the high half of rt
        Lhi = 25 => "lhi",
        Lb = 32 => "lb",
        Lh = 33 => "lh",
        Lw = 35 => "lw",
        Lbu = 36 => "lbu",
        Lhu = 37 => "lhu",
        Sb = 40 => "sb",
        Sh = 41 => "sh",
        Sw = 43 => "sw",
    }
}

/// Groups of immediate opcodes sharing an operand layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImmediateGroup {
    /// addi, addiu, slti, sltiu, andi, ori, xori
    Arithmetic,
    /// llo, lhi
    LoadImmediate,
    /// beq, bne
    Branch,
    /// blez, bgtz
    BranchZero,
    /// Loads and stores using `offset(base)` addressing
    LoadStore,
}

impl ImmediateOpcode {
    pub const fn group(self) -> ImmediateGroup {
        use ImmediateOpcode::*;

        match self {
            Addi | Addiu | Slti | Sltiu | Andi | Ori | Xori => {
                ImmediateGroup::Arithmetic
            }
            Llo | Lhi => ImmediateGroup::LoadImmediate,
            Beq | Bne => ImmediateGroup::Branch,
            Blez | Bgtz => ImmediateGroup::BranchZero,
            Lb | Lh | Lw | Lbu | Lhu | Sb | Sh | Sw => {
                ImmediateGroup::LoadStore
            }
        }
    }
}

impl ImmediateGroup {
    /// Is `value` an opcode belonging to this group?
    pub fn contains(self, value: u8) -> bool {
        ImmediateOpcode::from_value(value).is_some_and(|op| op.group() == self)
    }

    pub fn members(self) -> impl Iterator<Item = ImmediateOpcode> {
        ImmediateOpcode::ALL
            .iter()
            .copied()
            .filter(move |op| op.group() == self)
    }
}

/// The three mutually exclusive 32-bit instruction layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionFamily {
    Register,
    Immediate,
    Jump,
}

impl InstructionFamily {
    /// Classifies a 6-bit opcode value. Unsupported opcodes belong to no
    /// family.
    pub fn of_opcode(value: u8) -> Option<Self> {
        if value == SPECIAL_OPCODE {
            Some(InstructionFamily::Register)
        } else if JumpOpcode::from_value(value).is_some() {
            Some(InstructionFamily::Jump)
        } else if ImmediateOpcode::from_value(value).is_some() {
            Some(InstructionFamily::Immediate)
        } else {
            None
        }
    }
}
