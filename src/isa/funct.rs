mnemonic_table! {
    /// Secondary opcode of a register-type instruction (bits 5..0).
    pub enum FunctionCode {
        Sll = 0x00 => "sll",
        Srl = 0x02 => "srl",
        Sra = 0x03 => "sra",
        Sllv = 0x04 => "sllv",
        Srlv = 0x06 => "srlv",
        Srav = 0x07 => "srav",
        Jr = 0x08 => "jr",
        Jalr = 0x09 => "jalr",
        Mfhi = 0x10 => "mfhi",
        Mthi = 0x11 => "mthi",
        Mflo = 0x12 => "mflo",
        Mtlo = 0x13 => "mtlo",
        Mult = 0x18 => "mult",
        Multu = 0x19 => "multu",
        Div = 0x1a => "div",
        Divu = 0x1b => "divu",
        Add = 0x20 => "add",
        Addu = 0x21 => "addu",
        Sub = 0x22 => "sub",
        Subu = 0x23 => "subu",
        And = 0x24 => "and",
        Or = 0x25 => "or",
        Xor = 0x26 => "xor",
        Nor = 0x27 => "nor",
        Slt = 0x2a => "slt",
        Sltu = 0x2b => "sltu",
    }
}

/// Groups of function codes sharing an operand layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctGroup {
    /// rd = rs op rt
    Arithmetic,
    /// hi:lo = rs op rt
    Multiplication,
    /// rd = rt shifted by shamt
    Shift,
    /// rd = rt shifted by rs
    ShiftVariable,
    /// jr, jalr
    Jump,
    /// mthi, mtlo
    MoveTo,
    /// mfhi, mflo
    MoveFrom,
}

impl FunctGroup {
    pub const ALL: [FunctGroup; 7] = [
        FunctGroup::Arithmetic,
        FunctGroup::Multiplication,
        FunctGroup::Shift,
        FunctGroup::ShiftVariable,
        FunctGroup::Jump,
        FunctGroup::MoveTo,
        FunctGroup::MoveFrom,
    ];

    /// Is `value` a function code belonging to this group?
    pub fn contains(self, value: u8) -> bool {
        FunctionCode::from_value(value).is_some_and(|f| f.group() == self)
    }

    pub fn members(self) -> impl Iterator<Item = FunctionCode> {
        FunctionCode::ALL
            .iter()
            .copied()
            .filter(move |f| f.group() == self)
    }
}

impl FunctionCode {
    pub const fn group(self) -> FunctGroup {
        use FunctionCode::*;

        match self {
            Add | Addu | Sub | Subu | And | Or | Xor | Nor | Slt | Sltu => {
                FunctGroup::Arithmetic
            }
            Mult | Multu | Div | Divu => FunctGroup::Multiplication,
            Sll | Srl | Sra => FunctGroup::Shift,
            Sllv | Srlv | Srav => FunctGroup::ShiftVariable,
            Jr | Jalr => FunctGroup::Jump,
            Mthi | Mtlo => FunctGroup::MoveTo,
            Mfhi | Mflo => FunctGroup::MoveFrom,
        }
    }
}
