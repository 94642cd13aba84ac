use bitfield::bitfield;

bitfield! {
    /// A raw 32-bit MIPS instruction word, providing access to its fields.
    /// Setters mask their argument to the width of the field.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct Word(u32);
    impl Debug;

    /// The opcode field (6 bits) selects the instruction family
    pub opcode, set_opcode: 31, 26;

    /// The RS field (5 bits), first source or base register
    pub rs, set_rs: 25, 21;

    /// The RT field (5 bits), target or second source register
    pub rt, set_rt: 20, 16;

    /// The RD field (5 bits), destination register
    pub rd, set_rd: 15, 11;

    /// The SHAMT field (5 bits), the amount for shift operations
    pub shamt, set_shamt: 10, 6;

    /// The funct field (6 bits) is a secondary opcode
    pub funct, set_funct: 5, 0;

    /// The immediate field (16 bits), kept as a raw bit pattern
    pub imm16, set_imm16: 15, 0;

    /// The target field (26 bits) is used in jump instructions
    pub target, set_target: 25, 0;
}
