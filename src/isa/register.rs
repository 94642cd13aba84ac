use std::fmt;

mnemonic_table! {
    /// One of the 32 general-purpose registers, named by its calling
    /// convention role.
    pub enum Register {
        Zero = 0 => "zero",
        At = 1 => "at",
        V0 = 2 => "v0",
        V1 = 3 => "v1",
        A0 = 4 => "a0",
        A1 = 5 => "a1",
        A2 = 6 => "a2",
        A3 = 7 => "a3",
        T0 = 8 => "t0",
        T1 = 9 => "t1",
        T2 = 10 => "t2",
        T3 = 11 => "t3",
        T4 = 12 => "t4",
        T5 = 13 => "t5",
        T6 = 14 => "t6",
        T7 = 15 => "t7",
        S0 = 16 => "s0",
        S1 = 17 => "s1",
        S2 = 18 => "s2",
        S3 = 19 => "s3",
        S4 = 20 => "s4",
        S5 = 21 => "s5",
        S6 = 22 => "s6",
        S7 = 23 => "s7",
        T8 = 24 => "t8",
        T9 = 25 => "t9",
        K0 = 26 => "k0",
        K1 = 27 => "k1",
        Gp = 28 => "gp",
        Sp = 29 => "sp",
        Fp = 30 => "fp",
        /// The return address register, implicitly written by `jal` and
        /// `jalr`.
        Ra = 31 => "ra",
    }
}

impl Register {
    /// The sigil that prefixes a register name in assembly text.
    pub const SIGIL: char = '$';

    /// Builds a register from a raw 5-bit field. Upper bits are discarded.
    pub fn from_bits(bits: u32) -> Self {
        Self::ALL[(bits & 0x1f) as usize]
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SIGIL, self.mnemonic())
    }
}
