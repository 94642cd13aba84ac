//! Field tables for the supported MIPS subset: registers, opcodes, function
//! codes, and the operand layout each operation expects.

/// Declares a closed table of named 6-bit (or 5-bit) values, with lookups in
/// both directions. Members are listed in ascending value order.
macro_rules! mnemonic_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $mnemonic:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Every member of the table, in ascending value order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Looks up a raw field value. Values outside the table are a
            /// normal `None`.
            pub const fn from_value(value: u8) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Exact, case-sensitive lookup by name.
            pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
                match mnemonic {
                    $( $mnemonic => Some($name::$variant), )+
                    _ => None,
                }
            }

            pub const fn value(self) -> u8 {
                self as u8
            }

            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $( $name::$variant => $mnemonic, )+
                }
            }
        }
    };
}

mod funct;
mod opcode;
pub mod operands;
mod register;

pub use funct::{FunctGroup, FunctionCode};
pub use opcode::{
    ImmediateGroup, ImmediateOpcode, InstructionFamily, JumpOpcode,
    SPECIAL_OPCODE,
};
pub use operands::{OperandSchema, Operation, Role, required_operands};
pub use register::Register;
