//! Assembly text on both sides of the codec: a lenient parser producing
//! partial instructions, and a canonical formatter.

mod formatter;
mod parser;
mod partial;

pub use formatter::format;
pub(crate) use parser::parse_hex_word;
pub use parser::parse;
pub use partial::{
    PartialImmediate, PartialInstruction, PartialJump, PartialRegister,
};
