/// Reasons a raw word cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("value {0} does not fit in a 32-bit word")]
    OutOfRange(i64),
    #[error("invalid opcode {0:#04x}")]
    InvalidOpcode(u8),
    #[error("invalid function code {0:#04x}")]
    InvalidFunctionCode(u8),
}

/// Raised by the checked encoder when a field does not fit its bit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("{field} value {value:#x} does not fit in {width} bits")]
    FieldOverflow {
        field: &'static str,
        value: u32,
        width: u32,
    },
}
