use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use super::partial::{
    PartialImmediate, PartialInstruction, PartialJump, PartialRegister,
};
use crate::codec::decode;
use crate::isa::{FunctionCode, ImmediateGroup, Operation, Register, Role};

const SHAMT_MASK: i64 = 0x1f;
const TARGET_MASK: i64 = 0x03ff_ffff;

/// Recognizes a line holding a single raw instruction word, with an
/// optional `0x` prefix. Digits must be uppercase so that short mnemonics
/// such as `add` are never mistaken for words.
pub(crate) fn parse_hex_word(line: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();

    let re = RE.get_or_init(|| Regex::new(r"^[0-9A-F]{1,8}$").unwrap());
    let digits = line.strip_prefix("0x").unwrap_or(line);

    if !re.is_match(digits) {
        return None;
    }

    u32::from_str_radix(digits, 16).ok()
}

/// Splits a line on commas and/or whitespace. An empty token between two
/// commas is kept, so that it still occupies an operand position.
fn tokenize(line: &str) -> Vec<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();

    let re = RE.get_or_init(|| Regex::new(r"\s*,\s*|\s+").unwrap());
    re.split(line).collect()
}

/// Parses one line of text into a possibly incomplete instruction.
///
/// The line may be a raw hexadecimal word (`0C000100`, `0x00000020`) or a
/// mnemonic followed by its operands (`addu $t0, $t1, $t2`,
/// `lw $t0, 4($sp)`). This never fails: unrecognized lines give
/// [`PartialInstruction::Empty`] and unresolvable operands are left unset.
pub fn parse(line: &str) -> PartialInstruction {
    let line = line.trim();

    if let Some(word) = parse_hex_word(line) {
        return match decode(word) {
            Ok(inst) => inst.into(),
            Err(e) => {
                debug!(line, error = %e, "hex word does not decode");
                PartialInstruction::Empty
            }
        };
    }

    let tokens = tokenize(line);
    let Some((&mnemonic, operands)) = tokens.split_first() else {
        return PartialInstruction::Empty;
    };

    if mnemonic.is_empty() {
        return PartialInstruction::Empty;
    }

    let Some(operation) = Operation::from_mnemonic(mnemonic) else {
        debug!(mnemonic, "unrecognized mnemonic");
        return PartialInstruction::Empty;
    };

    trace!(?operation, ?operands, "parsing operands");
    let roles = operation.schema().roles;

    match operation {
        Operation::Register(FunctionCode::Jalr) => parse_jalr(operands),
        Operation::Register(funct) => {
            let mut inst = PartialRegister::new(funct, roles);

            for (role, token) in roles.iter().zip(operands) {
                match role {
                    Role::Destination => inst.rd = parse_register(token),
                    Role::Source | Role::Base => {
                        inst.rs = parse_register(token)
                    }
                    Role::Target => inst.rt = parse_register(token),
                    Role::ShiftAmount | Role::Immediate => {
                        inst.shamt =
                            parse_number(token).map(|v| (v & SHAMT_MASK) as u8)
                    }
                }
            }

            PartialInstruction::Register(inst)
        }
        Operation::Immediate(op) => {
            let mut inst = PartialImmediate::new(op, roles);
            let operands = if op.group() == ImmediateGroup::LoadStore {
                splice_address(operands)
            } else {
                operands.to_vec()
            };

            for (role, token) in roles.iter().zip(&operands) {
                match role {
                    Role::Source | Role::Base => {
                        inst.rs = parse_register(token)
                    }
                    Role::Target | Role::Destination => {
                        inst.rt = parse_register(token)
                    }
                    Role::Immediate | Role::ShiftAmount => {
                        inst.imm = parse_number(token).map(|v| v as u16)
                    }
                }
            }

            PartialInstruction::Immediate(inst)
        }
        Operation::Jump(op) => PartialInstruction::Jump(PartialJump {
            op,
            target: operands
                .first()
                .and_then(|token| parse_number(token))
                .map(|v| (v & TARGET_MASK) as u32),
        }),
    }
}

/// `jalr rs` links through `$ra`; `jalr rd, rs` names the link register.
fn parse_jalr(operands: &[&str]) -> PartialInstruction {
    let mut inst = PartialRegister::new(
        FunctionCode::Jalr,
        &[Role::Destination, Role::Source],
    );

    match operands {
        [] => inst.rd = Some(Register::Ra),
        [rs] => {
            inst.rd = Some(Register::Ra);
            inst.rs = parse_register(rs);
        }
        [rd, rs, ..] => {
            inst.rd = parse_register(rd);
            inst.rs = parse_register(rs);
        }
    }

    PartialInstruction::Register(inst)
}

/// Rewrites load/store operands into `[target, immediate, base]` order.
/// Accepts `imm(base)` as one token, or `imm` followed by `(base)` or a bare
/// `base`.
fn splice_address<'a>(operands: &[&'a str]) -> Vec<&'a str> {
    if let Some((imm, base)) = operands.get(1).and_then(|&t| split_address(t))
    {
        return vec![operands[0], imm, base];
    }

    let mut spliced = operands.to_vec();
    if let Some(base) = spliced.get_mut(2) {
        let token: &'a str = *base;
        *base = token
            .strip_prefix('(')
            .and_then(|b| b.strip_suffix(')'))
            .unwrap_or(token);
    }

    spliced
}

/// Splits `imm(base)` into its two halves.
fn split_address(token: &str) -> Option<(&str, &str)> {
    let (imm, base) = token.strip_suffix(')')?.split_once('(')?;
    Some((imm.trim(), base.trim()))
}

fn parse_register(token: &str) -> Option<Register> {
    token
        .strip_prefix(Register::SIGIL)
        .and_then(Register::from_mnemonic)
}

/// Parses a decimal or `0x`-prefixed hexadecimal integer, optionally
/// negated by a single leading `-`. Callers truncate the result to their
/// field width.
fn parse_number(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let value = match digits.strip_prefix("0x") {
        Some(hex) if hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
            i64::from_str_radix(hex, 16).ok()?
        }
        Some(_) => return None,
        None if digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse::<i64>().ok()?
        }
        None => return None,
    };

    if negative { value.checked_neg() } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::format;
    use crate::codec::{Instruction, JumpInstruction, encode};
    use crate::isa::{ImmediateOpcode, JumpOpcode};

    fn reg(
        funct: FunctionCode,
        rd: Option<Register>,
        rs: Option<Register>,
        rt: Option<Register>,
        shamt: Option<u8>,
    ) -> PartialInstruction {
        PartialInstruction::Register(PartialRegister {
            funct,
            rs,
            rt,
            rd,
            shamt,
        })
    }

    fn imm(
        op: ImmediateOpcode,
        rt: Option<Register>,
        rs: Option<Register>,
        imm: Option<u16>,
    ) -> PartialInstruction {
        PartialInstruction::Immediate(PartialImmediate { op, rs, rt, imm })
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse(""), PartialInstruction::Empty);
        assert_eq!(parse("   "), PartialInstruction::Empty);
        assert_eq!(parse("not_a_real_op"), PartialInstruction::Empty);
        assert_eq!(parse("lui $t0, 1"), PartialInstruction::Empty);
        assert_eq!(parse("ADDU $t0, $t1, $t2"), PartialInstruction::Empty);
    }

    #[test]
    fn test_hex_words() {
        let add = parse("00000020");
        assert_eq!(
            add,
            reg(
                FunctionCode::Add,
                Some(Register::Zero),
                Some(Register::Zero),
                Some(Register::Zero),
                Some(0)
            )
        );
        assert_eq!(parse("0x00000020"), add);
        assert_eq!(parse("20"), add);

        assert_eq!(
            parse("0C000100"),
            PartialInstruction::Jump(PartialJump {
                op: JumpOpcode::Jal,
                target: Some(0x100),
            })
        );
    }

    #[test]
    fn test_bad_hex_word_is_empty() {
        // opcode 0x3f
        assert_eq!(parse("FFFFFFFF"), PartialInstruction::Empty);
        // syscall
        assert_eq!(parse("0000000C"), PartialInstruction::Empty);
        // too many digits to be a word
        assert_eq!(parse("000000020"), PartialInstruction::Empty);
    }

    #[test]
    fn test_hex_word_shape() {
        assert_eq!(parse_hex_word("0x1F"), Some(0x1f));
        assert_eq!(parse_hex_word("DEADBEEF"), Some(0xdead_beef));
        assert_eq!(parse_hex_word("add"), None);
        assert_eq!(parse_hex_word("0x"), None);
        assert_eq!(parse_hex_word("123456789"), None);
    }

    #[test]
    fn test_arithmetic() {
        let expected = reg(
            FunctionCode::Addu,
            Some(Register::T0),
            Some(Register::T1),
            Some(Register::T2),
            Some(0),
        );

        assert_eq!(parse("addu $t0, $t1, $t2"), expected);
        assert_eq!(parse("addu $t0 $t1 $t2"), expected);
        assert_eq!(parse("  addu   $t0 ,$t1,   $t2  "), expected);
    }

    #[test]
    fn test_register_layouts() {
        assert_eq!(
            parse("sll $t0, $t1, 4"),
            reg(
                FunctionCode::Sll,
                Some(Register::T0),
                Some(Register::Zero),
                Some(Register::T1),
                None
            )
            .with_shamt(4)
        );
        assert_eq!(
            parse("srav $a0, $a1, $a2"),
            reg(
                FunctionCode::Srav,
                Some(Register::A0),
                Some(Register::A2),
                Some(Register::A1),
                Some(0)
            )
        );
        assert_eq!(
            parse("mult $s0, $s1"),
            reg(
                FunctionCode::Mult,
                Some(Register::Zero),
                Some(Register::S0),
                Some(Register::S1),
                Some(0)
            )
        );
        assert_eq!(
            parse("mflo $v0"),
            reg(
                FunctionCode::Mflo,
                Some(Register::V0),
                Some(Register::Zero),
                Some(Register::Zero),
                Some(0)
            )
        );
        assert_eq!(
            parse("mthi $v1"),
            reg(
                FunctionCode::Mthi,
                Some(Register::Zero),
                Some(Register::V1),
                Some(Register::Zero),
                Some(0)
            )
        );
    }

    #[test]
    fn test_missing_and_unknown_operands() {
        assert_eq!(
            parse("add $t0"),
            reg(FunctionCode::Add, Some(Register::T0), None, None, Some(0))
        );
        assert_eq!(
            parse("add $t0, $bogus, t2"),
            reg(FunctionCode::Add, Some(Register::T0), None, None, Some(0))
        );
        // An empty operand still takes its position
        assert_eq!(
            parse("add $t0,, $t2"),
            reg(
                FunctionCode::Add,
                Some(Register::T0),
                None,
                Some(Register::T2),
                Some(0)
            )
        );
    }

    #[test]
    fn test_jalr_links_ra_by_default() {
        assert_eq!(
            parse("jalr $t0"),
            reg(
                FunctionCode::Jalr,
                Some(Register::Ra),
                Some(Register::T0),
                Some(Register::Zero),
                Some(0)
            )
        );
        assert_eq!(
            parse("jalr $s0, $t0"),
            reg(
                FunctionCode::Jalr,
                Some(Register::S0),
                Some(Register::T0),
                Some(Register::Zero),
                Some(0)
            )
        );
        // jr has no implicit link
        assert_eq!(
            parse("jr $ra"),
            reg(
                FunctionCode::Jr,
                Some(Register::Zero),
                Some(Register::Ra),
                Some(Register::Zero),
                Some(0)
            )
        );
    }

    #[test]
    fn test_immediates() {
        assert_eq!(
            parse("addi $t0, $t1, 10"),
            imm(
                ImmediateOpcode::Addi,
                Some(Register::T0),
                Some(Register::T1),
                Some(10)
            )
        );
        assert_eq!(
            parse("ori $t0, $t1, 0xFF"),
            imm(
                ImmediateOpcode::Ori,
                Some(Register::T0),
                Some(Register::T1),
                Some(0xff)
            )
        );
        assert_eq!(
            parse("addiu $sp, $sp, -8"),
            imm(
                ImmediateOpcode::Addiu,
                Some(Register::Sp),
                Some(Register::Sp),
                Some(0xfff8)
            )
        );
        assert_eq!(
            parse("beq $a0, $a1, 0x10"),
            imm(
                ImmediateOpcode::Beq,
                Some(Register::A1),
                Some(Register::A0),
                Some(0x10)
            )
        );
        assert_eq!(
            parse("bgtz $a0, 3"),
            imm(
                ImmediateOpcode::Bgtz,
                Some(Register::Zero),
                Some(Register::A0),
                Some(3)
            )
        );
        assert_eq!(
            parse("lhi $t0, 0x1234"),
            imm(
                ImmediateOpcode::Lhi,
                Some(Register::T0),
                Some(Register::Zero),
                Some(0x1234)
            )
        );
        assert_eq!(
            parse("andi $t0, $t1, 12abc"),
            imm(
                ImmediateOpcode::Andi,
                Some(Register::T0),
                Some(Register::T1),
                None
            )
        );
    }

    #[test]
    fn test_load_store_addressing() {
        let expected = imm(
            ImmediateOpcode::Lw,
            Some(Register::T0),
            Some(Register::Sp),
            Some(4),
        );

        assert_eq!(parse("lw $t0, 4($sp)"), expected);
        assert_eq!(parse("lw $t0, 4 ($sp)"), expected);
        assert_eq!(parse("lw $t0 4 $sp"), expected);
        assert_eq!(parse("lw $t0, 0x0004, $sp"), expected);

        assert_eq!(
            parse("sb $a0, -1($gp)"),
            imm(
                ImmediateOpcode::Sb,
                Some(Register::A0),
                Some(Register::Gp),
                Some(0xffff)
            )
        );
        assert_eq!(
            parse("sw $a0, ($gp)"),
            imm(ImmediateOpcode::Sw, Some(Register::A0), Some(Register::Gp), None)
        );
        assert_eq!(
            parse("lhu $a0"),
            imm(ImmediateOpcode::Lhu, Some(Register::A0), None, None)
        );
    }

    #[test]
    fn test_jumps() {
        assert_eq!(
            parse("j 0x100"),
            PartialInstruction::Jump(PartialJump {
                op: JumpOpcode::J,
                target: Some(0x100),
            })
        );
        assert_eq!(
            parse("trap"),
            PartialInstruction::Jump(PartialJump {
                op: JumpOpcode::Trap,
                target: None,
            })
        );
    }

    #[test]
    fn test_operands_truncate_to_field_width() {
        let sll = parse("sll $t0, $t1, 33").to_instruction().unwrap();
        let Instruction::Register(inst) = sll else {
            panic!("expected a register instruction, got {sll:?}");
        };
        assert_eq!(inst.shamt, 1);
        assert_eq!(format(&sll), "sll $t0 $t1 0x01");
        assert_eq!(decode(encode(&sll)), Ok(sll));

        let sra = parse("sra $t0, $t1, -1").to_instruction().unwrap();
        let Instruction::Register(inst) = sra else {
            panic!("expected a register instruction, got {sra:?}");
        };
        assert_eq!(inst.shamt, 31);

        let j = parse("j 0xFFFFFFFF").to_instruction().unwrap();
        assert_eq!(
            j,
            Instruction::Jump(JumpInstruction {
                op: JumpOpcode::J,
                target: 0x03ff_ffff,
            })
        );
        assert_eq!(format(&j), "j 0x3FFFFFF");
        assert_eq!(decode(encode(&j)), Ok(j));

        let jal = parse("jal -4").to_instruction().unwrap();
        assert_eq!(format(&jal), "jal 0x3FFFFFC");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number("-42"), Some(-42));
        assert_eq!(parse_number("0x2A"), Some(42));
        assert_eq!(parse_number("0x2a"), Some(42));
        assert_eq!(parse_number("-0x10"), Some(-16));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("$t0"), None);
        assert_eq!(parse_number("+5"), None);
        assert_eq!(parse_number("--5"), None);
        assert_eq!(parse_number("0x-1"), None);
        assert_eq!(parse_number("0x+5"), None);
        assert_eq!(parse_number("-+5"), None);
    }

    impl PartialInstruction {
        fn with_shamt(mut self, shamt: u8) -> Self {
            if let PartialInstruction::Register(inst) = &mut self {
                inst.shamt = Some(shamt);
            }
            self
        }
    }
}
