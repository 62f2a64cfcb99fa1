use either::Either;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::map_res;
use nom::error::context;
use nom::sequence::preceded;

use crate::parser::{AddressingMode, IResult, Input};
use crate::ErrorKind;

/// The literal operand of an instruction, sized for its addressing mode.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum OperandExpression {
    None,
    Byte(u8),
    Word(u16),
}

impl OperandExpression {
    /// Extracts the operand for `mode` from `i`.
    ///
    /// One-byte modes keep the low byte of the literal. A mode that needs an
    /// operand but finds no `$` literal fails with [`ErrorKind::MissingOperand`].
    pub fn encode(mode: AddressingMode, i: Input) -> Result<Self, ErrorKind> {
        match mode.operand_width() {
            0 => Ok(OperandExpression::None),
            width => {
                let value = first_literal(i).ok_or(ErrorKind::MissingOperand)?;
                if width == 1 {
                    Ok(OperandExpression::Byte(value as u8))
                } else {
                    Ok(OperandExpression::Word(value))
                }
            }
        }
    }

    /// Operand bytes in emission order, low byte first.
    pub fn bytes(self) -> impl Iterator<Item = u8> {
        match self {
            OperandExpression::None => Either::Left(None.into_iter()),
            OperandExpression::Byte(b) => Either::Left(Some(b).into_iter()),
            OperandExpression::Word(w) => Either::Right(IntoIterator::into_iter(w.to_le_bytes())),
        }
    }
}

struct Number;

impl Number {
    /// `$` followed by two to four hex digits.
    fn parse(i: Input) -> IResult<u16> {
        context(
            "Number",
            map_res(
                preceded(
                    char('$'),
                    take_while_m_n(2, 4, |c: char| c.is_ascii_hexdigit()),
                ),
                |digits: &str| u16::from_str_radix(digits, 16),
            ),
        )(i)
    }
}

/// The first `$` literal found anywhere in `i`.
fn first_literal(i: Input) -> Option<u16> {
    i.match_indices('$')
        .find_map(|(at, _)| Number::parse(&i[at..]).ok())
        .map(|(_rest, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operand_bytes(mode: AddressingMode, i: Input) -> Result<Vec<u8>, ErrorKind> {
        OperandExpression::encode(mode, i).map(|operand| operand.bytes().collect())
    }

    #[test]
    fn encode_no_operand() {
        let result = OperandExpression::encode(AddressingMode::Implied, "");
        assert_eq!(Ok(OperandExpression::None), result);
        let result = OperandExpression::encode(AddressingMode::Accumulator, "$12");
        assert_eq!(Ok(OperandExpression::None), result);
    }

    #[test]
    fn encode_byte() {
        let result = OperandExpression::encode(AddressingMode::Immediate, "#$0a");
        assert_eq!(Ok(OperandExpression::Byte(0x0A)), result);
        let result = OperandExpression::encode(AddressingMode::IndirectIndexedY, "($20),Y");
        assert_eq!(Ok(OperandExpression::Byte(0x20)), result);
    }

    #[test]
    fn encode_byte_truncates() {
        let result = OperandExpression::encode(AddressingMode::ZeroPage, "$1234");
        assert_eq!(Ok(OperandExpression::Byte(0x34)), result);
    }

    #[test]
    fn encode_word() {
        let result = OperandExpression::encode(AddressingMode::Indirect, "($FFFC)");
        assert_eq!(Ok(OperandExpression::Word(0xFFFC)), result);
        let result = OperandExpression::encode(AddressingMode::AbsoluteX, "$0300 , X");
        assert_eq!(Ok(OperandExpression::Word(0x0300)), result);
    }

    #[test]
    fn encode_skips_bare_dollar() {
        let result = OperandExpression::encode(AddressingMode::Absolute, "$ $1234");
        assert_eq!(Ok(OperandExpression::Word(0x1234)), result);
    }

    #[test]
    fn encode_missing_operand() {
        for &mode in &[
            AddressingMode::Absolute,
            AddressingMode::Immediate,
            AddressingMode::Relative,
            AddressingMode::IndexedIndirectX,
        ] {
            assert_eq!(Err(ErrorKind::MissingOperand), OperandExpression::encode(mode, ""));
            assert_eq!(Err(ErrorKind::MissingOperand), OperandExpression::encode(mode, "#1"));
        }
    }

    #[test]
    fn bytes_little_endian() {
        assert_eq!(vec![0x34, 0x12], operand_bytes(AddressingMode::Absolute, "$1234").unwrap());
        assert_eq!(vec![0x10], operand_bytes(AddressingMode::Relative, "$10").unwrap());
        assert!(operand_bytes(AddressingMode::Implied, "").unwrap().is_empty());
    }
}
