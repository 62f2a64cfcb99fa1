use std::iter::FromIterator;

use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{char, one_of, space0};
use nom::combinator::{recognize, value};
use nom::error::context;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::Parser;
use strum::IntoEnumIterator;

use crate::parser::{IResult, Input, ParseError};

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, strum_macros::Display, strum_macros::EnumIter)]
pub enum AddressingMode {
    Accumulator,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Immediate,
    Implied,
    Indirect,
    IndexedIndirectX,
    IndirectIndexedY,
    Relative,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn operand_width(self) -> usize {
        use AddressingMode::*;
        match self {
            Accumulator | Implied => 0,
            Immediate | Relative | ZeroPage | ZeroPageX | ZeroPageY | IndexedIndirectX
            | IndirectIndexedY => 1,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 2,
        }
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// The addressing modes a single mnemonic accepts.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy)]
pub struct ModeSet(u16);

impl ModeSet {
    pub fn contains(self, mode: AddressingMode) -> bool {
        self.0 & mode.bit() != 0
    }

    pub fn insert(&mut self, mode: AddressingMode) {
        self.0 |= mode.bit();
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = AddressingMode> {
        AddressingMode::iter().filter(move |&mode| self.contains(mode))
    }
}

impl FromIterator<AddressingMode> for ModeSet {
    fn from_iter<T: IntoIterator<Item = AddressingMode>>(iter: T) -> Self {
        let mut set = ModeSet::default();
        for mode in iter {
            set.insert(mode);
        }
        set
    }
}

/// The textual shapes an operand can take.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
enum OperandSyntax {
    AbsoluteX,
    AbsoluteY,
    Absolute,
    Immediate,
    Indirect,
    IndexedIndirectX,
    IndirectIndexedY,
    ZeroPageX,
    ZeroPageY,
    ZeroPageOrRelative,
    AccumulatorRegister,
    Empty,
}

/// Order in which operand shapes are tried. An unindexed literal is a prefix of
/// its indexed form, so the indexed shapes come first.
const PRECEDENCE: [OperandSyntax; 12] = [
    OperandSyntax::AbsoluteX,
    OperandSyntax::AbsoluteY,
    OperandSyntax::Absolute,
    OperandSyntax::Immediate,
    OperandSyntax::Indirect,
    OperandSyntax::IndexedIndirectX,
    OperandSyntax::IndirectIndexedY,
    OperandSyntax::ZeroPageX,
    OperandSyntax::ZeroPageY,
    OperandSyntax::ZeroPageOrRelative,
    OperandSyntax::AccumulatorRegister,
    OperandSyntax::Empty,
];

impl OperandSyntax {
    fn parse(self, i: Input) -> IResult<()> {
        use OperandSyntax::*;
        match self {
            AbsoluteX => context(
                "AbsoluteX",
                value((), pair(hex_literal(4), index_register("Xx"))),
            )(i),
            AbsoluteY => context(
                "AbsoluteY",
                value((), pair(hex_literal(4), index_register("Yy"))),
            )(i),
            Absolute => context("Absolute", value((), hex_literal(4)))(i),
            Immediate => context("Immediate", value((), preceded(char('#'), hex_literal(2))))(i),
            Indirect => context("Indirect", value((), parenthesized(hex_literal(4))))(i),
            IndexedIndirectX => context(
                "IndexedIndirectX",
                value((), parenthesized(pair(hex_literal(2), index_register("Xx")))),
            )(i),
            IndirectIndexedY => context(
                "IndirectIndexedY",
                value((), pair(parenthesized(hex_literal(2)), index_register("Yy"))),
            )(i),
            ZeroPageX => context(
                "ZeroPageX",
                value((), pair(hex_literal(2), index_register("Xx"))),
            )(i),
            ZeroPageY => context(
                "ZeroPageY",
                value((), pair(hex_literal(2), index_register("Yy"))),
            )(i),
            ZeroPageOrRelative => context("ZeroPageOrRelative", value((), hex_literal(2)))(i),
            AccumulatorRegister => context("AccumulatorRegister", value((), register("Aa")))(i),
            Empty => context("Empty", value((), space0))(i),
        }
    }

    fn matches(self, operand: Input) -> bool {
        match self.parse(operand) {
            Ok((rest, ())) => rest.is_empty(),
            Err(_) => false,
        }
    }

    /// Maps the shape onto a mode. Bare two-digit literals and missing operands
    /// depend on what the mnemonic supports.
    fn resolve(self, supported: ModeSet) -> Option<AddressingMode> {
        use AddressingMode as Mode;
        match self {
            OperandSyntax::AbsoluteX => Some(Mode::AbsoluteX),
            OperandSyntax::AbsoluteY => Some(Mode::AbsoluteY),
            OperandSyntax::Absolute => Some(Mode::Absolute),
            OperandSyntax::Immediate => Some(Mode::Immediate),
            OperandSyntax::Indirect => Some(Mode::Indirect),
            OperandSyntax::IndexedIndirectX => Some(Mode::IndexedIndirectX),
            OperandSyntax::IndirectIndexedY => Some(Mode::IndirectIndexedY),
            OperandSyntax::ZeroPageX => Some(Mode::ZeroPageX),
            OperandSyntax::ZeroPageY => Some(Mode::ZeroPageY),
            OperandSyntax::ZeroPageOrRelative if supported.contains(Mode::ZeroPage) => {
                Some(Mode::ZeroPage)
            }
            OperandSyntax::ZeroPageOrRelative => Some(Mode::Relative),
            OperandSyntax::AccumulatorRegister => Some(Mode::Accumulator),
            OperandSyntax::Empty if supported.contains(Mode::Implied) => Some(Mode::Implied),
            OperandSyntax::Empty if supported.contains(Mode::Accumulator) => {
                Some(Mode::Accumulator)
            }
            OperandSyntax::Empty => None,
        }
    }
}

/// Determines the addressing mode an operand's syntax implies.
///
/// Returns `None` when the text fits no known shape, or when there is no
/// operand and the mnemonic takes neither an implied nor an accumulator form.
/// Whether the returned mode is legal for the mnemonic is left to the caller.
pub fn classify(operand: Input, supported: ModeSet) -> Option<AddressingMode> {
    let operand = operand.trim();
    PRECEDENCE
        .iter()
        .copied()
        .find(|syntax| syntax.matches(operand))
        .and_then(|syntax| syntax.resolve(supported))
}

/// `$` followed by exactly `digits` hex digits.
fn hex_literal<'a>(digits: usize) -> impl FnMut(Input<'a>) -> IResult<'a, Input<'a>> {
    recognize(preceded(
        char('$'),
        take_while_m_n(digits, digits, |c: char| c.is_ascii_hexdigit()),
    ))
}

/// A register name in either case, given as e.g. `"Xx"`.
fn register<'a>(name: &'static str) -> impl FnMut(Input<'a>) -> IResult<'a, char> {
    one_of(name)
}

fn index_register<'a>(name: &'static str) -> impl FnMut(Input<'a>) -> IResult<'a, char> {
    preceded(tuple((space0, char(','), space0)), register(name))
}

fn parenthesized<'a, O, F>(inner: F) -> impl FnMut(Input<'a>) -> IResult<'a, O>
where
    F: Parser<Input<'a>, O, ParseError<'a>>,
{
    delimited(pair(char('('), space0), inner, pair(space0, char(')')))
}
