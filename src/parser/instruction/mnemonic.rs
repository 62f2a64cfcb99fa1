use std::str::FromStr;

use nom::character::complete::alpha1;
use nom::combinator::{map_res, verify};
use nom::error::context;

use crate::parser::{IResult, Input};

/// The 56 documented NMOS 6502 mnemonics.
#[derive(
    Debug,
    Eq,
    PartialEq,
    Hash,
    Clone,
    Copy,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum Mnemonic {
    ADC,
    AND,
    ASL,
    BCC,
    BCS,
    BEQ,
    BIT,
    BMI,
    BNE,
    BPL,
    BRK,
    BVC,
    BVS,
    CLC,
    CLD,
    CLI,
    CLV,
    CMP,
    CPX,
    CPY,
    DEC,
    DEX,
    DEY,
    EOR,
    INC,
    INX,
    INY,
    JMP,
    JSR,
    LDA,
    LDX,
    LDY,
    LSR,
    NOP,
    ORA,
    PHA,
    PHP,
    PLA,
    PLP,
    ROL,
    ROR,
    RTI,
    RTS,
    SBC,
    SEC,
    SED,
    SEI,
    STA,
    STX,
    STY,
    TAX,
    TAY,
    TSX,
    TXA,
    TXS,
    TYA,
}

impl Mnemonic {
    /// Recognizes a run of exactly three letters naming a known mnemonic.
    /// Expects upper-case input.
    pub fn parse(i: Input) -> IResult<Self> {
        context(
            "Mnemonic",
            map_res(verify(alpha1, |m: &str| m.len() == 3), Self::from_str),
        )(i)
    }
}
