use std::str::FromStr;

use crate::parser::{AddressingMode, Mnemonic, ModeSet};
use crate::ErrorKind;

/// A mnemonic together with the opcode of every addressing mode it accepts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Instruction {
    mnemonic: Mnemonic,
    opcodes: &'static [(AddressingMode, u8)],
}

impl Instruction {
    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    pub fn opcode(&self, mode: AddressingMode) -> Option<u8> {
        self.opcodes
            .iter()
            .find(|(m, _)| *m == mode)
            .map(|&(_, opcode)| opcode)
    }

    pub fn modes(&self) -> ModeSet {
        self.opcodes.iter().map(|&(mode, _)| mode).collect()
    }

    pub fn opcodes(&self) -> impl Iterator<Item = (AddressingMode, u8)> {
        self.opcodes.iter().copied()
    }
}

pub fn lookup(mnemonic: Mnemonic) -> Instruction {
    Instruction {
        mnemonic,
        opcodes: opcodes(mnemonic),
    }
}

/// Case-insensitive lookup by name.
pub fn lookup_name(name: &str) -> Result<Instruction, ErrorKind> {
    Mnemonic::from_str(&name.to_ascii_uppercase())
        .map(lookup)
        .map_err(|_| ErrorKind::InvalidInstruction)
}

fn opcodes(mnemonic: Mnemonic) -> &'static [(AddressingMode, u8)] {
    use AddressingMode::*;
    match mnemonic {
        Mnemonic::ADC => &[
            (Immediate, 0x69),
            (ZeroPage, 0x65),
            (ZeroPageX, 0x75),
            (Absolute, 0x6D),
            (AbsoluteX, 0x7D),
            (AbsoluteY, 0x79),
            (IndexedIndirectX, 0x61),
            (IndirectIndexedY, 0x71),
        ],
        Mnemonic::AND => &[
            (Immediate, 0x29),
            (ZeroPage, 0x25),
            (ZeroPageX, 0x35),
            (Absolute, 0x2D),
            (AbsoluteX, 0x3D),
            (AbsoluteY, 0x39),
            (IndexedIndirectX, 0x21),
            (IndirectIndexedY, 0x31),
        ],
        Mnemonic::ASL => &[
            (Accumulator, 0x0A),
            (ZeroPage, 0x06),
            (ZeroPageX, 0x16),
            (Absolute, 0x0E),
            (AbsoluteX, 0x1E),
        ],
        Mnemonic::BCC => &[(Relative, 0x90)],
        Mnemonic::BCS => &[(Relative, 0xB0)],
        Mnemonic::BEQ => &[(Relative, 0xF0)],
        Mnemonic::BIT => &[(ZeroPage, 0x24), (Absolute, 0x2C)],
        Mnemonic::BMI => &[(Relative, 0x30)],
        Mnemonic::BNE => &[(Relative, 0xD0)],
        Mnemonic::BPL => &[(Relative, 0x10)],
        Mnemonic::BRK => &[(Implied, 0x00)],
        Mnemonic::BVC => &[(Relative, 0x50)],
        Mnemonic::BVS => &[(Relative, 0x70)],
        Mnemonic::CLC => &[(Implied, 0x18)],
        Mnemonic::CLD => &[(Implied, 0xD8)],
        Mnemonic::CLI => &[(Implied, 0x58)],
        Mnemonic::CLV => &[(Implied, 0xB8)],
        Mnemonic::CMP => &[
            (Immediate, 0xC9),
            (ZeroPage, 0xC5),
            (ZeroPageX, 0xD5),
            (Absolute, 0xCD),
            (AbsoluteX, 0xDD),
            (AbsoluteY, 0xD9),
            (IndexedIndirectX, 0xC1),
            (IndirectIndexedY, 0xD1),
        ],
        Mnemonic::CPX => &[(Immediate, 0xE0), (ZeroPage, 0xE4), (Absolute, 0xEC)],
        Mnemonic::CPY => &[(Immediate, 0xC0), (ZeroPage, 0xC4), (Absolute, 0xCC)],
        Mnemonic::DEC => &[
            (ZeroPage, 0xC6),
            (ZeroPageX, 0xD6),
            (Absolute, 0xCE),
            (AbsoluteX, 0xDE),
        ],
        Mnemonic::DEX => &[(Implied, 0xCA)],
        Mnemonic::DEY => &[(Implied, 0x88)],
        Mnemonic::EOR => &[
            (Immediate, 0x49),
            (ZeroPage, 0x45),
            (ZeroPageX, 0x55),
            (Absolute, 0x4D),
            (AbsoluteX, 0x5D),
            (AbsoluteY, 0x59),
            (IndexedIndirectX, 0x41),
            (IndirectIndexedY, 0x51),
        ],
        Mnemonic::INC => &[
            (ZeroPage, 0xE6),
            (ZeroPageX, 0xF6),
            (Absolute, 0xEE),
            (AbsoluteX, 0xFE),
        ],
        Mnemonic::INX => &[(Implied, 0xE8)],
        Mnemonic::INY => &[(Implied, 0xC8)],
        Mnemonic::JMP => &[(Absolute, 0x4C), (Indirect, 0x6C)],
        Mnemonic::JSR => &[(Absolute, 0x20)],
        Mnemonic::LDA => &[
            (Immediate, 0xA9),
            (ZeroPage, 0xA5),
            (ZeroPageX, 0xB5),
            (Absolute, 0xAD),
            (AbsoluteX, 0xBD),
            (AbsoluteY, 0xB9),
            (IndexedIndirectX, 0xA1),
            (IndirectIndexedY, 0xB1),
        ],
        Mnemonic::LDX => &[
            (Immediate, 0xA2),
            (ZeroPage, 0xA6),
            (ZeroPageY, 0xB6),
            (Absolute, 0xAE),
            (AbsoluteY, 0xBE),
        ],
        Mnemonic::LDY => &[
            (Immediate, 0xA0),
            (ZeroPage, 0xA4),
            (ZeroPageX, 0xB4),
            (Absolute, 0xAC),
            (AbsoluteX, 0xBC),
        ],
        Mnemonic::LSR => &[
            (Accumulator, 0x4A),
            (ZeroPage, 0x46),
            (ZeroPageX, 0x56),
            (Absolute, 0x4E),
            (AbsoluteX, 0x5E),
        ],
        Mnemonic::NOP => &[(Implied, 0xEA)],
        Mnemonic::ORA => &[
            (Immediate, 0x09),
            (ZeroPage, 0x05),
            (ZeroPageX, 0x15),
            (Absolute, 0x0D),
            (AbsoluteX, 0x1D),
            (AbsoluteY, 0x19),
            (IndexedIndirectX, 0x01),
            (IndirectIndexedY, 0x11),
        ],
        Mnemonic::PHA => &[(Implied, 0x48)],
        Mnemonic::PHP => &[(Implied, 0x08)],
        Mnemonic::PLA => &[(Implied, 0x68)],
        Mnemonic::PLP => &[(Implied, 0x28)],
        Mnemonic::ROL => &[
            (Accumulator, 0x2A),
            (ZeroPage, 0x26),
            (ZeroPageX, 0x36),
            (Absolute, 0x2E),
            (AbsoluteX, 0x3E),
        ],
        Mnemonic::ROR => &[
            (Accumulator, 0x6A),
            (ZeroPage, 0x66),
            (ZeroPageX, 0x76),
            (Absolute, 0x6E),
            (AbsoluteX, 0x7E),
        ],
        Mnemonic::RTI => &[(Implied, 0x40)],
        Mnemonic::RTS => &[(Implied, 0x60)],
        Mnemonic::SBC => &[
            (Immediate, 0xE9),
            (ZeroPage, 0xE5),
            (ZeroPageX, 0xF5),
            (Absolute, 0xED),
            (AbsoluteX, 0xFD),
            (AbsoluteY, 0xF9),
            (IndexedIndirectX, 0xE1),
            (IndirectIndexedY, 0xF1),
        ],
        Mnemonic::SEC => &[(Implied, 0x38)],
        Mnemonic::SED => &[(Implied, 0xF8)],
        Mnemonic::SEI => &[(Implied, 0x78)],
        Mnemonic::STA => &[
            (ZeroPage, 0x85),
            (ZeroPageX, 0x95),
            (Absolute, 0x8D),
            (AbsoluteX, 0x9D),
            (AbsoluteY, 0x99),
            (IndexedIndirectX, 0x81),
            (IndirectIndexedY, 0x91),
        ],
        Mnemonic::STX => &[(ZeroPage, 0x86), (ZeroPageY, 0x96), (Absolute, 0x8E)],
        Mnemonic::STY => &[(ZeroPage, 0x84), (ZeroPageX, 0x94), (Absolute, 0x8C)],
        Mnemonic::TAX => &[(Implied, 0xAA)],
        Mnemonic::TAY => &[(Implied, 0xA8)],
        Mnemonic::TSX => &[(Implied, 0xBA)],
        Mnemonic::TXA => &[(Implied, 0x8A)],
        Mnemonic::TXS => &[(Implied, 0x9A)],
        Mnemonic::TYA => &[(Implied, 0x98)],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn lookup_name_case_insensitive() {
        for name in &["LDA", "lda", "Lda"] {
            let instruction = lookup_name(name).unwrap();
            assert_eq!(Mnemonic::LDA, instruction.mnemonic());
            assert_eq!(lookup(Mnemonic::LDA), instruction);
        }
    }

    #[test]
    fn lookup_name_unknown() {
        assert_eq!(Err(ErrorKind::InvalidInstruction), lookup_name("XYZ"));
        assert_eq!(Err(ErrorKind::InvalidInstruction), lookup_name("STZ"));
        assert_eq!(Err(ErrorKind::InvalidInstruction), lookup_name(""));
    }

    #[test]
    fn one_opcode_per_mode() {
        for mnemonic in Mnemonic::iter() {
            let instruction = lookup(mnemonic);
            let count = instruction.opcodes().count();
            assert!(count > 0, "{} has no opcodes", mnemonic);
            assert_eq!(count, instruction.modes().len(), "{} repeats a mode", mnemonic);
        }
    }

    #[test]
    fn opcodes_unique_across_table() {
        let all: Vec<u8> = Mnemonic::iter()
            .flat_map(|m| lookup(m).opcodes().map(|(_, opcode)| opcode))
            .collect();
        let unique: HashSet<u8> = all.iter().copied().collect();
        assert_eq!(151, all.len());
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn zero_page_and_relative_are_exclusive() {
        for mnemonic in Mnemonic::iter() {
            let modes = lookup(mnemonic).modes();
            let both = modes.contains(AddressingMode::ZeroPage)
                && modes.contains(AddressingMode::Relative);
            assert!(!both, "{}", mnemonic);
        }
    }

    #[test]
    fn known_opcodes() {
        assert_eq!(Some(0xAD), lookup(Mnemonic::LDA).opcode(AddressingMode::Absolute));
        assert_eq!(Some(0x6C), lookup(Mnemonic::JMP).opcode(AddressingMode::Indirect));
        assert_eq!(Some(0x96), lookup(Mnemonic::STX).opcode(AddressingMode::ZeroPageY));
        assert_eq!(None, lookup(Mnemonic::JMP).opcode(AddressingMode::Immediate));
        assert_eq!(None, lookup(Mnemonic::STA).opcode(AddressingMode::Immediate));
    }
}
