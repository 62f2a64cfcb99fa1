//! Line-by-line assembler for the documented MOS 6502 instruction set.
//!
//! Each source line holds at most one instruction with a literal hexadecimal
//! operand. Lines are encoded independently of each other; there are no
//! labels, directives or expressions.
//!
//! ```
//! let code = m6502asm::compile("  LDA #$05\n  STA $0200\n  RTS\n").unwrap();
//! assert_eq!(vec![0xA9, 0x05, 0x8D, 0x00, 0x02, 0x60], code);
//! ```

mod code_generator;
mod parser;

pub use code_generator::{encode_line, lookup, lookup_name, Instruction};
pub use parser::{classify, AddressingMode, Mnemonic, ModeSet, OperandExpression};

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("the given instruction is not valid")]
    InvalidInstruction,
    #[error("this addressing mode is not valid for the given instruction")]
    InvalidAddressingMode,
    #[error("expecting an operand, none found")]
    MissingOperand,
}

/// A line that failed to encode.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("line {line}: {kind}: \"{text}\"")]
pub struct Error {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    pub kind: ErrorKind,
}

pub fn compile(source: &str) -> Result<Vec<u8>, Error> {
    code_generator::generate_code(source.lines())
}

pub fn compile_lines<'a, I>(lines: I) -> Result<Vec<u8>, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    code_generator::generate_code(lines)
}
