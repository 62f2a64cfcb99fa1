use std::iter;

use crate::parser::{self, classify, OperandExpression, Statement};
use crate::{Error, ErrorKind};

pub use lookup_tables::{lookup, lookup_name, Instruction};

mod lookup_tables;

/// Encodes a single source line.
///
/// Blank and comment-only lines encode to nothing. The result depends on the
/// text of this line alone.
pub fn encode_line(line: &str) -> Result<Vec<u8>, ErrorKind> {
    let normalized = line.to_ascii_uppercase();
    match parser::parse_line(&normalized)? {
        Some(statement) => encode_statement(&statement),
        None => Ok(Vec::new()),
    }
}

fn encode_statement(statement: &Statement) -> Result<Vec<u8>, ErrorKind> {
    let instruction = lookup(statement.mnemonic);
    let mode = classify(statement.operand, instruction.modes())
        .ok_or(ErrorKind::InvalidAddressingMode)?;
    let opcode = instruction
        .opcode(mode)
        .ok_or(ErrorKind::InvalidAddressingMode)?;
    let operand = OperandExpression::encode(mode, statement.operand)?;
    Ok(iter::once(opcode).chain(operand.bytes()).collect())
}

/// Encodes every line in order and concatenates the results.
///
/// Stops at the first line that fails; nothing encoded so far is returned.
pub fn generate_code<'a, I>(lines: I) -> Result<Vec<u8>, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .try_fold(Vec::new(), |mut code, (index, line)| {
            let bytes = encode_line(line).map_err(|kind| Error {
                line: index + 1,
                text: line.trim().to_owned(),
                kind,
            })?;
            code.extend(bytes);
            Ok(code)
        })
}
