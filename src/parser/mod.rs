use nom::combinator::all_consuming;
use nom::error::VerboseError;
use nom::Finish;

pub use instruction::mnemonic::Mnemonic;
pub use instruction::operand::{classify, AddressingMode, ModeSet};
pub use instruction::Statement;
pub use operand_expression::OperandExpression;

use crate::ErrorKind;

mod instruction;
mod operand_expression;

pub type Input<'a> = &'a str;
pub type ParseError<'a> = VerboseError<Input<'a>>;

type IResult<'a, T> = nom::IResult<Input<'a>, T, ParseError<'a>>;

/// Blank lines and lines holding only a comment carry no instruction.
fn is_blank(i: Input) -> bool {
    let trimmed = i.trim_start();
    trimmed.is_empty() || trimmed.starts_with(';')
}

/// Splits one upper-cased source line into mnemonic and operand text.
///
/// Returns `Ok(None)` for lines that carry no instruction. Text before the
/// first letter is skipped; if the first run of letters is not a known
/// three-letter mnemonic the line is an [`ErrorKind::InvalidInstruction`].
pub fn parse_line(i: Input) -> Result<Option<Statement>, ErrorKind> {
    if is_blank(i) {
        return Ok(None);
    }
    Finish::finish(all_consuming(Statement::parse)(i))
        .map(|(_i, statement)| Some(statement))
        .map_err(|_| ErrorKind::InvalidInstruction)
}
