use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::{map, opt, rest};
use nom::error::context;
use nom::sequence::{preceded, terminated, tuple};

use mnemonic::Mnemonic;

use super::{IResult, Input};

pub mod mnemonic;
pub mod operand;

/// A source line split into its mnemonic and the operand text running up to
/// any `;` comment.
#[derive(Debug, Eq, PartialEq)]
pub struct Statement<'a> {
    pub mnemonic: Mnemonic,
    pub operand: Input<'a>,
}

impl<'a> Statement<'a> {
    pub fn parse(i: Input<'a>) -> IResult<'a, Self> {
        context(
            "Statement",
            map(
                terminated(
                    tuple((
                        preceded(leading_text, Mnemonic::parse),
                        take_till(|c: char| c == ';'),
                    )),
                    opt(comment),
                ),
                |(mnemonic, operand): (Mnemonic, Input<'a>)| Statement {
                    mnemonic,
                    operand: operand.trim(),
                },
            ),
        )(i)
    }
}

/// Whatever precedes the first letter on the line, stopping short of a comment.
fn leading_text(i: Input) -> IResult<Input> {
    take_till(|c: char| c.is_ascii_alphabetic() || c == ';')(i)
}

fn comment(i: Input) -> IResult<Input> {
    context("Comment", preceded(char(';'), rest))(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_success_1() {
        let input = "  LDA $0300; ";
        let result = Statement::parse(input);
        assert_eq!(
            Ok((
                "",
                Statement {
                    mnemonic: Mnemonic::LDA,
                    operand: "$0300"
                }
            )),
            result
        )
    }

    #[test]
    fn statement_success_2() {
        let input = "  RTS ";
        let result = Statement::parse(input);
        assert_eq!(
            Ok((
                "",
                Statement {
                    mnemonic: Mnemonic::RTS,
                    operand: ""
                }
            )),
            result
        )
    }

    #[test]
    fn statement_success_3() {
        let input = "\tSTA ( $20 ) , Y ; STORE POINTER";
        let result = Statement::parse(input);
        assert_eq!(
            Ok((
                "",
                Statement {
                    mnemonic: Mnemonic::STA,
                    operand: "( $20 ) , Y"
                }
            )),
            result
        )
    }

    #[test]
    fn statement_skips_leading_text() {
        let input = "* LDA #$05";
        let result = Statement::parse(input);
        assert_eq!(
            Ok((
                "",
                Statement {
                    mnemonic: Mnemonic::LDA,
                    operand: "#$05"
                }
            )),
            result
        );

        let input = "1 NOP";
        let result = Statement::parse(input);
        assert_eq!(
            Ok((
                "",
                Statement {
                    mnemonic: Mnemonic::NOP,
                    operand: ""
                }
            )),
            result
        )
    }

    #[test]
    fn statement_fail_mnemonic_in_comment() {
        let input = "1 ; NOP";
        let result = Statement::parse(input);
        assert!(result.is_err())
    }

    #[test]
    fn statement_fail() {
        let input = "090";
        let result = Statement::parse(input);
        assert!(result.is_err())
    }

    #[test]
    fn statement_fail_unknown_mnemonic() {
        let input = "XYZ $10";
        let result = Statement::parse(input);
        assert!(result.is_err())
    }
}
