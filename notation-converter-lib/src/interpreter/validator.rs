use crate::interpreter::token::{Notation, Token};
use itertools::{FoldWhile, Itertools};
use log::debug;

/// Checks whether the tokens form a well-formed expression in the given notation.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::lexer::tokenize;
/// use notation_converter::interpreter::token::Notation;
/// use notation_converter::interpreter::validator::validate;
///
/// assert!(validate(&tokenize("2 3 +"), Notation::Postfix));
/// assert!(!validate(&tokenize("2 3 +"), Notation::Prefix));
/// ```
pub fn validate(tokens: &[Token], notation: Notation) -> bool {
    let valid = match notation {
        Notation::Infix => validate_infix(tokens),
        Notation::Postfix => validate_postfix(tokens),
        Notation::Prefix => validate_prefix(tokens),
    };
    debug!("{:?} is valid {} notation: {}", tokens, notation, valid);
    valid
}

/// Every operator needs two operands already seen to its left, and exactly
/// one value may remain at the end.
pub fn validate_postfix(tokens: &[Token]) -> bool {
    count_operands(tokens.iter()) == Some(1)
}

/// Same as postfix, scanning from the last token towards the first.
pub fn validate_prefix(tokens: &[Token]) -> bool {
    count_operands(tokens.iter().rev()) == Some(1)
}

/// Simulates the operand stack and returns how many values are left,
/// or `None` as soon as an operator underflows or a non-operand token is seen.
fn count_operands<'a>(mut tokens: impl Iterator<Item = &'a Token>) -> Option<usize> {
    tokens
        .fold_while(Some(0usize), |count, token| match (count, token) {
            (Some(count), Token::Numeral(_)) => FoldWhile::Continue(Some(count + 1)),
            (Some(count), Token::Operator(_)) if count >= 2 => FoldWhile::Continue(Some(count - 1)),
            _ => FoldWhile::Done(None),
        })
        .into_inner()
}

/// Numerals and operators must alternate, starting and ending with a numeral,
/// and every closing parenthesis needs an open one before it.
///
/// Placement of parentheses relative to operands is not checked further,
/// so some odd nestings such as `(2 +) 3` are accepted.
pub fn validate_infix(tokens: &[Token]) -> bool {
    let mut open_parentheses: Vec<&Token> = Vec::new();
    let mut expect_operand = true;

    for token in tokens {
        match token {
            Token::Numeral(_) => {
                if !expect_operand {
                    return false;
                }
                expect_operand = false;
            }
            Token::Operator(_) => {
                if expect_operand {
                    return false;
                }
                expect_operand = true;
            }
            Token::OpenParenthesis => {
                open_parentheses.push(token);
                expect_operand = true;
            }
            Token::CloseParenthesis => {
                if open_parentheses.pop().is_none() {
                    return false;
                }
            }
            Token::Unrecognized(_) => return false,
        }
    }

    !expect_operand && open_parentheses.is_empty()
}
