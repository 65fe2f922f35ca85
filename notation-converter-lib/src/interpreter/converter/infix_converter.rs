use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// When an incoming operator meets an operator of the same precedence on the stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum TieBreak {
    /// Pop the stacked operator first (`>=`), grouping from the left.
    PopEqual,
    /// Keep the stacked operator (`>`).
    KeepEqual,
}

/// Reorders valid infix tokens into postfix order.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::converter::infix_to_postfix;
/// use notation_converter::interpreter::lexer::tokenize;
/// use notation_converter::interpreter::tokens_to_string;
///
/// let postfix = infix_to_postfix(&tokenize("3 + 4 * 2"));
/// assert_eq!(tokens_to_string(&postfix), "3 4 2 * +");
/// ```
pub fn infix_to_postfix(infix_tokens: &[Token]) -> Vec<Token> {
    shunt(infix_tokens.iter().cloned(), TieBreak::PopEqual)
}

/// Reorders valid infix tokens into prefix order.
///
/// The tokens are reversed with their parentheses mirrored, shunted while
/// keeping equal-precedence operators stacked, and the result reversed again.
/// Keeping equal operators is what preserves left-to-right grouping after the
/// final reversal.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::converter::infix_to_prefix;
/// use notation_converter::interpreter::lexer::tokenize;
/// use notation_converter::interpreter::tokens_to_string;
///
/// let prefix = infix_to_prefix(&tokenize("2 + 3 - 4"));
/// assert_eq!(tokens_to_string(&prefix), "- + 2 3 4");
/// ```
pub fn infix_to_prefix(infix_tokens: &[Token]) -> Vec<Token> {
    let mirrored = infix_tokens.iter().rev().map(Token::mirrored);
    let mut output = shunt(mirrored, TieBreak::KeepEqual);
    output.reverse();
    output
}

fn shunt(tokens: impl Iterator<Item = Token>, tie_break: TieBreak) -> Vec<Token> {
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    for token in tokens {
        match token {
            Token::Numeral(_) => output.push(token),
            Token::OpenParenthesis => operators.push_front(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator, tie_break)
            }
            Token::CloseParenthesis => parse_closing_parenthesis_token(&mut operators, &mut output),
            Token::Unrecognized(_) => {}
        };
    }

    // Anything left over is emitted as is, unmatched parentheses included.
    output.extend(operators.drain(..));

    output
}

fn parse_closing_parenthesis_token(operators: &mut VecDeque<Token>, output: &mut Vec<Token>) {
    while let Some(top_of_operator_stack) = operators.front() {
        if *top_of_operator_stack == Token::OpenParenthesis {
            // Discard the open parenthesis.
            operators.pop_front();
            return;
        }
        if let Some(operator) = operators.pop_front() {
            output.push(operator);
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
    tie_break: TieBreak,
) {
    while let Some(Token::Operator(other_operator)) = operators.front() {
        let yields = match tie_break {
            TieBreak::PopEqual => other_operator.precedence_ge(&operator),
            TieBreak::KeepEqual => other_operator.precedence_gt(&operator),
        };
        if !yields {
            break;
        }
        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
    }

    operators.push_front(Token::Operator(operator));
}
