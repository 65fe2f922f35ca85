use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};

/// Rebuilds a fully parenthesized infix expression from valid postfix tokens.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::converter::postfix_to_infix;
/// use notation_converter::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let infix = postfix_to_infix(&tokenize("3 4 2 * +"))?;
/// assert_eq!(infix, "(3 + (4 * 2))");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn postfix_to_infix(postfix_tokens: &[Token]) -> Result<String> {
    compose(postfix_tokens.iter(), |first, second| (second, first))
}

/// Rebuilds a fully parenthesized infix expression from valid prefix tokens.
///
/// Tokens are read from right to left, so the value popped first is the
/// left operand.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::converter::prefix_to_infix;
/// use notation_converter::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let infix = prefix_to_infix(&tokenize("- + 2 3 4"))?;
/// assert_eq!(infix, "((2 + 3) - 4)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn prefix_to_infix(prefix_tokens: &[Token]) -> Result<String> {
    compose(prefix_tokens.iter().rev(), |first, second| (first, second))
}

/// Runs the operand stack over `tokens`. `order` receives the two operands in
/// the order they were popped and returns them as `(left, right)`.
fn compose<'a>(
    tokens: impl Iterator<Item = &'a Token>,
    order: fn(String, String) -> (String, String),
) -> Result<String> {
    let mut operands: Vec<String> = Vec::new();

    for token in tokens {
        match token {
            Token::Numeral(digits) => operands.push(digits.clone()),
            Token::Operator(operator) => {
                let first = pop_operand(&mut operands, operator)?;
                let second = pop_operand(&mut operands, operator)?;
                let (left, right) = order(first, second);
                operands.push(format!("({} {} {})", left, operator, right));
            }
            _ => {}
        }
    }

    let expression = operands.pop().context("Expression has no operands")?;
    if !operands.is_empty() {
        bail!(
            "Expression left {} operands without an operator",
            operands.len() + 1
        );
    }
    Ok(expression)
}

fn pop_operand(operands: &mut Vec<String>, operator: &BinaryOperator) -> Result<String> {
    operands
        .pop()
        .with_context(|| format!("No operands left for operator {}", operator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use parameterized_macro::parameterized;

    #[parameterized(
    postfix = {
    "2 3 +",
    "3 4 2 * +",
    "2 3 + 4 -",
    "1 2 3 + -",
    "12 3 4 5 - * +",
    "42",
    },
    expected_infix = {
    "(2 + 3)",
    "(3 + (4 * 2))",
    "((2 + 3) - 4)",
    "(1 - (2 + 3))",
    "(12 + (3 * (4 - 5)))",
    "42",
    }
    )]
    fn postfix_to_infix_returns_parenthesized_expression(postfix: &str, expected_infix: &str) {
        let actual = postfix_to_infix(&tokenize(postfix)).unwrap();
        assert_eq!(actual, expected_infix);
    }

    #[parameterized(
    prefix = {
    "+ 2 3",
    "+ 3 * 4 2",
    "- + 2 3 4",
    "- 1 + 2 3",
    "/ / 8 4 2",
    "* + 1 2 - 3 4",
    },
    expected_infix = {
    "(2 + 3)",
    "(3 + (4 * 2))",
    "((2 + 3) - 4)",
    "(1 - (2 + 3))",
    "((8 / 4) / 2)",
    "((1 + 2) * (3 - 4))",
    }
    )]
    fn prefix_to_infix_returns_parenthesized_expression(prefix: &str, expected_infix: &str) {
        let actual = prefix_to_infix(&tokenize(prefix)).unwrap();
        assert_eq!(actual, expected_infix);
    }

    #[test]
    fn prefix_keeps_operand_order_for_non_commutative_operators() {
        assert_eq!(prefix_to_infix(&tokenize("- 9 4")).unwrap(), "(9 - 4)");
        assert_eq!(postfix_to_infix(&tokenize("9 4 -")).unwrap(), "(9 - 4)");
    }

    #[test]
    fn operator_without_operands_returns_err() {
        let error = postfix_to_infix(&tokenize("2 +")).expect_err("Should return Err");
        assert_eq!(error.to_string(), "No operands left for operator +");
        prefix_to_infix(&tokenize("2 3 +")).expect_err("Should return Err");
    }

    #[test]
    fn empty_expression_returns_err() {
        postfix_to_infix(&[]).expect_err("Should return Err");
    }

    #[test]
    fn leftover_operands_return_err() {
        postfix_to_infix(&tokenize("1 2")).expect_err("Should return Err");
    }
}
