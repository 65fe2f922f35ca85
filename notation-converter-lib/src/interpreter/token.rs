use crate::interpreter::operator::BinaryOperator;
use anyhow::{anyhow, bail, Result};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A run of decimal digits, kept as written.
    Numeral(String),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
    /// Any other non-whitespace character. Left for the validators to reject.
    Unrecognized(char),
}

impl Token {
    pub fn is_numeral(&self) -> bool {
        matches!(self, Token::Numeral(_))
    }

    /// The same token with its parenthesis direction swapped, if it is one.
    pub fn mirrored(&self) -> Token {
        match self {
            Token::OpenParenthesis => Token::CloseParenthesis,
            Token::CloseParenthesis => Token::OpenParenthesis,
            token => token.clone(),
        }
    }

    pub(crate) fn from_symbol(symbol: char) -> Token {
        match symbol {
            '(' => Token::OpenParenthesis,
            ')' => Token::CloseParenthesis,
            symbol => match BinaryOperator::from_symbol(symbol) {
                Some(operator) => Token::Operator(operator),
                None => Token::Unrecognized(symbol),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Numeral(digits) => write!(f, "{}", digits),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
            Token::Unrecognized(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Token::Numeral(input.to_string()));
        }
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) if !symbol.is_whitespace() => Ok(Token::from_symbol(symbol)),
            _ => bail!("'{}' is not a single token", input),
        }
    }
}

/// The relative ordering of operators and operands in an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    Infix,
    Postfix,
    Prefix,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Infix, Notation::Postfix, Notation::Prefix];

    /// The two notations an expression in this notation gets converted into.
    pub fn others(&self) -> [Notation; 2] {
        match self {
            Notation::Infix => [Notation::Postfix, Notation::Prefix],
            Notation::Postfix => [Notation::Infix, Notation::Prefix],
            Notation::Prefix => [Notation::Infix, Notation::Postfix],
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "Infix"),
            Notation::Postfix => write!(f, "Postfix"),
            Notation::Prefix => write!(f, "Prefix"),
        }
    }
}

impl str::FromStr for Notation {
    type Err = anyhow::Error;

    /// Accepts a notation name in any case, or its menu number.
    fn from_str(input: &str) -> Result<Notation, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "infix" => Ok(Notation::Infix),
            "2" | "postfix" => Ok(Notation::Postfix),
            "3" | "prefix" => Ok(Notation::Prefix),
            other => Err(anyhow!("Unknown notation: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    text = { "12", "007", "+", "-", "*", "/", "(", ")", "x" },
    expected = {
    Token::Numeral("12".to_string()),
    Token::Numeral("007".to_string()),
    Token::Operator(BinaryOperator::Add),
    Token::Operator(BinaryOperator::Subtract),
    Token::Operator(BinaryOperator::Multiply),
    Token::Operator(BinaryOperator::Divide),
    Token::OpenParenthesis,
    Token::CloseParenthesis,
    Token::Unrecognized('x'),
    }
    )]
    fn single_atoms_parse_into_tokens(text: &str, expected: Token) {
        assert_eq!(text.parse::<Token>().unwrap(), expected);
    }

    #[parameterized(text = { "", " ", "1+", "ab" })]
    fn non_atoms_fail_to_parse(text: &str) {
        text.parse::<Token>().expect_err("Should return Err");
    }

    #[test]
    fn tokens_display_as_their_source_text() {
        let tokens: Vec<Token> = ["42", "+", "(", ")", "%"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        assert_eq!(rendered, vec!["42", "+", "(", ")", "%"]);
    }

    #[test]
    fn mirrored_swaps_only_parentheses() {
        assert_eq!(Token::OpenParenthesis.mirrored(), Token::CloseParenthesis);
        assert_eq!(Token::CloseParenthesis.mirrored(), Token::OpenParenthesis);
        assert_eq!(
            Token::Numeral("3".to_string()).mirrored(),
            Token::Numeral("3".to_string())
        );
    }

    #[parameterized(
    text = { "1", "Infix", "2", "POSTFIX", "3", " prefix " },
    expected = {
    Notation::Infix,
    Notation::Infix,
    Notation::Postfix,
    Notation::Postfix,
    Notation::Prefix,
    Notation::Prefix,
    }
    )]
    fn notation_parses_from_name_or_menu_number(text: &str, expected: Notation) {
        assert_eq!(text.parse::<Notation>().unwrap(), expected);
    }

    #[test]
    fn unknown_notation_fails_to_parse() {
        "4".parse::<Notation>().expect_err("Should return Err");
    }

    #[test]
    fn others_never_contains_itself() {
        for notation in Notation::ALL {
            assert!(!notation.others().contains(&notation));
        }
    }
}
