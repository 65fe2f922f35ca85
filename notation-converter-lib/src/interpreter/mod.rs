pub mod converter;
pub mod lexer;
pub mod operator;
pub mod token;
pub mod validator;

use crate::interpreter::converter::{
    infix_to_postfix, infix_to_prefix, postfix_to_infix, prefix_to_infix,
};
use crate::interpreter::token::{Notation, Token};
use anyhow::Result;
use itertools::Itertools;
use log::debug;
use std::fmt;
use std::fmt::Formatter;

/// The outcome of validating an expression and converting it into the other
/// two notations.
///
/// Only the notations other than `notation` are filled in, and only when the
/// expression was valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub notation: Notation,
    pub valid: bool,
    pub infix: Option<String>,
    pub postfix: Option<Vec<Token>>,
    pub prefix: Option<Vec<Token>>,
}

impl Conversion {
    fn invalid(notation: Notation) -> Conversion {
        Conversion {
            notation,
            valid: false,
            infix: None,
            postfix: None,
            prefix: None,
        }
    }
}

impl Conversion {
    /// The rendered form of the expression in `notation`, if it was produced.
    pub fn rendered(&self, notation: Notation) -> Option<String> {
        match notation {
            Notation::Infix => self.infix.clone(),
            Notation::Postfix => self.postfix.as_deref().map(tokens_to_string),
            Notation::Prefix => self.prefix.as_deref().map(tokens_to_string),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Valid: {}", self.valid)?;
        for notation in self.notation.others() {
            if let Some(rendered) = self.rendered(notation) {
                write!(f, "\n{:<7}: {}", notation.to_string(), rendered)?;
            }
        }
        Ok(())
    }
}

/// Validates the given expression in the given notation and, if it is valid,
/// converts it into the two other notations.
///
/// Infix is used as the intermediate form, so postfix and prefix input is
/// first rebuilt as an infix string, which is then tokenized again.
///
/// # Arguments
///
/// * `expression`: The text of the expression.
/// * `notation`: The notation the expression is written in.
///
/// returns: The validity of the expression and its conversions.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::convert;
/// use notation_converter::interpreter::token::Notation;
/// use notation_converter::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let conversion = convert("3+4*2", Notation::Infix)?;
/// assert!(conversion.valid);
/// assert_eq!(tokens_to_string(&conversion.postfix.unwrap()), "3 4 2 * +");
/// assert_eq!(tokens_to_string(&conversion.prefix.unwrap()), "+ 3 * 4 2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str, notation: Notation) -> Result<Conversion> {
    let tokens = lexer::tokenize(expression);
    if !validator::validate(&tokens, notation) {
        return Ok(Conversion::invalid(notation));
    }

    let mut conversion = Conversion {
        valid: true,
        ..Conversion::invalid(notation)
    };
    match notation {
        Notation::Infix => {
            conversion.postfix = Some(infix_to_postfix(&tokens));
            conversion.prefix = Some(infix_to_prefix(&tokens));
        }
        Notation::Postfix => {
            let infix = postfix_to_infix(&tokens)?;
            conversion.prefix = Some(infix_to_prefix(&lexer::tokenize(&infix)));
            conversion.infix = Some(infix);
        }
        Notation::Prefix => {
            let infix = prefix_to_infix(&tokens)?;
            conversion.postfix = Some(infix_to_postfix(&lexer::tokenize(&infix)));
            conversion.infix = Some(infix);
        }
    }

    debug!("converted {} expression {:?}: {:?}", notation, expression, conversion);
    Ok(conversion)
}

/// Renders tokens separated by single spaces.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::lexer::tokenize;
/// use notation_converter::interpreter::tokens_to_string;
///
/// assert_eq!(tokens_to_string(&tokenize("12+3")), "12 + 3");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
