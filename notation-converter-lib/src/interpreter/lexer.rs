use crate::interpreter::token::Token;
use log::trace;

/// Splits an expression into tokens in a single left-to-right pass.
///
/// Consecutive digits form one numeral and whitespace is dropped. Every other
/// character becomes a token of its own, legal or not, so this never fails.
///
/// # Examples
///
/// ```
/// use notation_converter::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("12 + 3");
/// let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
/// assert_eq!(rendered, vec!["12", "+", "3"]);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut numeral = String::new();

    for character in expression.chars() {
        if character.is_ascii_digit() {
            numeral.push(character);
            continue;
        }
        flush_numeral(&mut numeral, &mut tokens);
        if !character.is_whitespace() {
            tokens.push(Token::from_symbol(character));
        }
    }
    flush_numeral(&mut numeral, &mut tokens);

    trace!("tokenized {:?} into {:?}", expression, tokens);
    tokens
}

fn flush_numeral(numeral: &mut String, tokens: &mut Vec<Token>) {
    if !numeral.is_empty() {
        tokens.push(Token::Numeral(std::mem::take(numeral)));
    }
}
