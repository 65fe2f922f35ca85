mod infix_composer;
mod infix_converter;

pub use infix_composer::{postfix_to_infix, prefix_to_infix};
pub use infix_converter::{infix_to_postfix, infix_to_prefix};
