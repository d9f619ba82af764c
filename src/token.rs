//! The `key=value` token grammar shared by the argument and stdin sources.

use crate::error::{Result, SumError};
use crate::operands::OperandKey;

/// Outcome of parsing a single well-formed token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedToken {
    /// A recognized operand assignment.
    Operand(OperandKey, f64),
    /// A `key=value` pair whose key is not an operand name.
    Ignored,
}

/// Parse one `key=value` token.
///
/// A token must contain exactly one `=`. The value is parsed as `f64` only
/// when the key names an operand; other keys are ignored without looking at
/// their value.
pub fn parse_token(token: &str) -> Result<ParsedToken> {
    let parts: Vec<&str> = token.split('=').collect();
    if parts.len() != 2 {
        return Err(SumError::MalformedToken {
            token: token.to_string(),
        });
    }

    let (key, value) = (parts[0], parts[1]);
    match OperandKey::from_key(key) {
        Some(operand) => {
            let number = value.parse::<f64>().map_err(|source| SumError::InvalidNumber {
                token: token.to_string(),
                source,
            })?;
            Ok(ParsedToken::Operand(operand, number))
        }
        None => Ok(ParsedToken::Ignored),
    }
}
