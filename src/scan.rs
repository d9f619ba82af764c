//! Two-phase operand resolution: a strict argument scan, then a lenient
//! stdin scan. The argument phase always runs first; stdin is consulted only
//! when it left an operand unset.

use std::io::Read;

use tracing::debug;

use crate::error::Result;
use crate::operands::Operands;
use crate::token::{ParsedToken, parse_token};

/// Scan command-line tokens into `operands`.
///
/// The first malformed token aborts the scan; tokens after it are never
/// looked at. The caller treats the error as fatal.
pub fn scan_args<I, S>(tokens: I, operands: &mut Operands) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for token in tokens {
        match parse_token(token.as_ref())? {
            ParsedToken::Operand(key, value) => {
                debug!(key = key.as_str(), value, "operand from arguments");
                operands.set(key, value);
            }
            ParsedToken::Ignored => {
                debug!(token = token.as_ref(), "ignoring unrecognized token");
            }
        }
    }
    Ok(())
}

/// Read all of `stdin` and scan its whitespace-separated tokens into
/// `operands`.
///
/// The first malformed token abandons the remaining stream, but operands set
/// before it are kept. The caller reports the error without aborting the run.
pub fn scan_stdin<R: Read>(mut stdin: R, operands: &mut Operands) -> Result<()> {
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;

    let data = buffer.trim();
    if data.is_empty() {
        return Ok(());
    }

    for token in data.split_whitespace() {
        match parse_token(token)? {
            ParsedToken::Operand(key, value) => {
                debug!(key = key.as_str(), value, "operand from stdin");
                operands.set(key, value);
            }
            ParsedToken::Ignored => {
                debug!(token, "ignoring unrecognized token");
            }
        }
    }
    Ok(())
}
