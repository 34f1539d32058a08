//! Delete line parser
//!
//! Contract: `<marker> <index-token>` where the index token is the
//! literal `last`, `-1`, or a positive integer.

use crate::error::{LedgerError, LedgerResult};
use crate::storage::DeleteTarget;

/// Parse a delete line into a deletion target
///
/// # Errors
///
/// `InvalidDeleteSyntax` for a missing or extra token, zero, a negative
/// number other than `-1`, or a non-numeric token.
pub fn parse_delete(line: &str) -> LedgerResult<DeleteTarget> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(LedgerError::InvalidDeleteSyntax);
    }

    let index_token = tokens[1];
    if index_token == "last" {
        return Ok(DeleteTarget::Last);
    }

    match index_token.parse::<i64>() {
        Ok(-1) => Ok(DeleteTarget::Last),
        Ok(i) if i > 0 => Ok(DeleteTarget::Index(i as u32)),
        _ => Err(LedgerError::InvalidDeleteSyntax),
    }
}
