//! Text to decimal conversion.

use std::fs;
use std::path::Path;

use tally_common::error::ConversionError;

/// Converts every token to `f64`, preserving order.
///
/// Stops at the first token that does not parse and returns no partial
/// output. Tokens are parsed as given, so padded tokens fail.
pub fn strings_to_floats<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<f64>, ConversionError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let token = token.as_ref();
            token
                .parse::<f64>()
                .map_err(|source| ConversionError::InvalidToken {
                    index,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

/// Reads one token per non-blank line.
pub fn read_tokens(path: &Path) -> Result<Vec<String>, ConversionError> {
    let contents = fs::read_to_string(path).map_err(|source| ConversionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
