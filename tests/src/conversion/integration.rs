#![cfg(test)]
use std::fs;

use anyhow::Context;

use tally_common::error::ConversionError;
use tally_core::conversion::{read_tokens, strings_to_floats};

#[test]
fn prices_file_converts_in_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prices.txt");
    fs::write(&path, "10\n20\n99.99\n")?;

    let tokens = read_tokens(&path)?;
    assert_eq!(strings_to_floats(&tokens)?, vec![10.0, 20.0, 99.99]);
    Ok(())
}

#[test]
fn bad_line_in_file_fails_whole_conversion() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("prices.txt");
    fs::write(&path, "10\nten\n30\n")?;

    let tokens = read_tokens(&path)?;
    match strings_to_floats(&tokens) {
        Err(ConversionError::InvalidToken { index, token, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(token, "ten");
        }
        other => panic!("expected invalid token, got {other:?}"),
    }
    Ok(())
}

#[test]
fn error_chain_shows_parse_failure_once() {
    let err = strings_to_floats(&["1.5", "x", "3"])
        .context("Converting string to float failed")
        .unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "Converting string to float failed: token 1 ('x') is not a number: invalid float literal"
    );
}
