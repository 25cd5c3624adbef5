#![cfg(test)]
use std::fs;
use std::path::Path;

use tally_common::error::{CalcError, FinanceError, InputError};
use tally_common::finance::Field;
use tally_core::calculator::{CalcOutcome, CalculatorService, TokenReader};
use tally_core::storage::FileStore;

/// Runs the calculator as the binary does, with `input` standing in for stdin.
fn run(input: &'static str, output: &Path) -> Result<CalcOutcome, CalcError> {
    let source = TokenReader::new(input.as_bytes(), std::io::sink());
    let store = FileStore::new(output);
    CalculatorService::new(Box::new(source), Box::new(store)).run()
}

#[test]
fn reference_run_writes_two_decimal_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("financials.txt");

    let outcome = run("1000\n400\n20\n", &output)?;

    assert_eq!(outcome.results.ebt, 600.0);
    assert_eq!(outcome.results.profit, 400.0);
    assert_eq!(outcome.results.ratio, 1.5);
    assert_eq!(outcome.persisted?, output);
    assert_eq!(
        fs::read_to_string(&output)?,
        "EBT: 600.00\nProfit: 400.00\nRatio: 1.50\n"
    );
    Ok(())
}

#[test]
fn zero_revenue_writes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("financials.txt");

    let err = run("0\n400\n20\n", &output).unwrap_err();

    assert!(matches!(
        err,
        CalcError::Input(InputError::NotPositive { field: Field::Revenue, .. })
    ));
    assert!(!output.exists(), "no file should be written on bad input");
    Ok(())
}

#[test]
fn negative_tax_rate_writes_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("financials.txt");

    let err = run("1000 400 -20", &output).unwrap_err();

    assert!(matches!(
        err,
        CalcError::Input(InputError::NotPositive { field: Field::TaxRate, .. })
    ));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn second_run_overwrites_first() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("financials.txt");

    run("123456\n1000\n10\n", &output)?;
    run("1000\n400\n20\n", &output)?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "EBT: 600.00\nProfit: 400.00\nRatio: 1.50\n"
    );
    Ok(())
}

#[test]
fn failed_run_leaves_previous_results() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("financials.txt");

    run("1000\n400\n20\n", &output)?;
    let err = run("500\n250\n50\n", &output).unwrap_err();

    assert!(matches!(err, CalcError::Finance(FinanceError::ZeroProfit { .. })));
    assert_eq!(
        fs::read_to_string(&output)?,
        "EBT: 600.00\nProfit: 400.00\nRatio: 1.50\n"
    );
    Ok(())
}

#[test]
fn unwritable_output_still_returns_results() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("no-such-dir").join("financials.txt");

    let outcome = run("1000\n400\n20\n", &output)?;

    assert_eq!(outcome.results.ratio, 1.5);
    assert!(outcome.persisted.is_err());
    Ok(())
}

#[test]
fn unwritable_output_error_chain_has_no_repeats() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("no-such-dir").join("financials.txt");

    let outcome = run("1000\n400\n20\n", &output)?;
    let err = outcome.persisted.unwrap_err();
    let io_cause = std::error::Error::source(&err).map(ToString::to_string).unwrap_or_default();

    let chain = format!("{:#}", anyhow::Error::from(err));
    assert_eq!(chain.matches(&io_cause).count(), 1, "cause repeated in: {chain}");
    assert_eq!(chain.matches("failed to write results").count(), 1);
    Ok(())
}
