//! # Financial Calculator
//!
//! A linear three-stage flow that stops at the first failure:
//!
//! 1. **Acquire** revenue, expense and tax rate from a [`NumberSource`].
//! 2. **Compute** earnings before tax, earnings after tax and their ratio.
//! 3. **Persist** the results through a [`ResultStore`].
//!
//! Acquisition and computation errors abort the run before anything is
//! stored. A failed write does not: it comes back inside [`CalcOutcome`] so
//! the caller decides how loudly to report it.

mod reader;

pub use reader::TokenReader;

use std::path::PathBuf;

use tracing::debug;

use tally_common::error::{CalcError, FinanceError, PersistError};
use tally_common::finance::{Field, FinancialInputs, FinancialResults};
use tally_common::input::NumberSource;
use tally_common::storage::ResultStore;

/// What a completed run produced.
#[derive(Debug)]
pub struct CalcOutcome {
    pub inputs: FinancialInputs,
    pub results: FinancialResults,
    /// Where the results were written, or why they were not.
    pub persisted: Result<PathBuf, PersistError>,
}

/// Derives the three figures from validated inputs.
///
/// Returns [`FinanceError::ZeroProfit`] rather than an infinite or NaN ratio
/// when after-tax profit is exactly zero.
pub fn compute(inputs: &FinancialInputs) -> Result<FinancialResults, FinanceError> {
    let ebt = inputs.revenue - inputs.expense;
    let profit = inputs.revenue * (1.0 - inputs.tax_rate / 100.0) - inputs.expense;

    if profit == 0.0 {
        return Err(FinanceError::ZeroProfit { ebt });
    }

    Ok(FinancialResults {
        ebt,
        profit,
        ratio: ebt / profit,
    })
}

pub struct CalculatorService {
    source: Box<dyn NumberSource>,
    store: Box<dyn ResultStore>,
}

impl CalculatorService {
    pub fn new(source: Box<dyn NumberSource>, store: Box<dyn ResultStore>) -> Self {
        Self { source, store }
    }

    pub fn run(&mut self) -> Result<CalcOutcome, CalcError> {
        let inputs = self.acquire_inputs()?;
        debug!(?inputs, "inputs acquired");

        let results = compute(&inputs)?;
        debug!(?results, "results computed");

        let persisted = self.store.store(&results);
        match &persisted {
            Ok(path) => debug!(path = %path.display(), "results stored"),
            Err(e) => debug!(error = %e, "results were not stored"),
        }

        Ok(CalcOutcome {
            inputs,
            results,
            persisted,
        })
    }

    fn acquire_inputs(&mut self) -> Result<FinancialInputs, CalcError> {
        let [revenue, expense, tax_rate] = Field::ALL;
        Ok(FinancialInputs {
            revenue: self.source.acquire(revenue)?,
            expense: self.source.acquire(expense)?,
            tax_rate: self.source.acquire(tax_rate)?,
        })
    }
}
