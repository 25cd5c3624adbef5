use std::path::PathBuf;

use crate::error::PersistError;
use crate::finance::FinancialResults;

/// Destination for calculator results.
///
/// A store replaces whatever it held before; results are never appended.
pub trait ResultStore {
    /// Writes `results` and returns where they ended up.
    fn store(&mut self, results: &FinancialResults) -> Result<PathBuf, PersistError>;
}
