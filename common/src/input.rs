//! # Input Port
//!
//! How the calculator obtains its numbers, independent of where they come from.

use crate::error::InputError;
use crate::finance::Field;

/// Supplies one validated, strictly positive number per field.
///
/// Implementations block until a value is available. The core crate ships a
/// reader over any `BufRead`; tests use canned values.
pub trait NumberSource {
    fn acquire(&mut self, field: Field) -> Result<f64, InputError>;
}

/// Rejects zero, negatives and NaN.
pub fn ensure_positive(field: Field, value: f64) -> Result<f64, InputError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InputError::NotPositive { field, value })
    }
}
