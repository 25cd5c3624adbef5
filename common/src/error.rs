//! Error types shared by every flow.
//!
//! Each flow gets its own enum so callers can match on exactly what went
//! wrong. The binary collapses them into `anyhow` at the edge.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

use crate::finance::Field;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    #[error("slice bounds [{start}:{end}] out of range for length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("product {id} needs a title")]
    EmptyTitle { id: i64 },

    #[error("product {id} has an invalid price: {price}")]
    InvalidPrice { id: i64, price: f64 },
}

/// Failures while acquiring one of the calculator inputs.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{field} is not a number: '{token}'")]
    InvalidNumber { field: Field, token: String },

    #[error("Input is not positive. ({field} = {value})")]
    NotPositive { field: Field, value: f64 },

    #[error("input ended before {field} was entered")]
    EndOfInput { field: Field },

    #[error("failed to read {field}")]
    Io {
        field: Field,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// After-tax profit came out as exactly zero, so the ratio has no value.
    #[error("after-tax profit is zero, ratio is undefined (EBT = {ebt:.2})")]
    ZeroProfit { ebt: f64 },
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to write results to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("token {index} ('{token}') is not a number")]
    InvalidToken {
        index: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("failed to read tokens from {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that stops a calculator run before results exist.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Finance(#[from] FinanceError),
}
