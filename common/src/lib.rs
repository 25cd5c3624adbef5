//! # Tally Common
//!
//! Domain records, error types and the traits the calculator talks through.
//! Nothing in this crate touches the terminal or the filesystem.

pub mod catalog;
pub mod config;
pub mod error;
pub mod finance;
pub mod input;
pub mod storage;
