//! # Tally Core
//!
//! The four flows the `tally` binary exposes:
//!
//! * **[`slices`]**: bounds-checked sub-slicing and list edits.
//! * **[`catalog`]**: an append-only product list.
//! * **[`calculator`]**: acquire, compute and persist financial figures.
//! * **[`conversion`]**: all-or-nothing text to decimal conversion.
//!
//! [`storage`] holds the file-backed result store used by the calculator.

pub mod calculator;
pub mod catalog;
pub mod conversion;
pub mod slices;
pub mod storage;
