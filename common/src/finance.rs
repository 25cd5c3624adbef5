//! # Financial Records
//!
//! Plain data carried between the three calculator stages.

use std::fmt;

/// One of the three values the calculator asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Revenue,
    Expense,
    TaxRate,
}

impl Field {
    /// Acquisition order.
    pub const ALL: [Field; 3] = [Field::Revenue, Field::Expense, Field::TaxRate];

    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Revenue => "Enter revenue: ",
            Field::Expense => "Enter expenses: ",
            Field::TaxRate => "Enter tax rate: ",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Revenue => "revenue",
            Field::Expense => "expense",
            Field::TaxRate => "tax rate",
        };
        f.write_str(label)
    }
}

/// Validated calculator inputs. Every value is strictly positive.
///
/// `tax_rate` is a percentage; values above 100 are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialInputs {
    pub revenue: f64,
    pub expense: f64,
    pub tax_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialResults {
    /// Earnings before tax.
    pub ebt: f64,
    /// Earnings after tax.
    pub profit: f64,
    pub ratio: f64,
}
