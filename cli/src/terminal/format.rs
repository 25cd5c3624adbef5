use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tally_common::catalog::Product;

type Detail = (String, ColoredString);

/// Two decimals, colored by sign.
pub fn amount(value: f64) -> ColoredString {
    let text = format!("{value:.2}");
    if value < 0.0 {
        text.color(colors::LOSS)
    } else {
        text.color(colors::GAIN)
    }
}

/// Renders `items` the way a list literal reads: `[a, b, c]`.
pub fn list<T: Display>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

pub fn product_to_details(product: &Product) -> Vec<Detail> {
    vec![
        ("ID".to_string(), product.id().to_string().color(colors::ACCENT)),
        ("Price".to_string(), amount(product.price())),
    ]
}
