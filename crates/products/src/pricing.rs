//! Colombian-peso price formatting.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as Colombian pesos with no fractional digits.
///
/// An absent amount formats as zero, never as a dash: a product always shows a
/// price.
pub fn format_price(amount: Option<Decimal>) -> String {
    let rounded = amount
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let whole = rounded.to_i128().unwrap_or_default();
    let sign = if whole < 0 { "-" } else { "" };
    format!("{sign}$ {}", group_thousands(whole.unsigned_abs()))
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
