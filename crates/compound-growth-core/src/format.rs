//! US-English display helpers for amounts the engine produces.
//!
//! Presentation only: nothing in `growth` depends on this module.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const THOUSAND: Decimal = dec!(1_000);
const MILLION: Decimal = dec!(1_000_000);
const BILLION: Decimal = dec!(1_000_000_000);

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234.5` -> `"1,234.50"` with `decimals = 2`. Halves round away from zero.
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// `-5` -> `"-$5.00"`; with `show_sign`, positive amounts get a leading `+`.
pub fn format_currency(amount: Decimal, decimals: u32, show_sign: bool) -> String {
    let body = format!("${}", format_number(amount.abs(), decimals));
    if amount < Decimal::ZERO {
        format!("-{body}")
    } else if show_sign && amount > Decimal::ZERO {
        format!("+{body}")
    } else {
        body
    }
}

/// `7` -> `"7.0%"` with `decimals = 1`.
pub fn format_percentage(value: Decimal, decimals: u32) -> String {
    format!("{}%", format_number(value, decimals))
}

/// `1_234_567` -> `"$1.2M"`; below a thousand, whole dollars.
pub fn format_compact(value: Decimal) -> String {
    let scaled = |divisor: Decimal, suffix: &str| {
        let v = (value / divisor).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("${v:.1}{suffix}")
    };

    if value >= BILLION {
        scaled(BILLION, "B")
    } else if value >= MILLION {
        scaled(MILLION, "M")
    } else if value >= THOUSAND {
        scaled(THOUSAND, "K")
    } else {
        format_currency(value, 0, false)
    }
}

pub fn format_years(years: u32) -> String {
    if years == 1 {
        "1 year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Signed currency, e.g. `"+$10,000.00"`.
pub fn format_difference(difference: Decimal) -> String {
    format_currency(difference, 2, true)
}
