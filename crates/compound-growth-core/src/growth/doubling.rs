use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::GrowthError;
use crate::types::Percent;
use crate::GrowthResult;

const RULE_OF_72: Decimal = dec!(72);

/// Rule-of-72 estimate of the years needed to double, to one decimal place.
///
/// Only growth doubles money, so a zero or negative rate is an
/// `InvalidArgument` rather than a "years to halve" figure.
pub fn years_to_double(annual_rate_percent: Percent) -> GrowthResult<Decimal> {
    if annual_rate_percent <= Decimal::ZERO {
        return Err(GrowthError::InvalidArgument {
            field: "annual_rate_percent".into(),
            reason: format!("rate must be > 0 to double, got {annual_rate_percent}"),
        });
    }

    let estimate = RULE_OF_72
        .checked_div(annual_rate_percent)
        .ok_or_else(|| GrowthError::Overflow {
            context: "rule of 72 estimate".into(),
        })?;
    Ok(estimate.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}
