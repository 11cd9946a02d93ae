use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::simulator::{simulate, to_cents, Scenario};
use crate::error::GrowthError;
use crate::types::{Money, Percent, Years};
use crate::GrowthResult;

const DAYS_PER_YEAR: Decimal = dec!(365);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// A small daily habit and the horizon to project it over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyExpenseInput {
    pub daily_amount: Money,
    pub years: Years,
    pub annual_rate_percent: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyExpenseOutput {
    /// Daily amount spread over the year, as a monthly contribution.
    pub monthly_equivalent: Money,
    /// What investing the habit from zero would grow to.
    pub invested_value: Money,
    /// What simply spending it costs over the same horizon.
    pub total_spent: Money,
    pub difference: Money,
}

fn monthly_equivalent(daily_amount: Money) -> GrowthResult<Money> {
    if daily_amount < Decimal::ZERO {
        return Err(GrowthError::InvalidArgument {
            field: "daily_amount".into(),
            reason: "daily_amount must be >= 0".into(),
        });
    }
    daily_amount
        .checked_mul(DAYS_PER_YEAR)
        .map(|yearly| yearly / MONTHS_PER_YEAR)
        .ok_or_else(|| GrowthError::Overflow {
            context: "annualised daily amount".into(),
        })
}

/// Final value of investing `daily_amount` every day instead of spending it.
pub fn daily_expense_to_investment(
    daily_amount: Money,
    years: Years,
    annual_rate_percent: Percent,
) -> GrowthResult<Money> {
    let monthly = monthly_equivalent(daily_amount)?;
    let scenario = Scenario {
        principal: Decimal::ZERO,
        monthly_contribution: monthly,
        years,
        annual_rate_percent,
    };
    Ok(simulate(&scenario)?.final_value)
}

/// Invested value next to the plain cost of the habit.
pub fn project_daily_expense(input: &DailyExpenseInput) -> GrowthResult<DailyExpenseOutput> {
    let invested_value =
        daily_expense_to_investment(input.daily_amount, input.years, input.annual_rate_percent)?;
    let total_spent = input
        .daily_amount
        .checked_mul(DAYS_PER_YEAR)
        .and_then(|yearly| yearly.checked_mul(input.years))
        .ok_or_else(|| GrowthError::Overflow {
            context: "total spent".into(),
        })?;

    let difference = invested_value
        .checked_sub(total_spent)
        .map(to_cents)
        .ok_or_else(|| GrowthError::Overflow {
            context: "invested minus spent".into(),
        })?;

    Ok(DailyExpenseOutput {
        monthly_equivalent: to_cents(monthly_equivalent(input.daily_amount)?),
        invested_value,
        total_spent,
        difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_dollar_latte_over_thirty_years() {
        let value = daily_expense_to_investment(dec!(5), dec!(30), dec!(7)).unwrap();
        assert_eq!(value, dec!(184458.30));
    }

    #[test]
    fn test_zero_habit_is_worth_nothing() {
        let value = daily_expense_to_investment(dec!(0), dec!(30), dec!(7)).unwrap();
        assert!(value.is_zero());
    }

    #[test]
    fn test_negative_daily_amount_rejected() {
        assert!(daily_expense_to_investment(dec!(-1), dec!(10), dec!(7)).is_err());
    }

    #[test]
    fn test_fractional_years_rejected() {
        assert!(daily_expense_to_investment(dec!(5), dec!(1.5), dec!(7)).is_err());
    }

    #[test]
    fn test_projection_reports_spent_and_difference() {
        let out = project_daily_expense(&DailyExpenseInput {
            daily_amount: dec!(5),
            years: dec!(30),
            annual_rate_percent: dec!(7),
        })
        .unwrap();
        assert_eq!(out.monthly_equivalent, dec!(152.08));
        assert_eq!(out.total_spent, dec!(54750));
        assert_eq!(out.invested_value, dec!(184458.30));
        assert_eq!(out.difference, dec!(129708.30));
    }
}
