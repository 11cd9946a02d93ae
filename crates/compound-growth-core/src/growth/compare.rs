use serde::{Deserialize, Serialize};

use super::simulator::{simulate, to_cents, Scenario, SimulationResult};
use crate::error::GrowthError;
use crate::types::Money;
use crate::GrowthResult;

/// Two scenarios to run side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub a: Scenario,
    pub b: Scenario,
}

/// Both simulations and how far apart they finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub a: SimulationResult,
    pub b: SimulationResult,
    /// `compare(a, b)`: positive when `a` finishes ahead.
    pub difference: Money,
    pub contribution_difference: Money,
}

fn difference(a: Money, b: Money, context: &str) -> GrowthResult<Money> {
    a.checked_sub(b)
        .map(to_cents)
        .ok_or_else(|| GrowthError::Overflow {
            context: context.into(),
        })
}

/// Difference of final values, rounded to cents.
pub fn compare(a: &SimulationResult, b: &SimulationResult) -> GrowthResult<Money> {
    difference(a.final_value, b.final_value, "final value difference")
}

/// Simulate both scenarios and compare them.
pub fn compare_scenarios(input: &ComparisonInput) -> GrowthResult<ScenarioComparison> {
    let a = simulate(&input.a)?;
    let b = simulate(&input.b)?;
    let final_difference = compare(&a, &b)?;
    let contribution_difference = difference(
        a.total_contributed,
        b.total_contributed,
        "contribution difference",
    )?;
    Ok(ScenarioComparison {
        a,
        b,
        difference: final_difference,
        contribution_difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn starter(years: u32) -> Scenario {
        Scenario::new(dec!(0), dec!(200), years, dec!(7))
    }

    #[test]
    fn test_early_starter_finishes_ahead() {
        // Same $200 a month to 65, starting at 18 versus 28
        let input = ComparisonInput {
            a: starter(47),
            b: starter(37),
        };
        let cmp = compare_scenarios(&input).unwrap();
        assert_eq!(cmp.a.final_value, dec!(845448.22));
        assert_eq!(cmp.b.final_value, dec!(411746.45));
        assert_eq!(cmp.difference, dec!(433701.77));
        assert_eq!(cmp.contribution_difference, dec!(24000));
    }

    #[test]
    fn test_compare_identical_is_zero() {
        let r = simulate(&starter(10)).unwrap();
        assert!(compare(&r, &r).unwrap().is_zero());
    }

    fn lump_sum(final_value: Decimal) -> SimulationResult {
        SimulationResult {
            series: Vec::new(),
            final_value,
            total_contributed: final_value,
            total_interest_earned: Decimal::ZERO,
        }
    }

    #[test]
    fn test_compare_out_of_range_difference_is_overflow() {
        let a = lump_sum(Decimal::MAX);
        let b = lump_sum(-Decimal::MAX);
        assert!(matches!(compare(&a, &b), Err(GrowthError::Overflow { .. })));
        assert_eq!(compare(&a, &a).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_compare_invalid_scenario_propagates() {
        let mut bad = starter(10);
        bad.years = dec!(-1);
        let input = ComparisonInput {
            a: starter(10),
            b: bad,
        };
        assert!(compare_scenarios(&input).is_err());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_compare_is_antisymmetric(
            p1 in 0i64..1_000_000,
            m1 in 0i64..50_000,
            y1 in 0u32..51,
            r1 in -1000i64..1500,
            p2 in 0i64..1_000_000,
            m2 in 0i64..50_000,
            y2 in 0u32..51,
            r2 in -1000i64..1500
        ) {
            let a = simulate(&Scenario::new(Decimal::new(p1, 2), Decimal::new(m1, 2), y1, Decimal::new(r1, 2))).unwrap();
            let b = simulate(&Scenario::new(Decimal::new(p2, 2), Decimal::new(m2, 2), y2, Decimal::new(r2, 2))).unwrap();
            prop_assert_eq!(compare(&a, &b).unwrap(), -compare(&b, &a).unwrap());
        }
    }
}
