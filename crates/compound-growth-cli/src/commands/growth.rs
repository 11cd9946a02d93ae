use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use compound_growth_core::growth::{self, ComparisonInput, DailyExpenseInput, Scenario};

use crate::input;

/// Arguments for a single growth simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to JSON scenario file (overrides the flags below)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting amount present at year 0
    #[arg(long, default_value = "1000")]
    pub principal: Decimal,

    /// Amount added every month
    #[arg(long, default_value = "100")]
    pub monthly: Decimal,

    /// Number of years to simulate
    #[arg(long, default_value = "30", allow_hyphen_values = true)]
    pub years: Decimal,

    /// Annual rate as a percentage (7 = 7%)
    #[arg(long, default_value = "7", allow_hyphen_values = true)]
    pub rate: Decimal,
}

/// Arguments for the rule-of-72 estimate
#[derive(Args)]
pub struct DoubleArgs {
    /// Annual rate as a percentage (7 = 7%)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Decimal,
}

/// Arguments for a side-by-side comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON file of the form {"a": Scenario, "b": Scenario}
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the daily-habit projection
#[derive(Args)]
pub struct LatteArgs {
    /// Path to JSON input file (overrides the flags below)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount spent each day
    #[arg(long, default_value = "5")]
    pub daily: Decimal,

    /// Number of years to project
    #[arg(long, default_value = "30")]
    pub years: Decimal,

    /// Annual rate as a percentage (7 = 7%)
    #[arg(long, default_value = "7", allow_hyphen_values = true)]
    pub rate: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct DoubleOutput {
    annual_rate_percent: Decimal,
    years_to_double: Decimal,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let scenario: Scenario = match input::read_input(args.input.as_deref())? {
        Some(scenario) => scenario,
        None => Scenario {
            principal: args.principal,
            monthly_contribution: args.monthly,
            years: args.years,
            annual_rate_percent: args.rate,
        },
    };
    tracing::debug!(?scenario, "simulating");
    let result = growth::run_simulation(&scenario)?;
    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }
    Ok(serde_json::to_value(result)?)
}

pub fn run_double(args: DoubleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let years = growth::years_to_double(args.rate)?;
    let output = DoubleOutput {
        annual_rate_percent: args.rate,
        years_to_double: years,
    };
    Ok(serde_json::to_value(output)?)
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cmp_input: ComparisonInput = input::read_input(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for scenario comparison")?;
    let result = growth::compare_scenarios(&cmp_input)?;
    tracing::debug!(difference = %result.difference, "compared scenarios");
    Ok(serde_json::to_value(result)?)
}

pub fn run_latte(args: LatteArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let latte_input: DailyExpenseInput = match input::read_input(args.input.as_deref())? {
        Some(latte_input) => latte_input,
        None => DailyExpenseInput {
            daily_amount: args.daily,
            years: args.years,
            annual_rate_percent: args.rate,
        },
    };
    let result = growth::project_daily_expense(&latte_input)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_run_double() {
        let out = run_double(DoubleArgs { rate: dec!(7) }).unwrap();
        assert_eq!(out["years_to_double"], "10.3");
        assert_eq!(out["annual_rate_percent"], "7");
    }

    #[test]
    fn test_run_double_zero_rate_fails() {
        let err = run_double(DoubleArgs { rate: dec!(0) }).unwrap_err();
        assert!(err.to_string().contains("annual_rate_percent"));
    }
}
