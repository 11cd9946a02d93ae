use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use compound_growth_core::format;
use compound_growth_core::growth::{self, Scenario, SimulationResult};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn decimal_arg(field: &str, value: f64) -> NapiResult<Decimal> {
    if !value.is_finite() {
        return Err(to_napi_error(format!("{field} must be a finite number")));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| to_napi_error(format!("{field} is outside the decimal range")))
}

fn to_js_number(value: Decimal) -> NapiResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| to_napi_error(format!("{value} cannot be represented as a number")))
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Scenario JSON in, envelope JSON out.
#[napi]
pub fn simulate(input_json: String) -> NapiResult<String> {
    let input: Scenario = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = growth::run_simulation(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Slider values in, `SimulationResult` JSON out. NaN and infinities are rejected.
#[napi]
pub fn simulate_values(
    principal: f64,
    monthly_contribution: f64,
    years: f64,
    annual_rate_percent: f64,
) -> NapiResult<String> {
    let scenario = Scenario::from_f64(principal, monthly_contribution, years, annual_rate_percent)
        .map_err(to_napi_error)?;
    let output = growth::simulate(&scenario).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn years_to_double(annual_rate_percent: f64) -> NapiResult<f64> {
    let rate = decimal_arg("annual_rate_percent", annual_rate_percent)?;
    let years = growth::years_to_double(rate).map_err(to_napi_error)?;
    to_js_number(years)
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Difference of two already computed `SimulationResult` JSON documents.
#[napi]
pub fn compare(result_a_json: String, result_b_json: String) -> NapiResult<f64> {
    let a: SimulationResult = serde_json::from_str(&result_a_json).map_err(to_napi_error)?;
    let b: SimulationResult = serde_json::from_str(&result_b_json).map_err(to_napi_error)?;
    to_js_number(growth::compare(&a, &b).map_err(to_napi_error)?)
}

#[napi]
pub fn compare_scenarios(input_json: String) -> NapiResult<String> {
    let input: growth::ComparisonInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = growth::compare_scenarios(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Daily habits
// ---------------------------------------------------------------------------

#[napi]
pub fn daily_expense_to_investment(
    daily_amount: f64,
    years: f64,
    annual_rate_percent: f64,
) -> NapiResult<f64> {
    let value = growth::daily_expense_to_investment(
        decimal_arg("daily_amount", daily_amount)?,
        decimal_arg("years", years)?,
        decimal_arg("annual_rate_percent", annual_rate_percent)?,
    )
    .map_err(to_napi_error)?;
    to_js_number(value)
}

#[napi]
pub fn project_daily_expense(input_json: String) -> NapiResult<String> {
    let input: growth::DailyExpenseInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = growth::project_daily_expense(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_currency(
    amount: f64,
    decimals: Option<u32>,
    show_sign: Option<bool>,
) -> NapiResult<String> {
    let amount = decimal_arg("amount", amount)?;
    Ok(format::format_currency(
        amount,
        decimals.unwrap_or(2),
        show_sign.unwrap_or(false),
    ))
}

#[napi]
pub fn format_compact(value: f64) -> NapiResult<String> {
    Ok(format::format_compact(decimal_arg("value", value)?))
}

#[napi]
pub fn format_percentage(value: f64, decimals: Option<u32>) -> NapiResult<String> {
    Ok(format::format_percentage(
        decimal_arg("value", value)?,
        decimals.unwrap_or(1),
    ))
}

#[napi]
pub fn format_years(years: u32) -> String {
    format::format_years(years)
}
