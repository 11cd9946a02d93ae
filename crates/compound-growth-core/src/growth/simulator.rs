use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::GrowthError;
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Rate, Years};
use crate::GrowthResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The four inputs that fully determine a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Lump sum present at year 0.
    pub principal: Money,
    /// Added every month; annualised and applied once per simulated year.
    pub monthly_contribution: Money,
    /// Number of yearly steps. Must be a non-negative whole number.
    pub years: Years,
    /// Annual growth as a percentage (7 = 7%). Negative values model a loss.
    pub annual_rate_percent: Percent,
}

/// Account state at the end of one simulated year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    pub total_value: Money,
    pub total_contributed: Money,
    pub interest_earned: Money,
}

/// Year-indexed series plus the totals of its last point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub series: Vec<YearPoint>,
    pub final_value: Money,
    pub total_contributed: Money,
    pub total_interest_earned: Money,
}

/// Inclusive range offered by one of the calculator's sliders.
#[derive(Debug, Clone, Copy)]
pub struct InputRange {
    pub field: &'static str,
    pub min: Decimal,
    pub max: Decimal,
}

/// Slider ranges of the interactive calculator. The engine never clamps to
/// these; `run_simulation` only reports inputs that fall outside them.
pub const CALCULATOR_RANGES: [InputRange; 4] = [
    InputRange {
        field: "principal",
        min: dec!(0),
        max: dec!(10000),
    },
    InputRange {
        field: "monthly_contribution",
        min: dec!(0),
        max: dec!(500),
    },
    InputRange {
        field: "years",
        min: dec!(1),
        max: dec!(50),
    },
    InputRange {
        field: "annual_rate_percent",
        min: dec!(1),
        max: dec!(12),
    },
];

impl Scenario {
    pub fn new(
        principal: Money,
        monthly_contribution: Money,
        years: u32,
        annual_rate_percent: Percent,
    ) -> Self {
        Self {
            principal,
            monthly_contribution,
            years: Decimal::from(years),
            annual_rate_percent,
        }
    }

    /// Build a scenario from host floating-point values, rejecting NaN and
    /// infinities. Fractional or negative `years` is left for `simulate` to reject.
    pub fn from_f64(
        principal: f64,
        monthly_contribution: f64,
        years: f64,
        annual_rate_percent: f64,
    ) -> GrowthResult<Self> {
        Ok(Self {
            principal: finite_decimal("principal", principal)?,
            monthly_contribution: finite_decimal("monthly_contribution", monthly_contribution)?,
            years: finite_decimal("years", years)?,
            annual_rate_percent: finite_decimal("annual_rate_percent", annual_rate_percent)?,
        })
    }

    /// Number of yearly steps, once `years` is known to be a whole number >= 0.
    pub fn year_count(&self) -> GrowthResult<u32> {
        if self.years < Decimal::ZERO {
            return Err(GrowthError::invalid("years", "years must be >= 0"));
        }
        if !self.years.fract().is_zero() {
            return Err(GrowthError::invalid(
                "years",
                format!("years must be a whole number, got {}", self.years),
            ));
        }
        self.years
            .to_u32()
            .ok_or_else(|| GrowthError::invalid("years", "years exceeds the supported range"))
    }

    fn field_value(&self, field: &str) -> Option<Decimal> {
        match field {
            "principal" => Some(self.principal),
            "monthly_contribution" => Some(self.monthly_contribution),
            "years" => Some(self.years),
            "annual_rate_percent" => Some(self.annual_rate_percent),
            _ => None,
        }
    }
}

impl Default for Scenario {
    /// The calculator's opening position: $1,000 start, $100 a month, 30 years at 7%.
    fn default() -> Self {
        Self::new(dec!(1000), dec!(100), 30, dec!(7))
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn finite_decimal(field: &str, value: f64) -> GrowthResult<Decimal> {
    if !value.is_finite() {
        return Err(GrowthError::invalid(
            field,
            format!("{field} must be a finite number, got {value}"),
        ));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        GrowthError::invalid(field, format!("{value} is outside the decimal range"))
    })
}

/// Round to whole cents, halves away from zero.
pub(crate) fn to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(year: u32) -> GrowthError {
    GrowthError::Overflow {
        context: format!("balance at year {year}"),
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Simulate annual compounding with a contribution applied before each
/// year's growth.
///
/// Emitted values are rounded to cents; the running balance is not, so
/// rounding never feeds back into later years. Interest is taken from the
/// unrounded balance and rounded on its own, so `total_value` and
/// `total_contributed + interest_earned` can differ by at most one cent.
/// Year 0 is the principal as given.
///
/// The balance must stay inside the `Decimal` range (about 7.9e28). Past that
/// the call fails with `GrowthError::Overflow` naming the year: $100 at 7% a
/// year overflows in year 916, $1,000 at 12% in year 527. Horizons up to a few
/// hundred years at calculator rates are always representable.
pub fn simulate(scenario: &Scenario) -> GrowthResult<SimulationResult> {
    let years = scenario.year_count()?;

    let rate: Rate = scenario.annual_rate_percent / PERCENT;
    let growth = Decimal::ONE + rate;
    let annual_contribution = scenario
        .monthly_contribution
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| overflow(1))?;

    let mut current_value = scenario.principal;
    let mut total_contributed = scenario.principal;

    let mut series = vec![YearPoint {
        year: 0,
        total_value: scenario.principal,
        total_contributed: scenario.principal,
        interest_earned: Decimal::ZERO,
    }];

    for year in 1..=years {
        current_value = current_value
            .checked_add(annual_contribution)
            .and_then(|v| v.checked_mul(growth))
            .ok_or_else(|| overflow(year))?;
        total_contributed = total_contributed
            .checked_add(annual_contribution)
            .ok_or_else(|| overflow(year))?;

        let interest_earned = current_value
            .checked_sub(total_contributed)
            .map(to_cents)
            .ok_or_else(|| overflow(year))?;
        let total_value = to_cents(current_value);

        series.push(YearPoint {
            year,
            total_value,
            total_contributed,
            interest_earned,
        });
    }

    // series always holds year 0
    let last = series[series.len() - 1].clone();

    Ok(SimulationResult {
        final_value: last.total_value,
        total_contributed: last.total_contributed,
        total_interest_earned: last.interest_earned,
        series,
    })
}

/// `simulate` wrapped in the standard envelope, with warnings for inputs the
/// calculator's sliders would never produce.
pub fn run_simulation(
    scenario: &Scenario,
) -> GrowthResult<ComputationOutput<SimulationResult>> {
    let start = Instant::now();
    let result = simulate(scenario)?;

    let mut warnings: Vec<String> = Vec::new();
    for range in CALCULATOR_RANGES.iter() {
        if let Some(value) = scenario.field_value(range.field) {
            if value < range.min || value > range.max {
                warnings.push(format!(
                    "{} = {} is outside the calculator range {}..={}",
                    range.field, value, range.min, range.max
                ));
            }
        }
    }
    if scenario.annual_rate_percent < Decimal::ZERO {
        warnings.push("Negative annual rate represents a yearly loss".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annual compounding, contribution applied before growth, cents rounded half away from zero",
        scenario,
        warnings,
        elapsed,
        result,
    ))
}
