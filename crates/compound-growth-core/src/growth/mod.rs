//! Year-by-year growth of an account under annual compounding.

pub mod compare;
pub mod daily_expense;
pub mod doubling;
pub mod simulator;

pub use compare::{compare, compare_scenarios, ComparisonInput, ScenarioComparison};
pub use daily_expense::{
    daily_expense_to_investment, project_daily_expense, DailyExpenseInput, DailyExpenseOutput,
};
pub use doubling::years_to_double;
pub use simulator::{run_simulation, simulate, Scenario, SimulationResult, YearPoint};
