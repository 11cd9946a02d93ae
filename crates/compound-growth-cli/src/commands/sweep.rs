use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use compound_growth_core::growth::{simulate, Scenario};

use crate::input;

const SCENARIO_FIELDS: [&str; 4] = [
    "principal",
    "monthly_contribution",
    "years",
    "annual_rate_percent",
];

/// Arguments for sweeping one or two scenario fields
#[derive(Args)]
pub struct SweepArgs {
    /// First variable in format name:min:max:step
    /// (e.g. "annual_rate_percent:1:12:1")
    #[arg(long, allow_hyphen_values = true)]
    pub var1: String,

    /// Second variable (optional, creates a 2D grid)
    #[arg(long, allow_hyphen_values = true)]
    pub var2: Option<String>,

    /// Path to JSON file with the base scenario (defaults to the calculator's opening scenario)
    #[arg(long)]
    pub base_inputs: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct SweepVar {
    name: String,
    min: Decimal,
    max: Decimal,
    step: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
struct SweepOutput {
    var1_name: String,
    var2_name: Option<String>,
    results: Vec<SweepRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SweepRow {
    var1_value: Decimal,
    var2_value: Option<Decimal>,
    final_value: Decimal,
    total_contributed: Decimal,
    total_interest_earned: Decimal,
}

fn parse_sweep_var(text: &str) -> Result<SweepVar, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 4 {
        return Err(format!("Sweep variable must be name:min:max:step, got '{}'", text).into());
    }
    if !SCENARIO_FIELDS.contains(&parts[0]) {
        return Err(format!(
            "Unknown field '{}'. Available fields: {}",
            parts[0],
            SCENARIO_FIELDS.join(", ")
        )
        .into());
    }
    let var = SweepVar {
        name: parts[0].to_string(),
        min: parts[1].parse()?,
        max: parts[2].parse()?,
        step: parts[3].parse()?,
    };
    if var.step <= Decimal::ZERO {
        return Err(format!("Step for '{}' must be > 0", var.name).into());
    }
    Ok(var)
}

fn generate_range(var: &SweepVar) -> Vec<Decimal> {
    let mut values = Vec::new();
    let mut current = var.min;
    while current <= var.max {
        values.push(current);
        current += var.step;
    }
    if values.is_empty() {
        values.push(var.min);
    }
    values
}

fn set_json_field(obj: &mut Value, field: &str, value: Decimal) {
    if let Some(map) = obj.as_object_mut() {
        map.insert(field.to_string(), Value::String(value.to_string()));
    }
}

pub fn run_sweep(args: SweepArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let var1 = parse_sweep_var(&args.var1)?;
    let var2 = args.var2.as_ref().map(|s| parse_sweep_var(s)).transpose()?;

    let base_json: Value = match args.base_inputs {
        Some(ref path) => input::file::read_json_value(path)?,
        None => serde_json::to_value(Scenario::default())?,
    };

    let var1_range = generate_range(&var1);
    let var2_range = var2.as_ref().map(generate_range);
    tracing::debug!(
        var1 = %var1.name,
        points = var1_range.len() * var2_range.as_ref().map_or(1, Vec::len),
        "sweeping"
    );

    let run = |v1: Decimal, v2: Option<Decimal>| -> Result<SweepRow, Box<dyn std::error::Error>> {
        let mut json = base_json.clone();
        set_json_field(&mut json, &var1.name, v1);
        if let (Some(ref v2_var), Some(v2_val)) = (&var2, v2) {
            set_json_field(&mut json, &v2_var.name, v2_val);
        }
        let scenario: Scenario = serde_json::from_value(json)?;
        let result = simulate(&scenario)?;
        Ok(SweepRow {
            var1_value: v1,
            var2_value: v2,
            final_value: result.final_value,
            total_contributed: result.total_contributed,
            total_interest_earned: result.total_interest_earned,
        })
    };

    let mut results = Vec::new();
    if let Some(ref v2_vals) = var2_range {
        for &v1 in &var1_range {
            for &v2 in v2_vals {
                results.push(run(v1, Some(v2))?);
            }
        }
    } else {
        for &v1 in &var1_range {
            results.push(run(v1, None)?);
        }
    }

    let output = SweepOutput {
        var1_name: var1.name,
        var2_name: var2.map(|v| v.name),
        results,
    };

    Ok(serde_json::to_value(output)?)
}
