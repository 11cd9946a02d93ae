pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Unwrap the computation envelope if there is one.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// The row set worth printing as a grid: a simulation's `series` or a
/// sweep's `results`.
pub(crate) fn rows_of(value: &Value) -> Option<&Vec<Value>> {
    let obj = result_of(value).as_object()?;
    ["series", "results"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_array))
}
