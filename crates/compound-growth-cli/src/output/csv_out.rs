use serde_json::Value;
use std::io;

use super::{result_of, rows_of};

/// Write output as CSV to stdout: one row per year (or sweep point) when the
/// result has rows, otherwise two columns of field and value.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(rows) = rows_of(value) {
        write_array_csv(&mut wtr, rows);
    } else {
        match result_of(value) {
            Value::Object(map) => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
            Value::Array(arr) => write_array_csv(&mut wtr, arr),
            other => {
                let _ = wtr.write_record([&format_csv_value(other)]);
            }
        }
    }

    if let Err(e) = wtr.flush() {
        tracing::error!("CSV write failed: {}", e);
    }
}

fn write_array_csv<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_series_rows_written_with_header() {
        let series = json!([
            { "year": 0, "total_value": "100", "total_contributed": "100", "interest_earned": "0" },
            { "year": 1, "total_value": "107.00", "total_contributed": "100", "interest_earned": "7.00" }
        ]);
        let mut wtr = csv::Writer::from_writer(Vec::new());
        write_array_csv(&mut wtr, series.as_array().unwrap());
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "interest_earned,total_contributed,total_value,year");
        assert_eq!(lines[2], "7.00,100,107.00,1");
    }
}
