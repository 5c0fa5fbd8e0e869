pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize output"),
    }
}

/// Render a scalar for a single table or CSV cell.
pub(crate) fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// First field of `result` holding a list of row objects (schedule, details, projection).
pub(crate) fn row_list(result: &Value) -> Option<(&str, &[Value])> {
    match result {
        Value::Array(rows) if rows.iter().all(Value::is_object) => Some(("rows", rows.as_slice())),
        Value::Object(map) => map.iter().find_map(|(key, val)| match val {
            Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_object) => {
                Some((key.as_str(), rows.as_slice()))
            }
            _ => None,
        }),
        _ => None,
    }
}

/// Flatten nested objects into dotted `field.sub` pairs, skipping row lists.
pub(crate) fn flatten_scalars(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let name = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_scalars(&name, val, out);
            }
        }
        Value::Array(items) if items.iter().any(Value::is_object) => {}
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().map(format_cell).collect();
            out.push((prefix.to_string(), joined.join("; ")));
        }
        _ => out.push((prefix.to_string(), format_cell(value))),
    }
}
