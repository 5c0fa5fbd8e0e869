use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{flatten_scalars, format_cell, row_list};

/// Format output as tables using the tabled crate.
///
/// Scalar result fields go in a `Field | Value` table; a row list such as an
/// amortization schedule gets its own table underneath.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result);
                print_envelope(map);
            } else {
                print_result(value);
            }
        }
        Value::Array(_) => print_result(value),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value) {
    let mut pairs = Vec::new();
    flatten_scalars("", result, &mut pairs);
    if !pairs.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in pairs {
            builder.push_record([key, val]);
        }
        println!("{}", Table::from(builder));
    }

    if let Some((name, rows)) = row_list(result) {
        println!("\n{}:", name);
        print_rows(rows);
    }
}

fn print_envelope(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        println!("(empty)");
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_cell).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    println!("{}", Table::from(builder));
}
