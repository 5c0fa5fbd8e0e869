use serde_json::Value;
use std::io;

use super::{flatten_scalars, format_cell, row_list};

/// Write output as CSV to stdout.
///
/// Results carrying a row list (schedule, monthly or yearly details) are
/// written as that list; everything else as `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some((_, rows)) = row_list(result) {
        write_rows(&mut wtr, rows);
    } else {
        let mut pairs = Vec::new();
        flatten_scalars("", result, &mut pairs);
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in pairs {
            let _ = wtr.write_record([key.as_str(), val.as_str()]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_cell).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}
