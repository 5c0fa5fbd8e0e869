use serde_json::Value;

use super::format_cell;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "monthly_rent",
        "mortgage_amount",
        "better_option",
        "max_mortgage",
        "monthly_payment",
        "rent_rate",
    ];

    if let Value::Object(map) = result_obj {
        // The amortization answer sits inside its summary.
        let summary = map.get("summary").and_then(Value::as_object);
        for key in &priority_keys {
            let found = map.get(*key).or_else(|| summary.and_then(|s| s.get(*key)));
            if let Some(val) = found {
                if !val.is_null() {
                    println!("{}", format_cell(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_cell(val));
            return;
        }
    }

    println!("{}", format_cell(result_obj));
}
