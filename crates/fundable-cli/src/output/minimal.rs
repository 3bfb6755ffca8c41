use serde_json::Value;

use super::format_scalar;

/// Key fields in priority order.
const PRIORITY_KEYS: [&str; 4] = [
    "special_fundable_amount",
    "standard_fundable_amount",
    "imported",
    "status",
];

/// Print just the key answer value from the output.
///
/// Lists print one `name: special amount` line per company.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Array(items) => {
            for item in items {
                println!("{}", minimal_line(item));
            }
        }
        other => println!("{}", minimal_line(other)),
    }
}

fn minimal_line(value: &Value) -> String {
    let Value::Object(map) = value else {
        return format_scalar(value);
    };

    let answer = PRIORITY_KEYS
        .iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()));

    match (map.get("name").and_then(Value::as_str), answer) {
        (Some(name), Some(val)) => format!("{}: {}", name, format_scalar(val)),
        (None, Some(val)) => format_scalar(val),
        _ => map
            .iter()
            .next()
            .map(|(k, v)| format!("{}: {}", k, format_scalar(v)))
            .unwrap_or_default(),
    }
}
