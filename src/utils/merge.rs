use serde_json::{Map, Value};

/// Deep merge `overlay` into a copy of `base`.
///
/// Keys present on both sides are merged recursively when both values are
/// objects; anything else (arrays, scalars, null) is replaced by the overlay
/// value. A null overlay leaves `base` unchanged.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let Value::Object(overlay) = overlay else {
        return base.clone();
    };

    let mut output = match base {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };

    for (key, value2) in overlay {
        let merged = match (output.get(key), value2) {
            (Some(value1 @ Value::Object(_)), Value::Object(_)) => deep_merge(value1, value2),
            _ => value2.clone(),
        };
        output.insert(key.clone(), merged);
    }

    Value::Object(output)
}
