//! Deep merge of YAML values
//!
//! Merge semantics:
//! - Mappings: deep-merge by key (recursive)
//! - Sequences: REPLACE (override wins entirely)
//! - Scalars: override wins
//! - Mismatched types: override wins, no compatibility check

use serde_yaml::{Mapping, Value};

/// Merge `overlay` onto `base` at the document root.
///
/// An empty mapping on either side contributes nothing, so
/// `merge(d, {}) == d` and `merge({}, d) == d` for any document `d`,
/// including documents whose root is a sequence or scalar.
/// Neither input is modified; the result is built from copies.
pub fn merge(base: &Value, overlay: &Value) -> Value {
    if is_empty_mapping(overlay) {
        return base.clone();
    }
    if is_empty_mapping(base) {
        return overlay.clone();
    }
    deep_merge(base, overlay)
}

/// Deep merge two YAML values.
///
/// When both sides are mappings the result keeps `base`'s key order,
/// merges shared keys recursively and appends keys only found in `overlay`.
/// Any other pairing yields a copy of `overlay`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            Value::Mapping(merge_mappings(base_map, overlay_map))
        }

        // Sequences, scalars, tagged values and type changes: overlay wins
        (_, overlay) => overlay.clone(),
    }
}

/// Merge multiple documents in order (first is base, last has highest precedence)
pub fn merge_layers<'a, I>(layers: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    layers
        .into_iter()
        .fold(Value::Mapping(Mapping::new()), |acc, layer| merge(&acc, layer))
}

fn merge_mappings(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut merged = Mapping::with_capacity(base.len() + overlay.len());

    for (key, base_value) in base {
        let value = match overlay.get(key) {
            Some(overlay_value) => deep_merge(base_value, overlay_value),
            None => base_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    for (key, overlay_value) in overlay {
        if !base.contains_key(key) {
            merged.insert(key.clone(), overlay_value.clone());
        }
    }

    merged
}

fn is_empty_mapping(value: &Value) -> bool {
    matches!(value, Value::Mapping(map) if map.is_empty())
}
