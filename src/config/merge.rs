//! Recursive merge of JSON documents.

use serde_json::Value;

/// Merge `overlay` on top of `base`.
///
/// Objects are merged key by key, recursing where both sides hold an object.
/// Any other overlay value (scalar, array, null) replaces the base value
/// wholesale; arrays are never concatenated. A non-object overlay on top of an
/// object base is ignored, and a non-object base is replaced by the overlay.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                let merged = match base.remove(&key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value)
                    }
                    _ => value,
                };
                base.insert(key, merged);
            }
            Value::Object(base)
        }
        (base @ Value::Object(_), _) => base,
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_override_wins_and_siblings_survive() {
        let base = json!({"unified": 3, "language": "en"});
        let merged = deep_merge(base, json!({"language": "es"}));
        assert_eq!(merged, json!({"unified": 3, "language": "es"}));
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let base = json!({
            "defaults": {"unified": 3, "maxChars": 6000},
            "output": {"out": null, "noClipboard": false}
        });
        let merged = deep_merge(base, json!({"defaults": {"maxChars": 100}}));
        assert_eq!(merged["defaults"]["unified"], 3);
        assert_eq!(merged["defaults"]["maxChars"], 100);
        assert_eq!(merged["output"]["noClipboard"], false);
    }

    #[test]
    fn test_arrays_replace_instead_of_concatenate() {
        let base = json!({"paths": ["a", "b"]});
        let merged = deep_merge(base, json!({"paths": ["c"]}));
        assert_eq!(merged, json!({"paths": ["c"]}));
    }

    #[test]
    fn test_scalar_replaces_object_and_object_replaces_scalar() {
        let base = json!({"a": {"b": 1}, "c": 2});
        let merged = deep_merge(base, json!({"a": 5, "c": {"d": 3}}));
        assert_eq!(merged, json!({"a": 5, "c": {"d": 3}}));
    }

    #[test]
    fn test_null_override_replaces_leaf() {
        let base = json!({"wrapper": "W"});
        let merged = deep_merge(base, json!({"wrapper": null}));
        assert_eq!(merged, json!({"wrapper": null}));
    }

    #[test]
    fn test_non_object_overlay_keeps_base() {
        let base = json!({"unified": 3});
        assert_eq!(deep_merge(base.clone(), json!([1, 2])), base);
        assert_eq!(deep_merge(base.clone(), json!("text")), base);
    }

    #[test]
    fn test_new_keys_are_added() {
        let merged = deep_merge(json!({"templates": {"wrapper": null}}), json!({"templates": {"review": "R"}}));
        assert_eq!(merged, json!({"templates": {"wrapper": null, "review": "R"}}));
    }
}
