//! Field-by-field merging of tiered prompt configurations.
//!
//! Higher tier values override lower tier values. Only objects merge
//! recursively; strings (the common case for prompts), arrays, and scalars
//! are replaced entirely by the higher tier.

use serde_json::Value;

/// Merge `overlay` into `dest`, with `overlay` taking precedence.
///
/// - Objects merge key by key, recursively
/// - A null overlay leaves `dest` untouched (null means "not specified")
/// - Everything else replaces `dest` wholesale
pub fn merge_value(dest: &mut Value, overlay: Value) {
    match (dest, overlay) {
        (Value::Object(dest_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match dest_map.get_mut(&key) {
                    Some(existing) => merge_value(existing, overlay_value),
                    None => {
                        dest_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (dest, overlay) => *dest = overlay,
    }
}

/// Merge tier values in order, later tiers winning.
pub fn merge_tiers(tiers: impl IntoIterator<Item = Value>) -> Value {
    let mut merged = Value::Null;
    for tier in tiers {
        if merged.is_null() {
            merged = tier;
        } else {
            merge_value(&mut merged, tier);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_merge_key_by_key() {
        let mut dest = json!({
            "agents": {
                "supervisor": {"prompt": "default text"},
                "worker": {"prompt": "worker text"}
            }
        });
        let overlay = json!({
            "agents": {
                "supervisor": {"prompt": "custom text"}
            }
        });
        merge_value(&mut dest, overlay);
        assert_eq!(
            dest,
            json!({
                "agents": {
                    "supervisor": {"prompt": "custom text"},
                    "worker": {"prompt": "worker text"}
                }
            })
        );
    }

    #[test]
    fn overlay_adds_missing_keys() {
        let mut dest = json!({"a": 1});
        merge_value(&mut dest, json!({"b": 2}));
        assert_eq!(dest, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn null_overlay_preserves_dest() {
        let mut dest = json!({"agents": {"supervisor": {"prompt": "keep"}}});
        merge_value(&mut dest, json!({"agents": {"supervisor": {"prompt": null}}}));
        assert_eq!(dest, json!({"agents": {"supervisor": {"prompt": "keep"}}}));
    }

    #[test]
    fn strings_and_arrays_are_replaced() {
        let mut dest = json!({"prompt": "old", "tags": ["a", "b"]});
        merge_value(&mut dest, json!({"prompt": "new", "tags": ["c"]}));
        assert_eq!(dest, json!({"prompt": "new", "tags": ["c"]}));
    }

    #[test]
    fn scalar_and_object_replace_each_other() {
        let mut dest = json!({"v": 42});
        merge_value(&mut dest, json!({"v": {"nested": true}}));
        assert_eq!(dest, json!({"v": {"nested": true}}));

        let mut dest = json!({"v": {"nested": true}});
        merge_value(&mut dest, json!({"v": 42}));
        assert_eq!(dest, json!({"v": 42}));
    }

    #[test]
    fn tiers_merge_in_order() {
        let merged = merge_tiers(vec![
            json!({"a": {"x": 1, "y": 2}}),
            json!({"a": {"y": 3}}),
            json!({"b": 4}),
        ]);
        assert_eq!(merged, json!({"a": {"x": 1, "y": 3}, "b": 4}));
    }

    #[test]
    fn empty_tier_list_is_null() {
        assert_eq!(merge_tiers(Vec::new()), Value::Null);
    }
}
