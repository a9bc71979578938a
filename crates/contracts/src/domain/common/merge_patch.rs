use serde_json::Value;

/// Reduce a serialized entity to a merge-patch document.
///
/// Only top-level `null` members are removed: a field the caller left unset
/// must be absent from a PATCH body so the server leaves it unchanged.
/// Nested relation objects are carried through as-is.
pub fn sparse_document(document: Value) -> Value {
    match document {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !value.is_null())
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strips_null_members_only() {
        let sparse = sparse_document(json!({
            "id": "u-1",
            "name": "Savar",
            "bnName": null,
            "url": null,
        }));
        assert_eq!(sparse, json!({"id": "u-1", "name": "Savar"}));
    }

    #[test]
    fn test_nested_objects_pass_through_unchanged() {
        let sparse = sparse_document(json!({
            "title": "hello",
            "center": {"id": "c-1", "name": null},
        }));
        assert_eq!(
            sparse,
            json!({"title": "hello", "center": {"id": "c-1", "name": null}})
        );
    }

    #[test]
    fn test_non_object_documents_are_untouched() {
        assert_eq!(sparse_document(json!([1, 2])), json!([1, 2]));
    }
}
