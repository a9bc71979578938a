/// Trait implemented by every persistable entity model.
///
/// An entity is transient until the server has assigned it an identifier;
/// `entity_id` returns `None` exactly in that state. Identity is defined by
/// id equality, never by reference or full-value comparison.
pub trait EntityModel: Clone {
    /// Plural resource segment of the entity under `/api/`.
    const RESOURCE: &'static str;

    /// Identifier of a persisted entity; `None` while transient.
    fn entity_id(&self) -> Option<&str>;
}

/// Merge candidate entities into a collection without duplicating identifiers.
///
/// Candidates with no identifier are dropped. Net-new candidates (distinct by
/// id, first occurrence wins) are prepended ahead of the original collection
/// in the order given. When nothing is net-new the original vector is
/// returned untouched, so repeated reconciliation with the same candidates is
/// a no-op.
pub fn add_to_collection_if_missing<T, I>(collection: Vec<T>, candidates: I) -> Vec<T>
where
    T: EntityModel,
    I: IntoIterator<Item = Option<T>>,
{
    let mut known: Vec<String> = collection
        .iter()
        .filter_map(|item| item.entity_id().map(str::to_owned))
        .collect();

    let mut to_add: Vec<T> = Vec::new();
    for candidate in candidates.into_iter().flatten() {
        let id = match candidate.entity_id() {
            Some(id) => id.to_owned(),
            None => continue,
        };
        if known.contains(&id) {
            continue;
        }
        known.push(id);
        to_add.push(candidate);
    }

    if to_add.is_empty() {
        return collection;
    }
    to_add.extend(collection);
    to_add
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::division::Division;

    fn division(id: Option<&str>, name: &str) -> Division {
        Division {
            id: id.map(str::to_owned),
            name: Some(name.to_owned()),
            ..Division::default()
        }
    }

    #[test]
    fn test_prepends_net_new_candidates_in_first_seen_order() {
        let merged = add_to_collection_if_missing(
            Vec::new(),
            [
                Some(division(Some("a"), "Dhaka")),
                Some(division(Some("b"), "Khulna")),
            ],
        );
        let ids: Vec<_> = merged.iter().filter_map(|d| d.entity_id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_keeps_existing_collection_order_after_prepend() {
        let existing = vec![division(Some("x"), "Sylhet"), division(Some("y"), "Barishal")];
        let merged =
            add_to_collection_if_missing(existing, [Some(division(Some("a"), "Dhaka"))]);
        let ids: Vec<_> = merged.iter().filter_map(|d| d.entity_id()).collect();
        assert_eq!(ids, vec!["a", "x", "y"]);
    }

    #[test]
    fn test_dedup_against_collection_by_identifier() {
        let existing = vec![division(Some("a"), "Dhaka")];
        let merged = add_to_collection_if_missing(
            existing.clone(),
            [Some(division(Some("a"), "Dhaka (renamed)"))],
        );
        assert_eq!(merged.len(), existing.len());
        assert_eq!(merged[0].name.as_deref(), Some("Dhaka"));
    }

    #[test]
    fn test_dedup_among_candidates_keeps_first_occurrence() {
        let merged = add_to_collection_if_missing(
            Vec::new(),
            [
                Some(division(Some("a"), "first")),
                Some(division(Some("a"), "second")),
            ],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].name.as_deref(), Some("first"));
    }

    #[test]
    fn test_null_and_transient_candidates_are_dropped() {
        let existing = vec![division(Some("a"), "Dhaka")];
        let merged = add_to_collection_if_missing(
            existing.clone(),
            [None, Some(division(None, "unsaved"))],
        );
        assert_eq!(merged, existing);
    }

    #[test]
    fn test_idempotent_under_repeated_reconciliation() {
        let candidate = division(Some("a"), "Dhaka");
        let once = add_to_collection_if_missing(Vec::new(), [Some(candidate.clone())]);
        let twice = add_to_collection_if_missing(once.clone(), [Some(candidate)]);
        assert_eq!(once, twice);
    }
}
