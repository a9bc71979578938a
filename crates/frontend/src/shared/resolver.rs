//! Pre-navigation resolution of the entity an edit/view route needs.

use contracts::domain::common::EntityModel;
use serde::{de::DeserializeOwned, Serialize};

use super::entity_service::EntityService;
use super::rest::RemoteError;

/// Outcome of resolving a route's entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    /// The route carried no id: a fresh empty entity, no network involved.
    New(T),
    /// The route id matched a persisted entity.
    Existing(T),
    /// The route id no longer exists upstream; the caller must redirect to
    /// the not-found page instead of rendering.
    Missing,
}

impl<T> Resolution<T> {
    /// The entity to bind into the view, if any.
    pub fn into_entity(self) -> Option<T> {
        match self {
            Resolution::New(entity) | Resolution::Existing(entity) => Some(entity),
            Resolution::Missing => None,
        }
    }
}

/// Decide whether a route resolves without the network. An id-less route
/// yields a fresh entity immediately; otherwise the id that must be fetched
/// comes back in the `Err` arm.
pub fn resolve_locally<T: Default>(id_param: Option<String>) -> Result<Resolution<T>, String> {
    match id_param {
        None => Ok(Resolution::New(T::default())),
        Some(id) => Err(id),
    }
}

/// Classify a `find` result for a route that carried an id.
pub fn resolution_from_body<T>(body: Option<T>) -> Resolution<T> {
    match body {
        Some(entity) => Resolution::Existing(entity),
        None => Resolution::Missing,
    }
}

/// Resolve the entity for an edit/view route. Transport failures propagate
/// untouched; a missing entity is a `Resolution::Missing`, not an error.
pub async fn resolve_entity<T>(
    service: &EntityService<T>,
    id_param: Option<String>,
) -> Result<Resolution<T>, RemoteError>
where
    T: EntityModel + Default + Serialize + DeserializeOwned,
{
    let id = match resolve_locally(id_param) {
        Ok(resolution) => return Ok(resolution),
        Err(id) => id,
    };
    Ok(resolution_from_body(service.find(&id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::division::Division;

    #[test]
    fn test_absent_id_resolves_to_fresh_entity_without_fetch() {
        let resolution = resolve_locally::<Division>(None).unwrap();
        assert_eq!(resolution, Resolution::New(Division::default()));
    }

    #[test]
    fn test_present_id_requires_a_fetch() {
        assert_eq!(resolve_locally::<Division>(Some("ABC".into())), Err("ABC".into()));
    }

    #[test]
    fn test_found_body_resolves_to_it() {
        let body = Division {
            id: Some("ABC".into()),
            ..Division::default()
        };
        let resolution = resolution_from_body(Some(body.clone()));
        assert_eq!(resolution.into_entity(), Some(body));
    }

    #[test]
    fn test_empty_body_resolves_to_missing() {
        let resolution = resolution_from_body::<Division>(None);
        assert_eq!(resolution, Resolution::Missing);
        assert_eq!(resolution.into_entity(), None);
    }
}
