//! Generic remote CRUD access, one stateless service per entity type.

use std::marker::PhantomData;

use contracts::domain::common::{sparse_document, EntityModel, QueryOptions};
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

use super::api_utils::api_url;
use super::rest::{expect_success, read_json, read_optional_json, RemoteError};

/// Remote CRUD operations for one entity type.
///
/// Holds nothing but the resource path; one instance per entity type is
/// created at startup and shared by reference for the process lifetime.
pub struct EntityService<T> {
    resource_path: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> EntityService<T>
where
    T: EntityModel + Serialize + DeserializeOwned,
{
    pub fn new() -> Self {
        Self {
            resource_path: format!("/api/{}", T::RESOURCE),
            _entity: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        api_url(&self.resource_path)
    }

    fn item_url(&self, id: &str) -> String {
        api_url(&format!("{}/{}", self.resource_path, id))
    }

    /// POST a transient entity; the returned representation carries the
    /// server-assigned identifier.
    pub async fn create(&self, entity: &T) -> Result<T, RemoteError> {
        debug_assert!(
            entity.entity_id().is_none(),
            "create expects a transient entity"
        );
        let response = Request::post(&self.collection_url())
            .json(entity)
            .map_err(|e| RemoteError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        read_json(expect_success(response)?).await
    }

    /// PUT the full entity; every field is sent, unset fields as `null`.
    pub async fn update(&self, entity: &T) -> Result<T, RemoteError> {
        let id = entity.entity_id().ok_or(RemoteError::MissingIdentifier)?;
        let response = Request::put(&self.item_url(id))
            .json(entity)
            .map_err(|e| RemoteError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        read_json(expect_success(response)?).await
    }

    /// PATCH a merge-patch document: unset fields are stripped from the body
    /// so the server leaves them unchanged.
    pub async fn partial_update(&self, entity: &T) -> Result<T, RemoteError> {
        let id = entity
            .entity_id()
            .ok_or(RemoteError::MissingIdentifier)?
            .to_owned();
        let document = serde_json::to_value(entity)
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let response = Request::patch(&self.item_url(&id))
            .json(&sparse_document(document))
            .map_err(|e| RemoteError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        read_json(expect_success(response)?).await
    }

    /// Fetch one entity. `Ok(None)` when the server reports it missing
    /// (404, or a success status with an empty body).
    pub async fn find(&self, id: &str) -> Result<Option<T>, RemoteError> {
        let response = Request::get(&self.item_url(id))
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        if response.status() == 404 {
            return Ok(None);
        }
        read_optional_json(expect_success(response)?).await
    }

    /// Fetch a collection; `options` are rendered as request parameters.
    pub async fn query(&self, options: &QueryOptions) -> Result<Vec<T>, RemoteError> {
        let mut url = self.collection_url();
        let pairs = options.to_query_pairs();
        if !pairs.is_empty() {
            let rendered: Vec<String> = pairs
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect();
            url = format!("{}?{}", url, rendered.join("&"));
        }
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        read_json(expect_success(response)?).await
    }

    /// DELETE by id; status only, no body.
    pub async fn delete(&self, id: &str) -> Result<(), RemoteError> {
        let response = Request::delete(&self.item_url(id))
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        expect_success(response)?;
        Ok(())
    }
}

impl<T> Default for EntityService<T>
where
    T: EntityModel + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}
