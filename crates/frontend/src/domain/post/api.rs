use contracts::domain::post::Post;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide post service, created once and shared by reference.
static SERVICE: Lazy<EntityService<Post>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<Post> {
    &SERVICE
}
