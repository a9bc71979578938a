use contracts::domain::post_photo::PostPhoto;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide post photo service, created once and shared by reference.
static SERVICE: Lazy<EntityService<PostPhoto>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<PostPhoto> {
    &SERVICE
}
