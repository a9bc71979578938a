use contracts::domain::post_comment::PostComment;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide post comment service, created once and shared by reference.
static SERVICE: Lazy<EntityService<PostComment>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<PostComment> {
    &SERVICE
}
