use contracts::domain::center_image::CenterImage;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide center image service, created once and shared by reference.
static SERVICE: Lazy<EntityService<CenterImage>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<CenterImage> {
    &SERVICE
}
