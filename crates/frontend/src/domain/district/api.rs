use contracts::domain::district::District;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide district service, created once and shared by reference.
static SERVICE: Lazy<EntityService<District>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<District> {
    &SERVICE
}
