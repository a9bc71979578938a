use contracts::domain::navigation::Navigation;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide navigation service, created once and shared by reference.
static SERVICE: Lazy<EntityService<Navigation>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<Navigation> {
    &SERVICE
}
