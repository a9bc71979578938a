use contracts::domain::center::Center;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide center service, created once and shared by reference.
static SERVICE: Lazy<EntityService<Center>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<Center> {
    &SERVICE
}
