use contracts::domain::division::Division;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide division service, created once and shared by reference.
static SERVICE: Lazy<EntityService<Division>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<Division> {
    &SERVICE
}
