use contracts::domain::center_employee::CenterEmployee;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide center-employee assignment service, created once and shared by reference.
static SERVICE: Lazy<EntityService<CenterEmployee>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<CenterEmployee> {
    &SERVICE
}
