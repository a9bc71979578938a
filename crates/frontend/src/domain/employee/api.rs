use contracts::domain::employee::Employee;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide employee service, created once and shared by reference.
static SERVICE: Lazy<EntityService<Employee>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<Employee> {
    &SERVICE
}
