use contracts::domain::designation::Designation;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide designation service, created once and shared by reference.
static SERVICE: Lazy<EntityService<Designation>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<Designation> {
    &SERVICE
}
