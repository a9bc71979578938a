use contracts::domain::upazila::Upazila;
use once_cell::sync::Lazy;

use crate::shared::entity_service::EntityService;

/// Process-wide upazila service, created once and shared by reference.
static SERVICE: Lazy<EntityService<Upazila>> = Lazy::new(EntityService::new);

pub fn service() -> &'static EntityService<Upazila> {
    &SERVICE
}
