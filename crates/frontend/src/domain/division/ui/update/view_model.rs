use contracts::domain::division::Division;
use leptos::prelude::*;

use crate::domain::division::api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the division edit form
#[derive(Clone, Copy)]
pub struct DivisionUpdateViewModel {
    pub form: RwSignal<Division>,
    pub is_saving: RwSignal<bool>,
    alerts: AlertService,
}

impl DivisionUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(Division::default()),
            is_saving: RwSignal::new(false),
            alerts,
        }
    }

    /// Populate the form from the resolved entity.
    pub fn activate(&self, division: Division) {
        self.form.set(division);
    }

    /// Create or update depending on persistence state; navigate back only
    /// on success. The saving flag is cleared on every terminal outcome.
    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let division = vm.form.get_untracked();
            let result = if division.id.is_some() {
                api::service().update(&division).await
            } else {
                api::service().create(&division).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving division failed: {error}")),
            }
        });
    }
}
