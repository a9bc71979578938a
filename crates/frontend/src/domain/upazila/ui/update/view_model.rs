use contracts::domain::upazila::Upazila;
use leptos::prelude::*;

use crate::domain::upazila::api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the upazila edit form
#[derive(Clone, Copy)]
pub struct UpazilaUpdateViewModel {
    pub form: RwSignal<Upazila>,
    pub is_saving: RwSignal<bool>,
    alerts: AlertService,
}

impl UpazilaUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(Upazila::default()),
            is_saving: RwSignal::new(false),
            alerts,
        }
    }

    pub fn activate(&self, upazila: Upazila) {
        self.form.set(upazila);
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let upazila = vm.form.get_untracked();
            let result = if upazila.id.is_some() {
                api::service().update(&upazila).await
            } else {
                api::service().create(&upazila).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving upazila failed: {error}")),
            }
        });
    }
}
