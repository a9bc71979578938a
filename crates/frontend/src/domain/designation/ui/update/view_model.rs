use contracts::domain::designation::Designation;
use leptos::prelude::*;

use crate::domain::designation::api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the designation edit form
#[derive(Clone, Copy)]
pub struct DesignationUpdateViewModel {
    pub form: RwSignal<Designation>,
    pub is_saving: RwSignal<bool>,
    alerts: AlertService,
}

impl DesignationUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(Designation::default()),
            is_saving: RwSignal::new(false),
            alerts,
        }
    }

    pub fn activate(&self, designation: Designation) {
        self.form.set(designation);
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let designation = vm.form.get_untracked();
            let result = if designation.id.is_some() {
                api::service().update(&designation).await
            } else {
                api::service().create(&designation).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving designation failed: {error}")),
            }
        });
    }
}
