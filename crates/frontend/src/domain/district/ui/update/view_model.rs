use contracts::domain::district::District;
use leptos::prelude::*;

use crate::domain::district::api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the district edit form
#[derive(Clone, Copy)]
pub struct DistrictUpdateViewModel {
    pub form: RwSignal<District>,
    pub is_saving: RwSignal<bool>,
    alerts: AlertService,
}

impl DistrictUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(District::default()),
            is_saving: RwSignal::new(false),
            alerts,
        }
    }

    pub fn activate(&self, district: District) {
        self.form.set(district);
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let district = vm.form.get_untracked();
            let result = if district.id.is_some() {
                api::service().update(&district).await
            } else {
                api::service().create(&district).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving district failed: {error}")),
            }
        });
    }
}
