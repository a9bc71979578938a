use contracts::domain::center_employee::CenterEmployee;
use contracts::domain::common::{add_to_collection_if_missing, QueryOptions};
use contracts::domain::designation::Designation;
use leptos::prelude::*;

use crate::domain::center_employee::api;
use crate::domain::designation::api as designation_api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the center-employee assignment form
#[derive(Clone, Copy)]
pub struct CenterEmployeeUpdateViewModel {
    pub form: RwSignal<CenterEmployee>,
    pub is_saving: RwSignal<bool>,
    pub designations_shared_collection: RwSignal<Vec<Designation>>,
    alerts: AlertService,
}

impl CenterEmployeeUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(CenterEmployee::default()),
            is_saving: RwSignal::new(false),
            designations_shared_collection: RwSignal::new(Vec::new()),
            alerts,
        }
    }

    pub fn activate(&self, assignment: CenterEmployee) {
        self.update_form(assignment);
        self.load_relationships_options();
    }

    fn update_form(&self, assignment: CenterEmployee) {
        let designation = assignment.designation.clone();
        self.designations_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [designation]);
        });
        self.form.set(assignment);
    }

    fn load_relationships_options(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match designation_api::service().query(&QueryOptions::new()).await {
                Ok(designations) => {
                    let selected = vm.form.get_untracked().designation;
                    vm.designations_shared_collection
                        .set(add_to_collection_if_missing(designations, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading designations failed: {error}")),
            }
        });
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let assignment = vm.form.get_untracked();
            let result = if assignment.id.is_some() {
                api::service().update(&assignment).await
            } else {
                api::service().create(&assignment).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving assignment failed: {error}")),
            }
        });
    }
}
