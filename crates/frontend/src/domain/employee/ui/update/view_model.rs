use contracts::domain::common::{add_to_collection_if_missing, QueryOptions};
use contracts::domain::designation::Designation;
use contracts::domain::employee::Employee;
use leptos::prelude::*;

use crate::domain::designation::api as designation_api;
use crate::domain::employee::api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the employee edit form
#[derive(Clone, Copy)]
pub struct EmployeeUpdateViewModel {
    pub form: RwSignal<Employee>,
    pub is_saving: RwSignal<bool>,
    pub designations_shared_collection: RwSignal<Vec<Designation>>,
    alerts: AlertService,
}

impl EmployeeUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(Employee::default()),
            is_saving: RwSignal::new(false),
            designations_shared_collection: RwSignal::new(Vec::new()),
            alerts,
        }
    }

    pub fn activate(&self, employee: Employee) {
        self.update_form(employee);
        self.load_relationships_options();
    }

    fn update_form(&self, employee: Employee) {
        let designation = employee.designation.clone();
        self.designations_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [designation]);
        });
        self.form.set(employee);
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
            let employee = vm.form.get_untracked();
            let result = if employee.id.is_some() {
                api::service().update(&employee).await
            } else {
                api::service().create(&employee).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving employee failed: {error}")),
            }
        });
    }
}
