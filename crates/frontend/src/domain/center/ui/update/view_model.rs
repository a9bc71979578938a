use contracts::domain::center::Center;
use contracts::domain::common::{add_to_collection_if_missing, QueryOptions};
use contracts::domain::district::District;
use contracts::domain::division::Division;
use contracts::domain::upazila::Upazila;
use leptos::prelude::*;

use crate::domain::center::api;
use crate::domain::district::api as district_api;
use crate::domain::division::api as division_api;
use crate::domain::upazila::api as upazila_api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the center edit form, with one shared collection per
/// geographic relation.
#[derive(Clone, Copy)]
pub struct CenterUpdateViewModel {
    pub form: RwSignal<Center>,
    pub is_saving: RwSignal<bool>,
    pub divisions_shared_collection: RwSignal<Vec<Division>>,
    pub districts_shared_collection: RwSignal<Vec<District>>,
    pub upazilas_shared_collection: RwSignal<Vec<Upazila>>,
    alerts: AlertService,
}

impl CenterUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(Center::default()),
            is_saving: RwSignal::new(false),
            divisions_shared_collection: RwSignal::new(Vec::new()),
            districts_shared_collection: RwSignal::new(Vec::new()),
            upazilas_shared_collection: RwSignal::new(Vec::new()),
            alerts,
        }
    }

    pub fn activate(&self, center: Center) {
        self.update_form(center);
        self.load_relationships_options();
    }

    fn update_form(&self, center: Center) {
        let division = center.division.clone();
        let district = center.district.clone();
        let upazila = center.upazila.clone();
        self.divisions_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [division]);
        });
        self.districts_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [district]);
        });
        self.upazilas_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [upazila]);
        });
        self.form.set(center);
    }

    fn load_relationships_options(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match division_api::service().query(&QueryOptions::new()).await {
                Ok(divisions) => {
                    let selected = vm.form.get_untracked().division;
                    vm.divisions_shared_collection
                        .set(add_to_collection_if_missing(divisions, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading divisions failed: {error}")),
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            match district_api::service().query(&QueryOptions::new()).await {
                Ok(districts) => {
                    let selected = vm.form.get_untracked().district;
                    vm.districts_shared_collection
                        .set(add_to_collection_if_missing(districts, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading districts failed: {error}")),
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            match upazila_api::service().query(&QueryOptions::new()).await {
                Ok(upazilas) => {
                    let selected = vm.form.get_untracked().upazila;
                    vm.upazilas_shared_collection
                        .set(add_to_collection_if_missing(upazilas, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading upazilas failed: {error}")),
            }
        });
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let center = vm.form.get_untracked();
            let result = if center.id.is_some() {
                api::service().update(&center).await
            } else {
                api::service().create(&center).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving center failed: {error}")),
            }
        });
    }
}
