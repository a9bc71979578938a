use contracts::domain::common::{add_to_collection_if_missing, QueryOptions};
use contracts::domain::navigation::Navigation;
use leptos::prelude::*;

use crate::domain::navigation::api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the navigation edit form. The parent option list is a
/// shared collection of navigations, so an entry can be nested under any
/// other entry (the tree shape is not enforced client-side).
#[derive(Clone, Copy)]
pub struct NavigationUpdateViewModel {
    pub form: RwSignal<Navigation>,
    pub is_saving: RwSignal<bool>,
    pub navigations_shared_collection: RwSignal<Vec<Navigation>>,
    alerts: AlertService,
}

impl NavigationUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(Navigation::default()),
            is_saving: RwSignal::new(false),
            navigations_shared_collection: RwSignal::new(Vec::new()),
            alerts,
        }
    }

    pub fn activate(&self, navigation: Navigation) {
        self.update_form(navigation);
        self.load_relationships_options();
    }

    fn update_form(&self, navigation: Navigation) {
        let parent = navigation.parent.clone().map(|boxed| *boxed);
        self.navigations_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [parent]);
        });
        self.form.set(navigation);
    }

    fn load_relationships_options(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::service().query(&QueryOptions::new().sort("sequence,asc")).await {
                Ok(navigations) => {
                    let selected = vm.form.get_untracked().parent.map(|boxed| *boxed);
                    vm.navigations_shared_collection
                        .set(add_to_collection_if_missing(navigations, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading navigations failed: {error}")),
            }
        });
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let navigation = vm.form.get_untracked();
            let result = if navigation.id.is_some() {
                api::service().update(&navigation).await
            } else {
                api::service().create(&navigation).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving navigation failed: {error}")),
            }
        });
    }
}
