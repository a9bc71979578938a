use contracts::domain::center::Center;
use contracts::domain::common::{add_to_collection_if_missing, QueryOptions};
use contracts::domain::employee::Employee;
use contracts::domain::post::Post;
use leptos::prelude::*;

use crate::domain::center::api as center_api;
use crate::domain::employee::api as employee_api;
use crate::domain::post::api;
use crate::shared::alerts::AlertService;
use crate::shared::date_utils::start_of_today;
use crate::shared::navigation::previous_state;

/// ViewModel for the post edit form.
///
/// The shared collections back the relation selects; they are private to
/// this instance and only ever touched through reconciliation.
#[derive(Clone, Copy)]
pub struct PostUpdateViewModel {
    pub form: RwSignal<Post>,
    pub is_saving: RwSignal<bool>,
    pub centers_shared_collection: RwSignal<Vec<Center>>,
    pub employees_shared_collection: RwSignal<Vec<Employee>>,
    alerts: AlertService,
}

impl PostUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(Post::default()),
            is_saving: RwSignal::new(false),
            centers_shared_collection: RwSignal::new(Vec::new()),
            employees_shared_collection: RwSignal::new(Vec::new()),
            alerts,
        }
    }

    /// Populate the form from the resolved entity and kick off the relation
    /// option loads. A brand-new post is stamped with the start of today.
    pub fn activate(&self, mut post: Post) {
        if post.id.is_none() {
            post.published_on = Some(start_of_today());
        }
        self.update_form(post);
        self.load_relationships_options();
    }

    fn update_form(&self, post: Post) {
        let center = post.center.clone();
        let employee = post.employee.clone();
        self.centers_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [center]);
        });
        self.employees_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [employee]);
        });
        self.form.set(post);
    }

    /// Load each relation's option list, then reconcile it with whatever the
    /// form currently references so the selection stays visible even when
    /// the query result does not contain it.
    fn load_relationships_options(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match center_api::service().query(&QueryOptions::new()).await {
                Ok(centers) => {
                    let selected = vm.form.get_untracked().center;
                    vm.centers_shared_collection
                        .set(add_to_collection_if_missing(centers, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading centers failed: {error}")),
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            match employee_api::service().query(&QueryOptions::new()).await {
                Ok(employees) => {
                    let selected = vm.form.get_untracked().employee;
                    vm.employees_shared_collection
                        .set(add_to_collection_if_missing(employees, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading employees failed: {error}")),
            }
        });
    }

    /// Create or update depending on persistence state; navigate back only
    /// on success. The saving flag is cleared on every terminal outcome.
    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let post = vm.form.get_untracked();
            let result = if post.id.is_some() {
                api::service().update(&post).await
            } else {
                api::service().create(&post).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving post failed: {error}")),
            }
        });
    }
}
