use contracts::domain::common::{add_to_collection_if_missing, QueryOptions};
use contracts::domain::employee::Employee;
use contracts::domain::post::Post;
use contracts::domain::post_photo::PostPhoto;
use leptos::prelude::*;

use crate::domain::employee::api as employee_api;
use crate::domain::post::api as post_api;
use crate::domain::post_photo::api;
use crate::shared::alerts::AlertService;
use crate::shared::date_utils::start_of_today;
use crate::shared::navigation::previous_state;

/// ViewModel for the post photo edit form
#[derive(Clone, Copy)]
pub struct PostPhotoUpdateViewModel {
    pub form: RwSignal<PostPhoto>,
    pub is_saving: RwSignal<bool>,
    pub posts_shared_collection: RwSignal<Vec<Post>>,
    pub employees_shared_collection: RwSignal<Vec<Employee>>,
    alerts: AlertService,
}

impl PostPhotoUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(PostPhoto::default()),
            is_saving: RwSignal::new(false),
            posts_shared_collection: RwSignal::new(Vec::new()),
            employees_shared_collection: RwSignal::new(Vec::new()),
            alerts,
        }
    }

    /// Populate the form and kick off the relation option loads. A new photo
    /// is stamped with the start of today as its upload time.
    pub fn activate(&self, mut photo: PostPhoto) {
        if photo.id.is_none() {
            photo.uploaded_on = Some(start_of_today());
        }
        self.update_form(photo);
        self.load_relationships_options();
    }

    fn update_form(&self, photo: PostPhoto) {
        let post = photo.post.clone();
        let uploaded_by = photo.uploaded_by.clone();
        self.posts_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [post]);
        });
        self.employees_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [uploaded_by]);
        });
        self.form.set(photo);
    }

    fn load_relationships_options(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match post_api::service().query(&QueryOptions::new()).await {
                Ok(posts) => {
                    let selected = vm.form.get_untracked().post;
                    vm.posts_shared_collection
                        .set(add_to_collection_if_missing(posts, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading posts failed: {error}")),
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            match employee_api::service().query(&QueryOptions::new()).await {
                Ok(employees) => {
                    let selected = vm.form.get_untracked().uploaded_by;
                    vm.employees_shared_collection
                        .set(add_to_collection_if_missing(employees, [selected]));
                }
                Err(error) => vm.alerts.error(format!("Loading employees failed: {error}")),
            }
        });
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let photo = vm.form.get_untracked();
            let result = if photo.id.is_some() {
                api::service().update(&photo).await
            } else {
                api::service().create(&photo).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving post photo failed: {error}")),
            }
        });
    }
}
