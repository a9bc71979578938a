use contracts::domain::center::Center;
use contracts::domain::center_image::CenterImage;
use contracts::domain::common::{add_to_collection_if_missing, QueryOptions};
use leptos::prelude::*;

use crate::domain::center::api as center_api;
use crate::domain::center_image::api;
use crate::shared::alerts::AlertService;
use crate::shared::navigation::previous_state;

/// ViewModel for the center image edit form
#[derive(Clone, Copy)]
pub struct CenterImageUpdateViewModel {
    pub form: RwSignal<CenterImage>,
    pub is_saving: RwSignal<bool>,
    pub centers_shared_collection: RwSignal<Vec<Center>>,
    alerts: AlertService,
}

impl CenterImageUpdateViewModel {
    pub fn new(alerts: AlertService) -> Self {
        Self {
            form: RwSignal::new(CenterImage::default()),
            is_saving: RwSignal::new(false),
            centers_shared_collection: RwSignal::new(Vec::new()),
            alerts,
        }
    }

    pub fn activate(&self, image: CenterImage) {
        self.update_form(image);
        self.load_relationships_options();
    }

    fn update_form(&self, image: CenterImage) {
        let center = image.center.clone();
        self.centers_shared_collection.update(|collection| {
            *collection = add_to_collection_if_missing(std::mem::take(collection), [center]);
        });
        self.form.set(image);
    }

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
    }

    pub fn save(&self) {
        self.is_saving.set(true);
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let image = vm.form.get_untracked();
            let result = if image.id.is_some() {
                api::service().update(&image).await
            } else {
                api::service().create(&image).await
            };
            vm.is_saving.set(false);
            match result {
                Ok(_) => previous_state(),
                Err(error) => vm.alerts.error(format!("Saving center image failed: {error}")),
            }
        });
    }
}
