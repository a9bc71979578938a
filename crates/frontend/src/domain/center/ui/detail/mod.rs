use contracts::domain::center::Center;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::center::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::{data_url, open_file};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn CenterDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (center, set_center) = signal::<Option<Center>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_center.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading center failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail center-detail">
            {move || center.get().map(|center| {
                let edit_href = format!("/center/{}/edit", center.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                let image = center.image.clone();
                let image_content_type = center.image_content_type.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Center"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Name"</dt>
                        <dd>{center.name.clone().unwrap_or_default()}</dd>
                        <dt>"Address line"</dt>
                        <dd>{center.address_line.clone().unwrap_or_default()}</dd>
                        <dt>"Image"</dt>
                        <dd>
                            {image.as_ref().map(|image| {
                                let image_for_open = image.clone();
                                let content_type_for_open = image_content_type.clone();
                                let alerts = alerts;
                                view! {
                                    <img
                                        class="detail-image"
                                        src=data_url(image, image_content_type.as_deref())
                                        alt="center image"
                                        on:click=move |_| {
                                            if let Err(error) = open_file(&image_for_open, content_type_for_open.as_deref()) {
                                                alerts.error(format!("Opening image failed: {error}"));
                                            }
                                        }
                                    />
                                }
                            })}
                        </dd>
                        <dt>"Division"</dt>
                        <dd>{center.division.as_ref().and_then(|d| d.name.clone()).unwrap_or_default()}</dd>
                        <dt>"District"</dt>
                        <dd>{center.district.as_ref().and_then(|d| d.name.clone()).unwrap_or_default()}</dd>
                        <dt>"Upazila"</dt>
                        <dd>{center.upazila.as_ref().and_then(|u| u.name.clone()).unwrap_or_default()}</dd>
                    </dl>
                    <div class="details-actions">
                        <button class="btn btn-secondary" on:click=move |_| previous_state()>
                            {icon("back")}
                            " Back"
                        </button>
                        <button class="btn btn-primary" on:click=move |_| edit_navigate(&edit_href, Default::default())>
                            {icon("edit")}
                            " Edit"
                        </button>
                    </div>
                }
            })}
        </section>
    }
}
