use contracts::domain::center_image::CenterImage;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::center_image::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::data_url;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn CenterImageDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (image, set_image) = signal::<Option<CenterImage>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_image.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading center image failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail center-image-detail">
            {move || image.get().map(|image| {
                let edit_href = format!("/center-images/{}/edit", image.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Center image"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Title"</dt>
                        <dd>{image.title.clone().unwrap_or_default()}</dd>
                        <dt>"Description"</dt>
                        <dd>{image.description.clone().unwrap_or_default()}</dd>
                        <dt>"Image url"</dt>
                        <dd>{image.image_url.clone().unwrap_or_default()}</dd>
                        <dt>"Image"</dt>
                        <dd>
                            {image.image.as_ref().map(|data| view! {
                                <img
                                    class="detail-image"
                                    src=data_url(data, image.image_content_type.as_deref())
                                    alt="center image"
                                />
                            })}
                        </dd>
                        <dt>"Show"</dt>
                        <dd>{if image.show { "Yes" } else { "No" }}</dd>
                        <dt>"Center"</dt>
                        <dd>{image.center.as_ref().and_then(|c| c.name.clone()).unwrap_or_default()}</dd>
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
