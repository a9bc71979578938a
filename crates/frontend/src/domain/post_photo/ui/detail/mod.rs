use contracts::domain::post_photo::PostPhoto;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::post_photo::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::data_url;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn PostPhotoDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (photo, set_photo) = signal::<Option<PostPhoto>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_photo.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading post photo failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail post-photo-detail">
            {move || photo.get().map(|photo| {
                let edit_href = format!("/post-photo/{}/edit", photo.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Post photo"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Sequence"</dt>
                        <dd>{photo.sequence.map(|s| s.to_string()).unwrap_or_default()}</dd>
                        <dt>"Title"</dt>
                        <dd>{photo.title.clone().unwrap_or_default()}</dd>
                        <dt>"Description"</dt>
                        <dd>{photo.description.clone().unwrap_or_default()}</dd>
                        <dt>"Image"</dt>
                        <dd>
                            {photo.image.as_ref().map(|image| view! {
                                <img
                                    class="detail-image"
                                    src=data_url(image, photo.image_content_type.as_deref())
                                    alt="post photo"
                                />
                            })}
                        </dd>
                        <dt>"Uploaded on"</dt>
                        <dd>{photo.uploaded_on.as_ref().map(format_datetime).unwrap_or_default()}</dd>
                        <dt>"Post"</dt>
                        <dd>{photo.post.as_ref().and_then(|p| p.title.clone()).unwrap_or_default()}</dd>
                        <dt>"Uploaded by"</dt>
                        <dd>{photo.uploaded_by.as_ref().and_then(|e| e.full_name.clone()).unwrap_or_default()}</dd>
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
