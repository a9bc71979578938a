use contracts::domain::post::Post;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::post::api;
use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn PostDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (post, set_post) = signal::<Option<Post>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_post.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading post failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail post-detail">
            {move || post.get().map(|post| {
                let edit_href = format!("/post/{}/edit", post.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Post"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Title"</dt>
                        <dd>{post.title.clone().unwrap_or_default()}</dd>
                        <dt>"Body"</dt>
                        <dd>{post.body.clone().unwrap_or_default()}</dd>
                        <dt>"Post date"</dt>
                        <dd>{post.post_date.as_ref().map(format_date).unwrap_or_default()}</dd>
                        <dt>"Publish"</dt>
                        <dd>{if post.publish { "Yes" } else { "No" }}</dd>
                        <dt>"Published on"</dt>
                        <dd>{post.published_on.as_ref().map(format_datetime).unwrap_or_default()}</dd>
                        <dt>"Center"</dt>
                        <dd>{post.center.as_ref().and_then(|c| c.name.clone()).unwrap_or_default()}</dd>
                        <dt>"Employee"</dt>
                        <dd>{post.employee.as_ref().and_then(|e| e.full_name.clone()).unwrap_or_default()}</dd>
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
