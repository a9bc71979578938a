use contracts::domain::post_comment::PostComment;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::post_comment::api;
use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn PostCommentDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (comment, set_comment) = signal::<Option<PostComment>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_comment.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading post comment failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail post-comment-detail">
            {move || comment.get().map(|comment| {
                let edit_href = format!("/post-comment/{}/edit", comment.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Post comment"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Commented by"</dt>
                        <dd>{comment.commented_by.clone().unwrap_or_default()}</dd>
                        <dt>"Comment"</dt>
                        <dd>{comment.comment.clone().unwrap_or_default()}</dd>
                        <dt>"Comment type"</dt>
                        <dd>{comment.comment_type.map(|t| t.display_name()).unwrap_or_default()}</dd>
                        <dt>"Commented on"</dt>
                        <dd>{comment.commented_on.as_ref().map(format_datetime).unwrap_or_default()}</dd>
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
