use contracts::enums::CommentType;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::PostCommentUpdateViewModel;
use crate::domain::post_comment::api;
use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::{parse_datetime_input, to_datetime_input};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn PostCommentUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = PostCommentUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(comment) = resolution.into_entity() {
                    vm.activate(comment);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading post comment failed: {error}")),
        }
    });

    view! {
        <section class="entity-form post-comment-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit post comment" } else { "Create post comment" }}
                </h2>
            </div>

            <Show when=move || ready.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="field_commented_by">"Commented by"</label>
                        <input
                            type="text"
                            id="field_commented_by"
                            prop:value=move || vm.form.get().commented_by.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.commented_by = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_comment">"Comment"</label>
                        <textarea
                            id="field_comment"
                            rows="5"
                            prop:value=move || vm.form.get().comment.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.comment = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_comment_type">"Comment type"</label>
                        <select
                            id="field_comment_type"
                            on:change=move |ev| {
                                vm.form.update(|f| f.comment_type = event_target_value(&ev).parse().ok());
                            }
                        >
                            <option value="" selected=move || vm.form.get().comment_type.is_none()>""</option>
                            {CommentType::all().into_iter().map(|comment_type| view! {
                                <option
                                    value=comment_type.code()
                                    selected=move || vm.form.get().comment_type == Some(comment_type)
                                >
                                    {comment_type.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="field_commented_on">"Commented on"</label>
                        <input
                            type="datetime-local"
                            id="field_commented_on"
                            prop:value=move || vm.form.get().commented_on.as_ref().map(to_datetime_input).unwrap_or_default()
                            on:input=move |ev| {
                                vm.form.update(|f| f.commented_on = parse_datetime_input(&event_target_value(&ev)));
                            }
                        />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        disabled=move || vm.is_saving.get()
                        on:click=move |_| vm.save()
                    >
                        {icon("save")}
                        " Save"
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| previous_state()>
                        {icon("back")}
                        " Back"
                    </button>
                </div>
            </Show>
        </section>
    }
}
