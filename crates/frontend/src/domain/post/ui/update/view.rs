use contracts::domain::common::EntityModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::PostUpdateViewModel;
use crate::domain::post::api;
use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::{
    parse_date_input, parse_datetime_input, to_date_input, to_datetime_input,
};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn PostUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = PostUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(post) = resolution.into_entity() {
                    vm.activate(post);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading post failed: {error}")),
        }
    });

    view! {
        <section class="entity-form post-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit post" } else { "Create post" }}
                </h2>
            </div>

            <Show when=move || ready.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="field_title">"Title"</label>
                        <input
                            type="text"
                            id="field_title"
                            prop:value=move || vm.form.get().title.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.title = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_body">"Body"</label>
                        <textarea
                            id="field_body"
                            rows="8"
                            prop:value=move || vm.form.get().body.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.body = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_post_date">"Post date"</label>
                        <input
                            type="date"
                            id="field_post_date"
                            prop:value=move || vm.form.get().post_date.as_ref().map(to_date_input).unwrap_or_default()
                            on:input=move |ev| {
                                vm.form.update(|f| f.post_date = parse_date_input(&event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div class="form-group form-group--checkbox">
                        <label for="field_publish">"Publish"</label>
                        <input
                            type="checkbox"
                            id="field_publish"
                            prop:checked=move || vm.form.get().publish
                            on:change=move |ev| {
                                vm.form.update(|f| f.publish = event_target_checked(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_published_on">"Published on"</label>
                        <input
                            type="datetime-local"
                            id="field_published_on"
                            prop:value=move || vm.form.get().published_on.as_ref().map(to_datetime_input).unwrap_or_default()
                            on:input=move |ev| {
                                vm.form.update(|f| f.published_on = parse_datetime_input(&event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_center">"Center"</label>
                        <select
                            id="field_center"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.centers_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.center = collection
                                        .into_iter()
                                        .find(|c| c.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().center.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().center.and_then(|c| c.id);
                                vm.centers_shared_collection.get().into_iter().map(|center| {
                                    let id = center.id.clone().unwrap_or_default();
                                    let label = center.name.clone().unwrap_or_default();
                                    let selected = Some(&id) == selected_id.as_ref();
                                    view! {
                                        <option value=id selected=selected>{label}</option>
                                    }
                                }).collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="field_employee">"Employee"</label>
                        <select
                            id="field_employee"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.employees_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.employee = collection
                                        .into_iter()
                                        .find(|e| e.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().employee.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().employee.and_then(|e| e.id);
                                vm.employees_shared_collection.get().into_iter().map(|employee| {
                                    let id = employee.id.clone().unwrap_or_default();
                                    let label = employee.full_name.clone().unwrap_or_default();
                                    let selected = Some(&id) == selected_id.as_ref();
                                    view! {
                                        <option value=id selected=selected>{label}</option>
                                    }
                                }).collect_view()
                            }}
                        </select>
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
