use contracts::domain::common::EntityModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::NavigationUpdateViewModel;
use crate::domain::navigation::api;
use crate::shared::alerts::use_alerts;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn NavigationUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = NavigationUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(navigation) = resolution.into_entity() {
                    vm.activate(navigation);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading navigation failed: {error}")),
        }
    });

    view! {
        <section class="entity-form navigation-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit navigation" } else { "Create navigation" }}
                </h2>
            </div>

            <Show when=move || ready.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="field_sequence">"Sequence"</label>
                        <input
                            type="number"
                            id="field_sequence"
                            prop:value=move || vm.form.get().sequence.map(|s| s.to_string()).unwrap_or_default()
                            on:input=move |ev| {
                                vm.form.update(|f| f.sequence = event_target_value(&ev).parse().ok());
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_route">"Route"</label>
                        <input
                            type="text"
                            id="field_route"
                            prop:value=move || vm.form.get().route.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.route = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

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
                        <label for="field_bread_crumb">"Bread crumb"</label>
                        <input
                            type="text"
                            id="field_bread_crumb"
                            prop:value=move || vm.form.get().bread_crumb.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.bread_crumb = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_parent">"Parent"</label>
                        <select
                            id="field_parent"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.navigations_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.parent = collection
                                        .into_iter()
                                        .find(|n| n.entity_id() == Some(selected_id.as_str()))
                                        .map(Box::new);
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().parent.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().parent.and_then(|parent| parent.id);
                                vm.navigations_shared_collection.get().into_iter().map(|navigation| {
                                    let id = navigation.id.clone().unwrap_or_default();
                                    let label = navigation.title.clone().unwrap_or_default();
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
