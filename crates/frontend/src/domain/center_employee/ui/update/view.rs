use contracts::domain::common::EntityModel;
use contracts::enums::DutyType;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::CenterEmployeeUpdateViewModel;
use crate::domain::center_employee::api;
use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::{parse_date_input, to_date_input};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn CenterEmployeeUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = CenterEmployeeUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(assignment) = resolution.into_entity() {
                    vm.activate(assignment);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading assignment failed: {error}")),
        }
    });

    view! {
        <section class="entity-form center-employee-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit assignment" } else { "Create assignment" }}
                </h2>
            </div>

            <Show when=move || ready.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="field_duty_type">"Duty type"</label>
                        <select
                            id="field_duty_type"
                            on:change=move |ev| {
                                vm.form.update(|f| f.duty_type = event_target_value(&ev).parse().ok());
                            }
                        >
                            <option value="" selected=move || vm.form.get().duty_type.is_none()>""</option>
                            {DutyType::all().into_iter().map(|duty_type| view! {
                                <option
                                    value=duty_type.code()
                                    selected=move || vm.form.get().duty_type == Some(duty_type)
                                >
                                    {duty_type.display_name()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="field_joining_date">"Joining date"</label>
                        <input
                            type="date"
                            id="field_joining_date"
                            prop:value=move || vm.form.get().joining_date.as_ref().map(to_date_input).unwrap_or_default()
                            on:input=move |ev| {
                                vm.form.update(|f| f.joining_date = parse_date_input(&event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_release_date">"Release date"</label>
                        <input
                            type="date"
                            id="field_release_date"
                            prop:value=move || vm.form.get().release_date.as_ref().map(to_date_input).unwrap_or_default()
                            on:input=move |ev| {
                                vm.form.update(|f| f.release_date = parse_date_input(&event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_message">"Message"</label>
                        <textarea
                            id="field_message"
                            rows="4"
                            prop:value=move || vm.form.get().message.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.message = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_designation">"Designation"</label>
                        <select
                            id="field_designation"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.designations_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.designation = collection
                                        .into_iter()
                                        .find(|d| d.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().designation.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().designation.and_then(|d| d.id);
                                vm.designations_shared_collection.get().into_iter().map(|designation| {
                                    let id = designation.id.clone().unwrap_or_default();
                                    let label = designation.name.clone().unwrap_or_default();
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
