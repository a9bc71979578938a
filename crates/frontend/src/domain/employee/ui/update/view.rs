use contracts::domain::common::EntityModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::EmployeeUpdateViewModel;
use crate::domain::employee::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::{byte_size, data_url, load_file};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn EmployeeUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = EmployeeUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(employee) = resolution.into_entity() {
                    vm.activate(employee);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading employee failed: {error}")),
        }
    });

    view! {
        <section class="entity-form employee-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit employee" } else { "Create employee" }}
                </h2>
            </div>

            <Show when=move || ready.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="field_full_name">"Full name"</label>
                        <input
                            type="text"
                            id="field_full_name"
                            prop:value=move || vm.form.get().full_name.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.full_name = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_bn_full_name">"Bn full name"</label>
                        <input
                            type="text"
                            id="field_bn_full_name"
                            prop:value=move || vm.form.get().bn_full_name.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.bn_full_name = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_mobile">"Mobile"</label>
                        <input
                            type="text"
                            id="field_mobile"
                            prop:value=move || vm.form.get().mobile.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.mobile = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_email">"Email"</label>
                        <input
                            type="email"
                            id="field_email"
                            prop:value=move || vm.form.get().email.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.email = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_photo_url">"Photo url"</label>
                        <input
                            type="text"
                            id="field_photo_url"
                            prop:value=move || vm.form.get().photo_url.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.photo_url = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_photo">"Photo"</label>
                        {move || {
                            let employee = vm.form.get();
                            employee.photo.as_ref().map(|photo| view! {
                                <div class="form-image-preview">
                                    <img src=data_url(photo, employee.photo_content_type.as_deref()) alt="employee photo" />
                                    <span class="form-image-size">{byte_size(photo)}</span>
                                </div>
                            })
                        }}
                        <input
                            type="file"
                            id="field_photo"
                            accept="image/*"
                            on:change=move |ev| {
                                let result = load_file(&ev, move |loaded| match loaded {
                                    Ok(payload) => vm.form.update(|f| {
                                        f.photo = Some(payload.base64);
                                        f.photo_content_type = Some(payload.content_type);
                                    }),
                                    Err(error) => alerts.error(format!("Reading photo failed: {error}")),
                                });
                                if let Err(error) = result {
                                    alerts.error(format!("Reading photo failed: {error}"));
                                }
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
