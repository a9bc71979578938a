use contracts::domain::common::EntityModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::CenterUpdateViewModel;
use crate::domain::center::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::{byte_size, data_url, load_file};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn CenterUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = CenterUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(center) = resolution.into_entity() {
                    vm.activate(center);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading center failed: {error}")),
        }
    });

    view! {
        <section class="entity-form center-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit center" } else { "Create center" }}
                </h2>
            </div>

            <Show when=move || ready.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="field_name">"Name"</label>
                        <input
                            type="text"
                            id="field_name"
                            prop:value=move || vm.form.get().name.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.name = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_address_line">"Address line"</label>
                        <input
                            type="text"
                            id="field_address_line"
                            prop:value=move || vm.form.get().address_line.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.address_line = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_image">"Image"</label>
                        {move || {
                            let center = vm.form.get();
                            center.image.as_ref().map(|image| view! {
                                <div class="form-image-preview">
                                    <img src=data_url(image, center.image_content_type.as_deref()) alt="center image" />
                                    <span class="form-image-size">{byte_size(image)}</span>
                                </div>
                            })
                        }}
                        <input
                            type="file"
                            id="field_image"
                            accept="image/*"
                            on:change=move |ev| {
                                let result = load_file(&ev, move |loaded| match loaded {
                                    Ok(payload) => vm.form.update(|f| {
                                        f.image = Some(payload.base64);
                                        f.image_content_type = Some(payload.content_type);
                                    }),
                                    Err(error) => alerts.error(format!("Reading image failed: {error}")),
                                });
                                if let Err(error) = result {
                                    alerts.error(format!("Reading image failed: {error}"));
                                }
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_division">"Division"</label>
                        <select
                            id="field_division"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.divisions_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.division = collection
                                        .into_iter()
                                        .find(|d| d.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().division.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().division.and_then(|d| d.id);
                                vm.divisions_shared_collection.get().into_iter().map(|division| {
                                    let id = division.id.clone().unwrap_or_default();
                                    let label = division.name.clone().unwrap_or_default();
                                    let selected = Some(&id) == selected_id.as_ref();
                                    view! {
                                        <option value=id selected=selected>{label}</option>
                                    }
                                }).collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="field_district">"District"</label>
                        <select
                            id="field_district"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.districts_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.district = collection
                                        .into_iter()
                                        .find(|d| d.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().district.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().district.and_then(|d| d.id);
                                vm.districts_shared_collection.get().into_iter().map(|district| {
                                    let id = district.id.clone().unwrap_or_default();
                                    let label = district.name.clone().unwrap_or_default();
                                    let selected = Some(&id) == selected_id.as_ref();
                                    view! {
                                        <option value=id selected=selected>{label}</option>
                                    }
                                }).collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="field_upazila">"Upazila"</label>
                        <select
                            id="field_upazila"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.upazilas_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.upazila = collection
                                        .into_iter()
                                        .find(|u| u.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().upazila.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().upazila.and_then(|u| u.id);
                                vm.upazilas_shared_collection.get().into_iter().map(|upazila| {
                                    let id = upazila.id.clone().unwrap_or_default();
                                    let label = upazila.name.clone().unwrap_or_default();
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
