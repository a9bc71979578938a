use contracts::domain::common::EntityModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::CenterImageUpdateViewModel;
use crate::domain::center_image::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::{byte_size, data_url, load_file};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn CenterImageUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = CenterImageUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(image) = resolution.into_entity() {
                    vm.activate(image);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading center image failed: {error}")),
        }
    });

    view! {
        <section class="entity-form center-image-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit center image" } else { "Create center image" }}
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
                        <label for="field_description">"Description"</label>
                        <textarea
                            id="field_description"
                            rows="4"
                            prop:value=move || vm.form.get().description.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.description = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_image_url">"Image url"</label>
                        <input
                            type="text"
                            id="field_image_url"
                            prop:value=move || vm.form.get().image_url.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.image_url = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_image">"Image"</label>
                        {move || {
                            let image = vm.form.get();
                            image.image.as_ref().map(|data| view! {
                                <div class="form-image-preview">
                                    <img src=data_url(data, image.image_content_type.as_deref()) alt="center image" />
                                    <span class="form-image-size">{byte_size(data)}</span>
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

                    <div class="form-group form-group--checkbox">
                        <label for="field_show">"Show"</label>
                        <input
                            type="checkbox"
                            id="field_show"
                            prop:checked=move || vm.form.get().show
                            on:change=move |ev| {
                                vm.form.update(|f| f.show = event_target_checked(&ev));
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
