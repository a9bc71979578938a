use contracts::domain::common::EntityModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::PostPhotoUpdateViewModel;
use crate::domain::post_photo::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::{byte_size, data_url, load_file};
use crate::shared::date_utils::{parse_datetime_input, to_datetime_input};
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn PostPhotoUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = PostPhotoUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(photo) = resolution.into_entity() {
                    vm.activate(photo);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading post photo failed: {error}")),
        }
    });

    view! {
        <section class="entity-form post-photo-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit post photo" } else { "Create post photo" }}
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
                        <label for="field_image">"Image"</label>
                        {move || {
                            let photo = vm.form.get();
                            photo.image.as_ref().map(|image| view! {
                                <div class="form-image-preview">
                                    <img src=data_url(image, photo.image_content_type.as_deref()) alt="post photo" />
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
                        <label for="field_uploaded_on">"Uploaded on"</label>
                        <input
                            type="datetime-local"
                            id="field_uploaded_on"
                            prop:value=move || vm.form.get().uploaded_on.as_ref().map(to_datetime_input).unwrap_or_default()
                            on:input=move |ev| {
                                vm.form.update(|f| f.uploaded_on = parse_datetime_input(&event_target_value(&ev)));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_post">"Post"</label>
                        <select
                            id="field_post"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.posts_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.post = collection
                                        .into_iter()
                                        .find(|p| p.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().post.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().post.and_then(|p| p.id);
                                vm.posts_shared_collection.get().into_iter().map(|post| {
                                    let id = post.id.clone().unwrap_or_default();
                                    let label = post.title.clone().unwrap_or_default();
                                    let selected = Some(&id) == selected_id.as_ref();
                                    view! {
                                        <option value=id selected=selected>{label}</option>
                                    }
                                }).collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="field_uploaded_by">"Uploaded by"</label>
                        <select
                            id="field_uploaded_by"
                            on:change=move |ev| {
                                let selected_id = event_target_value(&ev);
                                let collection = vm.employees_shared_collection.get_untracked();
                                vm.form.update(|f| {
                                    f.uploaded_by = collection
                                        .into_iter()
                                        .find(|e| e.entity_id() == Some(selected_id.as_str()));
                                });
                            }
                        >
                            <option value="" selected=move || vm.form.get().uploaded_by.is_none()>""</option>
                            {move || {
                                let selected_id = vm.form.get().uploaded_by.and_then(|e| e.id);
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
