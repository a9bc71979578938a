use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::DistrictUpdateViewModel;
use crate::domain::district::api;
use crate::shared::alerts::use_alerts;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn DistrictUpdate() -> impl IntoView {
    let alerts = use_alerts();
    let vm = DistrictUpdateViewModel::new(alerts);
    let (ready, set_ready) = signal(false);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => {
                if let Some(district) = resolution.into_entity() {
                    vm.activate(district);
                    set_ready.set(true);
                }
            }
            Err(error) => alerts.error(format!("Loading district failed: {error}")),
        }
    });

    view! {
        <section class="entity-form district-update">
            <div class="page__header">
                <h2 class="page__title">
                    {move || if vm.form.get().id.is_some() { "Edit district" } else { "Create district" }}
                </h2>
            </div>

            <Show when=move || ready.get()>
                <div class="details-form">
                    <div class="form-group">
                        <label for="field_division_id">"Division id"</label>
                        <input
                            type="text"
                            id="field_division_id"
                            prop:value=move || vm.form.get().division_id.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.division_id = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

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
                        <label for="field_bn_name">"Bn name"</label>
                        <input
                            type="text"
                            id="field_bn_name"
                            prop:value=move || vm.form.get().bn_name.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.bn_name = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_lat">"Lat"</label>
                        <input
                            type="text"
                            id="field_lat"
                            prop:value=move || vm.form.get().lat.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.lat = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_lon">"Lon"</label>
                        <input
                            type="text"
                            id="field_lon"
                            prop:value=move || vm.form.get().lon.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.lon = (!value.is_empty()).then_some(value));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="field_url">"Url"</label>
                        <input
                            type="text"
                            id="field_url"
                            prop:value=move || vm.form.get().url.clone().unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.url = (!value.is_empty()).then_some(value));
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
