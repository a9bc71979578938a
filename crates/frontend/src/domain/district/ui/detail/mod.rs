use contracts::domain::district::District;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::district::api;
use crate::shared::alerts::use_alerts;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn DistrictDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (district, set_district) = signal::<Option<District>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_district.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading district failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail district-detail">
            {move || district.get().map(|district| {
                let edit_href = format!("/district/{}/edit", district.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"District"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Division id"</dt>
                        <dd>{district.division_id.clone().unwrap_or_default()}</dd>
                        <dt>"Name"</dt>
                        <dd>{district.name.clone().unwrap_or_default()}</dd>
                        <dt>"Bn name"</dt>
                        <dd>{district.bn_name.clone().unwrap_or_default()}</dd>
                        <dt>"Lat"</dt>
                        <dd>{district.lat.clone().unwrap_or_default()}</dd>
                        <dt>"Lon"</dt>
                        <dd>{district.lon.clone().unwrap_or_default()}</dd>
                        <dt>"Url"</dt>
                        <dd>{district.url.clone().unwrap_or_default()}</dd>
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
