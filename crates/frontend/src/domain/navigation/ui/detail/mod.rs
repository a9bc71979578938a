use contracts::domain::navigation::Navigation;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::navigation::api;
use crate::shared::alerts::use_alerts;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn NavigationDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (navigation, set_navigation) = signal::<Option<Navigation>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_navigation.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading navigation failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail navigation-detail">
            {move || navigation.get().map(|navigation| {
                let edit_href = format!("/navigation/{}/edit", navigation.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Navigation"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Sequence"</dt>
                        <dd>{navigation.sequence.map(|s| s.to_string()).unwrap_or_default()}</dd>
                        <dt>"Route"</dt>
                        <dd>{navigation.route.clone().unwrap_or_default()}</dd>
                        <dt>"Title"</dt>
                        <dd>{navigation.title.clone().unwrap_or_default()}</dd>
                        <dt>"Bread crumb"</dt>
                        <dd>{navigation.bread_crumb.clone().unwrap_or_default()}</dd>
                        <dt>"Parent"</dt>
                        <dd>{navigation.parent.as_ref().and_then(|p| p.title.clone()).unwrap_or_default()}</dd>
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
