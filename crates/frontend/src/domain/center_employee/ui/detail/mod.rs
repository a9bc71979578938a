use contracts::domain::center_employee::CenterEmployee;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::center_employee::api;
use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn CenterEmployeeDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (assignment, set_assignment) = signal::<Option<CenterEmployee>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_assignment.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading assignment failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail center-employee-detail">
            {move || assignment.get().map(|assignment| {
                let edit_href = format!("/center-employee/{}/edit", assignment.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Center employee"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Duty type"</dt>
                        <dd>{assignment.duty_type.map(|d| d.display_name()).unwrap_or_default()}</dd>
                        <dt>"Joining date"</dt>
                        <dd>{assignment.joining_date.as_ref().map(format_date).unwrap_or_default()}</dd>
                        <dt>"Release date"</dt>
                        <dd>{assignment.release_date.as_ref().map(format_date).unwrap_or_default()}</dd>
                        <dt>"Message"</dt>
                        <dd>{assignment.message.clone().unwrap_or_default()}</dd>
                        <dt>"Designation"</dt>
                        <dd>{assignment.designation.as_ref().and_then(|d| d.name.clone()).unwrap_or_default()}</dd>
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
