use contracts::domain::employee::Employee;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::employee::api;
use crate::shared::alerts::use_alerts;
use crate::shared::data_utils::data_url;
use crate::shared::icons::icon;
use crate::shared::navigation::previous_state;
use crate::shared::resolver::{resolve_entity, Resolution};

#[component]
#[allow(non_snake_case)]
pub fn EmployeeDetail() -> impl IntoView {
    let alerts = use_alerts();
    let (employee, set_employee) = signal::<Option<Employee>>(None);

    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let edit_navigate = use_navigate();
    wasm_bindgen_futures::spawn_local(async move {
        match resolve_entity(api::service(), id).await {
            Ok(Resolution::Missing) => navigate("/404", Default::default()),
            Ok(resolution) => set_employee.set(resolution.into_entity()),
            Err(error) => alerts.error(format!("Loading employee failed: {error}")),
        }
    });

    view! {
        <section class="entity-detail employee-detail">
            {move || employee.get().map(|employee| {
                let edit_href = format!("/employee/{}/edit", employee.id.clone().unwrap_or_default());
                let edit_navigate = edit_navigate.clone();
                view! {
                    <div class="page__header">
                        <h2 class="page__title">"Employee"</h2>
                    </div>
                    <dl class="detail-list">
                        <dt>"Full name"</dt>
                        <dd>{employee.full_name.clone().unwrap_or_default()}</dd>
                        <dt>"Bn full name"</dt>
                        <dd>{employee.bn_full_name.clone().unwrap_or_default()}</dd>
                        <dt>"Mobile"</dt>
                        <dd>{employee.mobile.clone().unwrap_or_default()}</dd>
                        <dt>"Email"</dt>
                        <dd>{employee.email.clone().unwrap_or_default()}</dd>
                        <dt>"Photo url"</dt>
                        <dd>{employee.photo_url.clone().unwrap_or_default()}</dd>
                        <dt>"Photo"</dt>
                        <dd>
                            {employee.photo.as_ref().map(|photo| view! {
                                <img
                                    class="detail-image"
                                    src=data_url(photo, employee.photo_content_type.as_deref())
                                    alt="employee photo"
                                />
                            })}
                        </dd>
                        <dt>"Designation"</dt>
                        <dd>{employee.designation.as_ref().and_then(|d| d.name.clone()).unwrap_or_default()}</dd>
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
