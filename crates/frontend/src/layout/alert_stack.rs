use leptos::prelude::*;

use crate::shared::alerts::use_alerts;
use crate::shared::icons::icon;

/// Renders the process-wide notification channel.
#[component]
#[allow(non_snake_case)]
pub fn AlertStack() -> impl IntoView {
    let alerts = use_alerts();

    view! {
        <div class="alert-stack">
            {move || alerts.alerts().get().into_iter().map(|alert| {
                let id = alert.id;
                view! {
                    <div class="alert alert--error">
                        <span class="alert__text">{alert.message}</span>
                        <button class="alert__dismiss" on:click=move |_| alerts.dismiss(id)>
                            {icon("x")}
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
