use leptos::prelude::*;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="error-page">
            <h2>"Page not found"</h2>
            <p>"The record you are looking for does not exist or was deleted."</p>
            <A href="/" attr:class="btn btn-secondary">"Go to the start page"</A>
        </section>
    }
}
