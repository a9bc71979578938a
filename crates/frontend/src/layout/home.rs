use leptos::prelude::*;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h2>"Center administration"</h2>
            <p>
                "Manage geographic reference data, centers and their staff, and "
                "the editorial content of the public site."
            </p>
            <div class="home__shortcuts">
                <A href="/center" attr:class="btn btn-primary">"Centers"</A>
                <A href="/post" attr:class="btn btn-primary">"Posts"</A>
                <A href="/employee" attr:class="btn btn-primary">"Employees"</A>
            </div>
        </section>
    }
}
