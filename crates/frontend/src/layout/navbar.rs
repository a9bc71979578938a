use leptos::prelude::*;
use leptos_router::components::A;

#[component]
#[allow(non_snake_case)]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Center Admin"</A>
            <div class="navbar__section">
                <span class="navbar__section-title">"Reference"</span>
                <A href="/navigation" attr:class="navbar__link">"Navigations"</A>
                <A href="/division" attr:class="navbar__link">"Divisions"</A>
                <A href="/district" attr:class="navbar__link">"Districts"</A>
                <A href="/upazila" attr:class="navbar__link">"Upazilas"</A>
            </div>
            <div class="navbar__section">
                <span class="navbar__section-title">"Centers"</span>
                <A href="/center" attr:class="navbar__link">"Centers"</A>
                <A href="/center-images" attr:class="navbar__link">"Center images"</A>
                <A href="/center-employee" attr:class="navbar__link">"Center employees"</A>
            </div>
            <div class="navbar__section">
                <span class="navbar__section-title">"Staff"</span>
                <A href="/designation" attr:class="navbar__link">"Designations"</A>
                <A href="/employee" attr:class="navbar__link">"Employees"</A>
            </div>
            <div class="navbar__section">
                <span class="navbar__section-title">"Blog"</span>
                <A href="/post" attr:class="navbar__link">"Posts"</A>
                <A href="/post-photo" attr:class="navbar__link">"Post photos"</A>
                <A href="/post-comment" attr:class="navbar__link">"Post comments"</A>
            </div>
        </nav>
    }
}
