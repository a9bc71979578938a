use leptos::prelude::*;
use leptos_router::components::Router;

use crate::layout::alert_stack::AlertStack;
use crate::layout::navbar::Navbar;
use crate::routes::routes::AppRoutes;
use crate::shared::alerts::AlertService;

#[component]
pub fn App() -> impl IntoView {
    // Provide the process-wide notification channel to the whole app.
    provide_context(AlertService::new());

    view! {
        <Router>
            <Navbar />
            <AlertStack />
            <main class="page-container">
                <AppRoutes />
            </main>
        </Router>
    }
}
