use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_catalog::ui::home::CatalogHome;
use crate::domain::a001_catalog::ui::program::ProgramPage;
use crate::layout::Shell;

#[component]
fn PageNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to catalog"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <PageNotFound /> }>
                    <Route path=path!("/") view=CatalogHome />
                    <Route path=path!("/program/:slug") view=ProgramPage />
                </Routes>
            </Shell>
        </Router>
    }
}
