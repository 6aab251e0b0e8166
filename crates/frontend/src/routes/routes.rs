use crate::domain::product::ui::details::ProductDetailsPage;
use crate::domain::product::ui::form::{ProductCreatePage, ProductEditPage};
use crate::domain::product::ui::list::ProductListPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Route table of the application. Mirrors the backend's products resource:
/// list, create, edit and read-only details, with "/" redirecting to the list.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="error">{"Page not found"}</div> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/products") view=ProductListPage />
                    <Route path=path!("/products/create") view=ProductCreatePage />
                    <Route path=path!("/products/:id/edit") view=ProductEditPage />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
