mod model;
mod view;
mod view_model;

use contracts::domain::product::ProductId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
pub use view::ProductFormView;

#[component]
pub fn ProductCreatePage() -> impl IntoView {
    view! { <ProductFormView id=None /> }
}

#[component]
pub fn ProductEditPage() -> impl IntoView {
    let params = use_params_map();
    let raw = params.get_untracked().get("id").unwrap_or_default();

    match ProductId::from_string(&raw) {
        Ok(id) => view! { <ProductFormView id=Some(id) /> }.into_any(),
        Err(e) => view! { <div class="error">{e}</div> }.into_any(),
    }
}
