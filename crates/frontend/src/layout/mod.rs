use leptos::prelude::*;

/// Application shell: top bar plus the routed content area.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{"Paint Catalog"}</h1>
            </header>
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
