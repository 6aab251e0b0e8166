use crate::shared::api_utils::api_base;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::product::{Product, ProductId};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Read-only product card with backend-owned timestamps.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let raw = params.get_untracked().get("id").unwrap_or_default();
    let navigate = use_navigate();

    let (product, set_product) = signal::<Option<Product>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    match ProductId::from_string(&raw) {
        Ok(id) => {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_by_id(id).await {
                    Ok(p) => set_product.set(Some(p)),
                    Err(e) => {
                        log::error!("failed to load product {}: {}", id, e);
                        set_error.set(Some(format!("Failed to load product: {}", e)));
                    }
                }
            });
        }
        Err(e) => set_error.set(Some(e)),
    }

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3 class="title">{"Product details"}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match product.get() {
                None => view! { <div class="loading">{"Loading..."}</div> }.into_any(),
                Some(p) => {
                    let creation_date = format_datetime(p.creation_date.as_deref());
                    let update_date = format_datetime(p.update_date.as_deref());

                    view! {
                        <div class="product-info">
                            <div class="field">
                                <span class="label">{"Name"}</span>
                                <span class="value">{p.name.clone()}</span>
                            </div>
                            <div class="field">
                                <span class="label">{"Amount"}</span>
                                <span class="value">{p.amount.to_string()}</span>
                            </div>
                            <div class="field">
                                <span class="label">{"Actual amount"}</span>
                                <span class="value">{p.actual_amount.to_string()}</span>
                            </div>
                            <div class="field">
                                <span class="label">{"Brand"}</span>
                                <span class="value">{p.brand.clone()}</span>
                            </div>
                            <div class="field">
                                <span class="label">{"Color type"}</span>
                                <span class="value">{p.type_color.clone()}</span>
                            </div>
                            <div class="field">
                                <span class="label">{"Article"}</span>
                                <span class="value">{p.article.clone()}</span>
                            </div>
                            <div class="field">
                                <span class="label">{"Color code"}</span>
                                <span class="color-label">{p.code_color.clone()}</span>
                                <span
                                    class="color-box"
                                    style=format!("background-color: {};", p.code_color)
                                ></span>
                            </div>
                            <div class="field">
                                <span class="label">{"Created"}</span>
                                <span class="value">{creation_date}</span>
                            </div>
                            <div class="field">
                                <span class="label">{"Updated"}</span>
                                <span class="value">{update_date}</span>
                            </div>
                        </div>
                    }.into_any()
                }
            }}

            <div class="details-actions">
                <button
                    class="btn btn-secondary back-button"
                    on:click=move |_| navigate("/products", Default::default())
                >
                    {icon("back")}
                    {"Back"}
                </button>
            </div>
        </div>
    }
}

async fn fetch_by_id(id: ProductId) -> Result<Product, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/products/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Product = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}
