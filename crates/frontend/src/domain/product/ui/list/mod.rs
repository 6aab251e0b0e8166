use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, highlight_matches, sort_list, SearchInput,
    Searchable, Sortable,
};
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub amount: f64,
    pub actual_amount: f64,
    pub code_color: String,
}

impl ProductRow {
    fn from_product(p: Product) -> Self {
        Self {
            id: p.id.value(),
            name: p.name,
            brand: p.brand,
            amount: p.amount,
            actual_amount: p.actual_amount,
            code_color: p.code_color,
        }
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();

        self.name.to_lowercase().contains(&filter_lower)
            || self.brand.to_lowercase().contains(&filter_lower)
            || self.code_color.to_lowercase().contains(&filter_lower)
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "brand" => self.brand.to_lowercase().cmp(&other.brand.to_lowercase()),
            "amount" => self
                .amount
                .partial_cmp(&other.amount)
                .unwrap_or(Ordering::Equal),
            "actual_amount" => self
                .actual_amount
                .partial_cmp(&other.actual_amount)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Search and sorting
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort_field, set_sort_field) = signal::<String>("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let navigate = use_navigate();

    let load = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products().await {
                Ok(products) => {
                    set_items.set(products.into_iter().map(ProductRow::from_product).collect());
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load products: {}", e);
                    set_error.set(Some(format!("Failed to load products: {}", e)));
                }
            }
            set_loaded.set(true);
        });
    };

    let handle_delete = move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this paint?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_product(id).await {
                Ok(()) => load(),
                Err(e) => {
                    log::error!("failed to delete product {}: {}", id, e);
                    set_error.set(Some(format!("Failed to delete product: {}", e)));
                }
            }
        });
    };

    let get_filtered_sorted_items = move || -> Vec<ProductRow> {
        let mut result = filter_list(items.get(), &filter_text.get());
        sort_list(&mut result, &sort_field.get(), sort_ascending.get());
        result
    };

    let toggle_sort = move |field: &'static str| {
        create_sort_toggle(field, sort_field.into(), set_sort_field, set_sort_ascending)
    };

    load();

    let nav_create = navigate.clone();
    let nav_rows = navigate.clone();

    view! {
        <div class="content">
            <div class="header">
                <h2 class="title">{"Paint list"}</h2>
                <div class="header-actions">
                    <SearchInput
                        value=filter_text
                        on_change=Callback::new(move |val: String| set_filter_text.set(val))
                        placeholder="Search paints...".to_string()
                    />
                    <button
                        class="btn btn-primary create-button"
                        on:click=move |_| nav_create("/products/create", Default::default())
                    >
                        {icon("plus")}
                        {"Create new paint"}
                    </button>
                    <button class="btn btn-secondary refresh-button" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || if !loaded.get() {
                view! { <div class="loading">{"Loading..."}</div> }.into_any()
            } else {
                let nav_rows = nav_rows.clone();
                view! {
                    <div class="table-container">
                        <table class="product-table">
                            <thead>
                                <tr>
                                    <th
                                        class="cursor-pointer user-select-none"
                                        on:click=toggle_sort("brand")
                                        title="Sort"
                                    >
                                        {move || format!("Brand{}", get_sort_indicator(&sort_field.get(), "brand", sort_ascending.get()))}
                                    </th>
                                    <th
                                        class="cursor-pointer user-select-none"
                                        on:click=toggle_sort("name")
                                        title="Sort"
                                    >
                                        {move || format!("Name{}", get_sort_indicator(&sort_field.get(), "name", sort_ascending.get()))}
                                    </th>
                                    <th
                                        class="cursor-pointer user-select-none"
                                        on:click=toggle_sort("amount")
                                        title="Sort"
                                    >
                                        {move || format!("Amount{}", get_sort_indicator(&sort_field.get(), "amount", sort_ascending.get()))}
                                    </th>
                                    <th
                                        class="cursor-pointer user-select-none"
                                        on:click=toggle_sort("actual_amount")
                                        title="Sort"
                                    >
                                        {move || format!("Actual amount{}", get_sort_indicator(&sort_field.get(), "actual_amount", sort_ascending.get()))}
                                    </th>
                                    <th>{"Color"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let filtered = get_filtered_sorted_items();
                                    let current_filter = filter_text.get();
                                    let nav_rows = nav_rows.clone();

                                    filtered.into_iter().map(|row| {
                                        let id = row.id;

                                        let brand_view = if current_filter.len() >= 3 {
                                            highlight_matches(&row.brand, &current_filter)
                                        } else {
                                            view! { <span>{row.brand.clone()}</span> }.into_any()
                                        };

                                        let name_view = if current_filter.len() >= 3 {
                                            highlight_matches(&row.name, &current_filter)
                                        } else {
                                            view! { <span>{row.name.clone()}</span> }.into_any()
                                        };

                                        let nav_view = nav_rows.clone();
                                        let nav_edit = nav_rows.clone();

                                        view! {
                                            <tr>
                                                <td>{brand_view}</td>
                                                <td>{name_view}</td>
                                                <td>{row.amount.to_string()}</td>
                                                <td>{row.actual_amount.to_string()}</td>
                                                <td>
                                                    <span
                                                        class="color-box"
                                                        style=format!("background-color: {};", row.code_color)
                                                    ></span>
                                                </td>
                                                <td class="actions">
                                                    <button
                                                        class="btn btn-secondary view-button"
                                                        on:click=move |_| nav_view(&format!("/products/{}", id), Default::default())
                                                    >
                                                        {icon("eye")}
                                                        {"View"}
                                                    </button>
                                                    <button
                                                        class="btn btn-secondary edit-button"
                                                        on:click=move |_| nav_edit(&format!("/products/{}/edit", id), Default::default())
                                                    >
                                                        {icon("edit")}
                                                        {"Edit"}
                                                    </button>
                                                    <button
                                                        class="btn btn-danger delete-button"
                                                        on:click=move |_| handle_delete(id)
                                                    >
                                                        {icon("delete")}
                                                        {"Delete"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

async fn fetch_products() -> Result<Vec<Product>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/products", api_base());
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
    let data: Vec<Product> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn delete_product(id: i64) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
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
    Ok(())
}
