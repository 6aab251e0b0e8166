use crate::shared::api_utils::api_base;
use contracts::domain::product::{Product, ProductForm, ProductId};
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub async fn fetch_by_id(id: ProductId) -> Result<Product, String> {
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

/// POST a new product to the collection.
pub async fn create_product(form: &ProductForm) -> Result<(), String> {
    let url = format!("{}/products", api_base());
    send_form("POST", &url, form).await
}

/// PUT the editable fields of an existing product.
pub async fn update_product(id: ProductId, form: &ProductForm) -> Result<(), String> {
    let url = format!("{}/products/{}", api_base(), id);
    send_form("PUT", &url, form).await
}

async fn send_form(method: &str, url: &str, form: &ProductForm) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let body = serde_json::to_string(form).map_err(|e| format!("{e}"))?;
    let js_body = wasm_bindgen::JsValue::from_str(&body);
    opts.set_body(&js_body);

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;
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
