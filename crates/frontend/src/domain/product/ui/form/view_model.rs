use super::model;
use contracts::domain::product::{FormErrors, ProductForm, ProductId};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the product create/edit form
#[derive(Clone)]
pub struct ProductFormViewModel {
    pub id: Option<ProductId>,
    pub form: RwSignal<ProductForm>,
    pub errors: RwSignal<FormErrors>,
    pub error: RwSignal<Option<String>>,
    pub success_message: RwSignal<Option<String>>,
}

impl ProductFormViewModel {
    pub fn new(id: Option<ProductId>) -> Self {
        Self {
            id,
            form: RwSignal::new(ProductForm::default()),
            errors: RwSignal::new(FormErrors::default()),
            error: RwSignal::new(None),
            success_message: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit paint"
        } else {
            "Create paint"
        }
    }

    /// Load form data from the server when editing an existing product
    pub fn load_if_needed(&self) {
        let Some(id) = self.id else {
            return;
        };
        let form = self.form;
        let error = self.error;

        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(product) => form.set(product.to_form()),
                Err(e) => {
                    log::error!("failed to load product {}: {}", id, e);
                    error.set(Some(format!("Failed to load product: {}", e)));
                }
            }
        });
    }

    /// Validate and submit. Submission is blocked while the validation
    /// report is non-empty; the report is published for per-field rendering.
    pub fn submit(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        let report = current.validate();
        if !report.is_empty() {
            self.errors.set(report);
            return;
        }
        self.errors.set(FormErrors::default());

        let id = self.id;
        let error = self.error;
        let success_message = self.success_message;

        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => model::update_product(id, &current).await,
                None => model::create_product(&current).await,
            };
            match result {
                Ok(()) => {
                    let message = if id.is_some() {
                        "Product updated successfully!"
                    } else {
                        "Product created successfully!"
                    };
                    success_message.set(Some(message.to_string()));
                    (on_saved)(());
                }
                Err(e) => {
                    log::error!("failed to save product: {}", e);
                    error.set(Some(format!("Failed to save product: {}", e)));
                }
            }
        });
    }
}
