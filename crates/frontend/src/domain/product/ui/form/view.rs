use super::view_model::ProductFormViewModel;
use crate::shared::icons::icon;
use contracts::domain::product::{FieldError, ProductId};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

/// Display text for a field error. `Required` renders the generic message,
/// semantic failures render their specific text.
fn error_text(err: &FieldError) -> &'static str {
    match err {
        FieldError::Required => "This field is required.",
        FieldError::Message(text) => text,
    }
}

#[component]
pub fn ProductFormView(id: Option<ProductId>) -> impl IntoView {
    let vm = ProductFormViewModel::new(id);
    vm.load_if_needed();

    let navigate = use_navigate();
    let on_saved: Rc<dyn Fn(())> = {
        let navigate = navigate.clone();
        Rc::new(move |_| navigate("/products", Default::default()))
    };
    let on_cancel = {
        let navigate = navigate.clone();
        move |_| navigate("/products", Default::default())
    };

    let vm_clone = vm.clone();

    view! {
        <div class="details-container product-form">
            <div class="details-header">
                <h3 class="title">
                    {
                        let vm = vm_clone.clone();
                        vm.title()
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }
            {
                let vm = vm_clone.clone();
                move || vm.success_message.get().map(|m| view! { <div class="message">{m}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Paint name"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().name.map(|e| view! {
                            <span class="error-message">{error_text(&e)}</span>
                        })
                    }
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="amount">{"Amount"}</label>
                        <input
                            type="number"
                            step="0.01"
                            id="amount"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().amount.map(|a| a.to_string()).unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.amount = value.parse::<f64>().ok();
                                    });
                                }
                            }
                            placeholder="0.00"
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.errors.get().amount.map(|e| view! {
                                <span class="error-message">{error_text(&e)}</span>
                            })
                        }
                    </div>

                    <div class="form-group">
                        <label for="actual_amount">{"Actual amount"}</label>
                        <input
                            type="number"
                            step="0.01"
                            id="actual_amount"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().actual_amount.map(|a| a.to_string()).unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.actual_amount = value.parse::<f64>().ok();
                                    });
                                }
                            }
                            placeholder="0.00"
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.errors.get().actual_amount.map(|e| view! {
                                <span class="error-message">{error_text(&e)}</span>
                            })
                        }
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="brand">{"Brand"}</label>
                        <input
                            type="text"
                            id="brand"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().brand
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.brand = event_target_value(&ev));
                                }
                            }
                            placeholder="Manufacturer"
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.errors.get().brand.map(|e| view! {
                                <span class="error-message">{error_text(&e)}</span>
                            })
                        }
                    </div>

                    <div class="form-group">
                        <label for="type_color">{"Color type"}</label>
                        <input
                            type="text"
                            id="type_color"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().type_color
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.type_color = event_target_value(&ev));
                                }
                            }
                            placeholder="Enamel, matte, ..."
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.errors.get().type_color.map(|e| view! {
                                <span class="error-message">{error_text(&e)}</span>
                            })
                        }
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="article">{"Article"}</label>
                        <input
                            type="text"
                            id="article"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().article
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.article = event_target_value(&ev));
                                }
                            }
                            placeholder="Catalog article"
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.errors.get().article.map(|e| view! {
                                <span class="error-message">{error_text(&e)}</span>
                            })
                        }
                    </div>

                    <div class="form-group">
                        <label for="code_color">{"Color code"}</label>
                        <input
                            type="text"
                            id="code_color"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().code_color
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.code_color = event_target_value(&ev));
                                }
                            }
                            placeholder="#FF0000"
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.errors.get().code_color.map(|e| view! {
                                <span class="error-message">{error_text(&e)}</span>
                            })
                        }
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary submit-button"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.submit(on_saved.clone())
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        if vm.is_edit_mode() { "Save" } else { "Create" }
                    }
                </button>
                <button
                    class="btn btn-secondary cancel-button"
                    on:click=on_cancel
                >
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
