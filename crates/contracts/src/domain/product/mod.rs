pub mod aggregate;
pub mod validation;

pub use aggregate::{Product, ProductForm, ProductId};
pub use validation::{FieldError, FormErrors};
