use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Numeric product identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id '{}': {}", s, e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Paint catalog entry as served by the backend. The client only ever holds
/// a transient copy; `id` and both timestamps are owned by the server side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    /// Display name of the paint
    pub name: String,

    /// Nominal stock quantity
    pub amount: f64,

    /// Quantity actually on hand, never above `amount` for valid records
    #[serde(rename = "actualAmount")]
    pub actual_amount: f64,

    pub brand: String,

    /// Paint finish / color type (enamel, matte, ...)
    #[serde(rename = "typeColor")]
    pub type_color: String,

    pub article: String,

    /// HEX color code, "#" followed by six hex digits
    #[serde(rename = "codeColor")]
    pub code_color: String,

    /// ISO-8601 creation timestamp, absent for records the backend never stamped
    #[serde(rename = "creationDate")]
    pub creation_date: Option<String>,

    /// ISO-8601 last-update timestamp
    #[serde(rename = "updateDate")]
    pub update_date: Option<String>,
}

impl Product {
    /// Project the entity into the editable form payload.
    pub fn to_form(&self) -> ProductForm {
        ProductForm {
            name: self.name.clone(),
            amount: Some(self.amount),
            actual_amount: Some(self.actual_amount),
            brand: self.brand.clone(),
            type_color: self.type_color.clone(),
            article: self.article.clone(),
            code_color: self.code_color.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload: the editable subset of `Product`. Requests never
/// carry `id` or timestamps — the backend owns those. Amounts stay optional
/// because the form inputs may be empty until submission.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub amount: Option<f64>,
    #[serde(rename = "actualAmount")]
    pub actual_amount: Option<f64>,
    pub brand: String,
    #[serde(rename = "typeColor")]
    pub type_color: String,
    pub article: String,
    #[serde(rename = "codeColor")]
    pub code_color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_string_round_trip() {
        let id = ProductId::new(42);
        assert_eq!(id.as_string(), "42");
        assert_eq!(ProductId::from_string("42"), Ok(id));
    }

    #[test]
    fn product_id_rejects_garbage() {
        assert!(ProductId::from_string("abc").is_err());
        assert!(ProductId::from_string("").is_err());
    }

    #[test]
    fn product_deserializes_wire_shape() {
        let json = r##"{
            "id": 1,
            "name": "Paint 1",
            "amount": 10.5,
            "actualAmount": 8.0,
            "brand": "TAMIYA",
            "typeColor": "ENAMEL",
            "article": "12345",
            "codeColor": "#ff0000",
            "creationDate": "2023-10-01T12:00:00Z",
            "updateDate": "2023-10-05T14:30:00Z"
        }"##;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.actual_amount, 8.0);
        assert_eq!(product.code_color, "#ff0000");
        assert_eq!(product.creation_date.as_deref(), Some("2023-10-01T12:00:00Z"));
    }

    #[test]
    fn missing_dates_deserialize_as_none() {
        let json = r##"{
            "id": 2,
            "name": "Paint 2",
            "amount": 1,
            "actualAmount": 1,
            "brand": "B",
            "typeColor": "MATTE",
            "article": "a",
            "codeColor": "#00ff00"
        }"##;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.creation_date.is_none());
        assert!(product.update_date.is_none());
    }

    #[test]
    fn form_serializes_only_editable_fields() {
        let form = ProductForm {
            name: "Paint 1".into(),
            amount: Some(10.5),
            actual_amount: Some(8.0),
            brand: "TAMIYA".into(),
            type_color: "ENAMEL".into(),
            article: "12345".into(),
            code_color: "#ff0000".into(),
        };
        let value = serde_json::to_value(&form).unwrap();
        let body = value.as_object().unwrap();
        assert_eq!(body.len(), 7);
        for key in ["name", "amount", "actualAmount", "brand", "typeColor", "article", "codeColor"] {
            assert!(body.contains_key(key), "missing key {}", key);
        }
        assert!(!body.contains_key("id"));
        assert!(!body.contains_key("creationDate"));
        assert!(!body.contains_key("updateDate"));
    }

    #[test]
    fn to_form_keeps_editable_fields() {
        let product = Product {
            id: ProductId::new(7),
            name: "Paint 7".into(),
            amount: 3.0,
            actual_amount: 2.0,
            brand: "B".into(),
            type_color: "GLOSS".into(),
            article: "777".into(),
            code_color: "#0000ff".into(),
            creation_date: Some("2023-10-01T12:00:00Z".into()),
            update_date: None,
        };
        let form = product.to_form();
        assert_eq!(form.name, "Paint 7");
        assert_eq!(form.amount, Some(3.0));
        assert_eq!(form.actual_amount, Some(2.0));
        assert_eq!(form.code_color, "#0000ff");
    }
}
