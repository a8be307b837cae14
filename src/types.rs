use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Identifier of a product variant, unique within its product.
pub type VariantId = u64;

// ─── Catalog document ───────────────────────────────────────────────────────

/// The top-level container for a parsed catalog document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub catalog: String,
    pub product: Product,
}

impl Catalog {
    /// The built-in catalog: green and blue socks.
    pub fn sample() -> Self {
        Catalog {
            catalog: crate::validate::CATALOG_VERSION.to_string(),
            product: Product {
                name: "Socks".to_string(),
                brand: "Gucci".to_string(),
                details: Some(vec![
                    "80% cotton".to_string(),
                    "20% polyester".to_string(),
                    "Gender-neutral".to_string(),
                ]),
                variants: vec![
                    Variant::new(2234, "green", "./assets/vmSocks-green-onWhite.jpg", 11),
                    Variant::new(2235, "blue", "./assets/vmSocks-blue-onWhite.jpg", 0),
                ],
                extensions: HashMap::new(),
            },
        }
    }
}

// ─── Product ────────────────────────────────────────────────────────────────

/// Product identity plus its selectable variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    pub variants: Vec<Variant>,
    /// Extension fields (x-* prefixed).
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Product {
    pub fn details(&self) -> &[String] {
        self.details.as_deref().unwrap_or(&[])
    }
}

// ─── Variant ────────────────────────────────────────────────────────────────

/// One selectable configuration (colour, image, stock) of a product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub color: String,
    pub image: String,
    pub quantity: i64,
    /// Extension fields (x-* prefixed).
    #[serde(flatten)]
    pub extensions: HashMap<String, Value>,
}

impl Variant {
    pub fn new(id: VariantId, color: &str, image: &str, quantity: i64) -> Self {
        Variant {
            id,
            color: color.to_string(),
            image: image.to_string(),
            quantity,
            extensions: HashMap::new(),
        }
    }
}

// ─── Review ─────────────────────────────────────────────────────────────────

/// A submitted review. Only constructed by a successful form submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub review: String,
    pub rating: u8,
}

// ─── Derived values ─────────────────────────────────────────────────────────

/// Snapshot of every computed value of the product display.
///
/// Built fresh on each read from the product, the selection and the premium
/// prop; never stored alongside them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DerivedValues {
    pub title: String,
    pub displayed_image: String,
    pub stock_level: i64,
    pub shipping: String,
}
