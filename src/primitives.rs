//! Pure derivations behind the product display's computed values.
//!
//! Every function takes its dependencies as explicit parameters, so a value is
//! recomputed from current state on each read and cannot go stale.

use crate::enums::{IndicatorDot, Shipping, StockStatus};
use crate::types::{DerivedValues, Product, Variant};

/// Stock level above which a variant is reported as plainly in stock.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// `brand + " " + name`.
pub fn title(product: &Product) -> String {
    format!("{} {}", product.brand, product.name)
}

/// Image of the selected variant, or `None` when the index is out of range.
pub fn displayed_image(variants: &[Variant], selected: usize) -> Option<&str> {
    variants.get(selected).map(|v| v.image.as_str())
}

/// Quantity of the selected variant, or `None` when the index is out of range.
pub fn stock_level(variants: &[Variant], selected: usize) -> Option<i64> {
    variants.get(selected).map(|v| v.quantity)
}

/// Maps a stock level onto its status.
///
/// `> 10` is in stock, `1..=10` is almost sold out, anything else is out of
/// stock (negative quantities included).
pub fn stock_status(stock_level: i64) -> StockStatus {
    if stock_level > LOW_STOCK_THRESHOLD {
        StockStatus::InStock
    } else if stock_level > 0 {
        StockStatus::AlmostSoldOut
    } else {
        StockStatus::OutOfStock
    }
}

pub fn stock_label(stock_level: i64) -> &'static str {
    stock_status(stock_level).label()
}

pub fn indicator_dot(stock_level: i64) -> IndicatorDot {
    if stock_level > 0 {
        IndicatorDot::Green
    } else {
        IndicatorDot::Red
    }
}

/// Whether the add-to-cart control is disabled for this stock level.
pub fn cart_disabled(stock_level: i64) -> bool {
    stock_level <= 0
}

pub fn shipping(premium: bool) -> Shipping {
    if premium { Shipping::Free } else { Shipping::Flat }
}

/// `"Free"` for premium members, the flat fee otherwise.
pub fn shipping_cost(premium: bool) -> &'static str {
    shipping(premium).as_str()
}

/// Assembles every derived value for the given selection.
///
/// Returns `None` when `selected` does not name a variant.
pub fn derived_values(product: &Product, selected: usize, premium: bool) -> Option<DerivedValues> {
    let variant = product.variants.get(selected)?;
    Some(DerivedValues {
        title: title(product),
        displayed_image: variant.image.clone(),
        stock_level: variant.quantity,
        shipping: shipping_cost(premium).to_string(),
    })
}
