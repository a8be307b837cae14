//! Closed enumerations used by the page model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock status derived from the selected variant's quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    AlmostSoldOut,
    OutOfStock,
}

impl StockStatus {
    /// The label shown next to the stock indicator.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::AlmostSoldOut => "Almost sold out",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Colour of the stock indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorDot {
    Green,
    Red,
}

/// Shipping cost shown on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shipping {
    Free,
    Flat,
}

/// Fixed shipping fee for non-premium customers, as displayed.
pub const FLAT_SHIPPING_FEE: &str = "2,99";

impl Shipping {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shipping::Free => "Free",
            Shipping::Flat => FLAT_SHIPPING_FEE,
        }
    }
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of the review form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    #[default]
    Idle,
    Accepted,
    Rejected,
}
