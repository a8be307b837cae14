//! Rendered view model of the product panel and its plain-text form.

use serde::Serialize;
use std::fmt::Write;

use crate::enums::{IndicatorDot, StockStatus};
use crate::primitives;
use crate::product::ProductDisplay;
use crate::review::RATING_OPTIONS;
use crate::types::{Review, VariantId};

pub const NO_REVIEWS: &str = "There are no reviews yet.";
pub const DISABLED_BUTTON_CLASS: &str = "disabledButton";

/// One colour swatch of the variant picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub key: VariantId,
    pub index: usize,
    pub background_color: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartButton {
    pub label: &'static str,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub name: String,
    pub review: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    pub rating_options: Vec<u8>,
    pub errors: Vec<String>,
}

/// Everything the product panel shows, derived from current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub title: String,
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub dot: IndicatorDot,
    pub stock: StockStatus,
    pub shipping: String,
    pub details: Vec<String>,
    pub swatches: Vec<Swatch>,
    pub button: CartButton,
    pub reviews: Vec<Review>,
    pub form: FormView,
}

impl PanelView {
    pub fn of(display: &ProductDisplay) -> Self {
        let product = display.product();
        let level = display.stock_level();
        let disabled = display.cart_disabled();

        let swatches = product
            .variants
            .iter()
            .enumerate()
            .map(|(index, v)| Swatch {
                key: v.id,
                index,
                background_color: v.color.clone(),
                selected: index == display.selected(),
            })
            .collect();

        let form = display.form();

        PanelView {
            title: display.title(),
            product: product.name.clone(),
            image: display.displayed_image().map(str::to_string),
            dot: primitives::indicator_dot(level),
            stock: primitives::stock_status(level),
            shipping: display.shipping().to_string(),
            details: product.details().to_vec(),
            swatches,
            button: CartButton {
                label: "Add to Cart",
                disabled,
                class: disabled.then_some(DISABLED_BUTTON_CLASS),
            },
            reviews: display.reviews().to_vec(),
            form: FormView {
                name: form.name().to_string(),
                review: form.review().to_string(),
                rating: form.rating(),
                rating_options: RATING_OPTIONS.to_vec(),
                errors: form.errors().to_vec(),
            },
        }
    }

    /// Plain-text rendering of the panel.
    pub fn render_text(&self, cart: &[VariantId]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out, cart);
        out
    }

    fn write_text(&self, out: &mut String, cart: &[VariantId]) -> std::fmt::Result {
        writeln!(out, "{}", self.title)?;
        if let Some(image) = &self.image {
            writeln!(out, "  image: {}", image)?;
        }
        let dot = match self.dot {
            IndicatorDot::Green => "●",
            IndicatorDot::Red => "○",
        };
        writeln!(out, "  {} {}", dot, self.stock)?;
        writeln!(out, "  Shipping: {}", self.shipping)?;
        for detail in &self.details {
            writeln!(out, "  - {}", detail)?;
        }
        let swatches: Vec<String> = self
            .swatches
            .iter()
            .map(|s| {
                if s.selected {
                    format!("[{}]", s.background_color)
                } else {
                    s.background_color.clone()
                }
            })
            .collect();
        writeln!(out, "  colors: {}", swatches.join(" "))?;
        let state = if self.button.disabled { " (disabled)" } else { "" };
        writeln!(out, "  [{}]{}", self.button.label, state)?;
        writeln!(out, "  Cart({})", cart.len())?;

        writeln!(out, "Reviews")?;
        if self.reviews.is_empty() {
            writeln!(out, "  {}", NO_REVIEWS)?;
        }
        for r in &self.reviews {
            writeln!(out, "  {} ({}/5): {}", r.name, r.rating, r.review)?;
        }
        if !self.form.errors.is_empty() {
            writeln!(out, "Please correct the following error(s):")?;
            for e in &self.form.errors {
                writeln!(out, "  - {}", e)?;
            }
        }
        Ok(())
    }
}
