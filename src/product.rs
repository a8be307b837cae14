//! The product display component.
//!
//! Holds the product, the current variant selection, the review list and the
//! review form. Computed values are derived on every read through
//! [`crate::primitives`]; nothing derived is stored here.

use crate::enums::StockStatus;
use crate::error::SelectionError;
use crate::events::{Event, EventSink};
use crate::primitives;
use crate::review::{ReviewForm, SubmitOutcome};
use crate::types::{DerivedValues, Product, Review, Variant, VariantId};

#[derive(Clone, Debug)]
pub struct ProductDisplay {
    product: Product,
    premium: bool,
    selected: usize,
    reviews: Vec<Review>,
    form: ReviewForm,
}

impl ProductDisplay {
    /// Creates the display with the first variant selected.
    ///
    /// `premium` is a prop: supplied by the owner and never changed here.
    pub fn new(product: Product, premium: bool) -> Self {
        ProductDisplay {
            product,
            premium,
            selected: 0,
            reviews: Vec::new(),
            form: ReviewForm::new(),
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> Option<&Variant> {
        self.product.variants.get(self.selected)
    }

    /// Selects the variant at `index`.
    ///
    /// An index past the end of the variant list is rejected and the current
    /// selection is kept.
    pub fn select_variant(&mut self, index: usize) -> Result<(), SelectionError> {
        let len = self.product.variants.len();
        if index >= len {
            tracing::warn!(message = "product.select.out_of_range", index, len);
            return Err(SelectionError::OutOfRange { index, len });
        }
        tracing::debug!(message = "product.select", from = self.selected, to = index);
        self.selected = index;
        Ok(())
    }

    // ─── Computed values ────────────────────────────────────────────────────

    pub fn title(&self) -> String {
        primitives::title(&self.product)
    }

    pub fn displayed_image(&self) -> Option<&str> {
        primitives::displayed_image(&self.product.variants, self.selected)
    }

    /// Quantity of the selected variant; a product without variants has none.
    pub fn stock_level(&self) -> i64 {
        primitives::stock_level(&self.product.variants, self.selected).unwrap_or(0)
    }

    pub fn stock_status(&self) -> StockStatus {
        primitives::stock_status(self.stock_level())
    }

    pub fn shipping(&self) -> &'static str {
        primitives::shipping_cost(self.premium)
    }

    pub fn cart_disabled(&self) -> bool {
        primitives::cart_disabled(self.stock_level())
    }

    /// All computed values for the current selection.
    pub fn computed(&self) -> Option<DerivedValues> {
        primitives::derived_values(&self.product, self.selected, self.premium)
    }

    // ─── Events ─────────────────────────────────────────────────────────────

    /// Emits `add-to-cart` with the selected variant's id.
    ///
    /// The cart belongs to the owner; nothing changes here. Returns the id that
    /// was emitted, or `None` when there is no variant to add or the control is
    /// disabled because the selected variant is out of stock.
    pub fn add_to_cart(&self, sink: &mut dyn EventSink) -> Option<VariantId> {
        let id = self.selected_variant()?.id;
        if self.cart_disabled() {
            tracing::debug!(message = "product.add_to_cart.disabled", variant = id);
            return None;
        }
        tracing::debug!(message = "product.add_to_cart", variant = id);
        sink.emit(Event::AddToCart(id));
        Some(id)
    }

    // ─── Reviews ────────────────────────────────────────────────────────────

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }

    /// Submits the review form and stores whatever review it emits.
    pub fn submit_review(&mut self) -> SubmitOutcome {
        let mut outbox: Vec<Event> = Vec::new();
        let outcome = self.form.submit(&mut outbox);
        for event in outbox {
            self.handle(event);
        }
        outcome
    }

    /// Applies an event emitted by a child of this component.
    fn handle(&mut self, event: Event) {
        match event {
            Event::ReviewSubmitted(review) => {
                self.reviews.push(review);
                tracing::debug!(message = "product.review_added", total = self.reviews.len());
            }
            other => {
                tracing::warn!(message = "product.unhandled_event", event = other.name());
            }
        }
    }
}
