//! Root application state and interaction dispatch.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::SelectionError;
use crate::events::Event;
use crate::product::ProductDisplay;
use crate::review::SubmitOutcome;
use crate::types::{Product, VariantId};
use crate::view::PanelView;

/// A single user interaction with the page.
///
/// In YAML scripts: `- hover: 1`, `- add_to_cart`, `- name: Ann`,
/// `- review: Great`, `- rating: "4"`, `- submit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    Hover(usize),
    AddToCart,
    Name(#[serde(deserialize_with = "text_input")] String),
    Review(#[serde(deserialize_with = "text_input")] String),
    Rating(#[serde(deserialize_with = "text_input")] String),
    Submit,
}

/// Accepts a string or a bare number for a text input field.
fn text_input<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected text input, got {}",
            other
        ))),
    }
}

/// What an interaction did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Selected(usize),
    SelectionRejected(SelectionError),
    AddedToCart(VariantId),
    /// The add-to-cart control was disabled; nothing was emitted.
    CartDisabled,
    FieldUpdated,
    Submitted(SubmitOutcome),
}

/// The root of the component tree.
///
/// Owns the cart and the premium flag, and is the only place the cart is
/// mutated: events emitted by the product display are delivered here.
#[derive(Clone, Debug)]
pub struct App {
    premium: bool,
    cart: Vec<VariantId>,
    product: ProductDisplay,
}

impl App {
    pub fn new(product: Product, premium: bool) -> Self {
        tracing::debug!(message = "app.new", product = %product.name, premium);
        App {
            premium,
            cart: Vec::new(),
            product: ProductDisplay::new(product, premium),
        }
    }

    pub fn premium(&self) -> bool {
        self.premium
    }

    pub fn cart(&self) -> &[VariantId] {
        &self.cart
    }

    pub fn product(&self) -> &ProductDisplay {
        &self.product
    }

    pub fn product_mut(&mut self) -> &mut ProductDisplay {
        &mut self.product
    }

    /// Appends a variant id to the cart. No dedup, no rejection.
    pub fn update_cart(&mut self, id: VariantId) {
        self.cart.push(id);
        tracing::debug!(message = "app.cart", variant = id, size = self.cart.len());
    }

    /// Asks the product display to emit `add-to-cart` and delivers the result.
    ///
    /// Returns `None` and leaves the cart alone when the control is disabled.
    pub fn add_to_cart(&mut self) -> Option<VariantId> {
        let mut outbox: Vec<Event> = Vec::new();
        let id = self.product.add_to_cart(&mut outbox);
        self.deliver(outbox);
        id
    }

    fn deliver(&mut self, outbox: Vec<Event>) {
        for event in outbox {
            match event {
                Event::AddToCart(id) => self.update_cart(id),
                other => {
                    tracing::warn!(message = "app.unhandled_event", event = other.name());
                }
            }
        }
    }

    /// Dispatches one interaction to the component that handles it.
    pub fn apply(&mut self, interaction: Interaction) -> Outcome {
        match interaction {
            Interaction::Hover(index) => match self.product.select_variant(index) {
                Ok(()) => Outcome::Selected(index),
                Err(e) => Outcome::SelectionRejected(e),
            },
            Interaction::AddToCart => match self.add_to_cart() {
                Some(id) => Outcome::AddedToCart(id),
                None => Outcome::CartDisabled,
            },
            Interaction::Name(name) => {
                self.product.form_mut().set_name(name);
                Outcome::FieldUpdated
            }
            Interaction::Review(review) => {
                self.product.form_mut().set_review(review);
                Outcome::FieldUpdated
            }
            Interaction::Rating(input) => {
                self.product.form_mut().set_rating_input(&input);
                Outcome::FieldUpdated
            }
            Interaction::Submit => Outcome::Submitted(self.product.submit_review()),
        }
    }

    /// Applies interactions in order, returning each outcome.
    pub fn run<I>(&mut self, interactions: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = Interaction>,
    {
        interactions.into_iter().map(|i| self.apply(i)).collect()
    }

    pub fn view(&self) -> PanelView {
        PanelView::of(&self.product)
    }

    pub fn render_text(&self) -> String {
        self.view().render_text(&self.cart)
    }
}
