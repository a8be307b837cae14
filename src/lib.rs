//! Product catalog page: variant selection, stock status, cart events and a
//! review form.
//!
//! A page is a small component tree. [`App`] owns the cart and the premium
//! flag; [`ProductDisplay`] owns the product, the selected variant and the
//! review list; [`ReviewForm`] owns its input fields. Children report upward
//! by emitting named [`Event`]s into a sink their owner provides, and computed
//! values are re-derived from explicit inputs on every read.
//!
//! Products are described by YAML catalog documents:
//!
//! ```text
//! parse(yaml) → Catalog → validate(catalog) → ValidationResult
//!                       → normalize(catalog) → Catalog → serialize(catalog) → yaml
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use product_page::{App, Interaction};
//!
//! let yaml = r#"
//! catalog: "0.1"
//! product:
//!   name: Socks
//!   brand: Gucci
//!   variants:
//!     - id: 2234
//!       color: green
//!       image: ./assets/vmSocks-green-onWhite.jpg
//!       quantity: 11
//! "#;
//!
//! let loaded = product_page::load(yaml).expect("valid catalog");
//! let mut app = App::new(loaded.catalog.product, true);
//! app.apply(Interaction::AddToCart);
//! assert_eq!(app.cart(), &[2234]);
//! assert_eq!(app.product().shipping(), "Free");
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod enums;
pub mod error;
pub mod events;
pub mod normalize;
pub mod parse;
pub mod primitives;
pub mod product;
pub mod review;
pub mod serialize;
pub mod types;
pub mod validate;
pub mod view;

pub use app::{App, Interaction, Outcome};
pub use config::Config;
pub use enums::*;
pub use error::*;
pub use events::{Event, EventSink};
pub use product::ProductDisplay;
pub use review::{ReviewForm, SubmitOutcome};
pub use types::*;
pub use view::PanelView;

// Re-export entry-point functions at the crate root for convenience.
pub use normalize::normalize;
pub use parse::{parse, parse_script};
pub use serialize::serialize;
pub use validate::validate;

/// Result of the [`load`] convenience entry point.
pub struct LoadResult {
    /// The normalized catalog.
    pub catalog: Catalog,
    /// Non-fatal warnings produced during validation.
    pub warnings: Vec<Diagnostic>,
}

/// Convenience entry point composing parse → validate → normalize.
///
/// Returns the normalized catalog and any warnings on success.
/// Returns all errors (parse or validation) on failure.
///
/// # Errors
///
/// Returns `Err(Vec<PageError>)` if parsing fails or validation finds errors.
pub fn load(input: &str) -> Result<LoadResult, Vec<PageError>> {
    let catalog = parse::parse(input).map_err(|e| vec![PageError::Parse(e)])?;

    let result = validate::validate(&catalog);
    if !result.errors.is_empty() {
        tracing::debug!(message = "catalog.invalid", errors = result.errors.len());
        return Err(result
            .errors
            .into_iter()
            .map(PageError::Validation)
            .collect());
    }

    let normalized = normalize::normalize(catalog);
    tracing::debug!(
        message = "catalog.loaded",
        product = %normalized.product.name,
        variants = normalized.product.variants.len(),
        warnings = result.warnings.len()
    );

    Ok(LoadResult {
        catalog: normalized,
        warnings: result.warnings,
    })
}
