//! Catalog validation against rules C-001 through C-008.
//!
//! Returns **all** errors and warnings, not just the first. Validation does not
//! modify the catalog.

use crate::error::*;
use crate::types::*;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Catalog format version understood by this crate.
pub const CATALOG_VERSION: &str = "0.1";

// ─── Cached regexes ─────────────────────────────────────────────────────────

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static COLOR_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// Validate a parsed catalog against every rule.
pub fn validate(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    c001_catalog_version(catalog, &mut errors);
    c002_name_non_empty(catalog, &mut errors);
    c003_brand_non_empty(catalog, &mut errors);
    c004_variants_non_empty(catalog, &mut errors);
    c005_unique_variant_ids(catalog, &mut errors);
    c006_quantity_non_negative(catalog, &mut errors);
    c007_variant_color(catalog, &mut errors);
    c008_variant_image(catalog, &mut errors);

    w001_all_out_of_stock(catalog, &mut warnings);
    w002_empty_details(catalog, &mut warnings);

    ValidationResult { errors, warnings }
}

fn error(rule: &str, path: impl Into<String>, message: impl Into<String>) -> ValidationError {
    ValidationError {
        rule: rule.to_string(),
        path: path.into(),
        message: message.into(),
    }
}

// ─── C-001 ──────────────────────────────────────────────────────────────────

fn c001_catalog_version(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    if catalog.catalog != CATALOG_VERSION {
        errors.push(error(
            "C-001",
            "catalog",
            format!(
                "catalog field must be '{}', got '{}'",
                CATALOG_VERSION, catalog.catalog
            ),
        ));
    }
}

// ─── C-002 / C-003 ──────────────────────────────────────────────────────────

fn c002_name_non_empty(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    if catalog.product.name.trim().is_empty() {
        errors.push(error("C-002", "product.name", "product name must not be empty"));
    }
}

fn c003_brand_non_empty(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    if catalog.product.brand.trim().is_empty() {
        errors.push(error("C-003", "product.brand", "brand must not be empty"));
    }
}

// ─── C-004 ──────────────────────────────────────────────────────────────────

fn c004_variants_non_empty(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    if catalog.product.variants.is_empty() {
        errors.push(error(
            "C-004",
            "product.variants",
            "product must have at least one variant",
        ));
    }
}

// ─── C-005 ──────────────────────────────────────────────────────────────────

fn c005_unique_variant_ids(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for (i, variant) in catalog.product.variants.iter().enumerate() {
        if !seen.insert(variant.id) {
            errors.push(error(
                "C-005",
                format!("product.variants[{}].id", i),
                format!("duplicate variant id: {}", variant.id),
            ));
        }
    }
}

// ─── C-006 ──────────────────────────────────────────────────────────────────

fn c006_quantity_non_negative(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    for (i, variant) in catalog.product.variants.iter().enumerate() {
        if variant.quantity < 0 {
            errors.push(error(
                "C-006",
                format!("product.variants[{}].quantity", i),
                format!("quantity must be >= 0, got {}", variant.quantity),
            ));
        }
    }
}

// ─── C-007 ──────────────────────────────────────────────────────────────────

fn c007_variant_color(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    for (i, variant) in catalog.product.variants.iter().enumerate() {
        if !is_css_color(&variant.color) {
            errors.push(error(
                "C-007",
                format!("product.variants[{}].color", i),
                format!(
                    "color must be a CSS keyword or #rgb/#rrggbb, got '{}'",
                    variant.color
                ),
            ));
        }
    }
}

/// Colour keyword or a 3/6-digit hex colour.
///
/// Surrounding whitespace and letter case are ignored, as in CSS; `normalize`
/// produces the canonical lowercase form.
pub fn is_css_color(color: &str) -> bool {
    let color = color.trim();
    COLOR_KEYWORD_RE.is_match(color) || HEX_COLOR_RE.is_match(color)
}

// ─── C-008 ──────────────────────────────────────────────────────────────────

fn c008_variant_image(catalog: &Catalog, errors: &mut Vec<ValidationError>) {
    for (i, variant) in catalog.product.variants.iter().enumerate() {
        if variant.image.trim().is_empty() {
            errors.push(error(
                "C-008",
                format!("product.variants[{}].image", i),
                "image must not be empty",
            ));
        }
    }
}

// ─── Warnings ───────────────────────────────────────────────────────────────

fn w001_all_out_of_stock(catalog: &Catalog, warnings: &mut Vec<Diagnostic>) {
    let variants = &catalog.product.variants;
    if !variants.is_empty() && variants.iter().all(|v| v.quantity <= 0) {
        warnings.push(Diagnostic {
            severity: DiagnosticSeverity::Warning,
            code: "W-001".to_string(),
            path: Some("product.variants".to_string()),
            message: "every variant is out of stock".to_string(),
        });
    }
}

fn w002_empty_details(catalog: &Catalog, warnings: &mut Vec<Diagnostic>) {
    for (i, detail) in catalog.product.details().iter().enumerate() {
        if detail.trim().is_empty() {
            warnings.push(Diagnostic {
                severity: DiagnosticSeverity::Warning,
                code: "W-002".to_string(),
                path: Some(format!("product.details[{}]", i)),
                message: "empty detail entry".to_string(),
            });
        }
    }
}
