use crate::types::*;

/// Normalize a validated catalog into its canonical form.
///
/// Text fields are trimmed, colours lowercased, and an absent `details` list
/// becomes an empty one.
///
/// This is idempotent: `normalize(normalize(c)) == normalize(c)`.
pub fn normalize(mut catalog: Catalog) -> Catalog {
    let product = &mut catalog.product;

    trim_in_place(&mut product.name);
    trim_in_place(&mut product.brand);

    // details → []
    let details = product.details.get_or_insert_with(Vec::new);
    for detail in details.iter_mut() {
        trim_in_place(detail);
    }

    for variant in product.variants.iter_mut() {
        trim_in_place(&mut variant.image);
        let color = variant.color.trim().to_lowercase();
        variant.color = color;
    }

    catalog
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}
