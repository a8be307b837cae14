use product_page::normalize::normalize;
use product_page::{Catalog, Product, Variant};
use proptest::prelude::*;
use std::collections::HashMap;

fn padded(s: &str, left: usize, right: usize) -> String {
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    let variant = (any::<u64>(), "[A-Za-z]{3,8}", "[a-z]{1,8}\\.jpg", 0i64..50, 0usize..3, 0usize..3)
        .prop_map(|(id, color, image, quantity, l, r)| {
            Variant::new(id, &padded(&color, l, r), &padded(&image, r, l), quantity)
        });
    (
        "[A-Za-z]{1,8}",
        "[A-Za-z]{1,8}",
        prop::option::of(prop::collection::vec("[a-z ]{0,10}", 0..4)),
        prop::collection::vec(variant, 1..4),
        0usize..3,
    )
        .prop_map(|(name, brand, details, variants, pad)| Catalog {
            catalog: "0.1".to_string(),
            product: Product {
                name: padded(&name, pad, 0),
                brand: padded(&brand, 0, pad),
                details,
                variants,
                extensions: HashMap::new(),
            },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn normalize_is_idempotent(catalog in arb_catalog()) {
        let once = normalize(catalog);
        let twice = normalize(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_fields_are_trimmed(catalog in arb_catalog()) {
        let n = normalize(catalog);
        prop_assert_eq!(n.product.name.trim(), n.product.name.as_str());
        prop_assert!(n.product.details.is_some());
        for v in &n.product.variants {
            prop_assert_eq!(v.color.clone(), v.color.trim().to_lowercase());
            prop_assert_eq!(v.image.trim(), v.image.as_str());
        }
    }
}
