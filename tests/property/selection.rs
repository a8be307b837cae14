use product_page::{ProductDisplay, Product, Variant};
use proptest::prelude::*;
use std::collections::HashMap;

fn arb_variant() -> impl Strategy<Value = Variant> {
    (any::<u64>(), "[a-z]{3,8}", "[a-z]{1,8}\\.jpg", -5i64..50)
        .prop_map(|(id, color, image, quantity)| Variant::new(id, &color, &image, quantity))
}

fn arb_product() -> impl Strategy<Value = Product> {
    (
        "[A-Z][a-z]{1,8}",
        "[A-Z][a-z]{1,8}",
        prop::collection::vec(arb_variant(), 1..6),
    )
        .prop_map(|(name, brand, variants)| Product {
            name,
            brand,
            details: None,
            variants,
            extensions: HashMap::new(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Selecting i then reading yields variants[i]'s image and quantity
    #[test]
    fn selection_drives_derived_values(
        (product, index) in arb_product().prop_flat_map(|p| {
            let len = p.variants.len();
            (Just(p), 0..len)
        }),
        premium in any::<bool>(),
    ) {
        let mut display = ProductDisplay::new(product.clone(), premium);
        prop_assert!(display.select_variant(index).is_ok());
        prop_assert_eq!(display.displayed_image(), Some(product.variants[index].image.as_str()));
        prop_assert_eq!(display.stock_level(), product.variants[index].quantity);

        let derived = display.computed().expect("selection is in range");
        prop_assert_eq!(derived.title, format!("{} {}", product.brand, product.name));
        prop_assert_eq!(derived.stock_level, product.variants[index].quantity);
    }

    // Out-of-range selection never moves the current selection
    #[test]
    fn out_of_range_keeps_selection(product in arb_product(), extra in 0usize..10) {
        let len = product.variants.len();
        let mut display = ProductDisplay::new(product, false);
        display.select_variant(len - 1).expect("last index is in range");
        prop_assert!(display.select_variant(len + extra).is_err());
        prop_assert_eq!(display.selected(), len - 1);
    }
}
