use product_page::{App, Catalog};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // The cart is exactly the sequence of appended ids, duplicates included
    #[test]
    fn cart_is_append_only(ids in prop::collection::vec(prop_oneof![Just(2234u64), Just(2235u64), any::<u64>()], 0..20)) {
        let mut app = App::new(Catalog::sample().product, false);
        for id in &ids {
            app.update_cart(*id);
        }
        prop_assert_eq!(app.cart(), ids.as_slice());
    }
}
