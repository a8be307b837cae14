use product_page::review::{NAME_REQUIRED, RATING_REQUIRED, REVIEW_REQUIRED, ReviewForm, SubmitOutcome};
use product_page::Event;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Valid input is accepted with exactly one event carrying the input
    #[test]
    fn valid_input_emits_exact_payload(
        name in "[A-Za-z]{1,12}",
        text in "[A-Za-z ]{1,40}",
        rating in 1i64..=5,
    ) {
        let mut form = ReviewForm::new();
        form.set_name(name.clone());
        form.set_review(text.clone());
        form.set_rating(Some(rating));
        let mut outbox: Vec<Event> = Vec::new();
        let outcome = form.submit(&mut outbox);

        prop_assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        prop_assert_eq!(outbox.len(), 1);
        match &outbox[0] {
            Event::ReviewSubmitted(review) => {
                prop_assert_eq!(&review.name, &name);
                prop_assert_eq!(&review.review, &text);
                prop_assert_eq!(i64::from(review.rating), rating);
            }
            other => prop_assert!(false, "unexpected event {:?}", other),
        }
        prop_assert_eq!(form.name(), "");
        prop_assert!(form.errors().is_empty());
    }

    // Each missing field contributes exactly its own message, in field order
    #[test]
    fn errors_match_missing_fields(
        has_name in any::<bool>(),
        has_review in any::<bool>(),
        has_rating in any::<bool>(),
    ) {
        let mut form = ReviewForm::new();
        if has_name { form.set_name("Ann"); }
        if has_review { form.set_review("ok"); }
        if has_rating { form.set_rating(Some(3)); }

        let mut expected = Vec::new();
        if !has_name { expected.push(NAME_REQUIRED.to_string()); }
        if !has_review { expected.push(REVIEW_REQUIRED.to_string()); }
        if !has_rating { expected.push(RATING_REQUIRED.to_string()); }

        let mut outbox: Vec<Event> = Vec::new();
        form.submit(&mut outbox);
        prop_assert_eq!(form.errors(), expected.as_slice());
        prop_assert_eq!(outbox.is_empty(), !expected.is_empty());
    }
}
