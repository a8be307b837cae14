use super::common::{app, stocked_socks};
use product_page::app::{App, Interaction, Outcome};
use product_page::review::NAME_REQUIRED;
use product_page::{Review, SubmitOutcome};

#[test]
fn cart_starts_empty() {
    let app = app(true);
    assert!(app.cart().is_empty());
    assert!(app.premium());
}

#[test]
fn update_cart_appends_without_dedup() {
    let mut app = app(false);
    app.update_cart(2234);
    app.update_cart(2235);
    app.update_cart(2234);
    assert_eq!(app.cart(), &[2234, 2235, 2234]);
}

#[test]
fn add_to_cart_twice_in_order() {
    let mut app = App::new(stocked_socks(), false);
    assert_eq!(app.apply(Interaction::AddToCart), Outcome::AddedToCart(2234));
    assert_eq!(app.apply(Interaction::Hover(1)), Outcome::Selected(1));
    assert_eq!(app.apply(Interaction::AddToCart), Outcome::AddedToCart(2235));
    assert_eq!(app.cart(), &[2234, 2235]);
}

#[test]
fn disabled_control_swallows_add_to_cart() {
    let mut app = app(false);
    app.apply(Interaction::Hover(1));
    assert_eq!(app.apply(Interaction::AddToCart), Outcome::CartDisabled);
    assert!(app.cart().is_empty());
}

#[test]
fn direct_add_to_cart_respects_disabled_control() {
    let mut app = app(false);
    app.product_mut().select_variant(1).expect("index in range");
    assert!(app.product().cart_disabled());
    assert_eq!(app.add_to_cart(), None);
    assert!(app.cart().is_empty());
}

#[test]
fn hover_out_of_range_reports_rejection() {
    let mut app = app(false);
    let outcome = app.apply(Interaction::Hover(7));
    assert!(matches!(outcome, Outcome::SelectionRejected(_)));
    assert_eq!(app.product().selected(), 0);
}

#[test]
fn review_flow_through_interactions() {
    let mut app = app(false);
    assert!(app.product().reviews().is_empty());

    let outcomes = app.run(vec![
        Interaction::Review("Cosy".to_string()),
        Interaction::Rating("4".to_string()),
        Interaction::Submit,
    ]);
    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Submitted(SubmitOutcome::Rejected(vec![
            NAME_REQUIRED.to_string()
        ])))
    );
    assert_eq!(app.product().form().review(), "Cosy");

    app.apply(Interaction::Name("Ann".to_string()));
    app.apply(Interaction::Submit);

    let reviews = app.product().reviews();
    assert_eq!(reviews.len(), 1);
    assert_eq!(
        reviews[0],
        Review {
            name: "Ann".to_string(),
            review: "Cosy".to_string(),
            rating: 4,
        }
    );
    assert!(app.cart().is_empty());
}
