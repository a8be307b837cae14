use product_page::events::{ADD_TO_CART, EVENT_REGISTRY, REVIEW_SUBMITTED, lookup_event};
use product_page::{Event, Review};
use serde_json::json;

#[test]
fn add_to_cart_wire_shape() {
    let event = Event::AddToCart(2234);
    assert_eq!(event.name(), "add-to-cart");
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({"event": "add-to-cart", "payload": 2234})
    );
}

#[test]
fn review_submitted_wire_shape() {
    let event = Event::ReviewSubmitted(Review {
        name: "Ann".to_string(),
        review: "Great".to_string(),
        rating: 4,
    });
    assert_eq!(event.name(), "review-submitted");
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({
            "event": "review-submitted",
            "payload": {"name": "Ann", "review": "Great", "rating": 4}
        })
    );
}

#[test]
fn events_decode_from_wire() {
    let event: Event =
        serde_json::from_value(json!({"event": "add-to-cart", "payload": 7})).unwrap();
    assert_eq!(event, Event::AddToCart(7));
}

#[test]
fn registry_names_both_contracts() {
    assert_eq!(EVENT_REGISTRY.len(), 2);
    let cart = lookup_event(ADD_TO_CART).expect("registered");
    assert_eq!((cart.emitter, cart.listener), ("product", "app"));
    let review = lookup_event(REVIEW_SUBMITTED).expect("registered");
    assert_eq!((review.emitter, review.listener), ("review_form", "product"));
    assert!(lookup_event("remove-from-cart").is_none());
}
