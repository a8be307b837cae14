use clap::Parser;
use product_page::app::Interaction;
use product_page::cli::{Cli, parse_interaction};

#[test]
fn parses_bare_and_keyed_interactions() {
    assert_eq!(parse_interaction("add_to_cart").unwrap(), Interaction::AddToCart);
    assert_eq!(parse_interaction("submit").unwrap(), Interaction::Submit);
    assert_eq!(parse_interaction("hover=1").unwrap(), Interaction::Hover(1));
    assert_eq!(
        parse_interaction("rating=4").unwrap(),
        Interaction::Rating("4".to_string())
    );
    assert_eq!(
        parse_interaction("name=Ann Lee").unwrap(),
        Interaction::Name("Ann Lee".to_string())
    );
}

#[test]
fn rejects_unknown_interaction() {
    assert!(parse_interaction("checkout").is_err());
    assert!(parse_interaction("hover=left").is_err());
}

#[test]
fn cli_flags() {
    let cli = Cli::try_parse_from([
        "product-page",
        "--premium",
        "--do",
        "hover=1",
        "--do",
        "add_to_cart",
        "--json",
    ])
    .expect("flags should parse");
    assert!(cli.premium);
    assert!(cli.json);
    assert_eq!(cli.interactions, vec!["hover=1", "add_to_cart"]);
    assert!(cli.catalog.is_none());
}

#[test]
fn demo_session_against_demo_catalog() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let catalog = std::fs::read_to_string(dir.join("socks.yaml")).expect("demo catalog");
    let script = std::fs::read_to_string(dir.join("session.yaml")).expect("demo script");

    let loaded = product_page::load(&catalog).ok().expect("demo catalog is valid");
    let interactions = product_page::parse_script(&script).expect("demo script parses");

    let mut app = product_page::App::new(loaded.catalog.product, true);
    app.run(interactions);

    // The third add lands on the sold-out blue variant and is swallowed
    assert_eq!(app.cart(), &[2234, 2234]);
    assert_eq!(app.product().reviews().len(), 1);
    assert_eq!(app.product().reviews()[0].rating, 4);
    assert!(app.product().form().errors().is_empty());
}

#[test]
fn demo_config_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/config.yaml");
    let config = product_page::Config::load(&path).expect("demo config");
    assert!(config.premium);
    assert!(config.catalog.is_some());
}

#[test]
fn premium_flags_override_config_both_ways() {
    let from_file = product_page::Config::from_yaml("premium: true\n").expect("config");

    let cli = Cli::try_parse_from(["product-page", "--no-premium"]).expect("flags should parse");
    assert!(!cli.merge(from_file.clone()).premium);

    let cli = Cli::try_parse_from(["product-page"]).expect("flags should parse");
    assert!(cli.merge(from_file.clone()).premium);

    let cli = Cli::try_parse_from(["product-page", "--no-premium", "--premium"])
        .expect("last flag wins");
    assert!(cli.merge(product_page::Config::default()).premium);
}
