use super::common::SOCKS;
use product_page::{load, normalize, parse, serialize, Catalog};

#[test]
fn sample_catalog_roundtrips() {
    let catalog = normalize(Catalog::sample());
    let yaml = serialize(&catalog).expect("serialize should succeed");
    let reparsed = parse(&yaml).expect("serialized YAML should parse");
    assert_eq!(normalize(reparsed), catalog);
}

#[test]
fn serialized_catalog_leads_with_version() {
    let yaml = serialize(&Catalog::sample()).expect("serialize should succeed");
    let version = yaml.find("catalog:").expect("version key present");
    let product = yaml.find("product:").expect("product key present");
    assert!(version < product, "unexpected YAML:\n{}", yaml);
}

#[test]
fn load_matches_builtin_sample() {
    let loaded = load(SOCKS).ok().expect("sample should load");
    assert!(loaded.warnings.is_empty());
    assert_eq!(loaded.catalog, Catalog::sample());
}
