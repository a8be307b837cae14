#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    if let Ok(catalog) = product_page::parse(&s) {
        let once = product_page::normalize(catalog);
        let twice = product_page::normalize(once.clone());
        assert_eq!(once, twice, "normalize must be idempotent");
    }
});
