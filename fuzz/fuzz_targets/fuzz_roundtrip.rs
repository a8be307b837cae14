#![no_main]

use libfuzzer_sys::fuzz_target;

// Any catalog that parses must still parse after normalize → serialize.
fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let Ok(catalog) = product_page::parse(&text) else {
        return;
    };

    let normal = product_page::normalize(catalog);
    let Ok(yaml) = product_page::serialize(&normal) else {
        return;
    };

    if let Err(e) = product_page::parse(&yaml) {
        panic!("emitted catalog YAML does not parse back ({e}):\n{yaml}");
    }
});
