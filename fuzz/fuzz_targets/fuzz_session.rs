#![no_main]

use libfuzzer_sys::fuzz_target;
use product_page::{App, Catalog};

// Arbitrary scripts against the built-in catalog must never panic, and the
// view must stay consistent with the selection.
fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let Ok(script) = product_page::parse_script(&s) else {
        return;
    };

    let mut app = App::new(Catalog::sample().product, data.first().is_some_and(|b| b & 1 == 1));
    app.run(script);

    let view = app.view();
    let selected = app.product().selected();
    assert!(view.swatches[selected].selected);
    assert_eq!(view.button.disabled, app.product().stock_level() <= 0);
});
