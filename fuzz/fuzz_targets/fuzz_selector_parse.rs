#![no_main]

use libfuzzer_sys::fuzz_target;
use shallow_query::Selector;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if input.len() > 256 {
        return;
    }

    // Parsing must never panic; accepted selectors must survive Display.
    match Selector::parse(input) {
        Ok(selector) => {
            let printed = selector.to_string();
            let reparsed = Selector::parse(&printed)
                .unwrap_or_else(|e| panic!("re-parse of '{printed}' failed: {e}"));
            assert_eq!(reparsed, selector, "round trip changed '{input}'");
        }
        Err(err) => {
            assert!(err.is_syntax(), "non-syntax error for '{input}': {err}");
            assert!(err.to_string().contains("invalid"));
        }
    }
});
