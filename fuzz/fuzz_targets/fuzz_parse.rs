#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(value) = text.parse::<bytenum::BigInt>() {
            // Anything the parser accepts must round-trip through its
            // canonical decimal form.
            let canonical = value.to_decimal();
            let reparsed: bytenum::BigInt = canonical.parse().unwrap();
            assert_eq!(value, reparsed);
            assert_eq!(reparsed.to_decimal(), canonical);
        }
    }
});
