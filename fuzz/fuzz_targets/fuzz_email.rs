#![no_main]

use libfuzzer_sys::fuzz_target;

use fibtext_text::{extract_emails, is_valid_email};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Every extracted address is itself valid
    for email in extract_emails(text) {
        assert!(is_valid_email(&email), "{email:?}");
    }

    // A valid address extracts to exactly itself
    if is_valid_email(text) {
        assert_eq!(extract_emails(text), [text]);
    }
});
