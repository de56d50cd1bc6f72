//! Property-based tests for the string facade.

#![cfg(feature = "icu")]

use proptest::prelude::*;

use fibtext_text::{
    backend, convert_encoding, count_words, extract_emails, is_valid_email, BackendKind,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Anything the scanner extracts is a valid address on its own.
    #[test]
    fn extracted_emails_validate(text in "[ a-zA-Z0-9._%+@,;<>-]{0,64}") {
        for email in extract_emails(&text) {
            prop_assert!(is_valid_email(&email), "{:?} from {:?}", email, text);
            prop_assert!(text.contains(&email));
        }
    }

    /// Strings generated from the grammar are accepted and extracted whole.
    #[test]
    fn grammar_strings_are_valid(email in "[a-zA-Z0-9._%+-]{1,12}@[a-zA-Z0-9-]{1,12}\\.[a-zA-Z]{2,6}") {
        prop_assert!(is_valid_email(&email));
        prop_assert_eq!(extract_emails(&email), vec![email.clone()]);
    }

    /// A single-letter top-level domain never validates.
    #[test]
    fn single_letter_tld_rejected(email in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]") {
        prop_assert!(!is_valid_email(&email));
    }

    /// Extraction preserves left-to-right order.
    #[test]
    fn extraction_order(users in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let emails: Vec<String> = users.iter().map(|u| format!("{u}@example.com")).collect();
        let text = emails.join(" and ");
        prop_assert_eq!(extract_emails(&text), emails);
    }

    /// Space-separated ASCII words are counted the same by both backends.
    #[test]
    fn word_count_matches_ascii_backend(words in prop::collection::vec("[a-zA-Z0-9]{1,8}", 0..12)) {
        let text = words.join(" ");
        prop_assert_eq!(count_words(&text), words.len());
        let ascii = backend(BackendKind::Ascii).unwrap();
        prop_assert_eq!(ascii.count_words(&text), words.len());
    }

    /// Every U+0000..=U+00FF string survives UTF-8 -> ISO-8859-1 -> UTF-8.
    #[test]
    fn latin1_round_trip(s in "[\\x00-\\xff]{0,48}") {
        let latin1 = convert_encoding(s.as_bytes(), "UTF-8", "ISO-8859-1").unwrap();
        prop_assert_eq!(latin1.len(), s.chars().count());
        let back = convert_encoding(&latin1, "ISO-8859-1", "UTF-8").unwrap();
        prop_assert_eq!(back, s.as_bytes());
    }

    /// Any Unicode text survives a UTF-16 round trip.
    #[test]
    fn utf16_round_trip(s in any::<String>()) {
        for label in ["UTF-16LE", "UTF-16BE"] {
            let wide = convert_encoding(s.as_bytes(), "UTF-8", label).unwrap();
            let back = convert_encoding(&wide, label, "UTF-8").unwrap();
            prop_assert_eq!(&back, s.as_bytes());
        }
    }
}

#[test]
fn facade_is_safe_to_share_across_threads() {
    let text = "Contact info@example.com or support@example.org. Привет!";
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    (
                        extract_emails(text),
                        count_words(text),
                        fibtext_text::detect_script(text),
                    )
                })
            })
            .collect();
        for handle in handles {
            let (emails, words, _script) = handle.join().unwrap();
            assert_eq!(emails, ["info@example.com", "support@example.org"]);
            assert!(words >= 6);
        }
    });
}
