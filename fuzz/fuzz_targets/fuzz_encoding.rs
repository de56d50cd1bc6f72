#![no_main]

use libfuzzer_sys::fuzz_target;

use fibtext_text::encoding::{convert, decode, encode};

const LABELS: [&str; 7] = [
    "utf-8",
    "iso-8859-1",
    "utf-16le",
    "utf-16be",
    "windows-1252",
    "shift_jis",
    "koi8-r",
];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, bytes)) = data.split_first() else {
        return;
    };
    let from = LABELS[usize::from(selector) % LABELS.len()];
    let to = LABELS[usize::from(selector / 16) % LABELS.len()];

    // Should not panic
    let Ok(converted) = convert(bytes, from, to) else {
        return;
    };

    // Successful conversions carry the same text
    let original = decode(bytes, from).expect("convert succeeded so decode must");
    assert_eq!(decode(&converted, to).as_deref(), Ok(original.as_str()));
    assert_eq!(encode(&original, to).as_deref(), Ok(converted.as_slice()));
});
