//! Charset conversion over WHATWG encoding labels.
//!
//! Labels resolve through `encoding_rs`, except the ISO-8859-1 family, which
//! WHATWG folds into windows-1252. Those labels name true Latin-1 here, where
//! every byte maps to the code point of the same value. Both directions are
//! strict: malformed input and unmappable characters are errors, never
//! replacement characters.

use encoding_rs::{mem, Encoding, REPLACEMENT, UTF_16BE, UTF_16LE, UTF_8};

use crate::error::TextError;

/// Labels that name ISO-8859-1 proper.
const LATIN1_LABELS: [&str; 10] = [
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso_8859-1:1987",
    "iso88591",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "csisolatin1",
];

/// A resolved charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// ISO-8859-1: bytes 0x00..=0xFF are U+0000..=U+00FF.
    Latin1,
    /// Any other WHATWG encoding.
    Whatwg(&'static Encoding),
}

impl Charset {
    /// Canonical name, used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Latin1 => "ISO-8859-1",
            Self::Whatwg(encoding) => encoding.name(),
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<String, TextError> {
        match self {
            Self::Latin1 => Ok(mem::decode_latin1(bytes).into_owned()),
            Self::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
                .ok_or_else(|| TextError::Malformed {
                    encoding: encoding.name().to_string(),
                }),
        }
    }

    fn encode(self, text: &str) -> Result<Vec<u8>, TextError> {
        match self {
            Self::Latin1 if mem::is_str_latin1(text) => {
                Ok(mem::encode_latin1_lossy(text).into_owned())
            }
            Self::Latin1 => Err(TextError::Unmappable {
                encoding: self.name().to_string(),
                character: text
                    .chars()
                    .find(|c| u32::from(*c) > 0xFF)
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            }),
            Self::Whatwg(encoding) => encode_with(text, encoding),
        }
    }
}

/// Resolve a charset label.
pub fn resolve(label: &str) -> Result<Charset, TextError> {
    let key = label.trim();
    if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(key)) {
        return Ok(Charset::Latin1);
    }
    match Encoding::for_label(key.as_bytes()) {
        Some(encoding) if encoding != REPLACEMENT => Ok(Charset::Whatwg(encoding)),
        _ => Err(TextError::UnknownEncoding(label.to_string())),
    }
}

/// Decode bytes in the labelled charset.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, TextError> {
    resolve(label)?.decode(bytes)
}

/// Encode text into the labelled charset.
pub fn encode(text: &str, label: &str) -> Result<Vec<u8>, TextError> {
    resolve(label)?.encode(text)
}

/// Re-encode bytes from one charset into another.
pub fn convert(bytes: &[u8], from: &str, to: &str) -> Result<Vec<u8>, TextError> {
    let source = resolve(from)?;
    let target = resolve(to)?;
    tracing::debug!(
        from = source.name(),
        to = target.name(),
        len = bytes.len(),
        "converting charset"
    );

    let text = source.decode(bytes)?;
    target.encode(&text)
}

fn encode_with(text: &str, target: &'static Encoding) -> Result<Vec<u8>, TextError> {
    // encoding_rs decodes UTF-16 but only encodes to UTF-8.
    if target == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if target == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }
    if target == UTF_8 {
        return Ok(text.as_bytes().to_vec());
    }

    let (bytes, _, had_unmappable) = target.encode(text);
    if had_unmappable {
        let character = first_unmappable(text, target).unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(TextError::Unmappable {
            encoding: target.name().to_string(),
            character,
        });
    }
    Ok(bytes.into_owned())
}

fn first_unmappable(text: &str, target: &'static Encoding) -> Option<char> {
    let mut buf = [0u8; 4];
    text.chars()
        .find(|c| target.encode(c.encode_utf8(&mut buf)).2)
}
