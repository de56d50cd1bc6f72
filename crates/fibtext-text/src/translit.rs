//! Transliterator registry.
//!
//! Ids follow the `Source-Target` convention and are matched case-insensitively.
//! A compound id chains single ids with `;` and applies them left to right,
//! e.g. `Cyrillic-Latin; Latin-ASCII`.

use icu_casemap::CaseMapper;
use icu_locale_core::langid;
use icu_properties::props::Script;
use unicode_normalization::UnicodeNormalization;

use crate::error::TextError;
use crate::script::script_of;

/// Source scripts accepted by `<Script>-Latin`.
const ROMANIZABLE: [(&str, Script); 12] = [
    ("cyrillic", Script::Cyrillic),
    ("greek", Script::Greek),
    ("armenian", Script::Armenian),
    ("georgian", Script::Georgian),
    ("arabic", Script::Arabic),
    ("hebrew", Script::Hebrew),
    ("devanagari", Script::Devanagari),
    ("thai", Script::Thai),
    ("hangul", Script::Hangul),
    ("hiragana", Script::Hiragana),
    ("katakana", Script::Katakana),
    ("han", Script::Han),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Null,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
    Lower,
    Upper,
    AnyLatin,
    LatinAscii,
    ScriptLatin(Script),
}

impl Step {
    fn parse(id: &str) -> Option<Self> {
        let key = id.trim().to_ascii_lowercase();
        let step = match key.as_str() {
            "any-null" | "null" => Self::Null,
            "any-nfc" | "nfc" => Self::Nfc,
            "any-nfd" | "nfd" => Self::Nfd,
            "any-nfkc" | "nfkc" => Self::Nfkc,
            "any-nfkd" | "nfkd" => Self::Nfkd,
            "any-lower" | "lower" => Self::Lower,
            "any-upper" | "upper" => Self::Upper,
            "any-latin" => Self::AnyLatin,
            "latin-ascii" => Self::LatinAscii,
            other => {
                let source = other.strip_suffix("-latin")?;
                let (_, script) = ROMANIZABLE.iter().find(|(name, _)| *name == source)?;
                Self::ScriptLatin(*script)
            }
        };
        Some(step)
    }

    fn apply(self, text: &str) -> String {
        match self {
            Self::Null => text.to_string(),
            Self::Nfc => text.nfc().collect(),
            Self::Nfd => text.nfd().collect(),
            Self::Nfkc => text.nfkc().collect(),
            Self::Nfkd => text.nfkd().collect(),
            Self::Lower => {
                String::from(CaseMapper::new().lowercase_to_string(text, &langid!("und")))
            }
            Self::Upper => {
                String::from(CaseMapper::new().uppercase_to_string(text, &langid!("und")))
            }
            Self::AnyLatin => romanize(text, |s| {
                s != Script::Latin && s != Script::Common && s != Script::Inherited
            }),
            Self::LatinAscii => romanize(text, |s| s == Script::Latin),
            Self::ScriptLatin(source) => romanize(text, |s| s == source),
        }
    }
}

/// Replace every character whose script passes `select` by its romanization.
fn romanize(text: &str, select: impl Fn(Script) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match deunicode::deunicode_char(c).filter(|_| !c.is_ascii() && select(script_of(c))) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}

/// A resolved, possibly compound, transliterator.
#[derive(Debug, Clone)]
pub struct Transliterator {
    id: String,
    steps: Vec<Step>,
}

impl Transliterator {
    /// Resolve an id. Unknown and empty ids are rejected.
    pub fn new(id: &str) -> Result<Self, TextError> {
        let steps = id
            .split(';')
            .filter(|part| !part.trim().is_empty())
            .map(|part| {
                Step::parse(part)
                    .ok_or_else(|| TextError::UnknownTransliterator(part.trim().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if steps.is_empty() {
            return Err(TextError::UnknownTransliterator(id.to_string()));
        }

        tracing::debug!(id, steps = steps.len(), "resolved transliterator");
        Ok(Self {
            id: id.trim().to_string(),
            steps,
        })
    }

    /// The id this transliterator was created from.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Apply every step in order.
    #[must_use]
    pub fn transliterate(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |acc, step| step.apply(&acc))
    }
}

/// Canonical spelling of every single id the registry accepts.
#[must_use]
pub fn available_ids() -> Vec<String> {
    let mut ids: Vec<String> = [
        "Any-Null",
        "Any-NFC",
        "Any-NFD",
        "Any-NFKC",
        "Any-NFKD",
        "Any-Lower",
        "Any-Upper",
        "Any-Latin",
        "Latin-ASCII",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    for (name, _) in ROMANIZABLE {
        let mut source = name.to_string();
        source[..1].make_ascii_uppercase();
        ids.push(format!("{source}-Latin"));
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(id: &str, text: &str) -> String {
        Transliterator::new(id).unwrap().transliterate(text)
    }

    #[test]
    fn cyrillic_to_latin() {
        assert_eq!(run("Cyrillic-Latin", "Привет"), "Privet");
    }

    #[test]
    fn script_specific_leaves_other_scripts() {
        assert_eq!(run("Greek-Latin", "ΑΒΓ и"), "ABG и");
    }

    #[test]
    fn any_latin_keeps_latin_accents() {
        assert_eq!(run("Any-Latin", "café Москва"), "café Moskva");
    }

    #[test]
    fn latin_ascii_strips_accents() {
        assert_eq!(run("Latin-ASCII", "Crème brûlée"), "Creme brulee");
    }

    #[test]
    fn compound_ids_chain() {
        assert_eq!(run("Any-Latin; Latin-ASCII", "café Москва"), "cafe Moskva");
        assert_eq!(run("Cyrillic-Latin;Any-Upper", "да"), "DA");
    }

    #[test]
    fn ids_are_case_insensitive() {
        assert_eq!(run("cyrillic-latin", "да"), "da");
        assert_eq!(run("ANY-NULL", "x"), "x");
    }

    #[test]
    fn normalization_forms() {
        let decomposed = run("NFD", "é");
        assert_eq!(decomposed.chars().count(), 2);
        assert_eq!(run("Any-NFC", &decomposed), "é");
        assert_eq!(run("NFKC", "ﬁ"), "fi");
    }

    #[test]
    fn unknown_ids_fail() {
        assert_eq!(
            Transliterator::new("Latin-Klingon").unwrap_err(),
            TextError::UnknownTransliterator("Latin-Klingon".into())
        );
        assert!(Transliterator::new("").is_err());
        assert!(Transliterator::new(" ; ").is_err());
        assert_eq!(
            Transliterator::new("NFC; Bogus").unwrap_err(),
            TextError::UnknownTransliterator("Bogus".into())
        );
    }

    #[test]
    fn every_listed_id_resolves() {
        for id in available_ids() {
            assert!(Transliterator::new(&id).is_ok(), "{id}");
        }
        assert!(available_ids().contains(&"Cyrillic-Latin".to_string()));
    }
}
