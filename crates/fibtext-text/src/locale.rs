//! Process default locale, read from the POSIX environment.

use icu_locale_core::{langid, LanguageIdentifier};

/// Environment variables consulted in priority order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Resolve the process default locale.
///
/// The first non-empty variable among `LC_ALL`, `LC_CTYPE` and `LANG` wins.
/// Unset, `C`, `POSIX` and unparseable values resolve to the root locale `und`.
#[must_use]
pub fn default_langid() -> LanguageIdentifier {
    LOCALE_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .map_or_else(|| langid!("und"), |raw| parse_posix_locale(&raw))
}

/// Convert a POSIX locale name such as `en_US.UTF-8@euro` to a language identifier.
#[must_use]
pub fn parse_posix_locale(raw: &str) -> LanguageIdentifier {
    let tag = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('_', "-");

    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return langid!("und");
    }

    tag.parse().unwrap_or_else(|_| {
        tracing::debug!(locale = raw, "unparseable locale, using root locale");
        langid!("und")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_names() {
        assert_eq!(parse_posix_locale("en_US.UTF-8"), langid!("en-US"));
        assert_eq!(parse_posix_locale("de_DE@euro"), langid!("de-DE"));
        assert_eq!(parse_posix_locale("tr_TR.ISO-8859-9"), langid!("tr-TR"));
        assert_eq!(parse_posix_locale("fr"), langid!("fr"));
    }

    #[test]
    fn root_fallbacks() {
        assert_eq!(parse_posix_locale("C"), langid!("und"));
        assert_eq!(parse_posix_locale("C.UTF-8"), langid!("und"));
        assert_eq!(parse_posix_locale("POSIX"), langid!("und"));
        assert_eq!(parse_posix_locale(""), langid!("und"));
        assert_eq!(parse_posix_locale("not a locale!"), langid!("und"));
    }
}
