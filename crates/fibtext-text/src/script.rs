//! Unicode script lookup and dominant-script detection.

use std::collections::BTreeMap;

use icu_properties::props::Script;
use icu_properties::{CodePointMapData, PropertyNamesLong};

/// Script property of a single code point.
#[must_use]
pub fn script_of(c: char) -> Script {
    CodePointMapData::<Script>::new().get(c)
}

/// Long Unicode name of a script, e.g. `Latin` or `Cyrillic`.
#[must_use]
pub fn script_name(script: Script) -> String {
    PropertyNamesLong::<Script>::new()
        .get(script)
        .unwrap_or("Unknown")
        .to_string()
}

/// Most frequent script among alphanumeric characters.
///
/// `Common` and `Inherited` are not counted. Candidates are scanned in
/// ascending ICU4C script code, so on a tie the lowest code wins (Cyrillic
/// before Latin). Text without any counted character reports `Common`.
#[must_use]
pub fn dominant_script(text: &str) -> Script {
    let mut counts: BTreeMap<u16, (Script, usize)> = BTreeMap::new();
    for script in text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .map(script_of)
        .filter(|s| *s != Script::Common && *s != Script::Inherited)
    {
        counts.entry(script.to_icu4c_value()).or_insert((script, 0)).1 += 1;
    }

    let mut dominant = Script::Common;
    let mut max_count = 0;
    for (script, count) in counts.into_values() {
        if count > max_count {
            max_count = count;
            dominant = script;
        }
    }
    dominant
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_scripts() {
        assert_eq!(script_name(dominant_script("Hello world")), "Latin");
        assert_eq!(script_name(dominant_script("Привет мир")), "Cyrillic");
        assert_eq!(script_name(dominant_script("Καλημέρα")), "Greek");
        assert_eq!(script_name(dominant_script("北京")), "Han");
    }

    #[test]
    fn majority_wins() {
        assert_eq!(dominant_script("Hi Москва"), Script::Cyrillic);
        assert_eq!(dominant_script("Hello да"), Script::Latin);
    }

    #[test]
    fn common_only_reports_common() {
        assert_eq!(script_name(dominant_script("")), "Common");
        assert_eq!(script_name(dominant_script("123 !? 456")), "Common");
    }

    #[test]
    fn tie_goes_to_lowest_script_code() {
        assert_eq!(dominant_script("ab да"), Script::Cyrillic);
        assert_eq!(dominant_script("да ab"), Script::Cyrillic);
        assert_eq!(dominant_script("αβ ab"), Script::Greek);
        assert_eq!(dominant_script("abc да"), Script::Latin);
    }
}
