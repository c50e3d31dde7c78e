use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Locale-specific ordinal-day suffix formatter (`1` -> `"st"` in English).
pub type DateOrdinalFn = fn(u32) -> &'static str;

/// A named mapping from prompt keys to translated strings, plus the small set
/// of locale functions that cannot be expressed as plain strings.
///
/// Locales are partial: any prompt missing here falls back to the language's
/// default locale, and ultimately to the prompt key itself. The translation
/// map round-trips through JSON as a flat object, so applications can ship
/// translation packs as data files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    #[serde(flatten)]
    translations: IndexMap<String, String>,
    #[serde(skip)]
    date_ordinal: Option<DateOrdinalFn>,
}

impl Locale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a locale from a flat JSON object of prompt/translation pairs.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        serde_json::from_str(json).map_err(|err| SceneError::Locale(err.to_string()))
    }

    pub fn insert(&mut self, prompt: impl Into<String>, translation: impl Into<String>) {
        self.translations.insert(prompt.into(), translation.into());
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>, translation: impl Into<String>) -> Self {
        self.insert(prompt, translation);
        self
    }

    /// Raw lookup; empty translations are reported as present but empty.
    #[must_use]
    pub fn get(&self, prompt: &str) -> Option<&str> {
        self.translations.get(prompt).map(String::as_str)
    }

    #[must_use]
    pub fn translations(&self) -> &IndexMap<String, String> {
        &self.translations
    }

    #[must_use]
    pub fn date_ordinal(&self) -> Option<DateOrdinalFn> {
        self.date_ordinal
    }

    pub fn set_date_ordinal(&mut self, formatter: DateOrdinalFn) {
        self.date_ordinal = Some(formatter);
    }

    #[must_use]
    pub fn with_date_ordinal(mut self, formatter: DateOrdinalFn) -> Self {
        self.set_date_ordinal(formatter);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn json_round_trip_preserves_order_and_content() {
        let locale = Locale::new()
            .with_prompt("Home", "Accueil")
            .with_prompt("Export", "Exporter");

        let json = serde_json::to_string(&locale).expect("serialize");
        let parsed = Locale::from_json_str(&json).expect("parse");
        assert_eq!(parsed, locale);
        assert_eq!(
            parsed.translations().keys().collect::<Vec<_>>(),
            vec!["Home", "Export"]
        );
    }

    #[test]
    fn malformed_json_is_a_locale_error() {
        assert!(Locale::from_json_str("[1, 2]").is_err());
    }
}
