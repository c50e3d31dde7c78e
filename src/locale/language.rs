use std::borrow::Cow;

use indexmap::IndexMap;
use tracing::debug;

use super::en;
use super::locale::{DateOrdinalFn, Locale};

/// Post-processes a resolved translation before placeholder substitution.
pub type TranslationAdapter = Box<dyn Fn(String, &Locale) -> String>;

/// Post-processes the full translations map of a locale.
pub type TranslationsAdapter =
    Box<dyn Fn(IndexMap<String, String>, &Locale) -> IndexMap<String, String>>;

/// Post-processes the locale resolved for a lookup.
pub type LocaleAdapter = Box<dyn Fn(Locale) -> Locale>;

/// Listener notified after the current locale changes.
pub type LocaleChangedListener = Box<dyn FnMut(&Locale)>;

/// Prompt translation service with a three-level fallback chain.
///
/// Lookups resolve against an explicitly passed locale, else the current
/// locale, else the default locale; a prompt missing everywhere degrades to
/// the prompt key itself. Translation never fails, so rendering code can call
/// it unconditionally.
pub struct Language {
    current: Option<Locale>,
    default_locale: Locale,
    translation_adapters: Vec<TranslationAdapter>,
    translations_adapters: Vec<TranslationsAdapter>,
    locale_adapters: Vec<LocaleAdapter>,
    locale_changed: Vec<LocaleChangedListener>,
}

impl std::fmt::Debug for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Language")
            .field("is_default", &self.is_default())
            .field("default_prompts", &self.default_locale.len())
            .finish()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::new()
    }
}

impl Language {
    /// Language backed by the embedded English default locale.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_locale(en::locale())
    }

    #[must_use]
    pub fn with_default_locale(default_locale: Locale) -> Self {
        Self {
            current: None,
            default_locale,
            translation_adapters: Vec::new(),
            translations_adapters: Vec::new(),
            locale_adapters: Vec::new(),
            locale_changed: Vec::new(),
        }
    }

    /// The locale lookups currently resolve to (current, else default).
    #[must_use]
    pub fn locale(&self) -> &Locale {
        self.current.as_ref().unwrap_or(&self.default_locale)
    }

    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Swaps the current locale and notifies `localechanged` listeners.
    pub fn set_locale(&mut self, locale: Locale) {
        debug!(prompts = locale.len(), "locale changed");
        self.current = Some(locale);
        if let Some(current) = self.current.as_ref() {
            for listener in &mut self.locale_changed {
                listener(current);
            }
        }
    }

    /// Drops the current locale, falling back to the default. Notifies
    /// listeners with the default locale.
    pub fn clear_locale(&mut self) {
        if self.current.take().is_some() {
            let default_locale = self.default_locale.clone();
            for listener in &mut self.locale_changed {
                listener(&default_locale);
            }
        }
    }

    /// `true` while no current locale has been set.
    ///
    /// Tracked as an explicit unset flag rather than comparing locale
    /// contents, so re-setting an equivalent locale still counts as non-default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.current.is_none()
    }

    pub fn on_locale_changed(&mut self, listener: LocaleChangedListener) {
        self.locale_changed.push(listener);
    }

    pub fn add_translation_adapter(&mut self, adapter: TranslationAdapter) {
        self.translation_adapters.push(adapter);
    }

    pub fn add_translations_adapter(&mut self, adapter: TranslationsAdapter) {
        self.translations_adapters.push(adapter);
    }

    pub fn add_locale_adapter(&mut self, adapter: LocaleAdapter) {
        self.locale_adapters.push(adapter);
    }

    /// Resolves the locale for one lookup: explicit, else current, else
    /// default, with locale adapters applied. Resolved per call, never cached.
    #[must_use]
    pub fn resolved_locale<'a>(&'a self, explicit: Option<&'a Locale>) -> Cow<'a, Locale> {
        let base = explicit.unwrap_or_else(|| self.locale());
        if self.locale_adapters.is_empty() {
            return Cow::Borrowed(base);
        }
        let mut adapted = base.clone();
        for adapter in &self.locale_adapters {
            adapted = adapter(adapted);
        }
        Cow::Owned(adapted)
    }

    /// Looks `prompt` up through the fallback chain; empty translations count
    /// as missing.
    fn resolve(&self, prompt: &str, locale: &Locale) -> Option<String> {
        locale
            .get(prompt)
            .filter(|translation| !translation.is_empty())
            .or_else(|| {
                self.default_locale
                    .get(prompt)
                    .filter(|translation| !translation.is_empty())
            })
            .map(str::to_owned)
    }

    /// Translates `prompt`, substituting `%1, %2, ...` placeholders with
    /// `args` in order. Unknown prompts come back untranslated.
    #[must_use]
    pub fn translate(&self, prompt: &str, locale: Option<&Locale>, args: &[&str]) -> String {
        let resolved = self.resolved_locale(locale);
        let mut translation = self
            .resolve(prompt, &resolved)
            .unwrap_or_else(|| prompt.to_owned());
        for adapter in &self.translation_adapters {
            translation = adapter(translation, &resolved);
        }
        substitute(translation, args)
    }

    /// Like [`translate`](Self::translate), but unknown prompts come back as
    /// an empty string. Intended for optional, purely cosmetic strings.
    #[must_use]
    pub fn translate_empty(&self, prompt: &str, locale: Option<&Locale>, args: &[&str]) -> String {
        let resolved = self.resolved_locale(locale);
        match self.resolve(prompt, &resolved) {
            Some(translation) => substitute(translation, args),
            None => String::new(),
        }
    }

    /// Returns the locale's ordinal-day formatter without invoking it.
    #[must_use]
    pub fn translate_func(&self, locale: Option<&Locale>) -> Option<DateOrdinalFn> {
        let resolved = self.resolved_locale(locale);
        resolved
            .date_ordinal()
            .or_else(|| self.default_locale.date_ordinal())
    }

    /// Translates a list of prompts, preserving order.
    #[must_use]
    pub fn translate_all(&self, prompts: &[&str], locale: Option<&Locale>) -> Vec<String> {
        prompts
            .iter()
            .map(|prompt| self.translate(prompt, locale, &[]))
            .collect()
    }

    /// Full translations map for a locale, with translations adapters applied.
    #[must_use]
    pub fn translations(&self, locale: Option<&Locale>) -> IndexMap<String, String> {
        let resolved = self.resolved_locale(locale);
        let mut translations = resolved.translations().clone();
        for adapter in &self.translations_adapters {
            translations = adapter(translations, &resolved);
        }
        translations
    }
}

fn substitute(mut text: String, args: &[&str]) -> String {
    for (index, arg) in args.iter().enumerate() {
        let placeholder = format!("%{}", index + 1);
        text = text.replace(&placeholder, arg);
    }
    text
}
