pub mod en;
mod language;
#[allow(clippy::module_inception)]
mod locale;

pub use language::{
    Language, LocaleAdapter, LocaleChangedListener, TranslationAdapter, TranslationsAdapter,
};
pub use locale::{DateOrdinalFn, Locale};
