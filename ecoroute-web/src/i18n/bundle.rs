use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

/// Language used on first load and for missing keys.
pub const DEFAULT_LANG: &str = "ko";
/// `localStorage` key holding the chosen language.
pub const STORAGE_KEY: &str = "ecoroute.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn empty() -> Value {
    Value::Object(serde_json::Map::new())
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let translations = load_translations(lang)?;
    let fallback = load_translations(DEFAULT_LANG).unwrap_or_else(empty);
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(DEFAULT_LANG).unwrap_or_else(empty);
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::read_pref(STORAGE_KEY).unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(
        build_bundle(&saved_lang()).unwrap_or_else(fallback_bundle)
    );
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Set the current language for internationalization
///
/// Unknown codes are ignored. In the browser the choice is written to the
/// `<html lang>` attribute and persisted to localStorage.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported language `{lang}`");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::set_document_lang(lang);
        if let Err(err) = crate::dom::write_pref(STORAGE_KEY, lang) {
            log::debug!("language not persisted: {}", crate::dom::js_error_message(&err));
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_korean() {
        let bundle = fallback_bundle();
        assert_eq!(bundle.lang, "ko");
        assert!(bundle.translations.is_object());
    }

    #[test]
    fn unsupported_language_keeps_current() {
        set_lang("en");
        set_lang("xx");
        assert_eq!(current_lang(), "en");
        set_lang("ko");
        assert_eq!(current_lang(), "ko");
    }
}
