//! Language switcher: resolve, apply and persist the display language.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{Result, SiteError};
use crate::store::PreferenceStore;

/// Display languages supported by the page.
///
/// Chinese is the primary language: the page's base markup is Chinese, and the
/// other two are enabled by a marker class on `<body>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Zh,
    En,
    Jp,
}

impl Language {
    /// All languages, primary first (the order of the switcher buttons).
    pub const ALL: [Language; 3] = [Language::Zh, Language::En, Language::Jp];

    pub const PRIMARY: Language = Language::Zh;

    /// Code stored in preferences and carried by `data-language`.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Jp => "jp",
        }
    }

    /// Value for `<html lang>`.
    pub fn html_lang(&self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::En => "en",
            Language::Jp => "ja",
        }
    }

    /// Body class marking this language. Only non-primary markers are ever set.
    pub fn marker_class(&self) -> &'static str {
        match self {
            Language::Zh => "lang-zh",
            Language::En => "lang-en",
            Language::Jp => "lang-jp",
        }
    }

    /// Label shown on the switcher button.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "EN",
            Language::Jp => "日本語",
        }
    }

    pub fn is_primary(&self) -> bool {
        *self == Self::PRIMARY
    }

    /// Map a browser locale tag (`navigator.language`) to a page language.
    ///
    /// Matches case-insensitively on the tag prefix; anything unrecognized
    /// falls back to the primary language.
    pub fn detect(locale_tag: &str) -> Language {
        let tag = locale_tag.trim().to_lowercase();
        if tag.starts_with("ja") {
            Language::Jp
        } else if tag.starts_with("en") {
            Language::En
        } else if tag.starts_with("zh") {
            Language::Zh
        } else {
            Self::PRIMARY
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| SiteError::UnknownLanguage(s.to_string()))
    }
}

/// Document presentation state touched by a language change.
pub trait LanguageDocument {
    /// Remove the active marker from every language button.
    fn clear_active_buttons(&mut self);
    /// Mark the button for `lang` active. Fails when the page has no such button.
    fn mark_active_button(&mut self, lang: Language) -> Result<()>;
    fn remove_body_class(&mut self, class: &str);
    fn add_body_class(&mut self, class: &str);
    fn set_document_lang(&mut self, tag: &str);
}

/// Owns the language preference for one page.
pub struct LanguageSelector<S, D> {
    store: S,
    document: D,
    storage_key: String,
    current: Option<Language>,
}

impl<S: PreferenceStore, D: LanguageDocument> LanguageSelector<S, D> {
    pub fn new(store: S, document: D, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            document,
            storage_key: storage_key.into(),
            current: None,
        }
    }

    /// Resolve the initial language and apply it.
    ///
    /// Priority: stored preference, then the browser locale, then the primary
    /// language.
    pub fn initialize(&mut self, browser_locale: Option<&str>) -> Language {
        let lang = match self.stored() {
            Some(lang) => {
                debug!(%lang, "using stored language preference");
                lang
            }
            None => {
                let lang = Language::detect(browser_locale.unwrap_or_default());
                debug!(%lang, locale = ?browser_locale, "detected language from browser");
                lang
            }
        };
        self.apply(lang);
        lang
    }

    /// Apply `lang` to the document and persist it. Idempotent.
    pub fn apply(&mut self, lang: Language) {
        self.document.clear_active_buttons();
        if let Err(err) = self.document.mark_active_button(lang) {
            debug!(%lang, %err, "no switcher button for language");
        }

        for marker in Language::ALL {
            self.document.remove_body_class(marker.marker_class());
        }
        if !lang.is_primary() {
            self.document.add_body_class(lang.marker_class());
        }

        self.document.set_document_lang(lang.html_lang());

        if let Err(err) = self.store.save(&self.storage_key, lang.code()) {
            warn!(%lang, %err, "could not persist language preference");
        }
        self.current = Some(lang);
    }

    /// Apply a raw code, as read from a button's `data-language`.
    pub fn apply_code(&mut self, code: &str) -> Result<Language> {
        let lang = code.parse()?;
        self.apply(lang);
        Ok(lang)
    }

    pub fn current(&self) -> Option<Language> {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    fn stored(&self) -> Option<Language> {
        match self.store.load(&self.storage_key) {
            Ok(Some(code)) => match code.parse() {
                Ok(lang) => Some(lang),
                Err(err) => {
                    warn!(%err, "ignoring stored language preference");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(%err, "could not read language preference");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::collections::BTreeSet;

    const KEY: &str = "preferredLang";

    #[derive(Debug, Default, Clone, PartialEq)]
    struct FakeDocument {
        buttons: Vec<Language>,
        active: BTreeSet<&'static str>,
        body: BTreeSet<String>,
        lang: String,
    }

    impl FakeDocument {
        fn with_all_buttons() -> Self {
            Self {
                buttons: Language::ALL.to_vec(),
                ..Default::default()
            }
        }
    }

    impl LanguageDocument for FakeDocument {
        fn clear_active_buttons(&mut self) {
            self.active.clear();
        }

        fn mark_active_button(&mut self, lang: Language) -> Result<()> {
            if !self.buttons.contains(&lang) {
                return Err(SiteError::missing(lang.code()));
            }
            self.active.insert(lang.code());
            Ok(())
        }

        fn remove_body_class(&mut self, class: &str) {
            self.body.remove(class);
        }

        fn add_body_class(&mut self, class: &str) {
            self.body.insert(class.to_string());
        }

        fn set_document_lang(&mut self, tag: &str) {
            self.lang = tag.to_string();
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>> {
            Err(SiteError::Storage("disabled".into()))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(SiteError::Storage("disabled".into()))
        }
    }

    fn selector(store: MemoryStore) -> LanguageSelector<MemoryStore, FakeDocument> {
        LanguageSelector::new(store, FakeDocument::with_all_buttons(), KEY)
    }

    #[test]
    fn detect_matches_prefixes_case_insensitively() {
        assert_eq!(Language::detect("ja-JP"), Language::Jp);
        assert_eq!(Language::detect("EN-us"), Language::En);
        assert_eq!(Language::detect("zh-TW"), Language::Zh);
        assert_eq!(Language::detect("fr-FR"), Language::Zh);
        assert_eq!(Language::detect(""), Language::Zh);
    }

    #[test]
    fn stored_codes_parse_back() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>().unwrap(), lang);
            assert_eq!(lang.to_string(), lang.code());
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!("jp".parse::<Language>().unwrap(), Language::Jp);
        assert!(matches!(
            "ja".parse::<Language>(),
            Err(SiteError::UnknownLanguage(code)) if code == "ja"
        ));
    }

    #[test]
    fn apply_sets_exactly_one_marker() {
        let mut sel = selector(MemoryStore::new());
        sel.apply(Language::En);
        sel.apply(Language::Jp);

        let doc = sel.document();
        assert_eq!(doc.body, BTreeSet::from(["lang-jp".to_string()]));
        assert_eq!(doc.active, BTreeSet::from(["jp"]));
        assert_eq!(doc.lang, "ja");
        assert_eq!(sel.store().get(KEY), Some("jp"));
    }

    #[test]
    fn primary_language_clears_markers() {
        let mut sel = selector(MemoryStore::new());
        sel.apply(Language::En);
        sel.apply(Language::Zh);

        assert!(sel.document().body.is_empty());
        assert_eq!(sel.document().lang, "zh-CN");
    }

    #[test]
    fn missing_button_is_skipped() {
        let doc = FakeDocument {
            buttons: vec![Language::Zh],
            ..Default::default()
        };
        let mut sel = LanguageSelector::new(MemoryStore::new(), doc, KEY);
        sel.apply(Language::En);

        assert!(sel.document().active.is_empty());
        assert_eq!(sel.document().lang, "en");
        assert_eq!(sel.current(), Some(Language::En));
    }

    #[test]
    fn stored_preference_wins_over_browser() {
        let mut sel = selector(MemoryStore::with_value(KEY, "en"));
        assert_eq!(sel.initialize(Some("ja-JP")), Language::En);
    }

    #[test]
    fn broken_storage_falls_back_to_browser_locale() {
        let mut sel = LanguageSelector::new(BrokenStore, FakeDocument::with_all_buttons(), KEY);
        assert_eq!(sel.initialize(Some("ja")), Language::Jp);
        assert_eq!(sel.document().lang, "ja");
    }

    #[test]
    fn apply_code_leaves_state_on_unknown_code() {
        let mut sel = selector(MemoryStore::new());
        sel.apply(Language::En);
        assert!(sel.apply_code("de").is_err());
        assert_eq!(sel.current(), Some(Language::En));
        assert_eq!(sel.store().get(KEY), Some("en"));
    }
}
