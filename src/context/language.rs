use yew::prelude::*;

use crate::utils::constants::LANGUAGE_STORAGE_KEY;
use crate::utils::i18n;
use crate::utils::storage::{load_raw_from_storage, save_raw_to_storage};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Language {
    #[default]
    English,
    Marathi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Marathi];

    /// Tag persisted in localStorage
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Marathi => "mr",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "en" => Some(Language::English),
            "mr" => Some(Language::Marathi),
            _ => None,
        }
    }

    /// Label on the header switch
    pub fn switch_label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Marathi => "मर",
        }
    }
}

#[derive(Clone)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl PartialEq for LanguageContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
    }
}

impl LanguageContext {
    pub fn t(&self, key: &str) -> String {
        i18n::t(key, &self.language)
    }

    pub fn set(&self, language: Language) {
        self.set_language.emit(language);
    }

    /// Context used when a component renders outside the provider
    fn detached() -> Self {
        Self {
            language: Language::default(),
            set_language: Callback::from(|language: Language| {
                log::warn!("⚠️ [I18N] No LanguageProvider, ignoring switch to {}", language.as_str());
            }),
        }
    }
}

/// Stored language tag, English when absent or unreadable
pub fn stored_language() -> Language {
    load_raw_from_storage(LANGUAGE_STORAGE_KEY)
        .and_then(|tag| Language::from_tag(&tag))
        .unwrap_or_default()
}

pub fn persist_language(language: &Language) {
    if let Err(e) = save_raw_to_storage(LANGUAGE_STORAGE_KEY, language.as_str()) {
        log::warn!("⚠️ [I18N] {}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(stored_language);

    {
        use_effect_with(*language, move |lang| {
            persist_language(lang);
            log::info!("🌐 [I18N] Language: {}", lang.as_str());
            || ()
        });
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| language.set(next))
    };

    let context = LanguageContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_else(LanguageContext::detached)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.as_str()), Some(language));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag("EN"), None);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn context_translates_with_its_language() {
        let ctx = LanguageContext {
            language: Language::Marathi,
            set_language: Callback::from(|_| ()),
        };
        assert_eq!(ctx.t("contact"), "संपर्क");
        assert_eq!(ctx.t("missingKey"), "missingKey");
    }
}
