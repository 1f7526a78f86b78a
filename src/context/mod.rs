pub mod language;

pub use language::{use_language, Language, LanguageContext, LanguageProvider};
