/// In-page sections reachable from the navigation bar
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Section {
    #[default]
    Home,
    Menu,
    Specials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::Menu, Section::Specials, Section::Contact];

    /// Anchor id of the section element
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Menu => "menu",
            Section::Specials => "specials",
            Section::Contact => "contact",
        }
    }

    /// The navigation label shares the anchor's translation key
    pub fn label_key(&self) -> &'static str {
        self.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::language::Language;
    use crate::utils::i18n::has_key;

    #[test]
    fn anchors_are_stable() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec!["home", "menu", "specials", "contact"]);
    }

    #[test]
    fn every_section_has_a_label_in_both_languages() {
        for section in Section::ALL {
            for language in Language::ALL {
                assert!(has_key(section.label_key(), &language), "{:?} {:?}", section, language);
            }
        }
    }
}
