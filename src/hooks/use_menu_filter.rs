use std::collections::HashSet;

use yew::prelude::*;

use crate::models::menu::{DietClass, MenuCategory, MenuDocument};
use crate::utils::constants::NON_VEG_CATEGORY_KEYWORDS;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DietFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl DietFilter {
    pub const ALL: [DietFilter; 3] = [DietFilter::All, DietFilter::Veg, DietFilter::NonVeg];

    pub fn label_key(&self) -> &'static str {
        match self {
            DietFilter::All => "filterAll",
            DietFilter::Veg => "filterVeg",
            DietFilter::NonVeg => "filterNonVeg",
        }
    }

    pub fn admits(&self, class: DietClass) -> bool {
        match self {
            DietFilter::All => true,
            DietFilter::Veg => class == DietClass::Veg,
            DietFilter::NonVeg => class == DietClass::NonVeg,
        }
    }
}

/// Diet class of a whole category, from keywords in its name.
/// Per-item `vegOrNonVeg` is not consulted.
pub fn classify_category(name: &str) -> DietClass {
    let lower = name.to_lowercase();
    if NON_VEG_CATEGORY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        DietClass::NonVeg
    } else {
        DietClass::Veg
    }
}

fn matches_search(category: &MenuCategory, search_lower: &str) -> bool {
    category.name.to_lowercase().contains(search_lower)
        || category.items.iter().any(|item| item.name.contains_ignore_case(search_lower))
}

/// Categories to show, in document order. Items inside a category are never
/// filtered individually.
pub fn filter_categories<'a>(document: &'a MenuDocument, filter: DietFilter, search: &str) -> Vec<&'a MenuCategory> {
    let search_lower = search.to_lowercase();
    document
        .menu
        .iter()
        .filter(|category| filter.admits(classify_category(&category.name)))
        .filter(|category| search_lower.is_empty() || matches_search(category, &search_lower))
        .collect()
}

/// Open/closed state per category name, all closed by default
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ExpandedCategories(HashSet<String>);

impl ExpandedCategories {
    pub fn is_open(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn toggled(&self, name: &str) -> Self {
        let mut open = self.0.clone();
        if !open.remove(name) {
            open.insert(name.to_string());
        }
        Self(open)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseMenuFilterHandle {
    pub filter: DietFilter,
    pub search: String,
    pub expanded: ExpandedCategories,
    pub set_filter: Callback<DietFilter>,
    pub set_search: Callback<String>,
    pub toggle_category: Callback<String>,
}

#[hook]
pub fn use_menu_filter() -> UseMenuFilterHandle {
    let filter = use_state(DietFilter::default);
    let search = use_state(String::new);
    let expanded = use_state(ExpandedCategories::default);

    let set_filter = {
        let filter = filter.clone();
        Callback::from(move |next: DietFilter| filter.set(next))
    };

    let set_search = {
        let search = search.clone();
        Callback::from(move |text: String| search.set(text))
    };

    let toggle_category = {
        let expanded = expanded.clone();
        Callback::from(move |name: String| expanded.set(expanded.toggled(&name)))
    };

    UseMenuFilterHandle {
        filter: *filter,
        search: (*search).clone(),
        expanded: (*expanded).clone(),
        set_filter,
        set_search,
        toggle_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::{Localized, MenuItem, Price, TodaysSpecialConfig};
    use pretty_assertions::assert_eq;

    fn item(en: &str, mr: &str) -> MenuItem {
        MenuItem {
            id: en.to_lowercase(),
            name: Localized::new(en, mr),
            description: Localized::default(),
            price: Price::Single(50.0),
            image: None,
            is_available: true,
            spice_level: Localized::new("mild", "हलके"),
            // Deliberately inconsistent with the category names below
            veg_or_non_veg: DietClass::NonVeg,
            tags: vec![],
            note: None,
        }
    }

    fn document() -> MenuDocument {
        let category = |name: &str, items: Vec<MenuItem>| MenuCategory { name: name.to_string(), items };
        MenuDocument {
            restaurant_name: "Naivedya".into(),
            last_updated: "2024-05-01T10:00:00Z".into(),
            todays_special_config: TodaysSpecialConfig::default(),
            menu: vec![
                category("Veg Thali", vec![item("Special Thali", "स्पेशल थाळी")]),
                category("Chicken", vec![item("Chicken Biryani", "चिकन बिर्याणी"), item("Tandoori", "तंदूरी")]),
                category("Roti", vec![item("Chapati", "चपाती")]),
                category("Fish Fry", vec![item("Surmai", "सुरमई")]),
                category("Egg Curry", vec![item("Anda Masala", "अंडा मसाला")]),
            ],
        }
    }

    fn names(categories: Vec<&MenuCategory>) -> Vec<&str> {
        categories.into_iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn classification_by_keyword() {
        assert_eq!(classify_category("Veg Thali"), DietClass::Veg);
        assert_eq!(classify_category("Non-Veg Thali"), DietClass::NonVeg);
        assert_eq!(classify_category("MUTTON"), DietClass::NonVeg);
        assert_eq!(classify_category("Prawns Special"), DietClass::NonVeg);
        assert_eq!(classify_category("Dry Fry"), DietClass::NonVeg);
        assert_eq!(classify_category("Sweets"), DietClass::Veg);
    }

    #[test]
    fn diet_filter_uses_category_names_only() {
        let doc = document();
        assert_eq!(names(filter_categories(&doc, DietFilter::All, "")).len(), 5);
        assert_eq!(names(filter_categories(&doc, DietFilter::Veg, "")), vec!["Veg Thali", "Roti"]);
        assert_eq!(
            names(filter_categories(&doc, DietFilter::NonVeg, "")),
            vec!["Chicken", "Fish Fry", "Egg Curry"]
        );
    }

    #[test]
    fn search_matches_category_or_item_names() {
        let doc = document();
        assert_eq!(names(filter_categories(&doc, DietFilter::All, "ROTI")), vec!["Roti"]);
        assert_eq!(names(filter_categories(&doc, DietFilter::All, "biryani")), vec!["Chicken"]);
        assert_eq!(names(filter_categories(&doc, DietFilter::All, "चपाती")), vec!["Roti"]);
        assert!(filter_categories(&doc, DietFilter::All, "pizza").is_empty());
    }

    #[test]
    fn matching_category_keeps_all_its_items() {
        let doc = document();
        let shown = filter_categories(&doc, DietFilter::All, "tandoori");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].items.len(), 2);
    }

    #[test]
    fn filter_and_search_combine() {
        let doc = document();
        assert!(filter_categories(&doc, DietFilter::Veg, "chicken").is_empty());
        assert_eq!(names(filter_categories(&doc, DietFilter::NonVeg, "a")), vec!["Chicken", "Fish Fry", "Egg Curry"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let doc = document();
        let once = names(filter_categories(&doc, DietFilter::NonVeg, "ma"));
        let twice = names(filter_categories(&doc, DietFilter::NonVeg, "ma"));
        assert_eq!(once, twice);
    }

    #[test]
    fn broadening_search_never_hides_categories() {
        let doc = document();
        for filter in DietFilter::ALL {
            let narrow = filter_categories(&doc, filter, "thali").len();
            let broader = filter_categories(&doc, filter, "tha").len();
            let everything = filter_categories(&doc, filter, "").len();
            assert!(narrow <= broader);
            assert!(broader <= everything);
        }
        assert!(filter_categories(&doc, DietFilter::All, "veg").len() <= filter_categories(&doc, DietFilter::All, "").len());
    }

    #[test]
    fn categories_toggle_independently() {
        let expanded = ExpandedCategories::default();
        assert!(!expanded.is_open("Roti"));

        let expanded = expanded.toggled("Roti").toggled("Chicken");
        assert!(expanded.is_open("Roti"));
        assert!(expanded.is_open("Chicken"));

        let expanded = expanded.toggled("Roti");
        assert!(!expanded.is_open("Roti"));
        assert!(expanded.is_open("Chicken"));
    }
}
