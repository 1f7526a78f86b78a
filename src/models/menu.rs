use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::context::language::Language;

/// Text available in every supported language
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Localized {
    pub en: String,
    pub mr: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, mr: impl Into<String>) -> Self {
        Self { en: en.into(), mr: mr.into() }
    }

    /// Same text in both languages
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self { en: text.clone(), mr: text }
    }

    pub fn get(&self, language: &Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Marathi => &self.mr,
        }
    }

    /// Case-insensitive substring match against any language
    pub fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.en.to_lowercase().contains(needle_lower)
            || self.mr.to_lowercase().contains(needle_lower)
    }
}

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum Price {
    Single(f64),
    Split { full: f64, half: f64 },
}

impl Price {
    pub fn is_valid(&self) -> bool {
        match *self {
            Price::Single(amount) => amount >= 0.0,
            Price::Split { full, half } => full >= 0.0 && half >= 0.0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
pub enum DietClass {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl DietClass {
    pub fn icon(&self) -> &'static str {
        match self {
            DietClass::Veg => "🌱",
            DietClass::NonVeg => "🍗",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: Localized,
    pub description: Localized,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub spice_level: Localized,
    pub veg_or_non_veg: DietClass,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Localized>,
}

fn default_available() -> bool {
    true
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TodaysSpecialConfig {
    pub show_todays_special: bool,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// One named section of the menu, e.g. "Chicken" or "Veg Thali"
#[derive(Clone, PartialEq, Debug)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Adds a category by name. A repeated name replaces the earlier items but
/// keeps the earlier position, like assigning to a JS object key.
pub fn insert_category(categories: &mut Vec<MenuCategory>, name: String, items: Vec<MenuItem>) {
    match categories.iter_mut().find(|c| c.name == name) {
        Some(existing) => existing.items = items,
        None => categories.push(MenuCategory { name, items }),
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    pub restaurant_name: String,
    pub last_updated: String,
    #[serde(default)]
    pub todays_special_config: TodaysSpecialConfig,
    /// JSON object on the wire; kept in source order here
    #[serde(with = "ordered_categories")]
    pub menu: Vec<MenuCategory>,
}

impl MenuDocument {
    pub fn category_names(&self) -> Vec<&str> {
        self.menu.iter().map(|c| c.name.as_str()).collect()
    }

    /// Featured items, empty unless the specials flag is on
    pub fn todays_specials(&self) -> &[MenuItem] {
        if self.todays_special_config.show_todays_special {
            &self.todays_special_config.items
        } else {
            &[]
        }
    }

    /// First item, menu or specials, whose price is negative
    pub fn first_invalid_price(&self) -> Option<&MenuItem> {
        self.menu
            .iter()
            .flat_map(|c| c.items.iter())
            .chain(self.todays_special_config.items.iter())
            .find(|item| !item.price.is_valid())
    }

    /// Last-updated timestamp as a short date, or the raw string if it is not RFC 3339
    pub fn last_updated_display(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.last_updated)
            .map(|dt| dt.format("%d %b %Y").to_string())
            .unwrap_or_else(|_| self.last_updated.clone())
    }
}

mod ordered_categories {
    use super::*;

    pub fn serialize<S: Serializer>(menu: &[MenuCategory], serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(menu.len()))?;
        for category in menu {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<MenuCategory>, D::Error> {
        deserializer.deserialize_map(CategoriesVisitor)
    }

    struct CategoriesVisitor;

    impl<'de> Visitor<'de> for CategoriesVisitor {
        type Value = Vec<MenuCategory>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping category names to item lists")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut categories: Vec<MenuCategory> = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((name, items)) = access.next_entry::<String, Vec<MenuItem>>()? {
                insert_category(&mut categories, name, items);
            }
            Ok(categories)
        }
    }
}
