// ============================================================================
// LEGACY MENU FORMAT
// ============================================================================
// Older menu.json shape: categories with bilingual names and bare items
// (name + price + optional note). Upgraded to MenuDocument on load.
// ============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::menu::{insert_category, DietClass, Localized, MenuCategory, MenuDocument, MenuItem, Price, TodaysSpecialConfig};
use crate::utils::constants::LEGACY_NON_VEG_KEYWORDS;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LegacyMenuItem {
    pub name: Localized,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LegacyMenuCategory {
    pub name: Localized,
    #[serde(default)]
    pub items: Vec<LegacyMenuItem>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LegacyMenuDocument {
    pub categories: Vec<LegacyMenuCategory>,
}

impl LegacyMenuDocument {
    pub fn into_menu_document(self, restaurant_name: &str) -> MenuDocument {
        self.convert_at(restaurant_name, Utc::now())
    }

    /// Deterministic upgrade; `now` becomes the document's `lastUpdated`.
    /// Categories sharing an English name collapse into one entry.
    pub fn convert_at(self, restaurant_name: &str, now: DateTime<Utc>) -> MenuDocument {
        let mut menu: Vec<MenuCategory> = Vec::with_capacity(self.categories.len());
        for (category_index, category) in self.categories.into_iter().enumerate() {
            let key = category.name.en;
            let diet = legacy_diet_class(&key);
            let tag = key.to_lowercase();
            let items = category
                .items
                .into_iter()
                .enumerate()
                .map(|(item_index, item)| MenuItem {
                    id: format!("item{}_{}", category_index, item_index),
                    description: Localized::new(
                        format!("{} prepared in traditional style.", item.name.en),
                        format!("पारंपरिक पद्धतीने बनवलेले {}.", item.name.mr),
                    ),
                    image: Some(placeholder_image(&item.name.en)),
                    price: item.price,
                    is_available: true,
                    spice_level: Localized::new("mild", "हलके"),
                    veg_or_non_veg: diet,
                    tags: vec![tag.clone()],
                    note: item.note.map(Localized::uniform),
                    name: item.name,
                })
                .collect();
            insert_category(&mut menu, key, items);
        }

        MenuDocument {
            restaurant_name: restaurant_name.to_string(),
            last_updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            todays_special_config: TodaysSpecialConfig::default(),
            menu,
        }
    }
}

fn legacy_diet_class(category_key: &str) -> DietClass {
    let lower = category_key.to_lowercase();
    if LEGACY_NON_VEG_KEYWORDS.iter().any(|k| lower.contains(k)) {
        DietClass::NonVeg
    } else {
        DietClass::Veg
    }
}

fn placeholder_image(english_name: &str) -> String {
    let slug = english_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("https://placeholder.com/food/{}.jpg", slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::Price;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn legacy() -> LegacyMenuDocument {
        serde_json::from_str(
            r#"{ "categories": [
                { "name": { "en": "Veg Thali", "mr": "व्हेज थाळी" }, "items": [
                    { "name": { "en": "Mini Thali", "mr": "मिनी थाळी" }, "price": 80 },
                    { "name": { "en": "Special  Thali", "mr": "स्पेशल थाळी" }, "price": 120, "note": "Unlimited roti" }
                ]},
                { "name": { "en": "Chicken Curry", "mr": "चिकन करी" }, "items": [
                    { "name": { "en": "Chicken Masala", "mr": "चिकन मसाला" }, "price": { "full": 200, "half": 120 } }
                ]},
                { "name": { "en": "Fish Fry", "mr": "फिश फ्राय" }, "items": [] },
                { "name": { "en": "Dry Fry Bhaji", "mr": "भाजी" }, "items": [
                    { "name": { "en": "Aloo", "mr": "आलू" }, "price": 40 }
                ]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn conversion_keeps_shape_and_order() {
        let doc = legacy().convert_at("Naivedya", Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());

        assert_eq!(doc.restaurant_name, "Naivedya");
        assert_eq!(doc.last_updated, "2024-01-02T03:04:05.000Z");
        assert!(!doc.todays_special_config.show_todays_special);
        assert_eq!(doc.category_names(), vec!["Veg Thali", "Chicken Curry", "Fish Fry", "Dry Fry Bhaji"]);
        let counts: Vec<usize> = doc.menu.iter().map(|c| c.items.len()).collect();
        assert_eq!(counts, vec![2, 1, 0, 1]);
    }

    #[test]
    fn ids_are_zero_based_category_and_item_indexes() {
        let doc = legacy().convert_at("Naivedya", Utc::now());
        let ids: Vec<&str> = doc.menu.iter().flat_map(|c| c.items.iter().map(|i| i.id.as_str())).collect();
        assert_eq!(ids, vec!["item0_0", "item0_1", "item1_0", "item3_0"]);
    }

    #[test]
    fn synthesized_fields() {
        let doc = legacy().convert_at("Naivedya", Utc::now());
        let special = &doc.menu[0].items[1];

        assert_eq!(special.description.en, "Special  Thali prepared in traditional style.");
        assert_eq!(special.description.mr, "पारंपरिक पद्धतीने बनवलेले स्पेशल थाळी.");
        assert_eq!(special.image.as_deref(), Some("https://placeholder.com/food/special-thali.jpg"));
        assert_eq!(special.tags, vec!["veg thali".to_string()]);
        assert_eq!(special.note, Some(Localized::uniform("Unlimited roti")));
        assert!(special.is_available);
        assert_eq!(special.spice_level, Localized::new("mild", "हलके"));
        assert_eq!(doc.menu[0].items[0].note, None);
    }

    #[test]
    fn diet_inferred_from_category_name() {
        let doc = legacy().convert_at("Naivedya", Utc::now());
        assert_eq!(doc.menu[0].items[0].veg_or_non_veg, DietClass::Veg);
        assert_eq!(doc.menu[1].items[0].veg_or_non_veg, DietClass::NonVeg);
        // "fry" alone does not make a legacy category non-veg
        assert_eq!(doc.menu[3].items[0].veg_or_non_veg, DietClass::Veg);
        assert_eq!(legacy_diet_class("NON-VEG Thali"), DietClass::NonVeg);
        assert_eq!(legacy_diet_class("Egg Specials"), DietClass::NonVeg);
    }

    #[test]
    fn split_price_survives() {
        let doc = legacy().convert_at("Naivedya", Utc::now());
        assert_eq!(doc.menu[1].items[0].price, Price::Split { full: 200.0, half: 120.0 });
    }

    #[test]
    fn repeated_category_names_merge_into_one_entry() {
        let legacy: LegacyMenuDocument = serde_json::from_str(
            r#"{ "categories": [
                { "name": { "en": "Chicken", "mr": "चिकन" }, "items": [
                    { "name": { "en": "Chicken Curry", "mr": "चिकन करी" }, "price": 150 }
                ]},
                { "name": { "en": "Roti", "mr": "रोटी" }, "items": [] },
                { "name": { "en": "Chicken", "mr": "चिकन" }, "items": [
                    { "name": { "en": "Chicken Fry", "mr": "चिकन फ्राय" }, "price": 180 }
                ]}
            ]}"#,
        )
        .unwrap();
        let doc = legacy.convert_at("Naivedya", Utc::now());

        assert_eq!(doc.category_names(), vec!["Chicken", "Roti"]);
        assert_eq!(doc.menu[0].items.len(), 1);
        assert_eq!(doc.menu[0].items[0].id, "item2_0");

        // Same shape after a trip through the current wire format
        let reparsed: MenuDocument = serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(reparsed, doc);
    }
}
