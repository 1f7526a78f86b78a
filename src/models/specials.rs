use super::menu::{Localized, MenuCategory, MenuDocument, MenuItem, Price};
use crate::utils::constants::THALI_KEYWORD;

/// A card in the specials showcase
#[derive(Clone, PartialEq, Debug)]
pub struct FeaturedDish {
    pub name: Localized,
    pub description: Localized,
    pub price: Price,
    pub emoji: &'static str,
}

impl From<&MenuItem> for FeaturedDish {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            emoji: item.veg_or_non_veg.icon(),
        }
    }
}

/// House specials shown when the document does not enable today's specials
pub fn curated_specials() -> Vec<FeaturedDish> {
    vec![
        FeaturedDish {
            name: Localized::new("Veg Special Thali", "व्हेज स्पेशल थाळी"),
            description: Localized::new(
                "Complete meal with rice, roti, dal, bhaji, papad, pickle & sweet",
                "भात, पोळी, डाळ, भाजी, पापड, लोणचं आणि गोड यासह संपूर्ण जेवण",
            ),
            price: Price::Single(100.0),
            emoji: "🥘",
        },
        FeaturedDish {
            name: Localized::new("Paneer Thali", "पनीर थाळी"),
            description: Localized::new(
                "Special thali with paneer curry, rice, roti & accompaniments",
                "पनीर करी, भात, पोळी आणि इतर पदार्थांसह विशेष थाळी",
            ),
            price: Price::Single(150.0),
            emoji: "🧈",
        },
        FeaturedDish {
            name: Localized::new("Chicken Biryani", "चिकन बिर्याणी"),
            description: Localized::new(
                "Aromatic basmati rice with tender chicken pieces & spices",
                "कोमल चिकन तुकडे आणि मसाल्यांसह सुगंधी बासमती तांदूळ",
            ),
            price: Price::Split { full: 200.0, half: 120.0 },
            emoji: "🍛",
        },
        FeaturedDish {
            name: Localized::new("Mutton Kolhapuri Thali", "मटण कोल्हापुरी थाळी"),
            description: Localized::new(
                "Spicy Kolhapuri style mutton with traditional accompaniments",
                "पारंपरिक पदार्थांसह तिखट कोल्हापुरी शैलीतील मटण",
            ),
            price: Price::Single(160.0),
            emoji: "🌶️",
        },
    ]
}

/// Today's specials from the document, or the curated list
pub fn featured_dishes(document: &MenuDocument) -> Vec<FeaturedDish> {
    let todays = document.todays_specials();
    if todays.is_empty() {
        curated_specials()
    } else {
        todays.iter().map(FeaturedDish::from).collect()
    }
}

pub fn thali_categories(document: &MenuDocument) -> Vec<&MenuCategory> {
    document
        .menu
        .iter()
        .filter(|c| c.name.to_lowercase().contains(THALI_KEYWORD))
        .collect()
}

/// Translation key of the "what's included" line for the two standard thalis
pub fn thali_inclusions_key(category_name: &str) -> Option<&'static str> {
    match category_name {
        "Veg Thali" => Some("vegThaliIncludes"),
        "Non-Veg Thali" => Some("nonVegThaliIncludes"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::menu::{DietClass, TodaysSpecialConfig};

    fn item(id: &str, diet: DietClass) -> MenuItem {
        MenuItem {
            id: id.into(),
            name: Localized::uniform(id),
            description: Localized::uniform("desc"),
            price: Price::Single(90.0),
            image: None,
            is_available: true,
            spice_level: Localized::new("mild", "हलके"),
            veg_or_non_veg: diet,
            tags: vec![],
            note: None,
        }
    }

    fn document(show: bool) -> MenuDocument {
        MenuDocument {
            restaurant_name: "Naivedya".into(),
            last_updated: "2024-05-01T10:00:00Z".into(),
            todays_special_config: TodaysSpecialConfig {
                show_todays_special: show,
                items: vec![item("Misal", DietClass::Veg), item("Kheema", DietClass::NonVeg)],
            },
            menu: vec![
                MenuCategory { name: "Veg Thali".into(), items: vec![] },
                MenuCategory { name: "Roti".into(), items: vec![] },
                MenuCategory { name: "Non-Veg THALI".into(), items: vec![] },
            ],
        }
    }

    #[test]
    fn todays_specials_win_when_enabled() {
        let dishes = featured_dishes(&document(true));
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].name.en, "Misal");
        assert_eq!(dishes[1].emoji, "🍗");
    }

    #[test]
    fn curated_list_when_disabled() {
        assert_eq!(featured_dishes(&document(false)), curated_specials());
    }

    #[test]
    fn thalis_found_case_insensitively() {
        let doc = document(false);
        let names: Vec<&str> = thali_categories(&doc).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Veg Thali", "Non-Veg THALI"]);
    }

    #[test]
    fn inclusions_only_for_standard_thalis() {
        assert_eq!(thali_inclusions_key("Veg Thali"), Some("vegThaliIncludes"));
        assert_eq!(thali_inclusions_key("Non-Veg Thali"), Some("nonVegThaliIncludes"));
        assert_eq!(thali_inclusions_key("Non-Veg THALI"), None);
    }
}
