// ============================================================================
// TRANSLATIONS (EN / MR)
// ============================================================================

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::context::language::Language;

lazy_static! {
    static ref ENGLISH: HashMap<&'static str, &'static str> = translations(&Language::English);
    static ref MARATHI: HashMap<&'static str, &'static str> = translations(&Language::Marathi);
}

/// Dictionary of UI strings for one language
fn translations(language: &Language) -> HashMap<&'static str, &'static str> {
    let mut texts = HashMap::new();

    match language {
        Language::English => {
            // Navigation
            texts.insert("home", "Home");
            texts.insert("menu", "Menu");
            texts.insert("specials", "Specials & Thalis");
            texts.insert("contact", "Contact");

            // Hero
            texts.insert("welcome", "Welcome to");
            texts.insert("restaurantName", "Naivedya Lunch Home");
            texts.insert("tagline", "Authentic Maharashtrian Cuisine");
            texts.insert("heroSubtitle", "Authentic Maharashtrian flavors served with love");
            texts.insert("orderNow", "Order Now");
            texts.insert("viewMenu", "View Menu");
            texts.insert("featureFreshTitle", "Fresh & Authentic");
            texts.insert("featureFreshText", "Made with fresh ingredients and traditional recipes");
            texts.insert("featureHomeTitle", "Home-style Cooking");
            texts.insert("featureHomeText", "Taste of home in every bite");
            texts.insert("featureDeliveryTitle", "Quick Delivery");
            texts.insert("featureDeliveryText", "Fast and reliable food delivery service");

            // Menu
            texts.insert("menuSubtitle", "Explore our delicious offerings");
            texts.insert("searchPlaceholder", "Search dishes...");
            texts.insert("filterAll", "All");
            texts.insert("filterVeg", "Veg 🌱");
            texts.insert("filterNonVeg", "Non-Veg 🍗");
            texts.insert("fullPlate", "Full");
            texts.insert("halfPlate", "Half");
            texts.insert("items", "items");
            texts.insert("unavailable", "Currently unavailable");
            texts.insert("noResults", "No dishes match your search");
            texts.insert("loadingMenu", "Loading menu...");
            texts.insert("loadingSpecials", "Loading specials...");
            texts.insert("error", "Error");
            texts.insert("refresh", "Refresh");
            texts.insert("lastUpdated", "Last updated");

            // Specials
            texts.insert("specialsSubtitle", "Our signature dishes and complete meal options");
            texts.insert("todaysSpecial", "Today's Special");
            texts.insert("thaliMenu", "Complete Thali Menu");
            texts.insert("vegThaliIncludes", "Includes rice, roti, dal, bhaji, papad, pickle & sweet");
            texts.insert("nonVegThaliIncludes", "Includes rice, roti, dal, bhaji, main course, papad & pickle");

            // Contact
            texts.insert("contactTitle", "Contact & Order");
            texts.insert("contactSubtitle", "Get in touch with us or place your order");
            texts.insert("contactInformation", "Contact Information");
            texts.insert("phoneNumbers", "Phone Numbers");
            texts.insert("whatsapp", "WhatsApp");
            texts.insert("operatingHours", "Operating Hours");
            texts.insert("quickOrder", "Quick Order");
            texts.insert("quickOrderPrompt", "Ready to order? Choose your preferred method below:");
            texts.insert("callNow", "Call Now");
            texts.insert("whatsappOrder", "WhatsApp Order");
            texts.insert("freeDelivery", "🎯 Free delivery on orders above ₹300");
            texts.insert("callToOrder", "Call to Order");
            texts.insert("orderOnline", "Order Online");
            texts.insert("address", "Address");

            // Footer
            texts.insert("footerName", "नैवेद्य लंच होम");
            texts.insert("copyright", "© 2024 Naivedya Lunch Home. All rights reserved.");

            // Common
            texts.insert("price", "₹");
            texts.insert("perKg", "per kg");
        }
        Language::Marathi => {
            // Navigation
            texts.insert("home", "मुख्यपृष्ठ");
            texts.insert("menu", "मेनू");
            texts.insert("specials", "स्पेशल आणि थाळी");
            texts.insert("contact", "संपर्क");

            // Hero
            texts.insert("welcome", "स्वागत आहे");
            texts.insert("restaurantName", "नैवेद्य लंच होम");
            texts.insert("tagline", "अस्सल महाराष्ट्रीयन जेवण");
            texts.insert("heroSubtitle", "प्रेमाने सर्व्ह केलेले अस्सल महाराष्ट्रीयन स्वाद");
            texts.insert("orderNow", "आता ऑर्डर करा");
            texts.insert("viewMenu", "मेनू पहा");
            texts.insert("featureFreshTitle", "ताजे आणि अस्सल");
            texts.insert("featureFreshText", "ताज्या साहित्याने आणि पारंपरिक पाककृतींनी बनवलेले");
            texts.insert("featureHomeTitle", "घरगुती स्वयंपाक");
            texts.insert("featureHomeText", "प्रत्येक घासात घरची चव");
            texts.insert("featureDeliveryTitle", "जलद डिलिव्हरी");
            texts.insert("featureDeliveryText", "जलद आणि विश्वासार्ह डिलिव्हरी सेवा");

            // Menu
            texts.insert("menuSubtitle", "आमचे स्वादिष्ट पदार्थ पहा");
            texts.insert("searchPlaceholder", "पदार्थ शोधा...");
            texts.insert("filterAll", "सर्व");
            texts.insert("filterVeg", "शाकाहारी 🌱");
            texts.insert("filterNonVeg", "मांसाहारी 🍗");
            texts.insert("fullPlate", "फुल");
            texts.insert("halfPlate", "हाफ");
            texts.insert("items", "पदार्थ");
            texts.insert("unavailable", "सध्या उपलब्ध नाही");
            texts.insert("noResults", "तुमच्या शोधाशी जुळणारे पदार्थ नाहीत");
            texts.insert("loadingMenu", "मेनू लोड होत आहे...");
            texts.insert("loadingSpecials", "स्पेशल लोड होत आहेत...");
            texts.insert("error", "त्रुटी");
            texts.insert("refresh", "रिफ्रेश");
            texts.insert("lastUpdated", "शेवटचे अद्यतन");

            // Specials
            texts.insert("specialsSubtitle", "आमचे खास पदार्थ आणि संपूर्ण जेवणाचे पर्याय");
            texts.insert("todaysSpecial", "आजचे स्पेशल");
            texts.insert("thaliMenu", "संपूर्ण थाळी मेनू");
            texts.insert("vegThaliIncludes", "भात, पोळी, डाळ, भाजी, पापड, लोणचं आणि गोड समाविष्ट");
            texts.insert("nonVegThaliIncludes", "भात, पोळी, डाळ, भाजी, मुख्य पदार्थ, पापड आणि लोणचं समाविष्ट");

            // Contact
            texts.insert("contactTitle", "संपर्क आणि ऑर्डर");
            texts.insert("contactSubtitle", "आमच्याशी संपर्क साधा किंवा ऑर्डर द्या");
            texts.insert("contactInformation", "संपर्क माहिती");
            texts.insert("phoneNumbers", "फोन नंबर");
            texts.insert("whatsapp", "व्हाट्सअॅप");
            texts.insert("operatingHours", "वेळ");
            texts.insert("quickOrder", "झटपट ऑर्डर");
            texts.insert("quickOrderPrompt", "ऑर्डर करण्यास तयार आहात? खाली तुमची पसंतीची पद्धत निवडा:");
            texts.insert("callNow", "आता कॉल करा");
            texts.insert("whatsappOrder", "व्हाट्सअॅप ऑर्डर");
            texts.insert("freeDelivery", "🎯 ₹३०० पेक्षा जास्त ऑर्डरवर मोफत डिलिव्हरी");
            texts.insert("callToOrder", "ऑर्डरसाठी कॉल करा");
            texts.insert("orderOnline", "ऑनलाइन ऑर्डर करा");
            texts.insert("address", "पत्ता");

            // Footer
            texts.insert("footerName", "नैवेद्य लंच होम");
            texts.insert("copyright", "© 2024 नैवेद्य लंच होम. सर्व हक्क राखीव.");

            // Common
            texts.insert("price", "₹");
            texts.insert("perKg", "प्रति किलो");
        }
    }

    texts
}

fn table(language: &Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::English => &ENGLISH,
        Language::Marathi => &MARATHI,
    }
}

/// Text for `key` in `language`, or `key` itself when the table has no entry.
/// Never falls back to the other language.
pub fn t(key: &str, language: &Language) -> String {
    table(language)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
pub fn has_key(key: &str, language: &Language) -> bool {
    table(language).contains_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Language; 2] = [Language::English, Language::Marathi];

    #[test]
    fn every_mapped_key_returns_its_string() {
        for language in ALL.iter() {
            for (key, value) in table(language).iter() {
                assert_eq!(t(key, language), *value);
            }
        }
    }

    #[test]
    fn missing_key_returns_key_verbatim() {
        for language in ALL.iter() {
            assert_eq!(t("doesNotExist", language), "doesNotExist");
            assert_eq!(t("", language), "");
        }
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        let mut en: Vec<_> = table(&Language::English).keys().collect();
        let mut mr: Vec<_> = table(&Language::Marathi).keys().collect();
        en.sort();
        mr.sort();
        assert_eq!(en, mr);
    }

    #[test]
    fn lookups_are_per_language() {
        assert_eq!(t("menu", &Language::English), "Menu");
        assert_eq!(t("menu", &Language::Marathi), "मेनू");
        assert_eq!(t("fullPlate", &Language::Marathi), "फुल");
        assert!(has_key("perKg", &Language::Marathi));
    }
}
