/// localStorage key holding the active language tag (`en` / `mr`)
pub const LANGUAGE_STORAGE_KEY: &str = "restaurant-language";

pub const DEFAULT_MENU_PATH: &str = "/data/menu-new.json";
pub const DEFAULT_LEGACY_MENU_PATH: &str = "/data/menu.json";
pub const DEFAULT_RESTAURANT_NAME: &str = "Naivedya";

pub const DEFAULT_PHONE_PRIMARY: &str = "+91 98765 43210";
pub const DEFAULT_PHONE_SECONDARY: &str = "+91 87654 32109";
pub const DEFAULT_WHATSAPP: &str = "+91 98765 43210";
pub const DEFAULT_SWIGGY_URL: &str = "https://www.swiggy.com";
pub const DEFAULT_ZOMATO_URL: &str = "https://www.zomato.com";

/// Category-name keywords that mark a menu section as non-vegetarian
pub const NON_VEG_CATEGORY_KEYWORDS: &[&str] =
    &["non-veg", "egg", "chicken", "mutton", "fish", "prawns", "fry"];

/// Keywords used when upgrading legacy documents. "fry" is not among them.
pub const LEGACY_NON_VEG_KEYWORDS: &[&str] =
    &["non-veg", "egg", "chicken", "mutton", "fish", "prawns"];

pub const THALI_KEYWORD: &str = "thali";
