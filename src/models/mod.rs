pub mod menu;
pub mod legacy;
pub mod contact;
pub mod section;
pub mod specials;

pub use menu::{DietClass, Localized, MenuCategory, MenuDocument, MenuItem, Price, TodaysSpecialConfig};
pub use legacy::{LegacyMenuCategory, LegacyMenuDocument, LegacyMenuItem};
pub use contact::{ContactInfo, OrderAction, OrderingChannel, OrderingOption};
pub use section::Section;
pub use specials::{featured_dishes, thali_categories, thali_inclusions_key, FeaturedDish};
