pub mod app;
pub mod header;
pub mod hero_section;
pub mod menu_section;
pub mod menu_category_card;
pub mod specials_section;
pub mod contact_section;
pub mod footer;

pub use app::App;
pub use header::Header;
pub use hero_section::HeroSection;
pub use menu_section::MenuSection;
pub use menu_category_card::{MenuCategoryCard, MenuItemRow};
pub use specials_section::SpecialsSection;
pub use contact_section::ContactSection;
pub use footer::Footer;
