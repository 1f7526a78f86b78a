pub mod error;
pub mod menu_service;
pub mod navigation;

pub use error::MenuLoadError;
pub use menu_service::{load_menu, MenuService, MenuSource};
pub use navigation::{open_order_action, scroll_to_section};
