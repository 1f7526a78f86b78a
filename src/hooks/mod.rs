pub mod use_menu_data;
pub mod use_menu_filter;

pub use use_menu_data::{use_menu_data, MenuDataProvider, MenuState, UseMenuDataHandle};
pub use use_menu_filter::{classify_category, filter_categories, use_menu_filter, DietFilter, ExpandedCategories, UseMenuFilterHandle};
