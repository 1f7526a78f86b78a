// Shared helpers

pub mod constants;
pub mod format;
pub mod i18n;
pub mod storage;

pub use constants::*;
pub use format::format_price;
pub use i18n::t;
