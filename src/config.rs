use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_LEGACY_MENU_PATH, DEFAULT_MENU_PATH, DEFAULT_PHONE_PRIMARY, DEFAULT_PHONE_SECONDARY,
    DEFAULT_RESTAURANT_NAME, DEFAULT_SWIGGY_URL, DEFAULT_WHATSAPP, DEFAULT_ZOMATO_URL,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Preferred menu source. `None` means the remote source always reports "no data".
    pub menu_remote_url: Option<String>,
    pub menu_data_path: String,
    pub legacy_menu_data_path: String,
    /// Name stamped on documents upgraded from the legacy format
    pub restaurant_name: String,
    pub enable_logging: bool,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub phone_primary: String,
    pub phone_secondary: String,
    pub whatsapp: String,
    pub swiggy_url: String,
    pub zomato_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu_remote_url: None,
            menu_data_path: DEFAULT_MENU_PATH.to_string(),
            legacy_menu_data_path: DEFAULT_LEGACY_MENU_PATH.to_string(),
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            enable_logging: true,
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone_primary: DEFAULT_PHONE_PRIMARY.to_string(),
            phone_secondary: DEFAULT_PHONE_SECONDARY.to_string(),
            whatsapp: DEFAULT_WHATSAPP.to_string(),
            swiggy_url: DEFAULT_SWIGGY_URL.to_string(),
            zomato_url: DEFAULT_ZOMATO_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration baked in at compile time (see `build.rs`)
    pub fn from_env() -> Self {
        Self {
            menu_remote_url: non_empty(option_env!("MENU_REMOTE_URL")),
            menu_data_path: option_env!("MENU_DATA_PATH")
                .unwrap_or(DEFAULT_MENU_PATH).to_string(),
            legacy_menu_data_path: option_env!("LEGACY_MENU_DATA_PATH")
                .unwrap_or(DEFAULT_LEGACY_MENU_PATH).to_string(),
            restaurant_name: option_env!("RESTAURANT_NAME")
                .unwrap_or(DEFAULT_RESTAURANT_NAME).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            contact: ContactConfig {
                phone_primary: option_env!("CONTACT_PHONE_PRIMARY")
                    .unwrap_or(DEFAULT_PHONE_PRIMARY).to_string(),
                phone_secondary: option_env!("CONTACT_PHONE_SECONDARY")
                    .unwrap_or(DEFAULT_PHONE_SECONDARY).to_string(),
                whatsapp: option_env!("CONTACT_WHATSAPP")
                    .unwrap_or(DEFAULT_WHATSAPP).to_string(),
                swiggy_url: option_env!("SWIGGY_URL")
                    .unwrap_or(DEFAULT_SWIGGY_URL).to_string(),
                zomato_url: option_env!("ZOMATO_URL")
                    .unwrap_or(DEFAULT_ZOMATO_URL).to_string(),
            },
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
