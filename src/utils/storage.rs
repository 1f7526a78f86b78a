use gloo_storage::{LocalStorage, Storage};

// Values are stored unquoted so other pages reading the same key see a bare tag.

pub fn save_raw_to_storage(key: &str, value: &str) -> Result<(), String> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|_| format!("Error saving '{}' to localStorage", key))
}

pub fn load_raw_from_storage(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}
