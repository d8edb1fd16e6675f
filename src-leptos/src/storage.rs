//! Thin localStorage wrapper.
//!
//! Storage can be missing or sealed off (private browsing, storage policy),
//! so reads degrade to `None` and writes log and move on. Widgets never see
//! a storage error.

use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read a key, `None` when absent or storage is unavailable.
pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a key, logging on failure (e.g. quota exceeded).
pub fn write(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for key '{key}'");
            }
        }
        None => log::warn!("localStorage unavailable, '{key}' not persisted"),
    }
}
