//! Key/value persistence
//!
//! Backed by the browser's LocalStorage on wasm32. Native builds have no
//! store: reads find nothing and writes report failure.

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored value for `key`, if any
#[cfg(target_arch = "wasm32")]
pub fn read(key: &str) -> Option<String> {
    match local_storage()?.get_item(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Reading '{}' from LocalStorage failed: {:?}", key, e);
            None
        }
    }
}

/// Store `value` under `key`; returns whether the write landed
#[cfg(target_arch = "wasm32")]
pub fn write(key: &str, value: &str) -> bool {
    let Some(storage) = local_storage() else {
        log::warn!("LocalStorage unavailable, '{}' not written", key);
        return false;
    };
    match storage.set_item(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Writing '{}' to LocalStorage failed: {:?}", key, e);
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write(key: &str, _value: &str) -> bool {
    log::debug!("No persistent store on this target, '{}' not written", key);
    false
}
