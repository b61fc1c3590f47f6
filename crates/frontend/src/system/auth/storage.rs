//! Token persistence in localStorage.

const ACCESS_TOKEN_KEY: &str = "mars_access_token";
const REFRESH_TOKEN_KEY: &str = "mars_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn save_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

pub fn get_access_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
}

pub fn save_refresh_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

pub fn get_refresh_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(REFRESH_TOKEN_KEY).ok().flatten())
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
