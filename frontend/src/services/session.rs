use gloo::storage::{LocalStorage, Storage};

/// Single durable key holding the bearer token across reloads.
const TOKEN_KEY: &str = "token";

pub fn load_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY)
        .ok()
        .filter(|token| !token.is_empty())
}

pub fn save_token(token: &str) {
    if let Err(e) = LocalStorage::set(TOKEN_KEY, token) {
        gloo::console::warn!("Failed to persist session token:", e.to_string());
    }
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trips_through_local_storage() {
        clear_token();
        assert_eq!(load_token(), None);

        save_token("abc123");
        assert_eq!(load_token().as_deref(), Some("abc123"));

        clear_token();
        assert_eq!(load_token(), None);
    }
}
