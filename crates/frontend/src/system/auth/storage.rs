use contracts::system::auth::{LoginResponse, UserInfo};
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";
const USER_KEY: &str = "auth_user";
const PERMISSIONS_KEY: &str = "auth_permissions";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Get refresh token from localStorage
pub fn get_refresh_token() -> Option<String> {
    get_local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Persist everything a login returned: tokens, profile and the raw grant list
pub fn save_session(response: &LoginResponse) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, &response.access_token);
    let _ = storage.set_item(REFRESH_TOKEN_KEY, &response.refresh_token);
    if let Ok(user) = serde_json::to_string(&response.user) {
        let _ = storage.set_item(USER_KEY, &user);
    }
    let _ = storage.set_item(PERMISSIONS_KEY, &response.permissions.to_string());
}

/// Cached profile of the signed-in user
pub fn get_user_info() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Raw grant list as stored at login. Parsing happens once, in the auth context.
pub fn get_permissions_raw() -> Option<String> {
    get_local_storage()?.get_item(PERMISSIONS_KEY).ok()?
}

/// Clear all session data
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY, PERMISSIONS_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}
