use contracts::system::auth::AdminInfo;
use web_sys::window;

use super::context::Session;

const TOKEN_KEY: &str = "token";
const ADMIN_KEY: &str = "admin";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save token and admin profile (as JSON) to localStorage
pub fn save_session(session: &Session) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        match serde_json::to_string(&session.admin) {
            Ok(admin) => {
                let _ = storage.set_item(ADMIN_KEY, &admin);
            }
            Err(e) => log::warn!("Failed to serialize admin profile: {}", e),
        }
    }
}

/// Restore the session saved by [`save_session`]; `None` when either key is missing
/// or the profile does not parse.
pub fn load_session() -> Option<Session> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let admin_json = storage.get_item(ADMIN_KEY).ok()??;
    let admin: AdminInfo = match serde_json::from_str(&admin_json) {
        Ok(admin) => admin,
        Err(e) => {
            log::warn!("Stored admin profile is unreadable, dropping session: {}", e);
            clear_session();
            return None;
        }
    };
    if token.is_empty() {
        return None;
    }
    Some(Session { token, admin })
}

/// Remove both session keys
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(ADMIN_KEY);
    }
}
