use std::collections::HashMap;

use crate::client::api::CatalogApi;

/// the session storage key the admin session lives under
pub const AUTH_KEY: &str = "study_resources_admin_auth";

/// per-tab key/value storage that is lost when the tab closes
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
    fn remove_item(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStorage {
    items: HashMap<String, String>,
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }

    fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// session storage hasn't been read yet
    Loading,
    Anonymous,
    Authenticated,
}

/// Gates the admin dashboard behind the passcode. The session token is kept in session storage,
/// so a reload in the same tab stays signed in and a new tab starts anonymous
#[derive(Debug)]
pub struct AuthGate<S: SessionStorage> {
    storage: S,
    state: AuthState,
}

impl<S: SessionStorage> AuthGate<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: AuthState::Loading,
        }
    }

    /// reads session storage once at startup
    pub fn initialize(&mut self) -> AuthState {
        self.state = match self.storage.get_item(AUTH_KEY) {
            Some(token) if !token.is_empty() => AuthState::Authenticated,
            _ => AuthState::Anonymous,
        };
        self.state
    }

    /// Submits `code` to the store. On a match the session token is persisted and the gate opens;
    /// a wrong code or a failed call leaves everything as it was
    pub async fn login(&mut self, api: &dyn CatalogApi, code: &str) -> bool {
        match api.login(code).await {
            Ok(Some(token)) => {
                self.storage.set_item(AUTH_KEY, &token);
                self.state = AuthState::Authenticated;
                true
            }
            Ok(None) => {
                log::info!("Rejected admin login attempt");
                false
            }
            Err(e) => {
                log::error!("Failed to log in: {e}");
                false
            }
        }
    }

    /// clears the session. Logging out while anonymous does nothing
    pub fn logout(&mut self) {
        self.storage.remove_item(AUTH_KEY);
        self.state = AuthState::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// the stored session token. Admin writes hand it to the store as their credential
    pub fn token(&self) -> Option<String> {
        self.storage.get_item(AUTH_KEY)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
