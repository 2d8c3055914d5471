use std::cell::RefCell;

use crate::utils::storage;

pub const TOKEN_COOKIE: &str = "token";
pub const TENANT_ID_KEY: &str = "tenant_id";

const TOKEN_MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;

/// Narrow port over the two session slots. The token and the tenant id live
/// in storage locations with different lifetimes, so the port keeps them as
/// separate named slots rather than one blob.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);

    fn tenant_id(&self) -> Option<String>;
    fn set_tenant_id(&self, tenant_id: &str);
    fn clear_tenant_id(&self);
}

/// Production store: the token is a cookie (sent implicitly with future
/// requests, readable by server-rendered pages), the tenant id sits in
/// localStorage (script-only, never sent automatically). Both degrade to
/// no-ops when no `window` exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn token(&self) -> Option<String> {
        storage::cookie_value(TOKEN_COOKIE)
    }

    fn set_token(&self, token: &str) {
        storage::set_cookie(&format!(
            "{}={}; path=/; max-age={}; secure; samesite=strict",
            TOKEN_COOKIE, token, TOKEN_MAX_AGE_SECS
        ));
    }

    fn clear_token(&self) {
        storage::set_cookie(&format!(
            "{}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT",
            TOKEN_COOKIE
        ));
    }

    fn tenant_id(&self) -> Option<String> {
        storage::local_storage()
            .ok()
            .and_then(|store| store.get_item(TENANT_ID_KEY).ok().flatten())
    }

    fn set_tenant_id(&self, tenant_id: &str) {
        if let Ok(store) = storage::local_storage() {
            let _ = store.set_item(TENANT_ID_KEY, tenant_id);
        }
    }

    fn clear_tenant_id(&self) {
        if let Ok(store) = storage::local_storage() {
            let _ = store.remove_item(TENANT_ID_KEY);
        }
    }
}

/// In-memory fake for tests and host-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
    tenant_id: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set_token(token);
        store
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }

    fn tenant_id(&self) -> Option<String> {
        self.tenant_id.borrow().clone()
    }

    fn set_tenant_id(&self, tenant_id: &str) {
        *self.tenant_id.borrow_mut() = Some(tenant_id.to_string());
    }

    fn clear_tenant_id(&self) {
        *self.tenant_id.borrow_mut() = None;
    }
}
