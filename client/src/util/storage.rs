//! Session token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in `localStorage` under [`TOKEN_KEY`]. The flow talks to it
//! through [`TokenStore`] so tests and SSR can use [`MemoryTokenStore`].
//!
//! TRADE-OFFS
//! ==========
//! Browser storage access is best-effort: a missing window or a storage
//! exception reads as "no token" and writes become no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Holds at most one session token.
pub trait TokenStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;
    /// Replace the stored token.
    fn store(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);

    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// `window.localStorage` backed store. Reads nothing outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.store(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
