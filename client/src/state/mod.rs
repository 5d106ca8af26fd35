//! Client-side application state modules.
//!
//! ARCHITECTURE
//! ============
//! State types are plain data so page selection and view-model transitions can
//! be unit-tested without a browser. Components wrap them in `RwSignal`s.

pub mod login;
pub mod page;
