//! Networking modules for the portal's HTTP calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the endpoint calls, `types` defines the wire schema, `message`
//! turns failures into display text and `oauth` builds the client redirect.

pub mod api;
pub mod message;
pub mod oauth;
pub mod types;
