//! Page modules for the portal's screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form handling and delegates HTTP and token side effects
//! to [`crate::flow::Portal`].

pub mod authorization;
pub mod login;
