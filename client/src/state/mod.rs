//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only cross-page state in the shell; feature pages keep
//! their own local signals.

pub mod auth;
