//! Networking for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` plugs the browser fetch API into the session crate's request
//! dispatcher; everything above it (headers, status mapping, JSON) is shared
//! with the native CLI.

pub mod transport;
