//! Route-level page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `login` and `register` are public; everything else renders inside the
//! guarded shell and assumes an authenticated session.

pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod section;
