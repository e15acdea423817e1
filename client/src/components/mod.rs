//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell (`main_layout`, `sidebar`, `user_menu`) and the route guard read
//! the session from context; none of them own state beyond open/closed toggles.

pub mod main_layout;
pub mod require_auth;
pub mod sidebar;
pub mod user_menu;
