//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and shared table/form pieces while
//! reading shared state from Leptos context providers.

pub mod confirm_dialog;
pub mod field_error;
pub mod layout;
pub mod notices;
pub mod pager;
pub mod results_table;
pub mod sidebar;
pub mod status_badge;
pub mod theme_toggle;
