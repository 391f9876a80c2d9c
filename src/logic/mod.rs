//! Editing logic: hit-testing, quick-delete resolution and input routing.
//!
//! Everything here runs synchronously on the thread that delivers input to
//! the compose screen. There is no background work and no locking.

pub mod blueprint;
pub mod input;
pub mod layout;
pub mod quick_delete;
