//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session bookkeeping so route handlers can stay
//! focused on cookie and status-code plumbing.

pub mod session;
