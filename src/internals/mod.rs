//! Internal utilities for client-wrappers
//!
//! Re-exported through `lib.rs` as `client_wrappers::retry` and
//! `client_wrappers::tokens`.

pub mod retry;
pub mod tokens;
