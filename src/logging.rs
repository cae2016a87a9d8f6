//! Logging utilities for client-wrappers
//!
//! Re-exports tracing macros with log_* naming convention for consistency.

#[allow(unused_imports)]
pub use tracing::{
    debug as log_debug,
    error as log_error,
    info as log_info,
    trace as log_trace,
    warn as log_warn,
};
