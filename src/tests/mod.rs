// Test modules for client-wrappers crate
//
// Each source module has a corresponding test file that focuses on
// behavior verification.

// Test helper utilities
pub mod helpers;

pub mod retry;
pub mod template;

// NOTE: tiktoken tests live in tests/token_integration_tests.rs
// They load the BPE tables and are slow, so they don't belong in unit tests
