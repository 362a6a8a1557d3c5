#![cfg(test)]

/// Test utilities and helper functions
pub mod utils;
