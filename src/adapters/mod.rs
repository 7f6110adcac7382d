//! Infrastructure adapters. Implement ports.
//!
//! Random sources and the terminal UI. Map errors to DomainError.

pub mod random;
pub mod ui;
