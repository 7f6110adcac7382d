//! Random adapters. Implement RandomSource.
//!
//! Provides an OS/seeded generator for production and a scripted source for testing.

pub mod scripted;
pub mod std_rng;

pub use scripted::ScriptedSource;
pub use std_rng::StdRngSource;
