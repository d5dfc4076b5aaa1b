//! Configuration module
//!
//! Resource limits live in `constants` and are fixed at compile time.
//! User-tunable behavior lives in `runtime` and is read from environment
//! variables at startup.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
