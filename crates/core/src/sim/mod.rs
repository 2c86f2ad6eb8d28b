//! Simulation setup.

/// Program image loading and machine bring-up.
pub mod loader;

pub use self::loader::boot;
