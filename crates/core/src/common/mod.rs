//! Common utilities and types used throughout the RV32I simulator.
//!
//! This module provides the fundamental building blocks shared by every other
//! component. It includes:
//! 1. **Bit-Field Utilities:** Slicing, splicing, and sign-extending 32-bit words.
//! 2. **Error Handling:** The fault taxonomy surfaced by the execution loop.

/// Bit-field extraction, insertion, and sign extension for 32-bit words.
pub mod bits;

/// Fault types reported by the execution loop.
pub mod error;

pub use error::Fault;
