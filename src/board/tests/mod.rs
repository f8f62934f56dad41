//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pieces.rs` - Per-piece legality rules
//! - `movegen.rs` - Destination enumeration
//! - `proptest.rs` - Property-based tests

mod proptest;
