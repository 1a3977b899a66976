//! Shared value types.

pub mod complex;
