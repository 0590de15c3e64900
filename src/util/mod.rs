//! Utility functions.
//!
//! This module provides dataset path helpers and the option structs
//! used by the reader and writer.

pub mod options;
pub mod path;

pub use options::{ReadOptions, WriteOptions};
