//! h5easy - easy read and write of one-dimensional numeric HDF5 datasets.
//!
//! A dataset is addressed by a file path and a slash-delimited path inside
//! the file. Writers create the file and any missing groups on demand;
//! readers detect the stored width and byte order and convert to the
//! requested element type.
//!
//! # Features
//!
//! - Typed reads and writes of `i32`, `u32`, `f32` and `f64` sequences
//! - A [`NumericData`] value when the stored type is only known at runtime
//! - Lazy group creation along the dataset path
//! - Typed errors instead of aborting on mismatched data
//!
//! # Example
//!
//! ```ignore
//! use h5easy::{H5Reader, H5Writer};
//!
//! let mut writer = H5Writer::new();
//! writer.set_file_name("data.h5");
//! writer.set_var_name("/Function/f/0");
//! writer.write_data(&[1.0f64, 2.0, 3.0])?;
//!
//! let mut reader = H5Reader::new();
//! reader.set_file_name("data.h5");
//! reader.set_var_name("/Function/f/0");
//! let values = reader.read_double()?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod util;

pub use data::{
    read_tree, DataNode, DatasetInfo, Element, ElementClass, ElementKind, ElementLayout,
    Endianness, H5Reader, H5Writer, NodeType, NumericData, Summary,
};
pub use error::{H5EasyError, Result};
pub use util::{ReadOptions, WriteOptions};
