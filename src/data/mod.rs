//! Dataset reading and writing.
//!
//! This module handles moving one-dimensional numeric sequences between
//! memory and HDF5 datasets, and listing the structure of a file as a tree
//! of nodes.

mod dataset;
mod layout;
mod node;
mod numeric;
mod reader;
mod tree;
mod writer;

pub use dataset::DatasetInfo;
pub use layout::{ElementClass, ElementLayout, Endianness};
pub use node::{DataNode, NodeType};
pub use numeric::{Element, ElementKind, NumericData, Summary};
pub use reader::H5Reader;
pub use tree::read_tree;
pub use writer::H5Writer;
