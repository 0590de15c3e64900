//! Error types for h5easy.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for h5easy operations.
pub type Result<T> = std::result::Result<T, H5EasyError>;

/// Errors that can occur in h5easy.
#[derive(Debug, Error)]
pub enum H5EasyError {
    /// The file could not be opened or created within the allowed attempts.
    #[error("File unavailable after {attempts} attempt(s): {path}")]
    FileUnavailable {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: Option<hdf5::Error>,
    },

    /// The stored element class does not match the requested one.
    #[error("{dataset} is {found}, cannot be read as {expected}")]
    TypeMismatch {
        dataset: String,
        expected: String,
        found: String,
    },

    /// The stored element width or byte order is not one we can read.
    #[error("Unsupported element layout for {dataset}: {layout}")]
    UnsupportedLayout { dataset: String, layout: String },

    /// Reading would lose precision and narrowing is disabled.
    #[error("Refusing to narrow {dataset} from {from} to {to}")]
    Narrowing {
        dataset: String,
        from: String,
        to: String,
    },

    /// The dataset already exists and replacement is disabled.
    #[error("Dataset already exists: {dataset}")]
    DatasetExists { dataset: String },

    /// The dataset has a rank other than one.
    #[error("{dataset} has rank {rank}, expected a one-dimensional dataset")]
    NotOneDimensional { dataset: String, rank: usize },

    /// The dataset or group path is malformed.
    #[error("Invalid path: {path:?}")]
    InvalidPath { path: String },

    /// A file or variable name was required but not set.
    #[error("No {what} name set")]
    MissingName { what: &'static str },

    /// Failure reported by the HDF5 library.
    #[error("HDF5 error: {0}")]
    Hdf5(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl H5EasyError {
    /// Create a FileUnavailable error.
    pub fn file_unavailable(
        path: impl Into<PathBuf>,
        attempts: u32,
        source: Option<hdf5::Error>,
    ) -> Self {
        Self::FileUnavailable {
            path: path.into(),
            attempts,
            source,
        }
    }

    /// Create a TypeMismatch error.
    pub fn type_mismatch(
        dataset: impl Into<String>,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::TypeMismatch {
            dataset: dataset.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Create an UnsupportedLayout error.
    pub fn unsupported_layout(dataset: impl Into<String>, layout: impl Into<String>) -> Self {
        Self::UnsupportedLayout {
            dataset: dataset.into(),
            layout: layout.into(),
        }
    }

    /// Create a Narrowing error.
    pub fn narrowing(dataset: impl Into<String>, from: impl ToString, to: impl ToString) -> Self {
        Self::Narrowing {
            dataset: dataset.into(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create a DatasetExists error.
    pub fn dataset_exists(dataset: impl Into<String>) -> Self {
        Self::DatasetExists {
            dataset: dataset.into(),
        }
    }

    /// Create an InvalidPath error.
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }
}

impl From<hdf5::Error> for H5EasyError {
    fn from(err: hdf5::Error) -> Self {
        Self::Hdf5(err.to_string())
    }
}
