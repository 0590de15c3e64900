//! Dataset information.

use super::layout::ElementLayout;
use std::fmt;
use std::path::PathBuf;

/// Information about a stored one-dimensional dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInfo {
    /// Path to the source file.
    pub file_path: PathBuf,
    /// Normalized dataset path inside the file.
    pub dataset: String,
    /// On-disk element layout.
    pub layout: ElementLayout,
    /// Number of elements.
    pub len: usize,
}

impl DatasetInfo {
    /// Create a new dataset info.
    pub fn new(
        file_path: PathBuf,
        dataset: String,
        layout: ElementLayout,
        len: usize,
    ) -> Self {
        Self {
            file_path,
            dataset,
            layout,
            len,
        }
    }

    /// Size of the stored data in bytes.
    pub fn byte_len(&self) -> usize {
        self.len * self.layout.size
    }
}

impl fmt::Display for DatasetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.dataset, self.len, self.layout)
    }
}
