//! Option structs for reading and writing datasets.

/// Options controlling how datasets are written.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// How many times to try opening the file, creating it when missing.
    pub max_open_attempts: u32,
    /// Create every missing group on the way to the dataset.
    pub create_missing_groups: bool,
    /// Replace a dataset that already exists at the target path.
    pub replace_existing: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            max_open_attempts: 3,
            create_missing_groups: true,
            replace_existing: false,
        }
    }
}

/// Options controlling how datasets are read.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Allow conversions that may lose range or precision, e.g. f64 to f32.
    pub allow_narrowing: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            allow_narrowing: true,
        }
    }
}
