//! HDF5 dataset writer.

use super::numeric::{Element, NumericData};
use crate::error::{H5EasyError, Result};
use crate::util::{path, WriteOptions};
use ndarray::ArrayView1;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Writes one-dimensional numeric datasets into an HDF5 file.
///
/// The file is created when it does not exist yet, and the groups leading
/// to the dataset are created on demand.
///
/// ```ignore
/// use h5easy::H5Writer;
///
/// let mut writer = H5Writer::new();
/// writer.set_file_name("out.h5");
/// writer.set_var_name("/results/temperature");
/// writer.write_data(&[280.5f64, 281.0, 279.8])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct H5Writer {
    file_name: Option<PathBuf>,
    var_name: Option<String>,
    options: WriteOptions,
}

impl H5Writer {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with the given options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Builder-style [`set_file_name`](Self::set_file_name).
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<PathBuf>) -> Self {
        self.set_file_name(name);
        self
    }

    /// Builder-style [`set_var_name`](Self::set_var_name).
    #[must_use]
    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.set_var_name(name);
        self
    }

    /// Set the target file.
    pub fn set_file_name(&mut self, name: impl Into<PathBuf>) {
        self.file_name = Some(name.into());
    }

    /// Set the target dataset path.
    pub fn set_var_name(&mut self, name: impl Into<String>) {
        self.var_name = Some(name.into());
    }

    /// Target file, if set.
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Target dataset path, if set.
    pub fn var_name(&self) -> Option<&str> {
        self.var_name.as_deref()
    }

    /// Current options.
    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    /// Mutable access to the options.
    pub fn options_mut(&mut self) -> &mut WriteOptions {
        &mut self.options
    }

    /// Write `data` as a new one-dimensional dataset at the current variable path.
    pub fn write_data<T: Element>(&self, data: &[T]) -> Result<()> {
        let file_path = self.require_file()?;
        let dataset = path::normalize(self.require_var()?)?;
        let file = open_or_create(file_path, self.options.max_open_attempts)?;

        if self.options.create_missing_groups {
            ensure_groups(&file, &path::ancestors(&dataset))?;
        }

        if file.link_exists(&dataset) {
            if !self.options.replace_existing {
                return Err(H5EasyError::dataset_exists(dataset));
            }
            debug!(dataset = %dataset, "replacing existing dataset");
            file.unlink(&dataset)?;
        }

        let ds = file
            .new_dataset::<T>()
            .create_intermediate_group(self.options.create_missing_groups)
            .shape(data.len())
            .create(dataset.as_str())?;
        if !data.is_empty() {
            ds.write_raw(data)?;
        }

        let kind = T::KIND;
        debug!(
            file = %file_path.display(),
            dataset = %dataset,
            kind = %kind,
            len = data.len(),
            "dataset written"
        );
        Ok(())
    }

    /// Write a one-dimensional array view.
    pub fn write_array<T: Element>(&self, data: ArrayView1<'_, T>) -> Result<()> {
        match data.as_slice() {
            Some(slice) => self.write_data(slice),
            None => self.write_data(&data.to_vec()),
        }
    }

    /// Write whichever variant `data` holds.
    pub fn write_numeric(&self, data: &NumericData) -> Result<()> {
        match data {
            NumericData::Int(v) => self.write_data(v),
            NumericData::UInt(v) => self.write_data(v),
            NumericData::Float(v) => self.write_data(v),
            NumericData::Double(v) => self.write_data(v),
        }
    }

    /// Create the group `name` and every missing group above it.
    ///
    /// Groups that already exist are left alone. The root group is never
    /// created.
    pub fn create_group(&self, name: &str) -> Result<()> {
        let file_path = self.require_file()?;
        if path::split_segments(name).is_empty() {
            debug!(group = name, "root group requested, nothing to create");
            return Ok(());
        }

        let mut groups = path::ancestors(name);
        groups.push(path::normalize(name)?);

        let file = open_or_create(file_path, self.options.max_open_attempts)?;
        ensure_groups(&file, &groups)
    }

    fn require_file(&self) -> Result<&Path> {
        self.file_name
            .as_deref()
            .ok_or(H5EasyError::MissingName { what: "file" })
    }

    fn require_var(&self) -> Result<&str> {
        self.var_name
            .as_deref()
            .ok_or(H5EasyError::MissingName { what: "variable" })
    }
}

/// Open `path` read-write, creating the file when it is missing.
///
/// Gives up after `max_attempts` tries. An existing file that fails to open
/// is reported straight away and never truncated.
fn open_or_create(path: &Path, max_attempts: u32) -> Result<hdf5::File> {
    let mut last_error = None;
    for attempt in 1..=max_attempts {
        match hdf5::File::open_rw(path) {
            Ok(file) => {
                debug!(file = %path.display(), attempt, "opened for writing");
                return Ok(file);
            }
            Err(err) if !path.exists() => {
                warn!(
                    file = %path.display(),
                    attempt,
                    "file not found ({}), creating it",
                    err
                );
                // fails instead of truncating if someone else created it first
                match hdf5::File::create_excl(path) {
                    Ok(_) => debug!(file = %path.display(), "file created"),
                    Err(create_err) => {
                        warn!(file = %path.display(), "create failed: {}", create_err);
                        last_error = Some(create_err);
                    }
                }
            }
            Err(err) => return Err(err.into()),
        }
    }

    warn!(
        file = %path.display(),
        attempts = max_attempts,
        "tried too many times to open the file"
    );
    Err(H5EasyError::file_unavailable(path, max_attempts, last_error))
}

/// Create each group in `groups` that does not exist yet, in order.
fn ensure_groups(file: &hdf5::File, groups: &[String]) -> Result<()> {
    for group in groups {
        if file.link_exists(group) {
            debug!(group = %group, "group already exists");
            continue;
        }
        file.create_group(group)?;
        debug!(group = %group, "group created");
    }
    Ok(())
}
