//! HDF5 dataset reader.

use super::layout::ElementLayout;
use super::numeric::{Element, ElementKind, NumericData};
use super::DatasetInfo;
use crate::error::{H5EasyError, Result};
use crate::util::{path, ReadOptions};
use ndarray::Array1;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads one-dimensional numeric datasets from an HDF5 file.
///
/// The stored width and byte order are detected on every read and the
/// conversion to the requested element type is left to the HDF5 library.
#[derive(Debug, Clone, Default)]
pub struct H5Reader {
    file_name: Option<PathBuf>,
    var_name: Option<String>,
    options: ReadOptions,
}

impl H5Reader {
    /// Create a reader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with the given options.
    pub fn with_options(options: ReadOptions) -> Self {
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

    /// Set the source file.
    pub fn set_file_name(&mut self, name: impl Into<PathBuf>) {
        self.file_name = Some(name.into());
    }

    /// Set the source dataset path.
    pub fn set_var_name(&mut self, name: impl Into<String>) {
        self.var_name = Some(name.into());
    }

    /// Source file, if set.
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Source dataset path, if set.
    pub fn var_name(&self) -> Option<&str> {
        self.var_name.as_deref()
    }

    /// Mutable access to the options.
    pub fn options_mut(&mut self) -> &mut ReadOptions {
        &mut self.options
    }

    /// Read an integer dataset as `i32`.
    pub fn read_int(&self) -> Result<Vec<i32>> {
        self.read_as()
    }

    /// Read an integer dataset as `u32`.
    pub fn read_uint(&self) -> Result<Vec<u32>> {
        self.read_as()
    }

    /// Read a float dataset as `f32`.
    pub fn read_float(&self) -> Result<Vec<f32>> {
        self.read_as()
    }

    /// Read a float dataset as `f64`.
    pub fn read_double(&self) -> Result<Vec<f64>> {
        self.read_as()
    }

    /// Read the dataset into the element type `T`.
    pub fn read_as<T: Element>(&self) -> Result<Vec<T>> {
        self.with_dataset(|ds, name| {
            let layout = inspect(ds, name)?;
            self.check_kind(T::KIND, &layout, name)?;
            Ok(ds.read_raw::<T>()?)
        })
    }

    /// Read the dataset into a one-dimensional array.
    pub fn read_array<T: Element>(&self) -> Result<Array1<T>> {
        self.read_as::<T>().map(Array1::from)
    }

    /// Read the dataset into whichever variant suits its stored type.
    ///
    /// Signed integers become [`NumericData::Int`], unsigned integers
    /// [`NumericData::UInt`], 4-byte floats [`NumericData::Float`] and
    /// 8-byte floats [`NumericData::Double`].
    pub fn read(&self) -> Result<NumericData> {
        self.with_dataset(|ds, name| {
            let layout = inspect(ds, name)?;
            let kind = ElementKind::for_layout(&layout);
            self.check_kind(kind, &layout, name)?;
            let data = match kind {
                ElementKind::Int => NumericData::Int(ds.read_raw()?),
                ElementKind::UInt => NumericData::UInt(ds.read_raw()?),
                ElementKind::Float => NumericData::Float(ds.read_raw()?),
                ElementKind::Double => NumericData::Double(ds.read_raw()?),
            };
            Ok(data)
        })
    }

    /// Describe the dataset without reading its values.
    pub fn info(&self) -> Result<DatasetInfo> {
        let file_path = self.require_file()?.to_path_buf();
        self.with_dataset(|ds, name| {
            let layout = inspect(ds, name)?;
            Ok(DatasetInfo::new(file_path, name.to_string(), layout, ds.size()))
        })
    }

    fn check_kind(&self, kind: ElementKind, layout: &ElementLayout, dataset: &str) -> Result<()> {
        if !kind.accepts(layout.class) {
            return Err(H5EasyError::type_mismatch(dataset, kind, layout.class));
        }

        if kind.narrows(layout) {
            if !self.options.allow_narrowing {
                return Err(H5EasyError::narrowing(dataset, layout, kind));
            }
            info!(dataset, from = %layout, to = %kind, "stored data is wider, casting down");
        } else if layout.size != kind.size() && !layout.class.is_integer() {
            info!(dataset, from = %layout, to = %kind, "stored data is narrower, casting up");
        }
        Ok(())
    }

    /// Open the file read-only and hand the dataset to `f`.
    fn with_dataset<R>(&self, f: impl FnOnce(&hdf5::Dataset, &str) -> Result<R>) -> Result<R> {
        let file_path = self.require_file()?;
        let dataset = path::normalize(self.require_var()?)?;

        let file = hdf5::File::open(file_path)?;
        let ds = file.dataset(&dataset)?;
        debug!(file = %file_path.display(), dataset = %dataset, "dataset opened");

        f(&ds, &dataset)
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

/// Check the rank and detect the element layout of an open dataset.
fn inspect(ds: &hdf5::Dataset, name: &str) -> Result<ElementLayout> {
    let rank = ds.ndim();
    if rank != 1 {
        return Err(H5EasyError::NotOneDimensional {
            dataset: name.to_string(),
            rank,
        });
    }
    let layout = ElementLayout::from_datatype(&ds.dtype()?, name)?;
    debug!(dataset = name, layout = %layout, len = ds.size(), "layout detected");
    Ok(layout)
}
