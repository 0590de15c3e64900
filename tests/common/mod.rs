//! Shared fixtures for integration tests.

#![allow(dead_code)]

use h5easy::{H5Reader, H5Writer};
use hdf5::{Datatype, H5Type};
use hdf5_sys::h5::hsize_t;
use hdf5_sys::h5d::{H5Dclose, H5Dcreate2, H5Dwrite};
use hdf5_sys::h5i::hid_t;
use hdf5_sys::h5p::H5P_DEFAULT;
use hdf5_sys::h5s::{H5Sclose, H5Screate_simple, H5S_ALL};
use std::ffi::CString;
use std::path::{Path, PathBuf};
use std::ptr;
use tempfile::TempDir;

/// A scratch directory holding one HDF5 file path.
pub struct Scratch {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("data.h5");
        Self { _dir: dir, path }
    }

    pub fn writer(&self, var: &str) -> H5Writer {
        writer_for(&self.path, var)
    }

    pub fn reader(&self, var: &str) -> H5Reader {
        reader_for(&self.path, var)
    }
}

pub fn writer_for(path: &Path, var: &str) -> H5Writer {
    let mut writer = H5Writer::new();
    writer.set_file_name(path);
    writer.set_var_name(var);
    writer
}

pub fn reader_for(path: &Path, var: &str) -> H5Reader {
    let mut reader = H5Reader::new();
    reader.set_file_name(path);
    reader.set_var_name(var);
    reader
}

fn open_fixture(path: &Path) -> hdf5::File {
    if path.exists() {
        hdf5::File::open_rw(path).expect("open fixture file")
    } else {
        hdf5::File::create(path).expect("create fixture file")
    }
}

/// Write a dataset of any HDF5 type directly, bypassing h5easy.
pub fn write_raw<T: H5Type>(path: &Path, name: &str, values: &[T]) {
    let file = open_fixture(path);
    let ds = file
        .new_dataset::<T>()
        .shape(values.len())
        .create(name)
        .expect("create fixture dataset");
    ds.write_raw(values).expect("write fixture dataset");
}

/// Write a root-level dataset stored as `file_type`, e.g. `H5T_STD_I16BE`.
///
/// `values` are native `T` and HDF5 converts them on the way to disk. The
/// safe API only creates native-order datasets, so this goes through the
/// C interface.
pub fn write_foreign_order<T: H5Type>(
    path: &Path,
    name: &str,
    file_type: &'static hid_t,
    values: &[T],
) {
    let file = open_fixture(path);
    let mem_type = Datatype::from_type::<T>().expect("memory datatype");
    let cname = CString::new(name).expect("dataset name");
    let dims = [values.len() as hsize_t];

    hdf5::sync::sync(|| unsafe {
        let space = H5Screate_simple(1, dims.as_ptr(), ptr::null());
        assert!(space >= 0, "create dataspace");
        let ds = H5Dcreate2(
            file.id(),
            cname.as_ptr(),
            *file_type,
            space,
            H5P_DEFAULT,
            H5P_DEFAULT,
            H5P_DEFAULT,
        );
        assert!(ds >= 0, "create dataset {name}");
        let status = H5Dwrite(
            ds,
            mem_type.id(),
            H5S_ALL,
            H5S_ALL,
            H5P_DEFAULT,
            values.as_ptr().cast(),
        );
        assert!(status >= 0, "write dataset {name}");
        H5Dclose(ds);
        H5Sclose(space);
    });
}
