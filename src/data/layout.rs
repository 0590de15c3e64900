//! On-disk element layout: class, width and byte order.

use crate::error::{H5EasyError, Result};
use hdf5::datatype::ByteOrder;
use hdf5::types::TypeDescriptor;
use hdf5::Datatype;
use std::fmt;

/// Byte order of a stored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Short suffix used in layout names.
    pub fn suffix(self) -> &'static str {
        match self {
            Endianness::Little => "le",
            Endianness::Big => "be",
        }
    }
}

/// Numeric class of a stored element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementClass {
    /// Signed integer.
    Integer,
    /// Unsigned integer.
    Unsigned,
    /// IEEE floating point.
    Float,
}

impl ElementClass {
    /// Check if this is one of the integer classes.
    pub fn is_integer(self) -> bool {
        matches!(self, ElementClass::Integer | ElementClass::Unsigned)
    }

    fn prefix(self) -> char {
        match self {
            ElementClass::Integer => 'i',
            ElementClass::Unsigned => 'u',
            ElementClass::Float => 'f',
        }
    }
}

impl fmt::Display for ElementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementClass::Integer => "integer",
            ElementClass::Unsigned => "unsigned integer",
            ElementClass::Float => "float",
        };
        f.write_str(name)
    }
}

/// Class, width in bytes and byte order of a stored numeric element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementLayout {
    /// Numeric class.
    pub class: ElementClass,
    /// Width in bytes.
    pub size: usize,
    /// Byte order.
    pub order: Endianness,
}

impl ElementLayout {
    /// Build a layout, rejecting width/class combinations we cannot read.
    ///
    /// Integers may be 1, 2, 4 or 8 bytes wide, floats 4 or 8.
    pub fn new(class: ElementClass, size: usize, order: Endianness) -> Option<Self> {
        let supported = match class {
            ElementClass::Integer | ElementClass::Unsigned => matches!(size, 1 | 2 | 4 | 8),
            ElementClass::Float => matches!(size, 4 | 8),
        };
        supported.then_some(Self { class, size, order })
    }

    /// Inspect an HDF5 datatype.
    ///
    /// `dataset` is only used to label errors.
    pub fn from_datatype(dtype: &Datatype, dataset: &str) -> Result<Self> {
        let class = match dtype.to_descriptor()? {
            TypeDescriptor::Integer(_) => ElementClass::Integer,
            TypeDescriptor::Unsigned(_) => ElementClass::Unsigned,
            TypeDescriptor::Float(_) => ElementClass::Float,
            other => {
                return Err(H5EasyError::unsupported_layout(
                    dataset,
                    format!("{:?}", other),
                ))
            }
        };
        let size = dtype.size();
        let order = match dtype.byte_order() {
            ByteOrder::LittleEndian => Endianness::Little,
            ByteOrder::BigEndian => Endianness::Big,
            // single bytes have no meaningful order
            ByteOrder::None if size == 1 => Endianness::Little,
            other => {
                return Err(H5EasyError::unsupported_layout(
                    dataset,
                    format!("{} of {} bytes, {:?} byte order", class, size, other),
                ))
            }
        };

        Self::new(class, size, order).ok_or_else(|| {
            H5EasyError::unsupported_layout(dataset, format!("{} of {} bytes", class, size))
        })
    }

    /// Width in bits.
    pub fn bits(&self) -> usize {
        self.size * 8
    }
}

impl fmt::Display for ElementLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.class.prefix(),
            self.bits(),
            self.order.suffix()
        )
    }
}
