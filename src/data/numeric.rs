//! In-memory numeric sequences.
//!
//! [`NumericData`] is the single value returned when the element type of a
//! dataset is only known at read time. [`Element`] ties each supported Rust
//! type to its variant so typed reads and writes stay generic.

use super::layout::{ElementClass, ElementLayout};
use hdf5::H5Type;
use std::fmt;

/// Element types that can be read and written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UInt,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
}

impl ElementKind {
    /// Width in bytes of the in-memory element.
    pub fn size(self) -> usize {
        match self {
            ElementKind::Int | ElementKind::UInt | ElementKind::Float => 4,
            ElementKind::Double => 8,
        }
    }

    /// Whether reading `layout` into this kind may lose range or precision.
    ///
    /// Callers must check class compatibility first.
    pub fn narrows(self, layout: &ElementLayout) -> bool {
        match self {
            ElementKind::Int => match layout.class {
                ElementClass::Unsigned => layout.size >= 4,
                _ => layout.size > 4,
            },
            ElementKind::UInt => match layout.class {
                ElementClass::Unsigned => layout.size > 4,
                _ => true,
            },
            ElementKind::Float | ElementKind::Double => layout.size > self.size(),
        }
    }

    /// Whether a dataset of `class` can be read as this kind at all.
    pub fn accepts(self, class: ElementClass) -> bool {
        match self {
            ElementKind::Int | ElementKind::UInt => class.is_integer(),
            ElementKind::Float | ElementKind::Double => class == ElementClass::Float,
        }
    }

    /// Natural kind for a stored layout, used when the caller does not pick one.
    pub fn for_layout(layout: &ElementLayout) -> Self {
        match (layout.class, layout.size) {
            (ElementClass::Integer, _) => ElementKind::Int,
            (ElementClass::Unsigned, _) => ElementKind::UInt,
            (ElementClass::Float, 4) => ElementKind::Float,
            (ElementClass::Float, _) => ElementKind::Double,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Int => "int",
            ElementKind::UInt => "uint",
            ElementKind::Float => "float",
            ElementKind::Double => "double",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A Rust element type with a matching [`NumericData`] variant.
pub trait Element: H5Type + Copy + sealed::Sealed {
    /// Kind this type maps to.
    const KIND: ElementKind;

    /// Wrap a vector in its variant.
    fn into_numeric(values: Vec<Self>) -> NumericData;

    /// Unwrap the matching variant, handing the value back otherwise.
    fn from_numeric(data: NumericData) -> std::result::Result<Vec<Self>, NumericData>;
}

macro_rules! impl_element {
    ($ty:ty, $kind:ident) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$kind;

            fn into_numeric(values: Vec<Self>) -> NumericData {
                NumericData::$kind(values)
            }

            fn from_numeric(data: NumericData) -> std::result::Result<Vec<Self>, NumericData> {
                match data {
                    NumericData::$kind(values) => Ok(values),
                    other => Err(other),
                }
            }
        }

        impl From<Vec<$ty>> for NumericData {
            fn from(values: Vec<$ty>) -> Self {
                NumericData::$kind(values)
            }
        }

        impl TryFrom<NumericData> for Vec<$ty> {
            type Error = NumericData;

            fn try_from(data: NumericData) -> std::result::Result<Self, Self::Error> {
                <$ty as Element>::from_numeric(data)
            }
        }
    };
}

impl_element!(i32, Int);
impl_element!(u32, UInt);
impl_element!(f32, Float);
impl_element!(f64, Double);

/// A homogeneous one-dimensional numeric sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericData {
    /// Signed integers.
    Int(Vec<i32>),
    /// Unsigned integers.
    UInt(Vec<u32>),
    /// Single precision floats.
    Float(Vec<f32>),
    /// Double precision floats.
    Double(Vec<f64>),
}

/// Basic statistics over the finite values of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Smallest finite value.
    pub min: f64,
    /// Largest finite value.
    pub max: f64,
    /// Mean of the finite values.
    pub mean: f64,
    /// Number of finite values.
    pub valid_count: usize,
}

impl NumericData {
    /// Kind of the contained elements.
    pub fn kind(&self) -> ElementKind {
        match self {
            NumericData::Int(_) => ElementKind::Int,
            NumericData::UInt(_) => ElementKind::UInt,
            NumericData::Float(_) => ElementKind::Float,
            NumericData::Double(_) => ElementKind::Double,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            NumericData::Int(v) => v.len(),
            NumericData::UInt(v) => v.len(),
            NumericData::Float(v) => v.len(),
            NumericData::Double(v) => v.len(),
        }
    }

    /// Check if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy every element into an `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            NumericData::Int(v) => v.iter().map(|&x| f64::from(x)).collect(),
            NumericData::UInt(v) => v.iter().map(|&x| f64::from(x)).collect(),
            NumericData::Float(v) => v.iter().map(|&x| f64::from(x)).collect(),
            NumericData::Double(v) => v.clone(),
        }
    }

    /// Min, max and mean over the finite values, `None` when there are none.
    pub fn summary(&self) -> Option<Summary> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for v in self.to_f64_vec() {
            if v.is_finite() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
                sum += v;
                count += 1;
            }
        }
        (count > 0).then(|| Summary {
            min,
            max,
            mean: sum / count as f64,
            valid_count: count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::layout::Endianness;
    use super::*;

    fn layout(class: ElementClass, size: usize) -> ElementLayout {
        ElementLayout::new(class, size, Endianness::Little).unwrap()
    }

    #[test]
    fn try_from_hands_back_other_variants() {
        let data = NumericData::from(vec![1.5f32, 2.5]);
        let back: Result<Vec<f64>, _> = data.clone().try_into();
        assert_eq!(back, Err(data.clone()));
        let floats: Vec<f32> = data.try_into().unwrap();
        assert_eq!(floats, vec![1.5, 2.5]);
    }

    #[test]
    fn narrowing_rules() {
        assert!(!ElementKind::Int.narrows(&layout(ElementClass::Integer, 2)));
        assert!(ElementKind::Int.narrows(&layout(ElementClass::Integer, 8)));
        assert!(!ElementKind::Int.narrows(&layout(ElementClass::Unsigned, 2)));
        assert!(ElementKind::Int.narrows(&layout(ElementClass::Unsigned, 4)));
        assert!(ElementKind::UInt.narrows(&layout(ElementClass::Integer, 1)));
        assert!(!ElementKind::UInt.narrows(&layout(ElementClass::Unsigned, 4)));
        assert!(ElementKind::Float.narrows(&layout(ElementClass::Float, 8)));
        assert!(!ElementKind::Double.narrows(&layout(ElementClass::Float, 4)));
    }

    #[test]
    fn integer_kinds_accept_either_sign() {
        assert!(ElementKind::Int.accepts(ElementClass::Unsigned));
        assert!(ElementKind::UInt.accepts(ElementClass::Integer));
        assert!(!ElementKind::Int.accepts(ElementClass::Float));
        assert!(!ElementKind::Double.accepts(ElementClass::Integer));
    }

    #[test]
    fn natural_kind_for_layout() {
        assert_eq!(ElementKind::for_layout(&layout(ElementClass::Integer, 8)), ElementKind::Int);
        assert_eq!(ElementKind::for_layout(&layout(ElementClass::Unsigned, 1)), ElementKind::UInt);
        assert_eq!(ElementKind::for_layout(&layout(ElementClass::Float, 4)), ElementKind::Float);
        assert_eq!(ElementKind::for_layout(&layout(ElementClass::Float, 8)), ElementKind::Double);
    }

    #[test]
    fn summary_skips_non_finite_values() {
        let data = NumericData::Double(vec![1.0, f64::NAN, 3.0, f64::INFINITY]);
        let summary = data.summary().unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.valid_count, 2);

        assert!(NumericData::Int(Vec::new()).summary().is_none());
    }
}
