use std::fmt;

/// Descriptor of one accepted numeric type.
///
/// `Int` and `Float` are the interpreter's own number types; the remaining
/// kinds are the numpy fixed-width scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Float,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
}

impl Kind {
    /// Every accepted numeric kind, in the order they are checked.
    pub const ALL: [Kind; 13] = [
        Kind::Int,
        Kind::Float,
        Kind::Float16,
        Kind::Float32,
        Kind::Float64,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Int8,
        Kind::UInt16,
        Kind::UInt32,
        Kind::UInt64,
        Kind::UInt8,
    ];

    /// The numpy attribute naming this kind's scalar type, if it is one.
    pub fn numpy_name(self) -> Option<&'static str> {
        match self {
            Kind::Int | Kind::Float => None,
            Kind::Int8    => Some("int8"),
            Kind::Int16   => Some("int16"),
            Kind::Int32   => Some("int32"),
            Kind::Int64   => Some("int64"),
            Kind::UInt8   => Some("uint8"),
            Kind::UInt16  => Some("uint16"),
            Kind::UInt32  => Some("uint32"),
            Kind::UInt64  => Some("uint64"),
            Kind::Float16 => Some("float16"),
            Kind::Float32 => Some("float32"),
            Kind::Float64 => Some("float64"),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Int => write!(f, "int"),
            Kind::Float => write!(f, "float"),
            numpy => write!(f, "numpy.{}", numpy.numpy_name().unwrap_or("?")),
        }
    }
}

/// A numeric value tagged with the kind it arrived as.
///
/// `Float16` holds the binary16 value widened to `f32`; widening is exact.
/// `LargeInt` is an interpreter `int` outside the `i64` range, kept as its
/// nearest `f64` (infinite past the `f64` range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    LargeInt(f64),
    Float(f64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float16(f32),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Int(_)     => Kind::Int,
            Scalar::LargeInt(_) => Kind::Int,
            Scalar::Float(_)   => Kind::Float,
            Scalar::Int8(_)    => Kind::Int8,
            Scalar::Int16(_)   => Kind::Int16,
            Scalar::Int32(_)   => Kind::Int32,
            Scalar::Int64(_)   => Kind::Int64,
            Scalar::UInt8(_)   => Kind::UInt8,
            Scalar::UInt16(_)  => Kind::UInt16,
            Scalar::UInt32(_)  => Kind::UInt32,
            Scalar::UInt64(_)  => Kind::UInt64,
            Scalar::Float16(_) => Kind::Float16,
            Scalar::Float32(_) => Kind::Float32,
            Scalar::Float64(_) => Kind::Float64,
        }
    }

    /// The value in double precision, which all formulas operate on.
    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::Int(v)     => v as f64,
            Scalar::LargeInt(v) => v,
            Scalar::Float(v)   => v,
            Scalar::Int8(v)    => f64::from(v),
            Scalar::Int16(v)   => f64::from(v),
            Scalar::Int32(v)   => f64::from(v),
            Scalar::Int64(v)   => v as f64,
            Scalar::UInt8(v)   => f64::from(v),
            Scalar::UInt16(v)  => f64::from(v),
            Scalar::UInt32(v)  => f64::from(v),
            Scalar::UInt64(v)  => v as f64,
            Scalar::Float16(v) => f64::from(v),
            Scalar::Float32(v) => f64::from(v),
            Scalar::Float64(v) => v,
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self { Scalar::$variant(v) }
            }
        )*
    };
}

// `i64` and `f64` stand in for the interpreter's `int` and `float`. No `bool`.
scalar_from! {
    i64 => Int,
    f64 => Float,
    i8  => Int8,
    i16 => Int16,
    i32 => Int32,
    u8  => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
}
