use crate::types::DataType;
use derive_more::From;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Location
///
/// Geolocation literal (decimal degrees).
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

///
/// Date
///
/// Date/time literal as unix-epoch seconds.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Date(pub i64);

///
/// Value
///
/// Boxed literal carried by a `Const` leaf and handed opaquely to the
/// evaluation engine. Collection values are only reachable through the typed
/// constant wrappers, which also carry the element type for empty
/// collections.
///

#[derive(Clone, Debug, From, PartialEq, Serialize, Deserialize)]
pub enum Value {
    #[from]
    Bool(bool),
    #[from]
    Int8(i8),
    #[from]
    Int16(i16),
    #[from]
    Int32(i32),
    #[from]
    Int64(i64),
    #[from]
    Uint8(u8),
    #[from]
    Uint16(u16),
    #[from]
    Uint32(u32),
    #[from]
    Uint64(u64),
    #[from]
    Float32(f32),
    #[from]
    Float64(f64),
    #[from(String, &str)]
    Text(String),
    Date(i64),
    #[from]
    Location(Location),
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl From<Date> for Value {
    fn from(date: Date) -> Self {
        Self::Date(date.0)
    }
}

///
/// Scalar
///
/// Host scalar types that map onto exactly one `DataType`. Lets constant
/// operands (and collections of them) wrap into `Const` leaves with a known
/// result type, which is what makes the sub/const constructor overloads
/// uniform.
///

pub trait Scalar: Into<Value> {
    fn data_type() -> DataType;
}

macro_rules! impl_scalar {
    ($($host:ty => $ty:ident),* $(,)?) => {
        $(
            impl Scalar for $host {
                fn data_type() -> DataType {
                    DataType::$ty
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    String => Text,
    Date => Date,
    Location => Location,
}

impl Scalar for &str {
    fn data_type() -> DataType {
        DataType::Text
    }
}

// Engine rendering convention for constants: bare digits for numbers, quoted
// and escaped text, braces for collections.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "TRUE"),
            Self::Bool(false) => write!(f, "FALSE"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Uint8(v) => write!(f, "{v}"),
            Self::Uint16(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}"),
            Self::Uint64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(v) => write_quoted(f, v),
            Self::Date(v) => write!(f, "date({v})"),
            Self::Location(v) => write!(f, "location({}, {})", v.latitude, v.longitude),
            Self::List(items) | Self::Set(items) => {
                write!(f, "{{")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    write!(f, "\"")?;
    for ch in text.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            _ => write!(f, "{ch}")?,
        }
    }
    write!(f, "\"")
}

///
/// TESTS
///
