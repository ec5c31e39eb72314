use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Capability
///
/// Marker declaring which operation families a value type supports. Every
/// composite constructor consults the `DataType` capability table before a
/// node is allowed to exist; nothing downstream re-checks.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Capability {
    Comparable,
    Numeric,
    Integer,
    Stringlike,
    SetLike,
    Indexable,
    Locationlike,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comparable => "comparable",
            Self::Numeric => "numeric",
            Self::Integer => "integer",
            Self::Stringlike => "stringlike",
            Self::SetLike => "setlike",
            Self::Indexable => "indexable",
            Self::Locationlike => "locationlike",
        };
        write!(f, "{name}")
    }
}

///
/// DataType
///
/// Result type of an expression node. The `capabilities` table below is the
/// single registration point of the algebra: a type participates in an
/// operation family only by carrying the family's tag here.
///
/// Dispatch between families is by capability tag, never by symbol. No type
/// in this table carries more than one of {Numeric, SetLike, Locationlike};
/// a future type registered with two of them would make family dispatch
/// ambiguous and must not be added without resolving that first.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Text,
    Date,
    Location,
    List(Box<DataType>),
    Map(Box<DataType>, Box<DataType>),
    Set(Box<DataType>),
}

impl DataType {
    /// The type→tag association table. Pure data, consulted by constructors.
    #[must_use]
    pub const fn capabilities(&self) -> &'static [Capability] {
        use Capability::{
            Comparable, Indexable, Integer, Locationlike, Numeric, SetLike, Stringlike,
        };

        match self {
            Self::Bool | Self::Date => &[Comparable],
            Self::Int8
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Uint64 => &[Numeric, Integer, Comparable],
            Self::Float32 | Self::Float64 => &[Numeric, Comparable],
            Self::Text => &[Stringlike, Comparable],
            Self::Location => &[Locationlike],
            Self::List(_) | Self::Map(..) => &[Indexable],
            Self::Set(_) => &[SetLike],
        }
    }

    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Element type of an iterable sequence (`List`/`Set`).
    #[must_use]
    pub const fn element(&self) -> Option<&Self> {
        match self {
            Self::List(elem) | Self::Set(elem) => Some(elem),
            _ => None,
        }
    }

    /// Value type produced by indexing into this type.
    #[must_use]
    pub const fn index_value(&self) -> Option<&Self> {
        match self {
            Self::List(elem) => Some(elem),
            Self::Map(_, value) => Some(value),
            _ => None,
        }
    }

    /// Whether `key` is an acceptable index key for this type. Lists accept
    /// any integer width; maps require the exact key type.
    #[must_use]
    pub fn accepts_index_key(&self, key: &Self) -> bool {
        match self {
            Self::List(_) => key.supports(Capability::Integer),
            Self::Map(map_key, _) => **map_key == *key,
            _ => false,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int8 => write!(f, "int8"),
            Self::Int16 => write!(f, "int16"),
            Self::Int32 => write!(f, "int32"),
            Self::Int64 => write!(f, "int64"),
            Self::Uint8 => write!(f, "uint8"),
            Self::Uint16 => write!(f, "uint16"),
            Self::Uint32 => write!(f, "uint32"),
            Self::Uint64 => write!(f, "uint64"),
            Self::Float32 => write!(f, "float32"),
            Self::Float64 => write!(f, "float64"),
            Self::Text => write!(f, "text"),
            Self::Date => write!(f, "date"),
            Self::Location => write!(f, "location"),
            Self::List(elem) => write!(f, "list<{elem}>"),
            Self::Map(key, value) => write!(f, "map<{key}, {value}>"),
            Self::Set(elem) => write!(f, "set<{elem}>"),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widths_carry_numeric_integer_comparable() {
        for ty in [
            DataType::Int8,
            DataType::Int16,
            DataType::Int32,
            DataType::Int64,
            DataType::Uint8,
            DataType::Uint16,
            DataType::Uint32,
            DataType::Uint64,
        ] {
            assert!(ty.supports(Capability::Numeric));
            assert!(ty.supports(Capability::Integer));
            assert!(ty.supports(Capability::Comparable));
            assert!(!ty.supports(Capability::Stringlike));
        }
    }

    #[test]
    fn floats_are_numeric_but_not_integer() {
        for ty in [DataType::Float32, DataType::Float64] {
            assert!(ty.supports(Capability::Numeric));
            assert!(!ty.supports(Capability::Integer));
            assert!(ty.supports(Capability::Comparable));
        }
    }

    #[test]
    fn text_is_stringlike_and_comparable() {
        assert!(DataType::Text.supports(Capability::Stringlike));
        assert!(DataType::Text.supports(Capability::Comparable));
        assert!(!DataType::Text.supports(Capability::Numeric));
    }

    #[test]
    fn location_is_only_locationlike() {
        assert_eq!(
            DataType::Location.capabilities(),
            &[Capability::Locationlike]
        );
    }

    #[test]
    fn containers_tag_indexable_or_setlike() {
        let list = DataType::List(Box::new(DataType::Int64));
        let map = DataType::Map(Box::new(DataType::Text), Box::new(DataType::Int64));
        let set = DataType::Set(Box::new(DataType::Int64));

        assert!(list.supports(Capability::Indexable));
        assert!(map.supports(Capability::Indexable));
        assert!(set.supports(Capability::SetLike));
        assert!(!set.supports(Capability::Indexable));
    }

    #[test]
    fn list_accepts_any_integer_key_width() {
        let list = DataType::List(Box::new(DataType::Text));

        assert!(list.accepts_index_key(&DataType::Int32));
        assert!(list.accepts_index_key(&DataType::Uint64));
        assert!(!list.accepts_index_key(&DataType::Text));
        assert!(!list.accepts_index_key(&DataType::Float64));
    }

    #[test]
    fn map_requires_exact_key_type() {
        let map = DataType::Map(Box::new(DataType::Text), Box::new(DataType::Int64));

        assert!(map.accepts_index_key(&DataType::Text));
        assert!(!map.accepts_index_key(&DataType::Int64));
    }

    #[test]
    fn element_and_index_value_accessors() {
        let list = DataType::List(Box::new(DataType::Int64));
        let map = DataType::Map(Box::new(DataType::Text), Box::new(DataType::Float64));
        let set = DataType::Set(Box::new(DataType::Text));

        assert_eq!(list.element(), Some(&DataType::Int64));
        assert_eq!(set.element(), Some(&DataType::Text));
        assert_eq!(map.element(), None);
        assert_eq!(list.index_value(), Some(&DataType::Int64));
        assert_eq!(map.index_value(), Some(&DataType::Float64));
        assert_eq!(set.index_value(), None);
    }
}
