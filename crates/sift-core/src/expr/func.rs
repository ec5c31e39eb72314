use crate::types::{Capability, DataType};
use serde::{Deserialize, Serialize};

///
/// Function vocabularies
///
/// One enum per arity; each tag maps bit-for-bit onto the evaluation
/// engine's function name. The capability each family demands of its
/// operands lives here too, so the builders in `build.rs` stay generic.
///

/// Engine function name used to lower an `Index` node.
pub const INDEX_FUNCTION: &str = "objectFrom:withIndex:";

///
/// NullaryFunc
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum NullaryFunc {
    Random,
    Now,
}

impl NullaryFunc {
    #[must_use]
    pub const fn external_name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Now => "now",
        }
    }

    #[must_use]
    pub const fn result_type(self) -> DataType {
        match self {
            Self::Random => DataType::Int64,
            Self::Now => DataType::Date,
        }
    }
}

///
/// UnaryFunc
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum UnaryFunc {
    // math: Numeric -> same type
    Sqrt,
    Log,
    Ln,
    Exp,
    Floor,
    Ceiling,
    Abs,
    Trunc,
    // aggregate: sequence of Numeric -> element type
    Sum,
    Count,
    Min,
    Max,
    Average,
    Median,
    Mode,
    Stddev,
    // string
    Uppercase,
    Lowercase,
    Length,
    // integer: Integer -> same type
    RandomN,
    Complement,
}

impl UnaryFunc {
    /// Short name used in construction errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Floor => "floor",
            Self::Ceiling => "ceiling",
            Self::Abs => "abs",
            Self::Trunc => "trunc",
            Self::Sum => "sum",
            Self::Count => "count",
            Self::Min => "min",
            Self::Max => "max",
            Self::Average => "average",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::Stddev => "stddev",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Length => "length",
            Self::RandomN => "randomn",
            Self::Complement => "complement",
        }
    }

    #[must_use]
    pub const fn external_name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt:",
            Self::Log => "log:",
            Self::Ln => "ln:",
            Self::Exp => "exp:",
            Self::Floor => "floor:",
            Self::Ceiling => "ceiling:",
            Self::Abs => "abs:",
            Self::Trunc => "trunc:",
            Self::Sum => "sum:",
            Self::Count => "count:",
            Self::Min => "min:",
            Self::Max => "max:",
            Self::Average => "average:",
            Self::Median => "median:",
            Self::Mode => "mode:",
            Self::Stddev => "stddev:",
            Self::Uppercase => "uppercase:",
            Self::Lowercase => "lowercase:",
            Self::Length => "length:",
            Self::RandomN => "randomn:",
            Self::Complement => "onesComplement:",
        }
    }

    /// Aggregates apply to a sequence; the capability requirement is on the
    /// element type.
    #[must_use]
    pub(crate) const fn is_aggregate(self) -> bool {
        matches!(
            self,
            Self::Sum
                | Self::Count
                | Self::Min
                | Self::Max
                | Self::Average
                | Self::Median
                | Self::Mode
                | Self::Stddev
        )
    }

    #[must_use]
    pub(crate) const fn required_capability(self) -> Capability {
        match self {
            Self::Sqrt
            | Self::Log
            | Self::Ln
            | Self::Exp
            | Self::Floor
            | Self::Ceiling
            | Self::Abs
            | Self::Trunc
            | Self::Sum
            | Self::Count
            | Self::Min
            | Self::Max
            | Self::Average
            | Self::Median
            | Self::Mode
            | Self::Stddev => Capability::Numeric,
            Self::Uppercase | Self::Lowercase | Self::Length => Capability::Stringlike,
            Self::RandomN | Self::Complement => Capability::Integer,
        }
    }

    #[must_use]
    pub(crate) fn result_type(self, operand: &DataType) -> DataType {
        match self {
            Self::Length => DataType::Int64,
            _ if self.is_aggregate() => operand
                .element()
                .cloned()
                // constructors guarantee aggregates see a sequence
                .unwrap_or_else(|| operand.clone()),
            _ => operand.clone(),
        }
    }
}

///
/// BinaryFunc
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BinaryFunc {
    // arithmetic: both operands the same Numeric type
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
    // bitwise: both operands the same Integer type
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    // location: both operands the same Locationlike type -> Float64
    Distance,
}

impl BinaryFunc {
    /// Short name used in construction errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Modulus => "modulus",
            Self::Power => "power",
            Self::BitAnd => "bitwise_and",
            Self::BitOr => "bitwise_or",
            Self::BitXor => "bitwise_xor",
            Self::LeftShift => "left_shift",
            Self::RightShift => "right_shift",
            Self::Distance => "distance",
        }
    }

    #[must_use]
    pub const fn external_name(self) -> &'static str {
        match self {
            Self::Add => "add:to:",
            Self::Subtract => "from:subtract:",
            Self::Multiply => "multiply:by:",
            Self::Divide => "divide:by:",
            Self::Modulus => "modulus:by:",
            Self::Power => "raise:toPower:",
            Self::BitAnd => "bitwiseAnd:with:",
            Self::BitOr => "bitwiseOr:with:",
            Self::BitXor => "bitwiseXor:with:",
            Self::LeftShift => "leftshift:by:",
            Self::RightShift => "rightshift:by:",
            Self::Distance => "distanceToLocation:fromLocation:",
        }
    }

    #[must_use]
    pub(crate) const fn required_capability(self) -> Capability {
        match self {
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Modulus
            | Self::Power => Capability::Numeric,
            Self::BitAnd | Self::BitOr | Self::BitXor | Self::LeftShift | Self::RightShift => {
                Capability::Integer
            }
            Self::Distance => Capability::Locationlike,
        }
    }

    #[must_use]
    pub(crate) fn result_type(self, operand: &DataType) -> DataType {
        match self {
            Self::Distance => DataType::Float64,
            _ => operand.clone(),
        }
    }
}

///
/// SetOp
///
/// Set operations lower to the engine's dedicated set node constructors
/// rather than tagged function calls.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SetOp {
    Union,
    Intersect,
    Difference,
}

impl SetOp {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersect => "intersect",
            Self::Difference => "difference",
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
    fn external_names_match_the_engine_vocabulary() {
        assert_eq!(BinaryFunc::Add.external_name(), "add:to:");
        assert_eq!(BinaryFunc::Subtract.external_name(), "from:subtract:");
        assert_eq!(BinaryFunc::Multiply.external_name(), "multiply:by:");
        assert_eq!(BinaryFunc::Divide.external_name(), "divide:by:");
        assert_eq!(BinaryFunc::Modulus.external_name(), "modulus:by:");
        assert_eq!(BinaryFunc::Power.external_name(), "raise:toPower:");
        assert_eq!(BinaryFunc::BitAnd.external_name(), "bitwiseAnd:with:");
        assert_eq!(BinaryFunc::BitOr.external_name(), "bitwiseOr:with:");
        assert_eq!(BinaryFunc::BitXor.external_name(), "bitwiseXor:with:");
        assert_eq!(BinaryFunc::LeftShift.external_name(), "leftshift:by:");
        assert_eq!(BinaryFunc::RightShift.external_name(), "rightshift:by:");
        assert_eq!(
            BinaryFunc::Distance.external_name(),
            "distanceToLocation:fromLocation:"
        );

        assert_eq!(UnaryFunc::Sqrt.external_name(), "sqrt:");
        assert_eq!(UnaryFunc::Log.external_name(), "log:");
        assert_eq!(UnaryFunc::Ln.external_name(), "ln:");
        assert_eq!(UnaryFunc::Exp.external_name(), "exp:");
        assert_eq!(UnaryFunc::Floor.external_name(), "floor:");
        assert_eq!(UnaryFunc::Ceiling.external_name(), "ceiling:");
        assert_eq!(UnaryFunc::Abs.external_name(), "abs:");
        assert_eq!(UnaryFunc::Trunc.external_name(), "trunc:");
        assert_eq!(UnaryFunc::Sum.external_name(), "sum:");
        assert_eq!(UnaryFunc::Count.external_name(), "count:");
        assert_eq!(UnaryFunc::Min.external_name(), "min:");
        assert_eq!(UnaryFunc::Max.external_name(), "max:");
        assert_eq!(UnaryFunc::Average.external_name(), "average:");
        assert_eq!(UnaryFunc::Median.external_name(), "median:");
        assert_eq!(UnaryFunc::Mode.external_name(), "mode:");
        assert_eq!(UnaryFunc::Stddev.external_name(), "stddev:");
        assert_eq!(UnaryFunc::Uppercase.external_name(), "uppercase:");
        assert_eq!(UnaryFunc::Lowercase.external_name(), "lowercase:");
        assert_eq!(UnaryFunc::Length.external_name(), "length:");
        assert_eq!(UnaryFunc::RandomN.external_name(), "randomn:");
        assert_eq!(UnaryFunc::Complement.external_name(), "onesComplement:");

        assert_eq!(NullaryFunc::Random.external_name(), "random");
        assert_eq!(NullaryFunc::Now.external_name(), "now");

        assert_eq!(INDEX_FUNCTION, "objectFrom:withIndex:");
    }

    #[test]
    fn length_always_yields_int64() {
        assert_eq!(
            UnaryFunc::Length.result_type(&DataType::Text),
            DataType::Int64
        );
    }

    #[test]
    fn aggregates_yield_the_element_type() {
        let seq = DataType::List(Box::new(DataType::Float32));
        assert_eq!(UnaryFunc::Sum.result_type(&seq), DataType::Float32);
        assert_eq!(UnaryFunc::Count.result_type(&seq), DataType::Float32);
    }

    #[test]
    fn distance_yields_float64() {
        assert_eq!(
            BinaryFunc::Distance.result_type(&DataType::Location),
            DataType::Float64
        );
    }
}
