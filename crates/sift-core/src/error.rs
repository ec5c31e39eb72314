use crate::types::{Capability, DataType};
use thiserror::Error as ThisError;

///
/// TypeConstraintViolation
///
/// Construction-time rejection of an IR node whose operand result types fail
/// the capability or identity requirements of its operation family. Fatal to
/// that construction call: no node is produced, and nothing downstream ever
/// re-checks. Lowering is total over IR that passed these gates.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TypeConstraintViolation {
    #[error("{operation}: operand type {ty} lacks the {capability} capability")]
    MissingCapability {
        operation: &'static str,
        ty: DataType,
        capability: Capability,
    },

    #[error("{operation}: operand types {left} and {right} must be identical")]
    OperandMismatch {
        operation: &'static str,
        left: DataType,
        right: DataType,
    },

    #[error("{operation}: operand type {ty} is not an iterable sequence")]
    NotASequence {
        operation: &'static str,
        ty: DataType,
    },

    #[error("cannot index {container} with a {key} key")]
    IndexKeyMismatch { container: DataType, key: DataType },

    #[error("subquery iterator is declared {iterator} but the sequence yields {element}")]
    IteratorMismatch {
        element: DataType,
        iterator: DataType,
    },
}
