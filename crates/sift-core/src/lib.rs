//! Core IR for Sift: capability-typed expression/predicate trees and their
//! deterministic lowering into the evaluation engine's node vocabulary.
//!
//! Everything here is an immutable value. Constructors enforce the type
//! rules once (`error::TypeConstraintViolation`); lowering is a pure, total
//! read of the tree.
#![warn(unreachable_pub)]

pub mod error;
pub mod expr;
pub mod native;
pub mod predicate;
pub mod types;
pub mod value;

mod lower;

///
/// Prelude
///
/// Domain vocabulary only; errors and engine nodes are imported explicitly.
///

pub mod prelude {
    pub use crate::{
        expr::{Expr, IntoExpr},
        predicate::{Comparison, Predicate, Quantifier},
        types::{Capability, DataType},
        value::{Date, Location, Value},
    };
}
