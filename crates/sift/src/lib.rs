//! ## Crate layout
//! - `core`: the capability-typed IR — expressions, predicates, the data
//!   model, and lowering into the evaluation engine's node vocabulary.
//!
//! The `prelude` module mirrors the surface used when composing queries.

pub use sift_core as core;

pub use sift_core::error::TypeConstraintViolation;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Query Prelude
///

pub mod prelude {
    pub use crate::core::{
        error::TypeConstraintViolation,
        expr::{Expr, IntoExpr},
        native::{NativeExpr, NativePredicate},
        predicate::{Bindings, Block, CompareOp, Comparison, Predicate, Quantifier},
        types::{Capability, DataType},
        value::{Date, Location, Value},
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn version_matches_the_workspace() {
        assert!(!crate::VERSION.is_empty());
    }

    #[test]
    fn prelude_covers_building_and_lowering() {
        let age = Expr::key_path(DataType::Int64, "age");
        let pred = age.gt(21_i64).unwrap();

        assert_eq!(pred.lower().to_string(), "age > 21");
    }
}
