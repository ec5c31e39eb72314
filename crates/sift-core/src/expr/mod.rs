pub mod func;

mod build;


pub use build::IntoExpr;

use crate::{
    predicate::Predicate,
    types::DataType,
    value::Value,
};
use func::{BinaryFunc, NullaryFunc, SetOp, UnaryFunc};

///
/// Expr
///
/// Expression IR: an immutable, result-typed tree describing a value
/// computed from a record. Composite nodes only come into existence through
/// the capability-checked builders in `build.rs`; once built, a tree may be
/// shared and lowered from any thread.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Boxed literal.
    Const { value: Value, ty: DataType },
    /// Field access by key path.
    KeyPath { path: String, ty: DataType },
    /// Named substitution variable, bound at evaluation time.
    Variable { name: String, ty: DataType },
    /// The evaluated object itself.
    This { ty: DataType },
    /// Wildcard key for map traversal.
    AnyKey { ty: DataType },
    Nullary {
        func: NullaryFunc,
    },
    Unary {
        func: UnaryFunc,
        sub: Box<Expr>,
    },
    Binary {
        func: BinaryFunc,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Index {
        container: Box<Expr>,
        key: Box<Expr>,
    },
    SetOp {
        op: SetOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Filter a sequence with a predicate over an iterator variable.
    Subquery {
        sequence: Box<Expr>,
        iterator: String,
        filter: Box<Predicate>,
    },
}

impl Expr {
    #[must_use]
    pub fn key_path(ty: DataType, path: impl Into<String>) -> Self {
        Self::KeyPath {
            path: path.into(),
            ty,
        }
    }

    #[must_use]
    pub fn variable(ty: DataType, name: impl Into<String>) -> Self {
        Self::Variable {
            name: name.into(),
            ty,
        }
    }

    /// Self-reference term: the object under evaluation.
    #[must_use]
    pub const fn this(ty: DataType) -> Self {
        Self::This { ty }
    }

    #[must_use]
    pub const fn any_key(ty: DataType) -> Self {
        Self::AnyKey { ty }
    }

    /// Wrap a literal (or pass an expression through unchanged).
    #[must_use]
    pub fn constant(value: impl IntoExpr) -> Self {
        value.into_expr()
    }

    #[must_use]
    pub const fn random() -> Self {
        Self::Nullary {
            func: NullaryFunc::Random,
        }
    }

    #[must_use]
    pub const fn now() -> Self {
        Self::Nullary {
            func: NullaryFunc::Now,
        }
    }

    /// The semantic type this expression evaluates to.
    #[must_use]
    pub fn result_type(&self) -> DataType {
        match self {
            Self::Const { ty, .. }
            | Self::KeyPath { ty, .. }
            | Self::Variable { ty, .. }
            | Self::This { ty }
            | Self::AnyKey { ty } => ty.clone(),
            Self::Nullary { func } => func.result_type(),
            Self::Unary { func, sub } => func.result_type(&sub.result_type()),
            Self::Binary { func, lhs, .. } => func.result_type(&lhs.result_type()),
            Self::Index { container, .. } => {
                // constructors guarantee the container is indexable
                match container.result_type() {
                    DataType::List(elem) => *elem,
                    DataType::Map(_, value) => *value,
                    other => other,
                }
            }
            Self::SetOp { lhs, .. } => lhs.result_type(),
            Self::Subquery { sequence, .. } => sequence.result_type(),
        }
    }
}
