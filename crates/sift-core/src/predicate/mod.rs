mod block;
mod flatten;


pub use block::{Bindings, Block};

use crate::{
    error::TypeConstraintViolation,
    expr::{Expr, IntoExpr},
    types::Capability,
};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CompareOp {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Ne,
}

impl CompareOp {
    /// Short name used in construction errors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lt => "less_than",
            Self::Lte => "less_than_or_equal",
            Self::Gt => "greater_than",
            Self::Gte => "greater_than_or_equal",
            Self::Eq => "equal",
            Self::Ne => "not_equal",
        }
    }

    /// Engine rendering symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

///
/// Quantifier
///
/// Collection-wide modifier applied to a single comparison.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Quantifier {
    All,
    Any,
}

///
/// Comparison
///
/// A relational test between two expressions of the same comparable result
/// type. The type check happens here, once; fields stay private so no
/// unchecked comparison can exist.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    op: CompareOp,
    lhs: Expr,
    rhs: Expr,
}

impl Comparison {
    pub fn new(
        op: CompareOp,
        lhs: impl IntoExpr,
        rhs: impl IntoExpr,
    ) -> Result<Self, TypeConstraintViolation> {
        let lhs = lhs.into_expr();
        let rhs = rhs.into_expr();
        let left = lhs.result_type();
        let right = rhs.result_type();

        if left != right {
            return Err(TypeConstraintViolation::OperandMismatch {
                operation: op.name(),
                left,
                right,
            });
        }
        if !left.supports(Capability::Comparable) {
            return Err(TypeConstraintViolation::MissingCapability {
                operation: op.name(),
                ty: left,
                capability: Capability::Comparable,
            });
        }

        Ok(Self { op, lhs, rhs })
    }

    pub fn lt(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::new(CompareOp::Lt, lhs, rhs)
    }

    pub fn lte(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::new(CompareOp::Lte, lhs, rhs)
    }

    pub fn gt(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::new(CompareOp::Gt, lhs, rhs)
    }

    pub fn gte(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::new(CompareOp::Gte, lhs, rhs)
    }

    pub fn eq(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::new(CompareOp::Eq, lhs, rhs)
    }

    pub fn ne(lhs: impl IntoExpr, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::new(CompareOp::Ne, lhs, rhs)
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub const fn lhs(&self) -> &Expr {
        &self.lhs
    }

    #[must_use]
    pub const fn rhs(&self) -> &Expr {
        &self.rhs
    }
}

///
/// Predicate
///
/// Boolean-valued IR. Compound nodes keep their binary construction shape;
/// associativity is normalized by the flatten views during lowering, never
/// here, so construction stays O(1) per node.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    Literal(bool),
    Compare(Comparison),
    Quantified {
        quantifier: Quantifier,
        comparison: Comparison,
    },
    Block(Block),
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    #[must_use]
    pub const fn literal(value: bool) -> Self {
        Self::Literal(value)
    }

    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(sub: Self) -> Self {
        Self::Not(Box::new(sub))
    }

    /// The comparison must hold for every element of the collection operand.
    #[must_use]
    pub const fn all(comparison: Comparison) -> Self {
        Self::Quantified {
            quantifier: Quantifier::All,
            comparison,
        }
    }

    /// The comparison must hold for at least one element.
    #[must_use]
    pub const fn any(comparison: Comparison) -> Self {
        Self::Quantified {
            quantifier: Quantifier::Any,
            comparison,
        }
    }

    /// Defer to an opaque typed callback at evaluation time.
    #[must_use]
    pub fn block<T, F>(callback: F) -> Self
    where
        T: std::any::Any,
        F: Fn(&T, &Bindings) -> bool + Send + Sync + 'static,
    {
        Self::Block(Block::new(callback))
    }
}

impl From<Comparison> for Predicate {
    fn from(comparison: Comparison) -> Self {
        Self::Compare(comparison)
    }
}

///
/// Comparison shortcuts on expressions
///
/// `age.gt(21)?` reads like the original operator DSL; the fallible builder
/// replaces operator overloads that cannot return `Result`.
///

#[expect(clippy::should_implement_trait)]
impl Expr {
    pub fn lt(self, rhs: impl IntoExpr) -> Result<Predicate, TypeConstraintViolation> {
        Comparison::lt(self, rhs).map(Predicate::Compare)
    }

    pub fn lte(self, rhs: impl IntoExpr) -> Result<Predicate, TypeConstraintViolation> {
        Comparison::lte(self, rhs).map(Predicate::Compare)
    }

    pub fn gt(self, rhs: impl IntoExpr) -> Result<Predicate, TypeConstraintViolation> {
        Comparison::gt(self, rhs).map(Predicate::Compare)
    }

    pub fn gte(self, rhs: impl IntoExpr) -> Result<Predicate, TypeConstraintViolation> {
        Comparison::gte(self, rhs).map(Predicate::Compare)
    }

    pub fn eq(self, rhs: impl IntoExpr) -> Result<Predicate, TypeConstraintViolation> {
        Comparison::eq(self, rhs).map(Predicate::Compare)
    }

    pub fn ne(self, rhs: impl IntoExpr) -> Result<Predicate, TypeConstraintViolation> {
        Comparison::ne(self, rhs).map(Predicate::Compare)
    }
}

///
/// Combinator operators
///
/// `&`, `|` and `!` are total over predicates, so they get real operator
/// overloads; scoped strictly to the predicate type.
///

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::and(self, rhs)
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::and(self.clone(), rhs.clone())
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::or(self, rhs)
    }
}

impl BitOr for &Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::or(self.clone(), rhs.clone())
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

impl Not for &Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        Predicate::Not(Box::new(self.clone()))
    }
}
