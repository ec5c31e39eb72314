use crate::{
    error::TypeConstraintViolation,
    expr::{
        Expr,
        func::{BinaryFunc, SetOp, UnaryFunc},
    },
    predicate::Predicate,
    types::{Capability, DataType},
    value::{Scalar, Value},
};
use std::collections::BTreeSet;

///
/// IntoExpr
///
/// Operand position of every composite builder. Expressions pass through;
/// host scalars and typed collections wrap into `Const` leaves, so
/// `sub ∘ sub`, `sub ∘ const` and `const ∘ sub` all yield the same node
/// shape.
///

pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

macro_rules! impl_into_expr_scalar {
    ($($host:ty),* $(,)?) => {
        $(
            impl IntoExpr for $host {
                fn into_expr(self) -> Expr {
                    Expr::Const {
                        value: self.into(),
                        ty: <$host as Scalar>::data_type(),
                    }
                }
            }
        )*
    };
}

impl_into_expr_scalar! {
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
    String, crate::value::Date, crate::value::Location,
}

impl IntoExpr for &str {
    fn into_expr(self) -> Expr {
        Expr::Const {
            value: self.into(),
            ty: DataType::Text,
        }
    }
}

impl<T: Scalar> IntoExpr for Vec<T> {
    fn into_expr(self) -> Expr {
        Expr::Const {
            ty: DataType::List(Box::new(T::data_type())),
            value: Value::List(self.into_iter().map(Into::into).collect()),
        }
    }
}

impl<T: Scalar + Ord> IntoExpr for BTreeSet<T> {
    fn into_expr(self) -> Expr {
        Expr::Const {
            ty: DataType::Set(Box::new(T::data_type())),
            value: Value::Set(self.into_iter().map(Into::into).collect()),
        }
    }
}

///
/// Composite builders
///
/// Every builder checks its operation family's capability and identity
/// requirements and refuses to produce a node on failure. Nothing past this
/// point re-checks types.
///

#[expect(clippy::should_implement_trait)]
impl Expr {
    fn unary(func: UnaryFunc, sub: Self) -> Result<Self, TypeConstraintViolation> {
        let ty = sub.result_type();

        if func.is_aggregate() {
            let Some(element) = ty.element() else {
                return Err(TypeConstraintViolation::NotASequence {
                    operation: func.name(),
                    ty,
                });
            };
            if !element.supports(func.required_capability()) {
                return Err(TypeConstraintViolation::MissingCapability {
                    operation: func.name(),
                    ty: element.clone(),
                    capability: func.required_capability(),
                });
            }
        } else if !ty.supports(func.required_capability()) {
            return Err(TypeConstraintViolation::MissingCapability {
                operation: func.name(),
                ty,
                capability: func.required_capability(),
            });
        }

        Ok(Self::Unary {
            func,
            sub: Box::new(sub),
        })
    }

    fn binary(
        func: BinaryFunc,
        lhs: Self,
        rhs: Self,
    ) -> Result<Self, TypeConstraintViolation> {
        let left = lhs.result_type();
        let right = rhs.result_type();

        if left != right {
            return Err(TypeConstraintViolation::OperandMismatch {
                operation: func.name(),
                left,
                right,
            });
        }
        if !left.supports(func.required_capability()) {
            return Err(TypeConstraintViolation::MissingCapability {
                operation: func.name(),
                ty: left,
                capability: func.required_capability(),
            });
        }

        Ok(Self::Binary {
            func,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    fn set_op(op: SetOp, lhs: Self, rhs: Self) -> Result<Self, TypeConstraintViolation> {
        let left = lhs.result_type();
        let right = rhs.result_type();

        if !left.supports(Capability::SetLike) {
            return Err(TypeConstraintViolation::MissingCapability {
                operation: op.name(),
                ty: left,
                capability: Capability::SetLike,
            });
        }
        // The right side may be a set or any sequence of the same element.
        let Some(right_element) = right.element() else {
            return Err(TypeConstraintViolation::NotASequence {
                operation: op.name(),
                ty: right,
            });
        };
        if left.element() != Some(right_element) {
            return Err(TypeConstraintViolation::OperandMismatch {
                operation: op.name(),
                left,
                right,
            });
        }

        Ok(Self::SetOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    // arithmetic

    pub fn add(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::Add, self, rhs.into_expr())
    }

    pub fn subtract(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::Subtract, self, rhs.into_expr())
    }

    pub fn multiply(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::Multiply, self, rhs.into_expr())
    }

    pub fn divide(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::Divide, self, rhs.into_expr())
    }

    pub fn modulus(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::Modulus, self, rhs.into_expr())
    }

    pub fn power(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::Power, self, rhs.into_expr())
    }

    // bitwise

    pub fn bit_and(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::BitAnd, self, rhs.into_expr())
    }

    pub fn bit_or(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::BitOr, self, rhs.into_expr())
    }

    pub fn bit_xor(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::BitXor, self, rhs.into_expr())
    }

    pub fn left_shift(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::LeftShift, self, rhs.into_expr())
    }

    pub fn right_shift(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::RightShift, self, rhs.into_expr())
    }

    // math

    pub fn sqrt(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Sqrt, self)
    }

    pub fn log(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Log, self)
    }

    pub fn ln(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Ln, self)
    }

    pub fn exp(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Exp, self)
    }

    pub fn floor(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Floor, self)
    }

    pub fn ceiling(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Ceiling, self)
    }

    pub fn abs(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Abs, self)
    }

    pub fn trunc(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Trunc, self)
    }

    // aggregates over a sequence of numbers

    pub fn sum(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Sum, self)
    }

    pub fn count(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Count, self)
    }

    pub fn min(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Min, self)
    }

    pub fn max(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Max, self)
    }

    pub fn average(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Average, self)
    }

    pub fn median(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Median, self)
    }

    pub fn mode(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Mode, self)
    }

    pub fn stddev(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Stddev, self)
    }

    // string

    pub fn uppercase(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Uppercase, self)
    }

    pub fn lowercase(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Lowercase, self)
    }

    pub fn length(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Length, self)
    }

    // integer

    pub fn randomn(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::RandomN, self)
    }

    /// Bitwise ones-complement.
    pub fn complement(self) -> Result<Self, TypeConstraintViolation> {
        Self::unary(UnaryFunc::Complement, self)
    }

    // location

    pub fn distance(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::binary(BinaryFunc::Distance, self, rhs.into_expr())
    }

    // containers

    pub fn index(self, key: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        let container = self.result_type();
        let key = key.into_expr();
        let key_ty = key.result_type();

        if !container.supports(Capability::Indexable) {
            return Err(TypeConstraintViolation::MissingCapability {
                operation: "index",
                ty: container,
                capability: Capability::Indexable,
            });
        }
        if !container.accepts_index_key(&key_ty) {
            return Err(TypeConstraintViolation::IndexKeyMismatch {
                container,
                key: key_ty,
            });
        }

        Ok(Self::Index {
            container: Box::new(self),
            key: Box::new(key),
        })
    }

    pub fn union(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::set_op(SetOp::Union, self, rhs.into_expr())
    }

    pub fn intersect(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::set_op(SetOp::Intersect, self, rhs.into_expr())
    }

    pub fn difference(self, rhs: impl IntoExpr) -> Result<Self, TypeConstraintViolation> {
        Self::set_op(SetOp::Difference, self, rhs.into_expr())
    }

    /// Filter `sequence` with `filter`, binding each element to the iterator
    /// variable. The declared iterator type must match the sequence element;
    /// whether `filter` actually references the variable by this name is a
    /// caller convention and is not validated.
    pub fn subquery(
        sequence: Self,
        iterator: impl Into<String>,
        iterator_ty: DataType,
        filter: Predicate,
    ) -> Result<Self, TypeConstraintViolation> {
        let sequence_ty = sequence.result_type();
        let Some(element) = sequence_ty.element() else {
            return Err(TypeConstraintViolation::NotASequence {
                operation: "subquery",
                ty: sequence_ty,
            });
        };
        if *element != iterator_ty {
            return Err(TypeConstraintViolation::IteratorMismatch {
                element: element.clone(),
                iterator: iterator_ty,
            });
        }

        Ok(Self::Subquery {
            sequence: Box::new(sequence),
            iterator: iterator.into(),
            filter: Box::new(filter),
        })
    }
}
