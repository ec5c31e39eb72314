use crate::{
    expr::{
        Expr,
        func::{INDEX_FUNCTION, SetOp},
    },
    native::{CompoundKind, Modifier, NativeExpr, NativePredicate},
    predicate::{Comparison, Predicate, Quantifier},
};

///
/// Lowering
///
/// Pure translation from IR to engine nodes: a single bottom-up pass,
/// deterministic, total over IR that passed construction, and read-only on
/// the tree (the same tree may be lowered repeatedly and concurrently).
/// Compound predicates lower through the flatten views, so a binary chain
/// of ANDs (or ORs) becomes one n-ary compound node.
///

impl Expr {
    #[must_use]
    pub fn lower(&self) -> NativeExpr {
        match self {
            Self::Const { value, .. } => NativeExpr::Constant(value.clone()),
            Self::KeyPath { path, .. } => NativeExpr::KeyPath(path.clone()),
            Self::Variable { name, .. } => NativeExpr::Variable(name.clone()),
            Self::This { .. } => NativeExpr::EvaluatedObject,
            Self::AnyKey { .. } => NativeExpr::AnyKey,
            Self::Nullary { func } => NativeExpr::Function {
                name: func.external_name(),
                args: Vec::new(),
            },
            Self::Unary { func, sub } => NativeExpr::Function {
                name: func.external_name(),
                args: vec![sub.lower()],
            },
            Self::Binary { func, lhs, rhs } => NativeExpr::Function {
                name: func.external_name(),
                args: vec![lhs.lower(), rhs.lower()],
            },
            Self::Index { container, key } => NativeExpr::Function {
                name: INDEX_FUNCTION,
                args: vec![container.lower(), key.lower()],
            },
            Self::SetOp { op, lhs, rhs } => {
                let lhs = Box::new(lhs.lower());
                let rhs = Box::new(rhs.lower());
                match op {
                    SetOp::Union => NativeExpr::Union(lhs, rhs),
                    SetOp::Intersect => NativeExpr::Intersect(lhs, rhs),
                    SetOp::Difference => NativeExpr::Minus(lhs, rhs),
                }
            }
            Self::Subquery {
                sequence,
                iterator,
                filter,
            } => NativeExpr::Subquery {
                sequence: Box::new(sequence.lower()),
                variable: iterator.clone(),
                filter: Box::new(filter.lower()),
            },
        }
    }
}

impl Comparison {
    fn lower_with(&self, modifier: Modifier) -> NativePredicate {
        NativePredicate::Comparison {
            lhs: self.lhs().lower(),
            rhs: self.rhs().lower(),
            op: self.op(),
            modifier,
        }
    }
}

impl Predicate {
    #[must_use]
    pub fn lower(&self) -> NativePredicate {
        match self {
            Self::Literal(value) => NativePredicate::Value(*value),
            Self::Compare(comparison) => comparison.lower_with(Modifier::Direct),
            Self::Quantified {
                quantifier,
                comparison,
            } => comparison.lower_with(match quantifier {
                Quantifier::All => Modifier::All,
                Quantifier::Any => Modifier::Any,
            }),
            Self::Block(block) => NativePredicate::Block(block.clone()),
            Self::And(..) => NativePredicate::Compound {
                kind: CompoundKind::And,
                subpredicates: self.and_view().into_iter().map(Self::lower).collect(),
            },
            Self::Or(..) => NativePredicate::Compound {
                kind: CompoundKind::Or,
                subpredicates: self.or_view().into_iter().map(Self::lower).collect(),
            },
            Self::Not(sub) => NativePredicate::Not(Box::new(sub.lower())),
        }
    }
}

#[cfg(test)]
mod tests;
