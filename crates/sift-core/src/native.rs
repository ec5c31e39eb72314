use crate::{
    expr::func::INDEX_FUNCTION,
    predicate::{Block, CompareOp},
    value::Value,
};
use std::fmt;

///
/// Engine node vocabulary
///
/// The fully-lowered representation handed to the external evaluation
/// engine. The core only ever emits nodes built from these constructors;
/// the engine's evaluation loop lives on the other side of this boundary.
///
/// `Display` implements the engine's format-string rendering convention,
/// which is also what the scenario tests assert against.
///

///
/// NativeExpr
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativeExpr {
    Constant(Value),
    KeyPath(String),
    Variable(String),
    EvaluatedObject,
    AnyKey,
    Function {
        name: &'static str,
        args: Vec<NativeExpr>,
    },
    Union(Box<NativeExpr>, Box<NativeExpr>),
    Intersect(Box<NativeExpr>, Box<NativeExpr>),
    Minus(Box<NativeExpr>, Box<NativeExpr>),
    Subquery {
        sequence: Box<NativeExpr>,
        variable: String,
        filter: Box<NativePredicate>,
    },
}

///
/// Modifier
///
/// How a comparison applies to its left operand: directly, or quantified
/// over every/any element of a collection.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Modifier {
    Direct,
    All,
    Any,
}

///
/// CompoundKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompoundKind {
    And,
    Or,
}

impl CompoundKind {
    #[must_use]
    pub const fn connective(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

///
/// NativePredicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum NativePredicate {
    Value(bool),
    Comparison {
        lhs: NativeExpr,
        rhs: NativeExpr,
        op: CompareOp,
        modifier: Modifier,
    },
    Compound {
        kind: CompoundKind,
        subpredicates: Vec<NativePredicate>,
    },
    Not(Box<NativePredicate>),
    Block(Block),
}

impl fmt::Display for NativeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::KeyPath(path) => write!(f, "{path}"),
            Self::Variable(name) => write!(f, "${name}"),
            Self::EvaluatedObject => write!(f, "SELF"),
            Self::AnyKey => write!(f, "ANYKEY"),
            Self::Function { name, args } if *name == INDEX_FUNCTION && args.len() == 2 => {
                write!(f, "{}[{}]", args[0], args[1])
            }
            Self::Function { name, args } => {
                write!(f, "{name}(")?;
                for (index, arg) in args.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Self::Union(lhs, rhs) => write!(f, "{lhs} UNION {rhs}"),
            Self::Intersect(lhs, rhs) => write!(f, "{lhs} INTERSECT {rhs}"),
            Self::Minus(lhs, rhs) => write!(f, "{lhs} MINUS {rhs}"),
            Self::Subquery {
                sequence,
                variable,
                filter,
            } => write!(f, "SUBQUERY({sequence}, ${variable}, {filter})"),
        }
    }
}

impl fmt::Display for NativePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(true) => write!(f, "TRUEPREDICATE"),
            Self::Value(false) => write!(f, "FALSEPREDICATE"),
            Self::Comparison {
                lhs,
                rhs,
                op,
                modifier,
            } => {
                match modifier {
                    Modifier::Direct => {}
                    Modifier::All => write!(f, "ALL ")?,
                    Modifier::Any => write!(f, "ANY ")?,
                }
                write!(f, "{lhs} {} {rhs}", op.symbol())
            }
            Self::Compound {
                kind,
                subpredicates,
            } => {
                for (index, sub) in subpredicates.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{}", kind.connective())?;
                    }
                    // compound members parenthesize to keep grouping visible
                    if matches!(sub, Self::Compound { .. }) {
                        write!(f, "({sub})")?;
                    } else {
                        write!(f, "{sub}")?;
                    }
                }
                Ok(())
            }
            Self::Not(sub) => write!(f, "!({sub})"),
            Self::Block(_) => write!(f, "BLOCKPREDICATE"),
        }
    }
}

///
/// TESTS
///
