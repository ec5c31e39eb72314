use super::Predicate;

///
/// Flatten views
///
/// Associativity normalization, computed on demand during lowering.
///
/// Guarantees:
/// - a chain of ANDs flattens to one ordered conjunction regardless of how
///   it was associated at construction (same for OR)
/// - left-to-right operand order is preserved
/// - an Or inside an AND-view (and vice versa) stays one opaque member
/// - Not never flattens its subtree, even when its subject is And/Or
///
/// No simplification happens here: literals are kept, nothing is reordered.
///

impl Predicate {
    /// Ordered list of members to conjoin when this predicate is lowered as
    /// an AND.
    #[must_use]
    pub fn and_view(&self) -> Vec<&Self> {
        match self {
            Self::And(left, right) => {
                let mut view = left.and_view();
                view.extend(right.and_view());
                view
            }
            Self::Literal(_)
            | Self::Compare(_)
            | Self::Quantified { .. }
            | Self::Block(_)
            | Self::Or(..)
            | Self::Not(_) => vec![self],
        }
    }

    /// Ordered list of members to disjoin when this predicate is lowered as
    /// an OR.
    #[must_use]
    pub fn or_view(&self) -> Vec<&Self> {
        match self {
            Self::Or(left, right) => {
                let mut view = left.or_view();
                view.extend(right.or_view());
                view
            }
            Self::Literal(_)
            | Self::Compare(_)
            | Self::Quantified { .. }
            | Self::Block(_)
            | Self::And(..)
            | Self::Not(_) => vec![self],
        }
    }
}
