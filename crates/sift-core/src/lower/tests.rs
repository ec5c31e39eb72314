use crate::{
    expr::Expr,
    native::{CompoundKind, NativePredicate},
    predicate::{CompareOp, Comparison, Predicate},
    types::DataType,
};
use proptest::prelude::*;

fn age() -> Expr {
    Expr::key_path(DataType::Int64, "age")
}

fn int_set(path: &str) -> Expr {
    Expr::key_path(DataType::Set(Box::new(DataType::Int64)), path)
}

//
// rendered scenarios
//

#[test]
fn renders_a_conjunction_of_comparisons() {
    let pred = age().gt(21_i64).unwrap() & age().lt(42_i64).unwrap();

    assert_eq!(pred.lower().to_string(), "age > 21 AND age < 42");
}

#[test]
fn renders_a_three_way_conjunction_flat_in_either_association() {
    let a = age().gt(1_i64).unwrap();
    let b = age().gt(2_i64).unwrap();
    let c = age().gt(3_i64).unwrap();

    let rendered = "age > 1 AND age > 2 AND age > 3";
    assert_eq!(
        ((a.clone() & b.clone()) & c.clone()).lower().to_string(),
        rendered
    );
    assert_eq!((a & (b & c)).lower().to_string(), rendered);
}

#[test]
fn renders_negation_with_parentheses() {
    let pred = !age().gt(42_i64).unwrap();

    assert_eq!(pred.lower().to_string(), "!(age > 42)");
}

#[test]
fn renders_quantified_comparisons() {
    // the comparison is written per-element; the quantifier spans the
    // collection behind the key path
    let comparison = Comparison::eq(age(), 42_i64).unwrap();

    assert_eq!(
        Predicate::all(comparison.clone()).lower().to_string(),
        "ALL age == 42"
    );
    assert_eq!(
        Predicate::any(comparison).lower().to_string(),
        "ANY age == 42"
    );
}

#[test]
fn renders_set_operations_with_engine_keywords() {
    assert_eq!(
        int_set("age")
            .difference(int_set("beauty"))
            .unwrap()
            .lower()
            .to_string(),
        "age MINUS beauty"
    );
    assert_eq!(
        int_set("age")
            .intersect(int_set("beauty"))
            .unwrap()
            .lower()
            .to_string(),
        "age INTERSECT beauty"
    );
    assert_eq!(
        int_set("age")
            .union(int_set("beauty"))
            .unwrap()
            .lower()
            .to_string(),
        "age UNION beauty"
    );
}

#[test]
fn renders_index_access_for_lists_and_maps() {
    let list = Expr::key_path(DataType::List(Box::new(DataType::Int64)), "age");
    assert_eq!(list.index(1_i64).unwrap().lower().to_string(), "age[1]");

    let map = Expr::key_path(
        DataType::Map(Box::new(DataType::Text), Box::new(DataType::Int64)),
        "age",
    );
    assert_eq!(
        map.index("one").unwrap().lower().to_string(),
        "age[\"one\"]"
    );
}

#[test]
fn renders_literals_variables_and_self() {
    assert_eq!(Predicate::literal(true).lower().to_string(), "TRUEPREDICATE");
    assert_eq!(
        Predicate::literal(false).lower().to_string(),
        "FALSEPREDICATE"
    );
    assert_eq!(
        Expr::variable(DataType::Int64, "x").lower().to_string(),
        "$x"
    );
    assert_eq!(Expr::this(DataType::Int64).lower().to_string(), "SELF");
}

#[test]
fn renders_subqueries() {
    let scores = Expr::key_path(DataType::List(Box::new(DataType::Int64)), "scores");
    let filter = Expr::variable(DataType::Int64, "x").gt(0_i64).unwrap();
    let node = Expr::subquery(scores, "x", DataType::Int64, filter).unwrap();

    assert_eq!(node.lower().to_string(), "SUBQUERY(scores, $x, $x > 0)");
}

#[test]
fn renders_function_lowering_with_engine_names() {
    let node = age().add(1_i64).unwrap();
    assert_eq!(node.lower().to_string(), "add:to:(age, 1)");

    let node = age().subtract(1_i64).unwrap();
    assert_eq!(node.lower().to_string(), "from:subtract:(age, 1)");
}

//
// structure
//

#[test]
fn opposite_connective_lowers_as_one_opaque_member() {
    let a = age().gt(1_i64).unwrap();
    let b = age().gt(2_i64).unwrap();
    let c = age().gt(3_i64).unwrap();

    let lowered = ((a | b) & c).lower();

    let NativePredicate::Compound {
        kind: CompoundKind::And,
        subpredicates,
    } = &lowered
    else {
        panic!("expected an AND compound");
    };
    assert_eq!(subpredicates.len(), 2);
    assert!(matches!(
        subpredicates[0],
        NativePredicate::Compound {
            kind: CompoundKind::Or,
            ..
        }
    ));
}

#[test]
fn comparison_operators_carry_their_symbols() {
    for (op, symbol) in [
        (CompareOp::Lt, "<"),
        (CompareOp::Lte, "<="),
        (CompareOp::Gt, ">"),
        (CompareOp::Gte, ">="),
        (CompareOp::Eq, "=="),
        (CompareOp::Ne, "!="),
    ] {
        let pred: Predicate = Comparison::new(op, age(), 42_i64).unwrap().into();
        assert_eq!(pred.lower().to_string(), format!("age {symbol} 42"));
    }
}

//
// properties
//

fn leaf() -> impl Strategy<Value = Predicate> {
    let ops = prop::sample::select(vec![
        CompareOp::Lt,
        CompareOp::Lte,
        CompareOp::Gt,
        CompareOp::Gte,
        CompareOp::Eq,
        CompareOp::Ne,
    ]);

    prop_oneof![
        any::<bool>().prop_map(Predicate::literal),
        (ops, any::<i64>()).prop_map(|(op, n)| {
            Comparison::new(op, age(), n)
                .map(Predicate::Compare)
                .unwrap()
        }),
    ]
}

fn predicate_tree() -> impl Strategy<Value = Predicate> {
    leaf().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a & b),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a | b),
            inner.prop_map(|sub| !sub),
        ]
    })
}

proptest! {
    #[test]
    fn lowering_is_deterministic(pred in predicate_tree()) {
        prop_assert_eq!(pred.lower(), pred.lower());
    }

    #[test]
    fn and_chains_flatten_regardless_of_association(
        leaves in prop::collection::vec(leaf(), 2..8),
    ) {
        let mut iter = leaves.clone().into_iter();
        let first = iter.next().unwrap();
        let left_leaning = iter.fold(first, |acc, leaf| acc & leaf);

        let mut iter = leaves.clone().into_iter().rev();
        let last = iter.next().unwrap();
        let right_leaning = iter.fold(last, |acc, leaf| leaf & acc);

        let lowered = left_leaning.lower();
        prop_assert_eq!(&lowered, &right_leaning.lower());

        if let NativePredicate::Compound { subpredicates, .. } = &lowered {
            prop_assert_eq!(subpredicates.len(), leaves.len());
        } else {
            prop_assert!(false, "expected a compound");
        }
    }

    #[test]
    fn or_chains_flatten_regardless_of_association(
        leaves in prop::collection::vec(leaf(), 2..8),
    ) {
        let mut iter = leaves.clone().into_iter();
        let first = iter.next().unwrap();
        let left_leaning = iter.fold(first, |acc, leaf| acc | leaf);

        let mut iter = leaves.into_iter().rev();
        let last = iter.next().unwrap();
        let right_leaning = iter.fold(last, |acc, leaf| leaf | acc);

        prop_assert_eq!(left_leaning.lower(), right_leaning.lower());
    }

    #[test]
    fn rendering_never_panics(pred in predicate_tree()) {
        let _ = pred.lower().to_string();
    }
}
