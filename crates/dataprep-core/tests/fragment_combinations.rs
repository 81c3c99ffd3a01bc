use dataprep_core::app::enumerator::{emit_combinations, expected_combination_count};
use dataprep_core::constants::DEFAULT_FRAGMENT_GROUPS;
use dataprep_core::domain::combine::{enumerate_combinations, non_empty_subsequences};

fn group(fragments: &[&str]) -> Vec<String> {
    fragments.iter().map(|s| s.to_string()).collect()
}

fn default_groups() -> Vec<Vec<String>> {
    DEFAULT_FRAGMENT_GROUPS
        .iter()
        .map(|g| g.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[test]
fn single_group_yields_two_pow_n_minus_one() {
    for n in 1..10usize {
        let fragments: Vec<String> = (0..n).map(|i| format!("f{}", i)).collect();
        let subs = non_empty_subsequences(&fragments);
        assert_eq!(subs.len(), (1 << n) - 1);
    }
}

#[test]
fn total_combinations_is_product_over_groups() {
    let groups = vec![
        group(&["a", "b", "c", "d"]),
        group(&["e"]),
        group(&["f", "g", "h"]),
    ];

    let combos = enumerate_combinations(&groups);
    assert_eq!(combos.len(), 15 * 1 * 7);
    assert_eq!(combos.len() as u128, expected_combination_count(&groups));
}

#[test]
fn two_group_scenario_order() {
    let groups = vec![group(&["a", "b"]), group(&["x"])];

    let combos = enumerate_combinations(&groups);

    assert_eq!(
        combos,
        vec![group(&["a", "x"]), group(&["b", "x"]), group(&["a", "b", "x"])]
    );
}

#[test]
fn empty_group_emits_nothing() {
    let groups = vec![group(&["a", "b"]), group(&[]), group(&["c"])];

    let combos = enumerate_combinations(&groups);
    assert!(combos.is_empty());

    let mut buf = Vec::new();
    let count = emit_combinations(&groups, &mut buf).unwrap();
    assert_eq!(count, 0);
    assert!(buf.is_empty());
}

#[test]
fn default_groups_emit_sixty_three_combinations() {
    let groups = default_groups();

    let mut buf = Vec::new();
    let count = emit_combinations(&groups, &mut buf).unwrap();

    // Group sizes 3, 2, 2: (2^3 - 1) * (2^2 - 1) * (2^2 - 1).
    assert_eq!(count, 63);
    assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 63);
}

#[test]
fn default_groups_first_and_last_combination() {
    let groups = default_groups();
    let combos = enumerate_combinations(&groups);

    // First: first fragment of each group. Last: every fragment of every
    // group, in group order.
    assert_eq!(combos[0], group(&["lord", "puti", "trum"]));
    assert_eq!(
        combos[62],
        group(&["lord", "ord ", "rd o", "puti", "utin", "trum", "rump"])
    );
}

#[test]
fn emission_order_matches_enumeration_order() {
    let groups = vec![group(&["a", "b"]), group(&["x", "y"])];

    let mut buf = Vec::new();
    emit_combinations(&groups, &mut buf).unwrap();

    let lines: Vec<String> = String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect();
    let expected: Vec<String> = enumerate_combinations(&groups)
        .iter()
        .map(|combo| format!("{:?}", combo))
        .collect();

    assert_eq!(lines, expected);
}
