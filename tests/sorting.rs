use fluentlist::testing::*;
use fluentlist::*;
use std::cell::Cell;

#[test]
fn sorted_natural_order() {
    assert_lists_equal(&FluentList::from(vec![3, 1, 2]).sorted(), &[1, 2, 3]);
}

#[test]
fn sorted_by_returns_sorted_copy() {
    let names = FluentList::from(sample_users())
        .sorted_by(|u| u.name.clone())
        .map(|u| u.name.clone());
    assert_lists_equal(
        &names,
        &["alice", "anna", "jack", "jane", "tom"].map(String::from),
    );
}

#[test]
fn sorted_by_is_stable() {
    let list = FluentList::from(vec![("a", 2), ("b", 1), ("c", 2), ("d", 1)]);
    let out = list.clone().sorted_by(|p| p.1).map(|p| p.0);
    assert_lists_equal(&out, &["b", "d", "a", "c"]);

    let out = list.sorted_by_descending(|p| p.1).map(|p| p.0);
    assert_lists_equal(&out, &["a", "c", "b", "d"]);
}

#[test]
fn sorted_by_computes_each_key_once() {
    let calls = Cell::new(0);
    let out = FluentList::from(vec![5, 3, 9, 1, 7]).sorted_by(|x| {
        calls.set(calls.get() + 1);
        *x
    });
    assert_lists_equal(&out, &[1, 3, 5, 7, 9]);
    assert_eq!(calls.get(), 5);
}

#[test]
fn sorted_by_f64_puts_nan_last() {
    let out = FluentList::from(vec![2.0, f64::NAN, -3.5, 0.0]).sorted_by_f64(|x| *x);
    assert_eq!(&out[..3], &[-3.5, 0.0, 2.0]);
    assert!(out[3].is_nan());
}

#[test]
fn sorted_with_comparator() {
    let out = FluentList::from(vec!["ccc", "a", "bb"]).sorted_with(|a, b| b.len().cmp(&a.len()));
    assert_lists_equal(&out, &["ccc", "bb", "a"]);
}

#[test]
fn sorting_empty_list() {
    assert!(FluentList::<i32>::new().sorted().is_empty());
    assert!(FluentList::<i32>::new().sorted_by(|x| -x).is_empty());
}
