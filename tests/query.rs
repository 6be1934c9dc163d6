use fluentlist::testing::*;
use fluentlist::*;

#[test]
fn first_and_last() {
    let list = FluentList::from(vec![4, 5, 6]);
    assert_eq!(list.first_or_none(), Some(&4));
    assert_eq!(list.last_or_none(), Some(&6));

    let empty = FluentList::<i32>::new();
    assert_eq!(empty.first_or_none(), None);
    assert_eq!(empty.last_or_none(), None);
}

#[test]
fn find_returns_first_match() {
    let users = FluentList::from(sample_users());
    let found = users.find(|u| u.name.starts_with('a')).map(|u| u.id);
    assert_eq!(found, Some(2));
    assert!(users.find(|u| u.id == 42).is_none());
}

#[test]
fn any_all_none() {
    let users = FluentList::from(sample_users());
    let read_herbert = users
        .clone()
        .filter(|u| {
            FluentList::from(u.books.clone())
                .any(|b| b.author.eq_ignore_ascii_case("frank herbert"))
        })
        .map(|u| u.name.clone());
    assert_lists_equal(&read_herbert, &["jack".to_string(), "tom".to_string()]);

    assert!(users.all(|u| u.id > 0));
    assert!(!users.all(|u| u.age > 18));
    assert!(users.none(|u| u.age > 100));
    assert!(!users.none(|u| u.books.is_empty()));
}

#[test]
fn predicates_on_empty_list() {
    let empty = FluentList::<i32>::new();
    assert!(!empty.any(|_| true));
    assert!(empty.all(|_| false));
    assert!(empty.none(|_| true));
    assert_eq!(empty.count_by(|_| true), 0);
}

#[test]
fn count_by_counts_matches() {
    let list = FluentList::int_range(0, 10);
    assert_eq!(list.count_by(|x| x % 3 == 0), 4);
}

#[test]
fn for_each_visits_in_order() {
    let list = FluentList::from(vec!["a", "b", "c"]);

    let mut out = String::new();
    list.for_each_item(|s| out.push_str(s));
    assert_eq!(out, "abc");

    let mut pairs = Vec::new();
    list.for_each_indexed(|i, s| pairs.push(format!("{i} item {s}")));
    assert_eq!(pairs, vec!["0 item a", "1 item b", "2 item c"]);
}
