use fluentlist::testing::*;
use fluentlist::*;

#[test]
fn join_with_separator_no_trailing() {
    let users = FluentList::from(sample_users()).take(2);
    let log = users.join_to_string_by(",", |u| format!("[ {} {} ] ", u.id, u.name));
    assert_eq!(log, "[ 1 jack ] ,[ 2 alice ] ");
}

#[test]
fn join_default_separator() {
    let list = FluentList::from(vec![1, 2, 3]);
    assert_eq!(list.join_to_string(|x| x * 10), "10, 20, 30");
}

#[test]
fn join_single_and_empty() {
    assert_eq!(FluentList::from(vec!["only"]).join_to_string_by("-", |s| *s), "only");
    assert_eq!(FluentList::<i32>::new().join_to_string_by("-", |x| *x), "");
}

#[test]
fn join_with_options() {
    let list = FluentList::int_range(1, 6);

    let opts = JoinOptions::new("; ").prefix("{").postfix("}");
    assert_eq!(list.join_to_string_with(&opts, |x| *x), "{1; 2; 3; 4; 5}");

    let opts = JoinOptions::default().limit(3).truncated("<more>");
    assert_eq!(list.join_to_string_with(&opts, |x| *x), "1, 2, 3, <more>");

    // a limit at or above the length renders everything
    let opts = JoinOptions::default().limit(5);
    assert_eq!(list.join_to_string_with(&opts, |x| *x), "1, 2, 3, 4, 5");
}

#[test]
fn join_options_defaults() {
    let opts = JoinOptions::default();
    assert_eq!(opts.separator, ", ");
    assert_eq!(opts.prefix, "");
    assert_eq!(opts.postfix, "");
    assert_eq!(opts.limit, None);
    assert_eq!(opts.truncated, "...");
}
