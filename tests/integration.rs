//! End-to-end chains over the user fixtures.

use anyhow::Result;
use fluentlist::testing::*;
use fluentlist::*;

#[test]
fn adult_user_ids() {
    let ids = FluentList::from(sample_users())
        .filter(|u| u.age > 18)
        .map(|u| u.id);
    assert_lists_equal(&ids, &[1, 3, 4]);
}

#[test]
fn names_without_duplicates() {
    let users = FluentList::from(sample_users()).plus_all(sample_users());
    let names = users.map(|u| u.name.clone()).distinct();
    assert_eq!(names.len(), 5);
}

#[test]
fn books_read_by_anyone() {
    let books = FluentList::from(sample_users())
        .flat_map(|u| u.books.clone())
        .distinct()
        .sorted_by(|b| b.id)
        .join_to_string(|b| b.name.clone());
    assert_eq!(books, "Dune, The Hobbit, Emma");
}

#[test]
fn oldest_reader_of_each_book() -> Result<()> {
    let users = FluentList::from(sample_users());
    let pairs = users.flat_map(|u| {
        u.books
            .iter()
            .map(|b| (b.name.clone(), u.clone()))
            .collect::<Vec<_>>()
    });

    let mut oldest = Vec::new();
    for (book, readers) in pairs.group_by_sorted(|p| p.0.clone()) {
        let reader = FluentList::from(readers).max_by(|p| p.1.age)?;
        oldest.push((book, reader.1.name));
    }
    assert_eq!(
        oldest,
        vec![
            ("Dune".to_string(), "jack".to_string()),
            ("Emma".to_string(), "tom".to_string()),
            ("The Hobbit".to_string(), "jack".to_string()),
        ]
    );
    Ok(())
}
