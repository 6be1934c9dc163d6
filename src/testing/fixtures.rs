//! Pre-built datasets for tests and doc examples.

use serde::{Deserialize, Serialize};

/// A named item with an integer price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub books: Vec<Book>,
}

/// Six products priced 3, 4, 10, 52, 2 and 7 (total 78).
///
/// The cheapest is `prod5`, the most expensive `prod4`.
///
/// # Example
///
/// ```
/// use fluentlist::testing::sample_products;
///
/// assert_eq!(sample_products().len(), 6);
/// ```
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("prod1", 3),
        Product::new("prod2", 4),
        Product::new("prod3", 10),
        Product::new("prod4", 52),
        Product::new("prod5", 2),
        Product::new("prod6", 7),
    ]
}

fn book(id: u64, name: &str, author: &str) -> Book {
    Book {
        id,
        name: name.to_string(),
        author: author.to_string(),
    }
}

/// Five users with overlapping reading lists.
///
/// - ids 1..=5, names `jack`, `alice`, `jane`, `tom`, `anna`
/// - `alice` (age 17) and `anna` (age 15) are minors
/// - `jack` and `tom` have read "Dune" (book id 1) by Frank Herbert
/// - `jane` has no books
#[must_use]
pub fn sample_users() -> Vec<User> {
    let dune = book(1, "Dune", "Frank Herbert");
    let hobbit = book(2, "The Hobbit", "J. R. R. Tolkien");
    let emma = book(3, "Emma", "Jane Austen");

    let user = |id: u64, name: &str, age: u32, books: Vec<Book>| User {
        id,
        name: name.to_string(),
        age,
        books,
    };

    vec![
        user(1, "jack", 34, vec![dune.clone(), hobbit.clone()]),
        user(2, "alice", 17, vec![hobbit.clone()]),
        user(3, "jane", 45, Vec::new()),
        user(4, "tom", 29, vec![dune, emma.clone()]),
        user(5, "anna", 15, vec![emma, hobbit]),
    ]
}
