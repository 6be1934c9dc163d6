//! # fluentlist
//!
//! A **fluent list** for Rust: an owned, ordered `Vec` wrapper whose
//! functional-style operations chain into readable pipelines.
//!
//! ## Key Features
//!
//! - **Chainable transforms** - map, filter, flat_map, flatten, distinct, sorted_by
//! - **Grouping** - group_by into `HashMap` or `BTreeMap`, associate_by
//! - **Terminal aggregations** - reduce, fold, min_by, max_by, sum_by
//! - **Joining** - join_to_string with separators, prefix, postfix and limits
//! - **Eager** - every chaining call materializes a new list, nothing is deferred
//! - **Plain `Vec` underneath** - the list dereferences to `[T]` and serializes as an array
//!
//! ## Quick Start
//!
//! ```
//! use fluentlist::*;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let lines = FluentList::from(vec![
//!     "hello world".to_string(),
//!     "hello rust".to_string(),
//! ]);
//!
//! let words = lines
//!     .flat_map(|line| line.split_whitespace().map(str::to_string).collect::<Vec<_>>())
//!     .distinct()
//!     .sorted_by(|w| w.len());
//!
//! assert_eq!(words.join_to_string_by(" ", |w| w.clone()), "rust hello world");
//!
//! let longest = words.max_by(|w| w.len())?;
//! assert_eq!(longest, "hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Chaining vs. terminal operations
//!
//! Chaining operations take `self` and return a new [`FluentList`]:
//! [`map`](FluentList::map), [`filter`](FluentList::filter),
//! [`flat_map`](FluentList::flat_map), [`flatten`](FluentList::flatten),
//! [`distinct`](FluentList::distinct), [`sorted_by`](FluentList::sorted_by),
//! [`reversed`](FluentList::reversed), [`plus`](FluentList::plus), ...
//!
//! Terminal operations end the chain with a plain value:
//! [`reduce`](FluentList::reduce), [`group_by`](FluentList::group_by),
//! [`any`](FluentList::any) / [`all`](FluentList::all) / [`none`](FluentList::none),
//! [`min_by`](FluentList::min_by) / [`max_by`](FluentList::max_by) /
//! [`sum_by`](FluentList::sum_by),
//! [`join_to_string`](FluentList::join_to_string),
//! [`for_each_item`](FluentList::for_each_item).
//!
//! ## Errors
//!
//! The only operations that can fail on their own are the seedless
//! reductions over an empty list, which return
//! [`FluentError::EmptyReduce`]. Fallible user closures go through
//! [`try_map`](FluentList::try_map) and friends, which use `anyhow`.
//!
//! ## Logging
//!
//! Events are emitted through `tracing` (`debug` for empty reductions,
//! `trace` for grouping and sorting sizes). Install any subscriber to see
//! them; the crate never installs one itself.
//!
//! ## Module Overview
//!
//! - [`collection`] - the [`FluentList`] type, constructors and slice pass-through
//! - [`error`] - [`FluentError`] and the crate `Result` alias
//! - [`testing`] - assertions and fixtures for tests

pub mod collection;
pub mod error;
pub mod helpers;
pub mod testing;

pub use collection::FluentList;
pub use error::{FluentError, Result};
pub use helpers::*;
