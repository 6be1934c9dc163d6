//! Testing utilities for code built on [`FluentList`](crate::FluentList).
//!
//! - **Assertions**: compare lists and grouped maps with readable failure messages
//! - **Fixtures**: small ready-made datasets (products, users with books)
//!
//! # Quick Start
//!
//! ```
//! use fluentlist::*;
//! use fluentlist::testing::*;
//!
//! let cheap = FluentList::from(sample_products())
//!     .filter(|p| p.price < 5)
//!     .map(|p| p.name.clone());
//!
//! assert_lists_unordered_equal(&cheap, &["prod1".to_string(), "prod2".to_string(), "prod5".to_string()]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
