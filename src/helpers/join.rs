//! Joining a list into a single `String`.
//!
//! ## Provided methods
//! - [`FluentList::join_to_string_by`] -- explicit separator
//! - [`FluentList::join_to_string`] -- `", "` separator
//! - [`FluentList::join_to_string_with`] -- full control through [`JoinOptions`]
//!
//! ## Example
//! ```
//! use fluentlist::*;
//!
//! let users = FluentList::from(vec![(1, "ann"), (2, "bob")]);
//! let log = users.join_to_string_by(",", |u| format!("[ {} {} ]", u.0, u.1));
//! assert_eq!(log, "[ 1 ann ],[ 2 bob ]");
//!
//! let opts = JoinOptions::new(" | ").prefix("<").postfix(">").limit(1);
//! assert_eq!(users.join_to_string_with(&opts, |u| u.1), "<ann | ...>");
//! ```

use crate::FluentList;
use std::fmt::{Display, Write};

/// Formatting options for [`FluentList::join_to_string_with`].
///
/// `Default` gives `", "` as separator, no prefix or postfix, no limit and
/// `"..."` as truncation marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinOptions {
    pub separator: String,
    pub prefix: String,
    pub postfix: String,
    /// Maximum number of elements rendered. `None` renders all of them.
    pub limit: Option<usize>,
    /// Appended (after a separator) in place of the elements cut by `limit`.
    pub truncated: String,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: String::new(),
            postfix: String::new(),
            limit: None,
            truncated: "...".to_string(),
        }
    }
}

impl JoinOptions {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Default::default()
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn truncated(mut self, truncated: impl Into<String>) -> Self {
        self.truncated = truncated.into();
        self
    }
}

impl<T> FluentList<T> {
    /// Render each element with `f` and join them with `separator` (no trailing separator).
    pub fn join_to_string_by<D, F>(&self, separator: &str, f: F) -> String
    where
        D: Display,
        F: Fn(&T) -> D,
    {
        self.join_to_string_with(&JoinOptions::new(separator), f)
    }

    /// Same as [`join_to_string_by`](FluentList::join_to_string_by) with `", "`.
    pub fn join_to_string<D, F>(&self, f: F) -> String
    where
        D: Display,
        F: Fn(&T) -> D,
    {
        self.join_to_string_with(&JoinOptions::default(), f)
    }

    pub fn join_to_string_with<D, F>(&self, opts: &JoinOptions, f: F) -> String
    where
        D: Display,
        F: Fn(&T) -> D,
    {
        let mut out = String::new();
        out.push_str(&opts.prefix);
        let shown = opts.limit.unwrap_or(usize::MAX);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(&opts.separator);
            }
            if i >= shown {
                out.push_str(&opts.truncated);
                break;
            }
            // writing into a String cannot fail
            let _ = write!(out, "{}", f(item));
        }
        out.push_str(&opts.postfix);
        out
    }
}
