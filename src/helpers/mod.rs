pub(crate) mod conversions;
pub(crate) mod distinct;
pub(crate) mod group;
pub(crate) mod join;
pub(crate) mod query;
pub(crate) mod reduce;
pub(crate) mod sort;
pub(crate) mod transform;
pub(crate) mod try_process;

// Only re-export files with public types
pub use join::*;
