//! # mailspool-util
//!
//! Generic sequence helpers shared across the mailspool crates.
//!
//! ## Features
//!
//! - **Ranges**: inclusive ranges driven by a caller-supplied successor
//!   function, ascending or descending, with an optional explicit
//!   continuation predicate
//! - **Keyed maps**: build a `HashMap` from any `IntoIterator` by deriving
//!   each entry's key (and optionally its value) from the item
//!
//! ## Quick Start
//!
//! ```
//! use mailspool_util::{key_map, range_with};
//!
//! let doublings = range_with(1u32, 16, |x| x * 2);
//! assert_eq!(doublings, vec![1, 2, 4, 8, 16]);
//!
//! let by_len = key_map(["alpha", "beta"], |s| s.len());
//! assert_eq!(by_len[&4], "beta");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod iter;

pub use iter::{key_map, key_map_with, range_while, range_with};
