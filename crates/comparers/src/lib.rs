//! # fileorder comparers
//!
//! Orderings for file explorers and quick-open pickers: file names,
//! extensions, paths and query-relative relevance.
//!
//! Every comparator is a total three-way comparison returning
//! [`std::cmp::Ordering`] (`Less` ⇒ `a` sorts first) and can be handed
//! straight to `sort_by`.
//!
//! ## Layers
//!
//! ```text
//! extract_name_and_extension
//!         │
//! base_compare ──> base_compare_fix_numeric
//!         │                 │
//!         ├──> compare_file_names
//!         ├──> compare_file_extensions
//!         ├──> compare_paths
//!         └──> compare_by_prefix ──> compare_anything
//!                                          │
//!                              SortKey / QuickOpenRanker
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fileorder_comparers::{compare_anything, Comparer};
//!
//! let comparer = Comparer::default().with_separator('/');
//! let mut paths = vec!["src/util/mod.rs", "src/item10.rs", "src/item2.rs", "src"];
//! paths.sort_by(|a, b| comparer.compare_paths(a, b, false));
//! assert_eq!(paths, ["src", "src/item2.rs", "src/item10.rs", "src/util/mod.rs"]);
//!
//! let mut picks = vec!["mytest", "test.txt"];
//! picks.sort_by(|a, b| compare_anything(a, b, "test"));
//! assert_eq!(picks, ["test.txt", "mytest"]);
//! ```

mod base;
mod config;
mod error;
mod files;
mod name;
mod paths;
mod query;
mod ranker;
mod sort;

pub use base::{base_compare, base_compare_fix_numeric, Comparer};
pub use config::{validate_separator, OrderConfig};
pub use error::{ComparerError, Result};
pub use files::{compare_file_extensions, compare_file_names};
pub use name::extract_name_and_extension;
pub use paths::compare_paths;
pub use query::{compare_anything, compare_by_prefix};
pub use ranker::{QuickOpenRanker, RankedItem};
pub use sort::SortKey;

pub use fileorder_collation::{Collator, CompareOptions, NaturalCollator, Sensitivity};
