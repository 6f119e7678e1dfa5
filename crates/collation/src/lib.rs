//! # fileorder collation
//!
//! The locale-aware comparison primitive every fileorder comparator is
//! built on.
//!
//! ## Architecture
//!
//! ```text
//! &str
//!   │
//!   ├──> NFD decomposition (combining marks dropped)
//!   │
//!   ├──> Collation elements
//!   │    ├─> digit runs folded into numbers (numeric mode)
//!   │    └─> everything else: lower-cased char + class + case bit
//!   │
//!   └──> Comparison
//!        ├─> primary level (base letters, numbers)
//!        └─> case level (only when case-sensitive)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use fileorder_collation::{Collator, CompareOptions, NaturalCollator};
//!
//! let collator = NaturalCollator;
//! let options = CompareOptions::default();
//!
//! assert_eq!(collator.compare("file2", "file10", options), Ordering::Less);
//! assert_eq!(collator.compare("README", "readme", options), Ordering::Equal);
//! ```

mod collator;
mod element;
mod options;

pub use collator::{Collator, NaturalCollator};
pub use options::{CompareOptions, Sensitivity};
