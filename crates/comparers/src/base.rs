use std::cmp::Ordering;
use std::path::MAIN_SEPARATOR;

use fileorder_collation::{Collator, CompareOptions, NaturalCollator};

/// Comparator set bound to one collator and one path separator.
///
/// Every public comparator is a method here; the crate-level free
/// functions use [`Comparer::default`], i.e. [`NaturalCollator`] and the
/// platform separator.
#[derive(Debug, Clone, Copy)]
pub struct Comparer<C = NaturalCollator> {
    collator: C,
    separator: char,
}

impl Default for Comparer {
    fn default() -> Self {
        Self::new(NaturalCollator)
    }
}

impl<C: Collator> Comparer<C> {
    pub fn new(collator: C) -> Self {
        Self {
            collator,
            separator: MAIN_SEPARATOR,
        }
    }

    /// Use `separator` instead of the platform one when splitting paths
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Three-way comparison through the collator, the single point where
    /// collation semantics enter.
    pub fn base_compare(&self, a: &str, b: &str, options: CompareOptions) -> Ordering {
        self.collator.compare(a, b, options)
    }

    /// Numeric comparison with a lexical tie-break.
    ///
    /// Numeric collation reports `foo1 == foo01`; when the numeric pass
    /// says equal, the strings are compared again with digits as plain
    /// characters.
    pub fn base_compare_fix_numeric(&self, a: &str, b: &str, case_sensitive: bool) -> Ordering {
        let options = CompareOptions::new().case_sensitive(case_sensitive);
        let result = self.base_compare(a, b, options);
        if result != Ordering::Equal {
            return result;
        }
        self.base_compare(a, b, options.numeric(false))
    }
}

/// [`Comparer::base_compare`] with the default comparer
pub fn base_compare(a: &str, b: &str, options: CompareOptions) -> Ordering {
    Comparer::default().base_compare(a, b, options)
}

/// [`Comparer::base_compare_fix_numeric`] with the default comparer
pub fn base_compare_fix_numeric(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    Comparer::default().base_compare_fix_numeric(a, b, case_sensitive)
}
