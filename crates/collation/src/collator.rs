use std::cmp::Ordering;

use crate::element::elements;
use crate::options::{CompareOptions, Sensitivity};

/// Locale-aware three-way string comparison.
///
/// This is the only place collation semantics live; comparators above it
/// are pure functions of its results. Any closure with the matching
/// signature is a collator, which lets callers plug in a platform
/// collation library.
pub trait Collator {
    fn compare(&self, a: &str, b: &str, options: CompareOptions) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str, CompareOptions) -> Ordering,
{
    fn compare(&self, a: &str, b: &str, options: CompareOptions) -> Ordering {
        self(a, b, options)
    }
}

/// Built-in collator approximating root-locale collation.
///
/// Accents never matter, case matters only when
/// [`CompareOptions::case_sensitive`] is set (lowercase first), and in
/// numeric mode digit runs compare by value, so `"foo1"` and `"foo01"`
/// are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalCollator;

impl Collator for NaturalCollator {
    fn compare(&self, a: &str, b: &str, options: CompareOptions) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        let left = elements(a, options.numeric);
        let right = elements(b, options.numeric);

        let primary = left
            .iter()
            .map(|e| &e.primary)
            .cmp(right.iter().map(|e| &e.primary));
        if primary != Ordering::Equal {
            return primary;
        }

        match options.sensitivity() {
            Sensitivity::Base => primary,
            Sensitivity::Case => left.iter().map(|e| e.case).cmp(right.iter().map(|e| e.case)),
        }
    }
}
