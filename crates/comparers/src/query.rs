use std::cmp::Ordering;

use fileorder_collation::Collator;

use crate::base::Comparer;

impl<C: Collator> Comparer<C> {
    /// See [`compare_by_prefix`]
    pub fn compare_by_prefix(&self, a: &str, b: &str, query: &str) -> Ordering {
        compare_by_prefix(a, b, query)
    }

    /// Relevance order for quick-open candidates.
    ///
    /// Layers, first decisive one wins:
    /// 1. prefix match ([`Comparer::compare_by_prefix`])
    /// 2. suffix match: ending with `query` sorts first
    /// 3. file name order of the lower-cased strings
    /// 4. numeric-then-lexical order of the lower-cased strings
    ///
    /// `query` is expected lower-cased.
    pub fn compare_anything(&self, a: &str, b: &str, query: &str) -> Ordering {
        let prefix = self.compare_by_prefix(a, b, query);
        if prefix != Ordering::Equal {
            return prefix;
        }

        let a = a.to_lowercase();
        let b = b.to_lowercase();

        let a_suffix = a.ends_with(query);
        let b_suffix = b.ends_with(query);
        if a_suffix != b_suffix {
            return if a_suffix {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let result = self.compare_file_names(&a, &b, false);
        if result != Ordering::Equal {
            return result;
        }

        self.base_compare_fix_numeric(&a, &b, false)
    }
}

/// Prefix-match preference between two candidates.
///
/// Candidates are lower-cased; `query` is expected lower-cased by the
/// caller. A candidate starting with `query` sorts before one that does
/// not; when both do, the shorter (tighter) match sorts first. Returns
/// [`Ordering::Equal`] when neither matches or both match with equal
/// length, leaving the tie-break to the caller.
pub fn compare_by_prefix(a: &str, b: &str, query: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let a_prefix = a.starts_with(query);
    let b_prefix = b.starts_with(query);
    if a_prefix != b_prefix {
        return if a_prefix {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    if a_prefix && b_prefix {
        return a.chars().count().cmp(&b.chars().count());
    }

    Ordering::Equal
}

/// [`Comparer::compare_anything`] with the default comparer
pub fn compare_anything(a: &str, b: &str, query: &str) -> Ordering {
    Comparer::default().compare_anything(a, b, query)
}
