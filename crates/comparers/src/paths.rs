use std::cmp::Ordering;

use fileorder_collation::Collator;

use crate::base::Comparer;

impl<C: Collator> Comparer<C> {
    /// Directory-first, depth-ordered, numeric-aware path ordering.
    ///
    /// Paths are split on the comparer's separator and walked component
    /// by component. Leaves reached together compare as file names; a
    /// path that runs out first is a parent directory and sorts before
    /// anything nested under its prefix.
    pub fn compare_paths(&self, a: &str, b: &str, case_sensitive: bool) -> Ordering {
        let a_parts: Vec<&str> = a.split(self.separator()).collect();
        let b_parts: Vec<&str> = b.split(self.separator()).collect();

        let a_last = a_parts.len() - 1;
        let b_last = b_parts.len() - 1;

        for (i, (a_part, b_part)) in a_parts.iter().zip(&b_parts).enumerate() {
            let a_end = i == a_last;
            let b_end = i == b_last;

            if a_end && b_end {
                return self.compare_file_names(a_part, b_part, case_sensitive);
            } else if a_end {
                return Ordering::Less;
            } else if b_end {
                return Ordering::Greater;
            }

            let result = self.compare_path_components(a_part, b_part, case_sensitive);
            if result != Ordering::Equal {
                return result;
            }
        }

        // zip stops at the shorter side, whose last index always returns above
        Ordering::Equal
    }

    fn compare_path_components(&self, a: &str, b: &str, case_sensitive: bool) -> Ordering {
        self.base_compare_fix_numeric(a, b, case_sensitive)
    }
}

/// [`Comparer::compare_paths`] with the default comparer (platform
/// separator)
pub fn compare_paths(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    Comparer::default().compare_paths(a, b, case_sensitive)
}
