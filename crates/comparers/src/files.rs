use std::cmp::Ordering;

use fileorder_collation::{Collator, CompareOptions};

use crate::base::Comparer;
use crate::name::extract_name_and_extension;

impl<C: Collator> Comparer<C> {
    /// File names compare as opaque numeric-aware strings; `foo1` and
    /// `foo01` stay equal here.
    pub fn compare_file_names(&self, a: &str, b: &str, case_sensitive: bool) -> Ordering {
        self.base_compare(a, b, CompareOptions::new().case_sensitive(case_sensitive))
    }

    /// Group by extension, then by name within an extension.
    ///
    /// Both sides are lower-cased first, so `a.TXT` and `b.txt` share the
    /// `txt` group.
    pub fn compare_file_extensions(&self, a: &str, b: &str) -> Ordering {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        let (a_name, a_extension) = extract_name_and_extension(&a);
        let (b_name, b_extension) = extract_name_and_extension(&b);

        if a_extension != b_extension {
            return self.base_compare_fix_numeric(a_extension, b_extension, false);
        }

        self.base_compare_fix_numeric(a_name, b_name, false)
    }
}

/// [`Comparer::compare_file_names`] with the default comparer
pub fn compare_file_names(a: &str, b: &str, case_sensitive: bool) -> Ordering {
    Comparer::default().compare_file_names(a, b, case_sensitive)
}

/// [`Comparer::compare_file_extensions`] with the default comparer
pub fn compare_file_extensions(a: &str, b: &str) -> Ordering {
    Comparer::default().compare_file_extensions(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted_by(mut items: Vec<&str>, cmp: impl Fn(&str, &str) -> Ordering) -> Vec<&str> {
        items.sort_by(|a, b| cmp(a, b));
        items
    }

    #[test]
    fn file_names_are_numeric_aware() {
        assert_eq!(compare_file_names("file2", "file10", false), Ordering::Less);
        assert_eq!(compare_file_names("foo1", "foo01", false), Ordering::Equal);
        assert_eq!(
            sorted_by(vec!["img12.png", "img10.png", "img2.png", "img1.png"], |a, b| {
                compare_file_names(a, b, false)
            }),
            vec!["img1.png", "img2.png", "img10.png", "img12.png"]
        );
    }

    #[test]
    fn file_names_respect_case_flag() {
        assert_eq!(compare_file_names("Readme", "readme", false), Ordering::Equal);
        assert_eq!(compare_file_names("readme", "Readme", true), Ordering::Less);
        assert_eq!(compare_file_names("", "", true), Ordering::Equal);
    }

    #[test]
    fn extensions_group_case_insensitively() {
        assert_eq!(compare_file_extensions("a.TXT", "b.txt"), Ordering::Less);
        assert_eq!(compare_file_extensions("b.TXT", "a.txt"), Ordering::Greater);
        assert_eq!(compare_file_extensions("A.txt", "a.TXT"), Ordering::Equal);
    }

    #[test]
    fn extensions_order_before_names() {
        assert_eq!(
            sorted_by(
                vec!["b.rs", "a.toml", "c.md", "a.rs", "Makefile", ".gitignore"],
                compare_file_extensions
            ),
            vec!["Makefile", ".gitignore", "c.md", "a.rs", "b.rs", "a.toml"]
        );
    }

    #[test]
    fn extension_names_disambiguate_leading_zeros() {
        assert_ne!(compare_file_extensions("v1.log", "v01.log"), Ordering::Equal);
        assert_eq!(compare_file_extensions("v2.log", "v10.log"), Ordering::Less);
        assert_eq!(compare_file_extensions("a.mp3", "a.mp4"), Ordering::Less);
    }
}
