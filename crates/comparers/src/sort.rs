use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use fileorder_collation::Collator;
use serde::{Deserialize, Serialize};

use crate::base::Comparer;
use crate::error::{ComparerError, Result};

/// Names one of the public comparators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// [`Comparer::compare_file_names`]
    #[default]
    Names,
    /// [`Comparer::compare_file_extensions`]
    Extensions,
    /// [`Comparer::compare_paths`]
    Paths,
    /// [`Comparer::compare_by_prefix`]; needs a query
    Prefix,
    /// [`Comparer::compare_anything`]; needs a query
    Anything,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Names,
        SortKey::Extensions,
        SortKey::Paths,
        SortKey::Prefix,
        SortKey::Anything,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Names => "names",
            SortKey::Extensions => "extensions",
            SortKey::Paths => "paths",
            SortKey::Prefix => "prefix",
            SortKey::Anything => "anything",
        }
    }

    pub fn requires_query(&self) -> bool {
        matches!(self, SortKey::Prefix | SortKey::Anything)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ComparerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ComparerError::unknown_sort_key(s))
    }
}

impl<C: Collator> Comparer<C> {
    /// Compare with the comparator `key` names.
    ///
    /// `case_sensitive` applies to names and paths; `query` is lower-cased
    /// here before it reaches the query-relative comparators.
    pub fn compare_by(
        &self,
        key: SortKey,
        a: &str,
        b: &str,
        case_sensitive: bool,
        query: Option<&str>,
    ) -> Result<Ordering> {
        let query = match (key.requires_query(), query) {
            (true, None) => return Err(ComparerError::MissingQuery(key)),
            (_, query) => query.map(str::to_lowercase).unwrap_or_default(),
        };
        Ok(self.dispatch(key, a, b, case_sensitive, &query))
    }

    /// Stable in-place sort of `items` by the comparator `key` names
    pub fn sort<S: AsRef<str>>(
        &self,
        items: &mut [S],
        key: SortKey,
        case_sensitive: bool,
        query: Option<&str>,
    ) -> Result<()> {
        if key.requires_query() && query.is_none() {
            return Err(ComparerError::MissingQuery(key));
        }
        let query = query.map(str::to_lowercase).unwrap_or_default();

        log::debug!(
            "Sorting {} items by {key} (case_sensitive={case_sensitive}, query={query:?})",
            items.len()
        );

        items.sort_by(|a, b| self.dispatch(key, a.as_ref(), b.as_ref(), case_sensitive, &query));
        Ok(())
    }

    fn dispatch(&self, key: SortKey, a: &str, b: &str, case_sensitive: bool, query: &str) -> Ordering {
        match key {
            SortKey::Names => self.compare_file_names(a, b, case_sensitive),
            SortKey::Extensions => self.compare_file_extensions(a, b),
            SortKey::Paths => self.compare_paths(a, b, case_sensitive),
            SortKey::Prefix => self.compare_by_prefix(a, b, query),
            SortKey::Anything => self.compare_anything(a, b, query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_known_keys() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!(" Paths ".parse::<SortKey>().unwrap(), SortKey::Paths);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = "size".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, ComparerError::UnknownSortKey(ref k) if k == "size"));
    }

    #[test]
    fn query_keys_require_a_query() {
        let comparer = Comparer::default();
        let err = comparer
            .compare_by(SortKey::Anything, "a", "b", false, None)
            .unwrap_err();
        assert!(matches!(err, ComparerError::MissingQuery(SortKey::Anything)));

        let mut items = vec!["b", "a"];
        assert!(comparer.sort(&mut items, SortKey::Prefix, false, None).is_err());
        assert_eq!(items, vec!["b", "a"]);
    }

    #[test]
    fn compare_by_lowercases_the_query() {
        let comparer = Comparer::default();
        assert_eq!(
            comparer
                .compare_by(SortKey::Prefix, "apple", "banana", false, Some("APP"))
                .unwrap(),
            Ordering::Less
        );
    }

    #[test]
    fn sorts_by_each_key() {
        let comparer = Comparer::default().with_separator('/');

        let mut names = vec!["file10", "file2", "File1"];
        comparer.sort(&mut names, SortKey::Names, false, None).unwrap();
        assert_eq!(names, vec!["File1", "file2", "file10"]);

        let mut extensions = vec!["b.rs".to_string(), "a.md".to_string(), "a.rs".to_string()];
        comparer
            .sort(&mut extensions, SortKey::Extensions, false, None)
            .unwrap();
        assert_eq!(extensions, vec!["a.md", "a.rs", "b.rs"]);

        let mut paths = vec!["src/main.rs", "src", "README.md"];
        comparer.sort(&mut paths, SortKey::Paths, false, None).unwrap();
        assert_eq!(paths, vec!["README.md", "src", "src/main.rs"]);

        let mut candidates = vec!["mytest", "other", "test.txt", "test"];
        comparer
            .sort(&mut candidates, SortKey::Anything, false, Some("test"))
            .unwrap();
        assert_eq!(candidates, vec!["test", "test.txt", "mytest", "other"]);
    }

    #[test]
    fn deserializes_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            by: SortKey,
        }
        let wrapper: Wrapper = toml::from_str(r#"by = "extensions""#).unwrap();
        assert_eq!(wrapper.by, SortKey::Extensions);
    }
}
