use once_cell::sync::Lazy;
use regex::Regex;

// Lazy name without line breaks, then an optional dot and a suffix with no
// dot or separator.
static FILE_NAME_MATCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\n\r\x{2028}\x{2029}]*?)(\.([^./\\]*))?$")
        .expect("file name pattern is valid")
});

/// Split `text` into `(name, extension)` at its last dot.
///
/// The extension comes from the final path segment only and never
/// contains a dot. Leading-dot names keep an empty name:
///
/// ```rust
/// use fileorder_comparers::extract_name_and_extension;
///
/// assert_eq!(extract_name_and_extension("archive.tar.gz"), ("archive.tar", "gz"));
/// assert_eq!(extract_name_and_extension(".gitignore"), ("", "gitignore"));
/// assert_eq!(extract_name_and_extension("Makefile"), ("Makefile", ""));
/// ```
pub fn extract_name_and_extension(text: &str) -> (&str, &str) {
    if text.is_empty() {
        return ("", "");
    }
    match FILE_NAME_MATCH.captures(text) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(3).map_or("", |m| m.as_str()),
        ),
        // a line break inside the name
        None => ("", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_at_last_dot() {
        assert_eq!(extract_name_and_extension("main.rs"), ("main", "rs"));
        assert_eq!(
            extract_name_and_extension("archive.tar.gz"),
            ("archive.tar", "gz")
        );
    }

    #[test]
    fn names_without_extension() {
        assert_eq!(extract_name_and_extension(""), ("", ""));
        assert_eq!(extract_name_and_extension("LICENSE"), ("LICENSE", ""));
        assert_eq!(extract_name_and_extension("foo."), ("foo", ""));
        assert_eq!(extract_name_and_extension("a.."), ("a.", ""));
        assert_eq!(extract_name_and_extension("."), ("", ""));
    }

    #[test]
    fn dotfiles_have_empty_name() {
        assert_eq!(extract_name_and_extension(".gitignore"), ("", "gitignore"));
        assert_eq!(extract_name_and_extension(".env.local"), (".env", "local"));
    }

    #[test]
    fn directory_dots_do_not_start_extensions() {
        assert_eq!(extract_name_and_extension("dir.d/file"), ("dir.d/file", ""));
        assert_eq!(
            extract_name_and_extension("dir.d\\file.txt"),
            ("dir.d\\file", "txt")
        );
        assert_eq!(extract_name_and_extension("src/.hidden"), ("src/", "hidden"));
    }

    #[test]
    fn line_breaks_in_the_name_yield_empty_parts() {
        for text in ["a\nb.txt", "a\rb.txt", "a\u{2028}b.txt", "a\u{2029}b.txt", "\n"] {
            assert_eq!(extract_name_and_extension(text), ("", ""), "{text:?}");
        }
    }

    #[test]
    fn line_breaks_after_the_dot_stay_in_the_extension() {
        assert_eq!(extract_name_and_extension("foo.\n"), ("foo", "\n"));
    }
}
