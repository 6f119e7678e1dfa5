use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary weight of a collation element.
///
/// Classes order as whitespace < symbols < numbers < letters; within a
/// class characters order by their lower-cased code point and numbers by
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Primary {
    Space(char),
    Symbol(char),
    /// Decimal digits with leading zeros stripped ("0" for zero)
    Number(String),
    Letter(char),
}

impl Primary {
    fn class(&self) -> u8 {
        match self {
            Self::Space(_) => 0,
            Self::Symbol(_) => 1,
            Self::Number(_) => 2,
            Self::Letter(_) => 3,
        }
    }
}

impl Ord for Primary {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Space(a), Self::Space(b))
            | (Self::Symbol(a), Self::Symbol(b))
            | (Self::Letter(a), Self::Letter(b)) => a.cmp(b),
            _ => self.class().cmp(&other.class()),
        }
    }
}

impl PartialOrd for Primary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Case level: lowercase sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Case {
    Lower,
    Upper,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    pub primary: Primary,
    pub case: Case,
}

/// Break `text` into collation elements.
///
/// With `numeric`, every run of ASCII digits becomes a single
/// [`Primary::Number`]; otherwise each digit is its own element.
pub(crate) fn elements(text: &str, numeric: bool) -> Vec<Element> {
    let mut out = Vec::with_capacity(text.len());
    let mut chars = text.nfd().filter(|c| !is_combining_mark(*c)).peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            let mut digits = String::from(c);
            if numeric {
                while let Some(next) = chars.next_if(char::is_ascii_digit) {
                    digits.push(next);
                }
                let trimmed = digits.trim_start_matches('0');
                digits = if trimmed.is_empty() {
                    "0".to_string()
                } else {
                    trimmed.to_string()
                };
            }
            out.push(Element {
                primary: Primary::Number(digits),
                case: Case::Lower,
            });
            continue;
        }

        let case = if c.is_uppercase() {
            Case::Upper
        } else {
            Case::Lower
        };
        for lower in c.to_lowercase().filter(|l| !is_combining_mark(*l)) {
            let primary = if lower.is_alphabetic() {
                Primary::Letter(lower)
            } else if lower.is_whitespace() {
                Primary::Space(lower)
            } else {
                Primary::Symbol(lower)
            };
            out.push(Element { primary, case });
        }
    }

    out
}
