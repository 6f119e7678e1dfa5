use serde::{Deserialize, Serialize};

/// Per-call options for a collation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Compare embedded digit runs by numeric value ("file2" < "file10")
    pub numeric: bool,

    /// Distinguish upper and lower case when base letters are equal
    pub case_sensitive: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            numeric: true,
            case_sensitive: false,
        }
    }
}

impl CompareOptions {
    /// Defaults: numeric, case-insensitive
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numeric: true,
            case_sensitive: false,
        }
    }

    #[must_use]
    pub const fn numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }

    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Strength implied by the case flag
    #[must_use]
    pub const fn sensitivity(&self) -> Sensitivity {
        if self.case_sensitive {
            Sensitivity::Case
        } else {
            Sensitivity::Base
        }
    }
}

/// Which differences a collation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Only base letters differ: "a" == "A" == "á"
    Base,

    /// Base letters and case: "a" != "A", "a" == "á"
    Case,
}
