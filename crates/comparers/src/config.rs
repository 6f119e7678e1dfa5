use std::path::{Path, MAIN_SEPARATOR};

use serde::{Deserialize, Serialize};

use crate::base::Comparer;
use crate::error::{ComparerError, Result};
use crate::sort::SortKey;

/// Ordering defaults, usually read from `.fileorder.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderConfig {
    /// Comparator used when none is given explicitly
    pub by: SortKey,

    /// Case-sensitive names and paths
    pub case_sensitive: bool,

    /// Path separator, one character (platform separator when unset)
    pub separator: Option<String>,

    /// Reverse the final order
    pub reverse: bool,

    /// Maximum number of ranked quick-open results
    pub limit: usize,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            by: SortKey::Names,
            case_sensitive: false,
            separator: None,
            reverse: false,
            limit: 50,
        }
    }
}

impl OrderConfig {
    /// Config file looked up in the working directory
    pub const FILE_NAME: &'static str = ".fileorder.toml";

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading order config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load `dir/.fileorder.toml` if it exists
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(Self::FILE_NAME);
        if !path.is_file() {
            log::trace!("No {} in {}", Self::FILE_NAME, dir.display());
            return Ok(None);
        }
        Self::from_file(&path).map(Some)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(separator) = &self.separator {
            validate_separator(separator)?;
        }

        if self.limit == 0 {
            return Err(ComparerError::invalid_config("limit must be > 0"));
        }

        Ok(())
    }

    /// Configured separator, or the platform one
    pub fn separator_char(&self) -> char {
        self.separator
            .as_deref()
            .and_then(|s| s.chars().next())
            .unwrap_or(MAIN_SEPARATOR)
    }
}

/// Parse a one-character separator
pub fn validate_separator(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() && c != '.' => Ok(c),
        _ => Err(ComparerError::invalid_config(format!(
            "separator must be a single non-whitespace character other than '.', got {raw:?}"
        ))),
    }
}

impl Comparer {
    /// Default collator with the configured separator
    pub fn from_config(config: &OrderConfig) -> Self {
        Comparer::default().with_separator(config.separator_char())
    }
}
