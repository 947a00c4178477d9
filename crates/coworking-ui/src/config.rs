//! Options handed to the navigation runtime at startup.
//!
//! # Design
//! - Read once from the host page; the runtime never mutates it afterwards.
//! - Missing fields fall back to defaults so an empty document is valid.

use serde::Deserialize;
use thiserror::Error;

/// CSS class toggled on the nav link of the current route.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Runtime configuration for the UI shell.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Path prefix the app is served under, e.g. `/app`.
    pub basename: Option<String>,
    /// Class applied to the active navigation link.
    pub link_active_class: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            basename: None,
            link_active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

/// Failures while reading [`UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for this shape.
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The basename is not an absolute path.
    #[error("basename `{0}` must start with `/`")]
    RelativeBasename(String),
    /// The active class is blank.
    #[error("link_active_class must not be empty")]
    EmptyActiveClass,
}

impl UiConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not parse or a field is invalid.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    fn validate(mut self) -> Result<Self, ConfigError> {
        if let Some(basename) = self.basename.take() {
            let trimmed = basename.trim_end_matches('/');
            if !basename.starts_with('/') {
                return Err(ConfigError::RelativeBasename(basename));
            }
            // "/" alone means no prefix.
            self.basename = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
        if self.link_active_class.trim().is_empty() {
            return Err(ConfigError::EmptyActiveClass);
        }
        Ok(self)
    }
}
