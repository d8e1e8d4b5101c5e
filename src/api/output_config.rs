use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Loader settings of the generated script.
///
/// Serializable so hosts can keep it next to their other settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            language: None,
        }
    }
}

impl OutputConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Both values end up inside single-quoted script literals.
    pub fn validate(&self) -> ChartResult<()> {
        if self.version.trim().is_empty() {
            return Err(ChartError::Configuration(
                "loader version must not be empty".to_owned(),
            ));
        }
        validate_literal("version", &self.version)?;
        if let Some(language) = &self.language {
            validate_literal("language", language)?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Configuration(format!("failed to parse output config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_version() -> String {
    "current".to_owned()
}

fn validate_literal(name: &str, value: &str) -> ChartResult<()> {
    if value.contains(['\'', '"', '\\', '\n', '\r']) {
        return Err(ChartError::Configuration(format!(
            "loader {name} `{}` contains quote, backslash or line break characters",
            value.escape_default()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_without_language() {
        let config = OutputConfig::from_json_str("{}").expect("config");
        assert_eq!(config, OutputConfig::default());
        assert_eq!(config.version, "current");
        assert_eq!(config.language, None);
    }

    #[test]
    fn rejects_unsafe_values() {
        assert!(OutputConfig::new().with_version("").validate().is_err());
        assert!(OutputConfig::new().with_version("4'").validate().is_err());
        assert!(OutputConfig::new().with_language("fr\n").validate().is_err());
        assert!(OutputConfig::from_json_str(r#"{"version": 45}"#).is_err());
        assert!(
            OutputConfig::new()
                .with_version("51")
                .with_language("fr")
                .validate()
                .is_ok()
        );
    }
}
