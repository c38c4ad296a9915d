use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::tags::PopulateOptions;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "catalog.excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub catalog: CatalogConfig,

    /// Language whose catalog is loaded. If unset, nothing is translated and
    /// source texts are used as-is.
    pub language: Option<String>,

    /// Used when no explicit text domain is passed.
    /// If unset, every domain is searched.
    pub default_domain: Option<String>,

    /// Default tag population options.
    pub tags: PopulateOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    /// Catalog root, relative to the workspace. Holds one directory per
    /// language.
    pub directory: String,

    /// Glob for catalog files, relative to a language directory.
    pub file_pattern: String,

    pub exclude_patterns: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            directory: "locales".to_string(),
            file_pattern: "**/*.json".to_string(),
            exclude_patterns: Vec::new(),
        }
    }
}

impl Settings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Invalid tag delimiters
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.catalog.directory.is_empty() {
            errors.push(ValidationError::new(
                "catalog.directory",
                "The directory cannot be empty. Example: \"locales\"",
            ));
        }

        if self.catalog.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "catalog.filePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.catalog.file_pattern) {
            errors.push(ValidationError::new(
                "catalog.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.catalog.file_pattern),
            ));
        }

        for (index, pattern) in self.catalog.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("catalog.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if let Some(language) = &self.language
            && language.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "language",
                "The language cannot be empty. Specify a language code (e.g., \"es\"), or remove this field",
            ));
        }

        if let Some(domain) = &self.default_domain
            && domain.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "defaultDomain",
                "The domain cannot be empty. Specify a domain (e.g., \"site/templates/home.php\"), or remove this field",
            ));
        }

        if self.tags.tag_open.is_empty() {
            errors.push(ValidationError::new(
                "tags.tagOpen",
                "The opening tag cannot be empty. Example: \"{\"",
            ));
        }

        if self.tags.max_recursion_depth == 0 {
            errors.push(ValidationError::new(
                "tags.maxRecursionDepth",
                "At least one population pass is required",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
