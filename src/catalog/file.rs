//! Catalog file format.
//!
//! A catalog file holds the translations of one text domain for one
//! language:
//!
//! ```json
//! {
//!   "textdomain": "site/templates/home.php",
//!   "translations": {
//!     "Hello {name}": "Hola {name}",
//!     "Save": { "": "Guardar", "menu": "Guardar cambios" }
//!   }
//! }
//! ```
//!
//! A string value is the translation without context. An object value maps
//! each context to its translation, with `""` standing for no context.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};

use super::domain::TextDomain;
use super::error::CatalogError;

/// Parsed catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogFile {
    /// Overrides the domain derived from the file path.
    pub textdomain: Option<String>,

    /// Source text → translation(s).
    pub translations: BTreeMap<String, TranslationValue>,
}

/// Translation(s) of one source text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Plain(String),
    /// Context → translation. The empty context is "no context".
    Contextual(BTreeMap<String, String>),
}

impl TranslationValue {
    /// `(context, translation)` pairs held by this value.
    #[must_use]
    pub fn entries(&self) -> Vec<(Option<&str>, &str)> {
        match self {
            Self::Plain(translation) => vec![(None, translation.as_str())],
            Self::Contextual(by_context) => by_context
                .iter()
                .map(|(context, translation)| {
                    ((!context.is_empty()).then_some(context.as_str()), translation.as_str())
                })
                .collect(),
        }
    }
}

impl CatalogFile {
    /// Parses catalog JSON.
    ///
    /// # Errors
    /// Returns an error if `json` is not a valid catalog document.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of `(context, text)` entries in the file.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.translations.values().map(|value| value.entries().len()).sum()
    }
}

/// Reads and parses a catalog file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog_file(path: &Path) -> Result<CatalogFile, CatalogError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;

    CatalogFile::parse(&content)
        .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })
}

/// Derives a text domain from a catalog file path relative to its language
/// directory.
///
/// The extension is dropped and the remaining path normalized.
///
/// # Examples
/// - `site/templates/home-php.json` → `site--templates--home-php`
/// - `site--modules--cart-module.json` → `site--modules--cart-module`
/// - `checkout.json` → `checkout`
#[must_use]
pub fn detect_domain_from_path(relative_path: &Path) -> Option<TextDomain> {
    let without_extension = relative_path.with_extension("");
    let domain = TextDomain::new(without_extension.to_string_lossy());

    (!domain.is_empty()).then_some(domain)
}
