//! Options controlling how tags are recognized and replaced.

use serde::{
    Deserialize,
    Serialize,
};

/// Upper bound on population passes when `recursive` is enabled.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 10;

/// Tag population options.
///
/// Deserializes from camelCase keys (`tagOpen`, `removeNullTags`, ...).
/// Every key is optional and unknown keys are ignored, so a partial JSON
/// object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopulateOptions {
    /// Opening tag characters.
    pub tag_open: String,

    /// Closing tag characters. May be empty, in which case a tag ends at the
    /// first character that cannot be part of a tag name.
    pub tag_close: String,

    /// Populate tags that appear inside substituted values too.
    pub recursive: bool,

    /// Remove tags that resolve to nothing. When `false` they stay literal.
    pub remove_null_tags: bool,

    /// HTML-entity-encode substituted values.
    pub entity_encode: bool,

    /// HTML-entity-decode substituted values.
    pub entity_decode: bool,

    /// Maximum number of passes when `recursive` is set.
    pub max_recursion_depth: usize,
}

impl Default for PopulateOptions {
    fn default() -> Self {
        Self {
            tag_open: "{".to_string(),
            tag_close: "}".to_string(),
            recursive: false,
            remove_null_tags: true,
            entity_encode: false,
            entity_decode: false,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

impl PopulateOptions {
    /// Options with custom delimiters and every other setting at its default.
    #[must_use]
    pub fn with_delimiters(tag_open: impl Into<String>, tag_close: impl Into<String>) -> Self {
        Self { tag_open: tag_open.into(), tag_close: tag_close.into(), ..Self::default() }
    }

    /// Builds options from a loose JSON object, ignoring unknown keys.
    ///
    /// # Errors
    /// Returns an error if a known key has the wrong type.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
