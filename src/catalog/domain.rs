//! Text domains: the namespace a translatable string belongs to.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// A normalized text domain.
///
/// Domains are usually derived from where a string lives: a file path
/// (`site/templates/home.php`) or a Rust module path (`my_app::ui::home`).
/// Both forms normalize to the same shape so catalogs can be keyed by either:
///
/// ```
/// use string_tags::TextDomain;
///
/// assert_eq!(TextDomain::new("site/templates/home.php").as_str(), "site--templates--home-php");
/// assert_eq!(TextDomain::new("my_app::ui::Home").as_str(), "my_app--ui--home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TextDomain(String);

impl TextDomain {
    /// Creates a normalized text domain.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize(raw.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lowercases and flattens path separators.
///
/// `::`, `/` and `\` become `--`, `.` becomes `-`. Leading `./` and
/// separators are dropped.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches("./").trim_start_matches(['/', '\\']);

    let mut normalized = String::with_capacity(trimmed.len() + 8);
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                normalized.push_str("--");
            }
            '/' | '\\' => normalized.push_str("--"),
            '.' => normalized.push('-'),
            _ => normalized.extend(c.to_lowercase()),
        }
    }
    normalized
}

impl fmt::Display for TextDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TextDomain {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for TextDomain {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<TextDomain> for String {
    fn from(domain: TextDomain) -> Self {
        domain.0
    }
}

/// Text domain of the calling module, or of an explicit name.
///
/// Without arguments this expands to the caller's `module_path!()`, so a
/// string translated from `my_app::ui::home` looks in the
/// `my_app--ui--home` domain.
///
/// ```
/// use string_tags::text_domain;
///
/// let here = text_domain!();
/// assert!(!here.is_empty());
/// assert_eq!(text_domain!("Admin.Users").as_str(), "admin-users");
/// ```
#[macro_export]
macro_rules! text_domain {
    () => {
        $crate::TextDomain::new(::core::module_path!())
    };
    ($domain:expr) => {
        $crate::TextDomain::new($domain)
    };
}
