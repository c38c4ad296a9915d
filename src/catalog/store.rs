//! In-memory translation catalog for one language.

use std::borrow::Cow;
use std::collections::{
    BTreeMap,
    HashMap,
};
use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::domain::TextDomain;
use super::error::CatalogError;
use super::file::{
    CatalogFile,
    detect_domain_from_path,
    load_catalog_file,
};
use crate::config::{
    CatalogConfig,
    Settings,
};
use crate::translate::Translate;

/// Translation value meaning "same as the source text".
const SAME_AS_SOURCE: &str = "=";

/// Translations of one text domain, grouped by context.
#[derive(Debug, Clone, Default)]
struct DomainEntries {
    /// Context (`""` for none) → source text → translation.
    by_context: HashMap<String, HashMap<String, String>>,
}

impl DomainEntries {
    /// Looks up the translation of `text` under `context`.
    fn get(&self, text: &str, context: Option<&str>) -> Option<&str> {
        self.by_context.get(context.unwrap_or_default())?.get(text).map(String::as_str)
    }

    /// Adds or replaces a translation.
    fn insert(&mut self, context: Option<&str>, text: String, translation: String) {
        self.by_context
            .entry(context.unwrap_or_default().to_string())
            .or_default()
            .insert(text, translation);
    }

    /// Number of translations across all contexts.
    fn len(&self) -> usize {
        self.by_context.values().map(HashMap::len).sum()
    }
}

/// Read-only translation catalog.
///
/// Built once (usually with [`Catalog::load`]) and then shared; lookups take
/// `&self` only, so a catalog can sit behind an `Arc` for concurrent callers.
///
/// Domain resolution for a lookup:
/// 1. the domain passed by the caller, and only that one
/// 2. otherwise the catalog's default domain
/// 3. then every domain, in sorted order (first hit wins)
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Language the translations are written in.
    language: Option<String>,

    /// Domain used when the caller passes none.
    default_domain: Option<TextDomain>,

    /// Domain → entries. Sorted so that searching every domain is deterministic.
    domains: BTreeMap<TextDomain, DomainEntries>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_default_domain(mut self, domain: TextDomain) -> Self {
        self.default_domain = Some(domain);
        self
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub const fn default_domain(&self) -> Option<&TextDomain> {
        self.default_domain.as_ref()
    }

    /// Domains with at least one translation, in sorted order.
    pub fn domains(&self) -> impl Iterator<Item = &TextDomain> {
        self.domains.keys()
    }

    /// Total number of translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.values().map(DomainEntries::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds or replaces one translation. An empty context means no context.
    pub fn insert(
        &mut self,
        domain: TextDomain,
        context: Option<&str>,
        text: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.domains.entry(domain).or_default().insert(context, text.into(), translation.into());
    }

    /// Adds every entry of a parsed catalog file.
    ///
    /// The file's own `textdomain` takes precedence over `domain`.
    pub fn add_file(&mut self, domain: TextDomain, file: &CatalogFile) {
        let domain = file.textdomain.as_deref().map_or(domain, TextDomain::new);
        for (text, value) in &file.translations {
            for (context, translation) in value.entries() {
                self.insert(domain.clone(), context, text.as_str(), translation);
            }
        }
    }

    /// Reads one catalog file into this catalog.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(&mut self, path: &Path, domain: TextDomain) -> Result<(), CatalogError> {
        let file = load_catalog_file(path)?;
        tracing::debug!(
            path = %path.display(),
            domain = %domain,
            entries = file.entry_count(),
            "Loaded catalog file"
        );
        self.add_file(domain, &file);
        Ok(())
    }

    /// Loads every catalog file of `language` under `root`.
    ///
    /// Files are looked for in `root/<language>`; each file's domain is its
    /// path relative to that directory. A missing language directory yields
    /// an empty catalog.
    ///
    /// # Errors
    /// Returns an error if a pattern is invalid or a catalog file cannot be
    /// read or parsed.
    pub fn load_dir(
        root: &Path,
        language: &str,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let language_dir = root.join(language);
        let mut catalog = Self::new().with_language(language);

        if !language_dir.is_dir() {
            tracing::debug!(
                language_dir = %language_dir.display(),
                "Catalog directory not found, nothing will be translated"
            );
            return Ok(catalog);
        }

        for path in find_catalog_files(&language_dir, config)? {
            let relative_path = path.strip_prefix(&language_dir).unwrap_or(&path);
            let Some(domain) = detect_domain_from_path(relative_path) else {
                continue;
            };
            catalog.load_file(&path, domain)?;
        }

        tracing::debug!(
            language,
            domains = catalog.domains.len(),
            entries = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Loads the catalog described by `settings` from a catalog root.
    ///
    /// Without a configured language an empty catalog is returned.
    ///
    /// # Errors
    /// See [`Catalog::load_dir`].
    pub fn load(catalog_root: &Path, settings: &Settings) -> Result<Self, CatalogError> {
        let catalog = match &settings.language {
            Some(language) => Self::load_dir(catalog_root, language, &settings.catalog)?,
            None => {
                tracing::debug!("No language configured, nothing will be translated");
                Self::new()
            }
        };

        Ok(match &settings.default_domain {
            Some(domain) => catalog.with_default_domain(TextDomain::new(domain)),
            None => catalog,
        })
    }

    /// Finds the translation of `text`.
    ///
    /// Returns `None` when there is no usable translation, including
    /// translations that are empty or `"="` (same as source).
    #[must_use]
    pub fn lookup(
        &self,
        text: &str,
        domain: Option<&TextDomain>,
        context: Option<&str>,
    ) -> Option<&str> {
        let found = match (domain, &self.default_domain) {
            (Some(domain), _) => self.domains.get(domain)?.get(text, context),
            (None, Some(default_domain)) => self
                .domains
                .get(default_domain)
                .and_then(|entries| entries.get(text, context))
                .or_else(|| self.find_in_any_domain(text, context)),
            (None, None) => self.find_in_any_domain(text, context),
        };

        found.filter(|translation| !translation.is_empty() && *translation != SAME_AS_SOURCE)
    }

    /// First entry for `text` across all domains, in sorted domain order.
    fn find_in_any_domain(&self, text: &str, context: Option<&str>) -> Option<&str> {
        self.domains.values().find_map(|entries| entries.get(text, context))
    }
}

impl Translate for Catalog {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        domain: Option<&TextDomain>,
        context: Option<&str>,
    ) -> Cow<'a, str> {
        self.lookup(text, domain, context).map_or(Cow::Borrowed(text), Cow::Borrowed)
    }
}

/// Builds a glob set from patterns.
fn build_glob_set(patterns: &[String]) -> Result<GlobSet, CatalogError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| CatalogError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| CatalogError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// Finds catalog files under a language directory, sorted by path.
fn find_catalog_files(
    language_dir: &Path,
    config: &CatalogConfig,
) -> Result<Vec<PathBuf>, CatalogError> {
    let include_set = build_glob_set(std::slice::from_ref(&config.file_pattern))?;
    let exclude_set = build_glob_set(&config.exclude_patterns)?;

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(language_dir)
        .hidden(true)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(language_dir) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    Ok(found_files)
}
