//! Translate-and-populate.
//!
//! Looks a text up in a translator, then fills in its tags:
//!
//! ```
//! use std::collections::HashMap;
//!
//! use string_tags::{PopulateOptions, Untranslated, translate_and_populate};
//!
//! let vars = HashMap::from([("name", "Ana")]);
//! let text = translate_and_populate(
//!     &Untranslated,
//!     "Hello {name}",
//!     &vars,
//!     None,
//!     None,
//!     &PopulateOptions::default(),
//! );
//! assert_eq!(text, "Hello Ana");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::catalog::{
    Catalog,
    CatalogError,
    TextDomain,
};
use crate::config::ConfigManager;
use crate::tags::{
    PopulateOptions,
    populate_tags,
};
use crate::vars::FieldResolver;

/// Looks up the localized form of a source text.
pub trait Translate {
    /// Returns the translation of `text`, or `text` itself when there is none.
    ///
    /// `domain` selects the catalog namespace; `None` lets the implementation
    /// pick its default. `context` disambiguates texts that are spelled the
    /// same but translate differently.
    fn translate<'a>(
        &'a self,
        text: &'a str,
        domain: Option<&TextDomain>,
        context: Option<&str>,
    ) -> Cow<'a, str>;
}

impl<T: Translate + ?Sized> Translate for &T {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        domain: Option<&TextDomain>,
        context: Option<&str>,
    ) -> Cow<'a, str> {
        (**self).translate(text, domain, context)
    }
}

impl<T: Translate + ?Sized> Translate for Arc<T> {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        domain: Option<&TextDomain>,
        context: Option<&str>,
    ) -> Cow<'a, str> {
        (**self).translate(text, domain, context)
    }
}

/// Identity translator: every text is its own translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        _domain: Option<&TextDomain>,
        _context: Option<&str>,
    ) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Translates `text`, then populates its tags from `vars`.
///
/// Missing translations fall back to `text`; missing tags follow
/// `options.remove_null_tags`. Never fails.
#[must_use]
pub fn translate_and_populate<T, V>(
    translator: &T,
    text: &str,
    vars: &V,
    context: Option<&str>,
    text_domain: Option<&TextDomain>,
    options: &PopulateOptions,
) -> String
where
    T: Translate + ?Sized,
    V: FieldResolver + ?Sized,
{
    let localized = translator.translate(text, text_domain, context);
    if localized != text {
        tracing::trace!(text, localized = localized.as_ref(), "Translated text");
    }

    populate_tags(&localized, vars, options)
}

/// Populates `text` with default options and no translation.
#[must_use]
pub fn st<V: FieldResolver + ?Sized>(text: &str, vars: &V) -> String {
    translate_and_populate(&Untranslated, text, vars, None, None, &PopulateOptions::default())
}

/// A translator bundled with the options used for every call.
#[derive(Debug, Clone, Default)]
pub struct Localizer<T> {
    /// Source of translations.
    translator: T,

    /// Options applied to every population.
    options: PopulateOptions,
}

impl<T: Translate> Localizer<T> {
    #[must_use]
    pub fn new(translator: T) -> Self {
        Self { translator, options: PopulateOptions::default() }
    }

    #[must_use]
    pub fn with_options(mut self, options: PopulateOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn translator(&self) -> &T {
        &self.translator
    }

    #[must_use]
    pub const fn options(&self) -> &PopulateOptions {
        &self.options
    }

    /// Translates and populates `text` in the default domain.
    #[must_use]
    pub fn st<V: FieldResolver + ?Sized>(&self, text: &str, vars: &V) -> String {
        translate_and_populate(&self.translator, text, vars, None, None, &self.options)
    }

    /// Translates and populates `text` with an explicit domain and context.
    #[must_use]
    pub fn st_with<V: FieldResolver + ?Sized>(
        &self,
        text: &str,
        vars: &V,
        context: Option<&str>,
        text_domain: Option<&TextDomain>,
    ) -> String {
        translate_and_populate(&self.translator, text, vars, context, text_domain, &self.options)
    }
}

impl Localizer<Catalog> {
    /// Loads the catalog and tag options described by a configuration.
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded.
    pub fn from_config(config: &ConfigManager) -> Result<Self, CatalogError> {
        let catalog = config.load_catalog()?;

        Ok(Self::new(catalog).with_options(config.get_settings().tags.clone()))
    }
}
