//! string-tags
//!
//! 翻訳テキストの取得と `{tag}` の置換を行うライブラリ
//!
//! A source text is looked up in a [`Translate`] implementation (usually a
//! [`Catalog`] loaded from JSON files), then its tags are replaced with values
//! from a [`FieldResolver`]:
//!
//! ```
//! use serde_json::json;
//! use string_tags::{Catalog, Localizer, TextDomain};
//!
//! let mut catalog = Catalog::new().with_language("es");
//! catalog.insert(TextDomain::new("checkout"), None, "Hello {first_name|name}", "Hola {first_name|name}");
//!
//! let localizer = Localizer::new(catalog);
//! let vars = json!({"name": "Ana"});
//! assert_eq!(
//!     localizer.st_with("Hello {first_name|name}", &vars, None, Some(&TextDomain::new("checkout"))),
//!     "Hola Ana",
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod tags;
pub mod translate;
pub mod vars;

#[cfg(test)]
mod test_utils;

pub use catalog::{
    Catalog,
    CatalogError,
    TextDomain,
};
pub use config::{
    ConfigError,
    ConfigManager,
    Settings,
};
pub use tags::{
    PopulateOptions,
    populate_tags,
};
pub use translate::{
    Localizer,
    Translate,
    Untranslated,
    st,
    translate_and_populate,
};
pub use vars::{
    FieldResolver,
    SerializedFields,
};
