//! Translation catalogs.
//!
//! Catalogs live on disk as one directory per language, each holding JSON
//! catalog files. A file's path relative to its language directory is its
//! text domain:
//!
//! ```text
//! locales/
//! ├── es/
//! │   ├── cart.json                      # domain "cart"
//! │   └── site/templates/home-php.json   # domain "site--templates--home-php"
//! └── pt/
//!     └── cart.json
//! ```

/// Text domain normalization
mod domain;
/// Catalog errors
mod error;
/// Catalog file format
mod file;
/// In-memory catalog
mod store;

pub use domain::TextDomain;
pub use error::CatalogError;
pub use file::{
    CatalogFile,
    TranslationValue,
    detect_domain_from_path,
    load_catalog_file,
};
pub use store::Catalog;
