//! String tag population.
//!
//! Tags are placeholders such as `{first_name}`, `{user.address.city}`
//! (subfield) or `{first_name|title|name}` (OR-tag). Delimiters and the
//! handling of values are controlled by [`PopulateOptions`].

/// HTML entity encoding and decoding
pub mod entity;
/// Population options
mod options;
/// Tag replacement
mod populate;
/// Tag scanning
pub mod scanner;

pub use options::{
    DEFAULT_MAX_RECURSION_DEPTH,
    PopulateOptions,
};
pub use populate::{
    OR_SEPARATOR,
    populate_tags,
};
pub use scanner::{
    TagSpan,
    find_tags,
};
