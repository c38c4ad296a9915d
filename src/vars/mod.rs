//! Variable sources for tag population.
//!
//! A variable source is anything implementing [`FieldResolver`]. Maps of
//! strings, numbers or JSON values, `serde_json` values, and any
//! `Serialize` record (through [`SerializedFields`]) work out of the box.

/// Subfield path splitting
mod path;
/// Resolver trait and implementations
mod resolver;
/// Rendering of individual values
mod value;

pub use path::{
    SUBFIELD_SEPARATOR,
    subfield_splits,
};
pub use resolver::{
    FieldResolver,
    FnResolver,
    NoVars,
    SerializedFields,
};
pub use value::{
    LIST_SEPARATOR,
    TagValue,
    lookup_json,
    lookup_json_map,
};
