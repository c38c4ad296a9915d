//! Variable sources that tags are resolved against.

use std::borrow::Borrow;
use std::collections::{
    BTreeMap,
    HashMap,
};
use std::fmt;
use std::hash::{
    BuildHasher,
    Hash,
};

use serde::Serialize;
use serde_json::{
    Map,
    Value,
};

use super::path::subfield_splits;
use super::value::TagValue;

/// Resolves a tag path (`name`, `user.address.city`) to replacement text.
///
/// Returning `None` means the tag is null: it is removed or kept literally
/// depending on `removeNullTags`. OR-tags (`a|b`) are split by the populator
/// before this is called, so implementations only ever see single paths.
pub trait FieldResolver {
    /// Resolves a single, possibly dotted, path.
    fn resolve(&self, path: &str) -> Option<String>;
}

impl<T: FieldResolver + ?Sized> FieldResolver for &T {
    fn resolve(&self, path: &str) -> Option<String> {
        (**self).resolve(path)
    }
}

/// Resolvers are tried in order; the first one that knows the path wins.
impl<R: FieldResolver> FieldResolver for [R] {
    fn resolve(&self, path: &str) -> Option<String> {
        self.iter().find_map(|resolver| resolver.resolve(path))
    }
}

impl<K, V, S> FieldResolver for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: TagValue,
    S: BuildHasher,
{
    fn resolve(&self, path: &str) -> Option<String> {
        resolve_in_map(|key| self.get(key), path)
    }
}

impl<K, V> FieldResolver for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: TagValue,
{
    fn resolve(&self, path: &str) -> Option<String> {
        resolve_in_map(|key| self.get(key), path)
    }
}

impl FieldResolver for Map<String, Value> {
    fn resolve(&self, path: &str) -> Option<String> {
        resolve_in_map(|key| self.get(key), path)
    }
}

impl FieldResolver for Value {
    fn resolve(&self, path: &str) -> Option<String> {
        self.subfield(path)
    }
}

/// Looks `path` up as a key, then as `head.subfield` for every split.
fn resolve_in_map<'m, V, F>(get: F, path: &str) -> Option<String>
where
    V: TagValue + 'm,
    F: Fn(&str) -> Option<&'m V>,
{
    if let Some(value) = get(path) {
        return value.render();
    }

    subfield_splits(path).find_map(|(head, rest)| get(head)?.subfield(rest))
}

/// Exposes the fields of any serializable record as tag values.
///
/// The record is serialized once to JSON; nested structs, maps and
/// sequences become reachable through dotted paths.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedFields {
    /// Serialized form of the record.
    value: Value,
}

impl SerializedFields {
    /// Serializes `record` for tag lookup.
    ///
    /// # Errors
    /// Returns an error if the record cannot be represented as JSON
    /// (e.g. a map with non-string keys).
    pub fn new<T: Serialize + ?Sized>(record: &T) -> Result<Self, serde_json::Error> {
        Ok(Self { value: serde_json::to_value(record)? })
    }

    /// The serialized record.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.value
    }
}

impl FieldResolver for SerializedFields {
    fn resolve(&self, path: &str) -> Option<String> {
        self.value.resolve(path)
    }
}

/// Adapts a closure into a [`FieldResolver`].
pub struct FnResolver<F>(pub F);

impl<F> fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnResolver").finish_non_exhaustive()
    }
}

impl<F> FieldResolver for FnResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, path: &str) -> Option<String> {
        (self.0)(path)
    }
}

/// A source with no variables; every tag is null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoVars;

impl FieldResolver for NoVars {
    fn resolve(&self, _path: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Address {
        city: String,
    }

    #[derive(Serialize)]
    struct Customer {
        first_name: String,
        title: Option<String>,
        address: Address,
        orders: Vec<u32>,
    }

    fn customer() -> Customer {
        Customer {
            first_name: "Ana".to_string(),
            title: None,
            address: Address { city: "Porto".to_string() },
            orders: vec![3, 5],
        }
    }

    #[rstest]
    fn string_map_exact_lookup() {
        let vars = HashMap::from([("name", "Ana"), ("user.name", "dotted")]);

        assert_that!(vars.resolve("name"), some(eq("Ana")));
        assert_that!(vars.resolve("user.name"), some(eq("dotted")));
        assert_that!(vars.resolve("missing"), none());
        assert_that!(vars.resolve("name.first"), none());
    }

    #[rstest]
    fn btree_map_of_numbers() {
        let vars = BTreeMap::from([("count".to_string(), 3_u32)]);

        assert_that!(vars.resolve("count"), some(eq("3")));
    }

    #[rstest]
    fn map_of_json_values_traverses_subfields() {
        let vars: HashMap<String, Value> = HashMap::from([
            ("user".to_string(), json!({"name": "Ana", "roles": ["admin", "dev"]})),
            ("empty".to_string(), Value::Null),
        ]);

        assert_that!(vars.resolve("user.name"), some(eq("Ana")));
        assert_that!(vars.resolve("user.roles"), some(eq("admin|dev")));
        assert_that!(vars.resolve("user.roles.1"), some(eq("dev")));
        assert_that!(vars.resolve("empty"), none());
    }

    #[rstest]
    fn json_map_resolves_like_json_value() {
        let Value::Object(map) = json!({"a": {"b": "c"}}) else {
            panic!("expected an object");
        };

        assert_that!(map.resolve("a.b"), some(eq("c")));
    }

    #[rstest]
    fn serialized_record_fields() {
        let fields = SerializedFields::new(&customer()).unwrap();

        assert_that!(fields.resolve("first_name"), some(eq("Ana")));
        assert_that!(fields.resolve("title"), none());
        assert_that!(fields.resolve("address.city"), some(eq("Porto")));
        assert_that!(fields.resolve("orders"), some(eq("3|5")));
        assert_that!(fields.resolve("orders.1"), some(eq("5")));
    }

    #[rstest]
    fn serialized_fields_rejects_non_string_keys() {
        let record = HashMap::from([((1, 2), "pair")]);

        assert_that!(SerializedFields::new(&record), err(anything()));
    }

    #[rstest]
    fn layered_resolvers_first_match_wins() {
        let overrides = HashMap::from([("name", "Override")]);
        let defaults = HashMap::from([("name", "Default"), ("site", "Example")]);
        let layers = [&overrides, &defaults];

        assert_that!(layers.resolve("name"), some(eq("Override")));
        assert_that!(layers.resolve("site"), some(eq("Example")));
        assert_that!(layers.resolve("none"), none());
    }

    #[rstest]
    fn closure_resolver() {
        let resolver = FnResolver(|path: &str| path.strip_prefix("upper.").map(str::to_uppercase));

        assert_that!(resolver.resolve("upper.abc"), some(eq("ABC")));
        assert_that!(resolver.resolve("abc"), none());
    }

    #[rstest]
    fn no_vars_resolves_nothing() {
        assert_that!(NoVars.resolve("anything"), none());
    }
}
