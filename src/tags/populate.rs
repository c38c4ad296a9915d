//! Tag population: replaces tags with values from a variable source.

use std::collections::HashMap;

use super::entity;
use super::options::PopulateOptions;
use super::scanner::{
    find_tags,
    might_contain_tags,
};
use crate::vars::FieldResolver;

/// Separator between the alternatives of an OR-tag (`{first_name|name}`).
pub const OR_SEPARATOR: char = '|';

/// Replaces every tag in `text` with its value from `vars`.
///
/// - `{name}` is resolved through [`FieldResolver::resolve`].
/// - `{a|b|c}` tries each alternative in turn; the first non-empty value
///   wins.
/// - Null tags are removed, or kept literally when `remove_null_tags` is off.
/// - With `recursive`, tags inside a substituted value are populated before
///   the value is inserted, nesting at most `max_recursion_depth` levels.
///   The surrounding text is scanned once, so a value never combines with
///   neighbouring text into a new tag.
///
/// Never fails: unknown tags are treated as null.
#[must_use]
pub fn populate_tags<V>(text: &str, vars: &V, options: &PopulateOptions) -> String
where
    V: FieldResolver + ?Sized,
{
    substitute(text, options, |name| resolve_tag(name, vars, options))
}

/// One left-to-right replacement pass. Each distinct tag is resolved once.
fn substitute<F>(text: &str, options: &PopulateOptions, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let tags = find_tags(text, &options.tag_open, &options.tag_close);
    if tags.is_empty() {
        return text.to_string();
    }

    let mut resolved: HashMap<&str, Option<String>> = HashMap::new();
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for tag in &tags {
        output.push_str(text.get(cursor..tag.start).unwrap_or_default());
        cursor = tag.end;

        let replacement = resolved.entry(tag.name).or_insert_with(|| resolve(tag.name));
        match replacement {
            Some(value) => output.push_str(value),
            None if options.remove_null_tags => {}
            None => output.push_str(tag.raw),
        }
    }
    output.push_str(text.get(cursor..).unwrap_or_default());

    tracing::trace!(tags = tags.len(), distinct = resolved.len(), "Populated string tags");
    output
}

/// Resolves a tag name and applies entity options to the final value.
fn resolve_tag<V>(name: &str, vars: &V, options: &PopulateOptions) -> Option<String>
where
    V: FieldResolver + ?Sized,
{
    let mut value = resolve_value(name, vars, options, 1)?;
    if options.entity_encode {
        value = entity::encode(&value);
    }
    if options.entity_decode {
        value = entity::decode(&value);
    }
    Some(value)
}

/// Resolves a tag name, populating tags inside the value when `recursive`.
///
/// `depth` is the nesting level of the value being resolved, starting at 1.
fn resolve_value<V>(name: &str, vars: &V, options: &PopulateOptions, depth: usize) -> Option<String>
where
    V: FieldResolver + ?Sized,
{
    let value = resolve_alternatives(name, vars)?;
    if !options.recursive
        || depth >= options.max_recursion_depth
        || !might_contain_tags(&value, &options.tag_open, &options.tag_close)
    {
        return Some(value);
    }

    Some(substitute(&value, options, |inner| resolve_value(inner, vars, options, depth + 1)))
}

/// Resolves a possibly OR-separated tag name.
///
/// The first alternative with a non-empty value wins. If none has one but
/// some resolved to an empty string, the empty string is returned so the tag
/// still counts as present.
fn resolve_alternatives<V>(name: &str, vars: &V) -> Option<String>
where
    V: FieldResolver + ?Sized,
{
    if !name.contains(OR_SEPARATOR) {
        return vars.resolve(name);
    }

    let mut empty = None;
    for alternative in name.split(OR_SEPARATOR).filter(|alternative| !alternative.is_empty()) {
        match vars.resolve(alternative) {
            Some(value) if !value.is_empty() => return Some(value),
            Some(value) => empty = empty.or(Some(value)),
            None => {}
        }
    }
    empty
}
