//! Locates `{name}`-style tags in a string.

use std::collections::HashMap;
use std::sync::{
    Mutex,
    OnceLock,
    PoisonError,
};

use regex::Regex;

/// A tag found in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan<'a> {
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset just past the closing delimiter.
    pub end: usize,
    /// Tag name between the delimiters (e.g. `first_name`, `a.b`, `a|b`).
    pub name: &'a str,
    /// The whole tag including delimiters.
    pub raw: &'a str,
}

/// Tag name grammar: ASCII alphanumerics and `_ . | -`.
const TAG_NAME_PATTERN: &str = r"[-_.|A-Za-z0-9]+";

/// Compiled tag patterns, one per `(tag_open, tag_close)` pair.
static TAG_PATTERNS: OnceLock<Mutex<HashMap<(String, String), Regex>>> = OnceLock::new();

/// Cheap pre-check: can `text` contain a tag at all?
#[must_use]
pub fn might_contain_tags(text: &str, tag_open: &str, tag_close: &str) -> bool {
    !tag_open.is_empty()
        && text.contains(tag_open)
        && (tag_close.is_empty() || text.contains(tag_close))
}

/// Returns the pattern matching `tag_open name tag_close`, compiling it on
/// first use.
fn tag_pattern(tag_open: &str, tag_close: &str) -> Option<Regex> {
    let key = (tag_open.to_string(), tag_close.to_string());
    let mut patterns =
        TAG_PATTERNS.get_or_init(Mutex::default).lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(pattern) = patterns.get(&key) {
        return Some(pattern.clone());
    }

    let source = format!(
        "{}({TAG_NAME_PATTERN}){}",
        regex::escape(tag_open),
        regex::escape(tag_close)
    );
    match Regex::new(&source) {
        Ok(pattern) => {
            tracing::trace!(tag_open, tag_close, "Compiled tag pattern");
            patterns.insert(key, pattern.clone());
            Some(pattern)
        }
        Err(err) => {
            tracing::debug!(?err, tag_open, tag_close, "Failed to compile tag pattern");
            None
        }
    }
}

/// Finds every tag in `text`, in order of appearance.
///
/// A tag is `tag_open`, one or more tag name characters, then `tag_close`.
/// If `tag_close` is itself made of name characters, the longest name that is
/// still followed by `tag_close` wins. An opener that does not start a valid
/// tag is left as literal text.
#[must_use]
pub fn find_tags<'a>(text: &'a str, tag_open: &str, tag_close: &str) -> Vec<TagSpan<'a>> {
    if !might_contain_tags(text, tag_open, tag_close) {
        return Vec::new();
    }
    let Some(pattern) = tag_pattern(tag_open, tag_close) else {
        return Vec::new();
    };

    pattern
        .captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let name = captures.get(1)?;
            Some(TagSpan {
                start: whole.start(),
                end: whole.end(),
                name: name.as_str(),
                raw: whole.as_str(),
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    fn names<'a>(text: &'a str, open: &str, close: &str) -> Vec<&'a str> {
        find_tags(text, open, close).iter().map(|tag| tag.name).collect()
    }

    #[rstest]
    #[case::single("Hello {name}", vec!["name"])]
    #[case::several("{a} and {b}", vec!["a", "b"])]
    #[case::subfield("{user.address.city}", vec!["user.address.city"])]
    #[case::or_tag("Hi {first_name|title|name}!", vec!["first_name|title|name"])]
    #[case::dashes("{data-id}", vec!["data-id"])]
    #[case::empty_name("{} is not a tag", vec![])]
    #[case::space_in_name("{not a tag}", vec![])]
    #[case::unclosed("{name", vec![])]
    #[case::nested_opener("{{name}}", vec!["name"])]
    #[case::no_tags("plain text", vec![])]
    #[case::unicode_around("¡Hola {nombre}! ✓", vec!["nombre"])]
    fn find_tags_default_delimiters(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(names(text, "{", "}"), expected);
    }

    #[rstest]
    fn find_tags_reports_offsets() {
        let tags = find_tags("Hi {name}!", "{", "}");

        assert_eq!(tags, vec![TagSpan { start: 3, end: 9, name: "name", raw: "{name}" }]);
    }

    #[rstest]
    #[case::double_brackets("[[a]] {b} [[c]]", "[[", "]]", vec!["a", "c"])]
    #[case::percent("%user% logged in", "%", "%", vec!["user"])]
    #[case::no_close("Dear $name, your $item.title", "$", "", vec!["name", "item.title"])]
    #[case::close_is_name_char("-a-b-", "-", "-", vec!["a-b"])]
    #[case::regex_metacharacters("(*a*) (b) (*c.d*)", "(*", "*)", vec!["a", "c.d"])]
    #[case::dollar_braces("${a} {b} ${c|d}", "${", "}", vec!["a", "c|d"])]
    fn find_tags_custom_delimiters(
        #[case] text: &str,
        #[case] open: &str,
        #[case] close: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(names(text, open, close), expected);
    }

    #[rstest]
    #[case("no braces", "{", "}", false)]
    #[case("only {open", "{", "}", false)]
    #[case("{both}", "{", "}", true)]
    #[case("$var", "$", "", true)]
    #[case("anything", "", "}", false)]
    fn might_contain_tags_cases(
        #[case] text: &str,
        #[case] open: &str,
        #[case] close: &str,
        #[case] expected: bool,
    ) {
        assert_that!(might_contain_tags(text, open, close), eq(expected));
    }
}
