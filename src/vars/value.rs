//! Conversion of variable values into replacement text.

use std::borrow::Cow;

use serde_json::{
    Map,
    Value,
};

use super::path::subfield_splits;

/// Separator used when rendering a list of values.
pub const LIST_SEPARATOR: &str = "|";

/// A value that can be substituted for a tag.
pub trait TagValue {
    /// Renders the value as replacement text. `None` means null.
    fn render(&self) -> Option<String>;

    /// Resolves a dotted subfield path inside this value.
    ///
    /// Scalars have no subfields.
    fn subfield(&self, path: &str) -> Option<String> {
        let _ = path;
        None
    }
}

impl TagValue for str {
    fn render(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl TagValue for String {
    fn render(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl TagValue for Cow<'_, str> {
    fn render(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: TagValue + ?Sized> TagValue for &T {
    fn render(&self) -> Option<String> {
        (**self).render()
    }

    fn subfield(&self, path: &str) -> Option<String> {
        (**self).subfield(path)
    }
}

impl<T: TagValue> TagValue for Option<T> {
    fn render(&self) -> Option<String> {
        self.as_ref().and_then(TagValue::render)
    }

    fn subfield(&self, path: &str) -> Option<String> {
        self.as_ref().and_then(|value| value.subfield(path))
    }
}

/// Implements [`TagValue`] through `Display` for scalar types.
macro_rules! display_tag_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TagValue for $ty {
                fn render(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_tag_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl TagValue for Value {
    fn render(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Array(items) => {
                Some(items.iter().filter_map(Self::render).collect::<Vec<_>>().join(LIST_SEPARATOR))
            }
            Self::Object(_) => Some(self.to_string()),
        }
    }

    fn subfield(&self, path: &str) -> Option<String> {
        lookup_json(self, path).and_then(TagValue::render)
    }
}

impl TagValue for Map<String, Value> {
    fn render(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    fn subfield(&self, path: &str) -> Option<String> {
        lookup_json_map(self, path).and_then(TagValue::render)
    }
}

/// Finds the JSON value addressed by a dotted path.
///
/// Object keys are matched exactly before the path is split, so a key like
/// `"a.b"` is reachable. Array elements are addressed by index (`items.0`).
#[must_use]
pub fn lookup_json<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => lookup_json_map(map, path),
        Value::Array(items) => {
            if let Ok(index) = path.parse::<usize>() {
                return items.get(index);
            }
            let (head, rest) = path.split_once(super::path::SUBFIELD_SEPARATOR)?;
            let index = head.parse::<usize>().ok()?;
            lookup_json(items.get(index)?, rest)
        }
        _ => None,
    }
}

/// [`lookup_json`] for a JSON object.
#[must_use]
pub fn lookup_json_map<'v>(map: &'v Map<String, Value>, path: &str) -> Option<&'v Value> {
    if let Some(value) = map.get(path) {
        return Some(value);
    }

    subfield_splits(path).find_map(|(head, rest)| lookup_json(map.get(head)?, rest))
}
