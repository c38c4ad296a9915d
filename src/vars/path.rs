//! Subfield path utilities.

/// Separator between subfield names in a tag path (`user.address.city`).
pub const SUBFIELD_SEPARATOR: char = '.';

/// Every way of splitting `path` into a head field and a remaining subpath.
///
/// Splits are yielded shortest head first, so `a.b.c` gives `("a", "b.c")`
/// then `("a.b", "c")`. This lets field names that themselves contain dots
/// still be reached.
pub fn subfield_splits(path: &str) -> impl Iterator<Item = (&str, &str)> {
    path.match_indices(SUBFIELD_SEPARATOR).filter_map(move |(index, separator)| {
        let head = path.get(..index)?;
        let rest = path.get(index + separator.len()..)?;
        (!head.is_empty() && !rest.is_empty()).then_some((head, rest))
    })
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("name", vec![])]
    #[case("a.b", vec![("a", "b")])]
    #[case("a.b.c", vec![("a", "b.c"), ("a.b", "c")])]
    #[case(".a", vec![])]
    #[case("a.", vec![])]
    #[case("items.0.title", vec![("items", "0.title"), ("items.0", "title")])]
    fn subfield_splits_cases(#[case] path: &str, #[case] expected: Vec<(&str, &str)>) {
        assert_eq!(subfield_splits(path).collect::<Vec<_>>(), expected);
    }
}
