//! HTML entity encoding and decoding for substituted values.

/// Longest entity body we try to recognize (`&` and `;` excluded).
const MAX_ENTITY_LEN: usize = 10;

/// Named entities understood by [`decode`].
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("hellip", '…'),
    ("ndash", '–'),
    ("mdash", '—'),
    ("laquo", '«'),
    ("raquo", '»'),
];

/// Longest named entity body left alone by [`encode`].
const MAX_ENTITY_NAME_LEN: usize = 32;

/// Escapes markup characters for safe inclusion in HTML.
///
/// Escaping is done by `v_htmlescape` (`& < > " ' /`). An `&` that already
/// starts a well-formed entity (`&hearts;`, `&#169;`, `&#x263A;`) is left
/// alone, so `&amp;` does not become `&amp;amp;`.
#[must_use]
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&v_htmlescape::escape(rest.get(..amp).unwrap_or_default()).to_string());
        let candidate = rest.get(amp..).unwrap_or_default();

        let consumed = match entity_len(candidate) {
            Some(len) => {
                out.push_str(candidate.get(..len).unwrap_or_default());
                len
            }
            None => {
                out.push_str("&amp;");
                1
            }
        };
        rest = candidate.get(consumed..).unwrap_or_default();
    }

    out.push_str(&v_htmlescape::escape(rest).to_string());
    out
}

/// Byte length of the well-formed entity at the start of `s`, if any.
///
/// Named entities are not checked against a table: any
/// `&name;` with an alphanumeric name counts.
fn entity_len(s: &str) -> Option<usize> {
    let semi = s
        .char_indices()
        .take(MAX_ENTITY_NAME_LEN + 2)
        .find_map(|(index, c)| (c == ';').then_some(index))?;
    let body = s.get(1..semi)?;

    let well_formed = match body.strip_prefix('#') {
        Some(number) => match number.strip_prefix(['x', 'X']) {
            Some(hex) => (1..=6).contains(&hex.len()) && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => (1..=7).contains(&number.len()) && number.chars().all(|c| c.is_ascii_digit()),
        },
        None => {
            body.len() >= 2
                && body.starts_with(|c: char| c.is_ascii_alphabetic())
                && body.chars().all(|c| c.is_ascii_alphanumeric())
        }
    };

    well_formed.then_some(semi + 1)
}

/// Replaces named and numeric entities with the characters they stand for.
///
/// Named entities are decoded from a small table of common ones; unknown or
/// malformed entities are kept as written.
#[must_use]
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(rest.get(..amp).unwrap_or_default());
        let candidate = rest.get(amp..).unwrap_or_default();

        let consumed = match parse_entity(candidate) {
            Some((c, len)) => {
                out.push(c);
                len
            }
            None => {
                out.push('&');
                1
            }
        };
        rest = candidate.get(consumed..).unwrap_or_default();
    }

    out.push_str(rest);
    out
}

/// Parses an entity at the start of `s` (which begins with `&`).
///
/// Returns the decoded character and the byte length of the entity.
fn parse_entity(s: &str) -> Option<(char, usize)> {
    let semi = s
        .char_indices()
        .take(MAX_ENTITY_LEN + 2)
        .find_map(|(index, c)| (c == ';').then_some(index))?;
    let body = s.get(1..semi)?;

    let c = if let Some(number) = body.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        NAMED_ENTITIES.iter().find_map(|(name, c)| (*name == body).then_some(*c))?
    };

    Some((c, semi + 1))
}
