use winnow::combinator::separated_pair;
use winnow::prelude::*;
use winnow::token::{rest, take_till};

use crate::error::{Malformed, ParseError};

/// A single `key = value` line from a srcinfo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// 0-based index of the line in the input.
    pub line: usize,
    /// The whole line, trimmed.
    pub text: &'a str,
    /// Everything before the first `=`, trimmed.
    pub key: &'a str,
    /// Everything after the first `=`, trimmed.
    pub value: &'a str,
}

/// Split `input` into `key = value` entries, in order.
///
/// Blank lines and lines starting with `#` (after trimming) are skipped.
/// Any other line that is not a well formed pair yields an error; the
/// iterator keeps going after an error, so callers that want to stop at
/// the first one should use `collect` or `try_fold`.
///
/// # Examples
///
/// ```
/// use srcinfo::scan;
///
/// let input = "# generated\npkgbase = foo\n\n\tpkgver = 1.0\n";
/// let entries: Vec<_> = scan(input).collect::<Result<_, _>>().unwrap();
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].line, 3);
/// assert_eq!((entries[1].key, entries[1].value), ("pkgver", "1.0"));
/// ```
pub fn scan(input: &str) -> impl Iterator<Item = Result<Entry<'_>, ParseError>> + '_ {
    input.lines().enumerate().filter_map(|(line, raw)| {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            return None;
        }

        let entry = split_line(text)
            .map(|(key, value)| Entry {
                line,
                text,
                key,
                value,
            })
            .map_err(|m| ParseError::new(line, text, m));
        Some(entry)
    })
}

fn key_value<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    separated_pair(take_till(0.., '='), '=', rest).parse_next(input)
}

/// Split a trimmed line on its first `=`.
pub(crate) fn split_line(line: &str) -> Result<(&str, &str), Malformed> {
    let (key, value) = key_value
        .parse(line)
        .map_err(|_| Malformed::MissingEquals)?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() {
        return Err(Malformed::EmptyKey);
    }
    if value.is_empty() {
        return Err(Malformed::EmptyValue);
    }
    Ok((key, value))
}
