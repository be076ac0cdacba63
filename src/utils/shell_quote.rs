//! Shell quoting for colon-separated path values
//!
//! Each path is quoted on its own with `shlex` and the quoted words are joined
//! with `:`. Reading the value back is the inverse: split on colons that sit
//! outside any quoting, then unquote each segment with `shlex`.
//!
//! ```
//! use pathos::utils::shell_quote::{join_quoted, split_quoted};
//!
//! let paths = vec!["/usr/bin".to_string(), "/opt/my app/bin".to_string()];
//! let value = join_quoted(&paths).unwrap();
//! assert_eq!(split_quoted(&value), paths);
//! ```

use anyhow::{anyhow, Result};
use std::borrow::Cow;

/// Quote a single path so `sh` reads it back verbatim.
pub fn quote(path: &str) -> Result<Cow<'_, str>> {
    shlex::try_quote(path).map_err(|e| anyhow!("Cannot shell-quote path {:?}: {}", path, e))
}

/// Quote every path and join with `:`.
pub fn join_quoted<S: AsRef<str>>(paths: &[S]) -> Result<String> {
    let quoted = paths
        .iter()
        .map(|p| quote(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(quoted.join(":"))
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Bare,
    Single,
    Double,
}

/// Cut a quoted value into raw, still-quoted segments.
///
/// `shlex::split` treats `:` as an ordinary character, so the boundaries
/// have to be found here: a colon separates only outside quotes and when not
/// backslash-escaped. An unquoted newline ends the value; quoted newlines
/// belong to the path.
fn segments(value: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut state = State::Bare;
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (state, c) {
            (State::Bare, '\\') | (State::Double, '\\') => escaped = true,
            (State::Bare, '\'') => state = State::Single,
            (State::Bare, '"') => state = State::Double,
            (State::Bare, ':') => {
                segments.push(&value[start..i]);
                start = i + 1;
            }
            (State::Bare, '\n') => {
                segments.push(&value[start..i]);
                return segments;
            }
            (State::Single, '\'') | (State::Double, '"') => state = State::Bare,
            _ => {}
        }
    }
    segments.push(&value[start..]);
    segments
}

/// Split a shell-quoted `a:b:c` value into its unquoted paths.
///
/// Each segment is unquoted with `shlex`. An empty, unquoted segment is
/// dropped, so `''` still yields an empty path while stray separators do not.
/// A segment `shlex` rejects (unbalanced quotes) is kept verbatim.
pub fn split_quoted(value: &str) -> Vec<String> {
    segments(value)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| match shlex::split(segment) {
            Some(words) if words.is_empty() => None,
            Some(words) => Some(words.join(" ")),
            None => Some(segment.to_string()),
        })
        .collect()
}
