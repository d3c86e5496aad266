use std::{fs, path::Path};

use crate::{
    error::ConfigError,
    interpreter::value::{
        core::Value,
        object::{KeyValue, PropertyMap},
    },
};

/// Characters that separate tokens in a properties file.
const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Reads a `.properties` file into a [`PropertyMap`].
///
/// Values are stored as raw strings; numeric coercion happens when an
/// expression reads them.
///
/// # Errors
/// - `ConfigError::Io` if the file cannot be read.
/// - `ConfigError::MalformedEscape` for a broken `\uXXXX` escape.
pub fn load_properties(path: impl AsRef<Path>) -> Result<PropertyMap, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(),
                                                                            source })?;
    let map = parse_properties(&text)?;

    tracing::debug!(path = %path.display(), entries = map.len(), "loaded properties");
    Ok(map)
}

/// Parses properties text into a [`PropertyMap`].
///
/// The format is the classic one:
/// - blank lines and lines starting with `#` or `!` are ignored,
/// - a line ending in an odd number of backslashes continues on the next
///   line, whose leading whitespace is dropped,
/// - the key ends at the first unescaped `=`, `:` or whitespace; one `=` or
///   `:` surrounded by optional whitespace separates it from the value,
/// - `\t`, `\n`, `\r`, `\f` and `\uXXXX` are unescaped; a backslash before
///   any other character stands for that character,
/// - a later entry for the same key replaces an earlier one.
///
/// # Example
/// ```
/// use propexpr::{
///     config::parse_properties,
///     interpreter::value::{core::Value, object::KeyValue},
/// };
///
/// let map = parse_properties("# limits\nmax = 10\nlist: 1,\\\n      2,3\nname Ada\n").unwrap();
///
/// assert_eq!(map.get("max"), Some(Value::from("10")));
/// assert_eq!(map.get("list"), Some(Value::from("1,2,3")));
/// assert_eq!(map.get("name"), Some(Value::from("Ada")));
/// ```
pub fn parse_properties(text: &str) -> Result<PropertyMap, ConfigError> {
    let map = PropertyMap::new();

    for (line, logical) in logical_lines(text) {
        let (key, value) = split_entry(&logical);
        let key = unescape(key, line)?;
        let value = unescape(value, line)?;

        map.set(&key, Value::Str(value));
    }

    Ok(map)
}

/// Joins continued lines and drops comments and blank lines. Each entry
/// carries the 1-based line number it starts on.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut entries = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_start_matches(WHITESPACE);

        let (start, mut logical) = match pending.take() {
            Some(entry) => entry,
            None if line.is_empty() || line.starts_with(['#', '!']) => continue,
            None => (index + 1, String::new()),
        };

        if continues(line) {
            logical.push_str(&line[..line.len() - 1]);
            pending = Some((start, logical));
        } else {
            logical.push_str(line);
            entries.push((start, logical));
        }
    }

    entries.extend(pending);
    entries
}

fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Splits a logical line into its raw (still escaped) key and value.
fn split_entry(logical: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = logical.len();

    for (i, c) in logical.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || WHITESPACE.contains(&c) {
            key_end = i;
            break;
        }
    }

    let rest = logical[key_end..].trim_start_matches(WHITESPACE);
    let value = rest.strip_prefix(['=', ':'])
                    .map_or(rest, |r| r.trim_start_matches(WHITESPACE));

    (&logical[..key_end], value)
}

fn unescape(raw: &str, line: usize) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = (hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);

                out.push(decoded.ok_or_else(|| ConfigError::MalformedEscape { escape: format!("u{hex}"),
                                                                              line })?);
            },
            Some(other) => out.push(other),
            None => {},
        }
    }

    Ok(out)
}
