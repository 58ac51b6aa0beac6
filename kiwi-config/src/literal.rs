//! Conversion between the `.kiwirc.ts` object literal and JSON values.
//!
//! The file is a TypeScript module whose default export is a plain object
//! literal. Reading relaxes it into JSON (bare keys, single quotes, comments,
//! trailing commas); writing emits pretty JSON with identifier keys unquoted.

use std::sync::LazyLock;

use miette::SourceSpan;
use regex::Regex;
use serde_json::{Map, Value};

use crate::{Error, Result};

const EXPORT_DEFAULT: &str = "export default";

static QUOTED_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(\s*)"([A-Za-z_$][A-Za-z0-9_$]*)":"#).expect("valid key pattern")
});

/// Parse the default-exported object literal of a configuration module.
pub fn parse_literal(src: &str, filename: &str) -> Result<Map<String, Value>> {
    let start = src
        .find(EXPORT_DEFAULT)
        .ok_or_else(|| Error::missing_export(src, filename))?
        + EXPORT_DEFAULT.len();

    let relaxed = Relaxed::convert(&src[start..]);
    let json = relaxed.out.trim_end();
    let json = json.strip_suffix(';').unwrap_or(json);

    let value: Value = serde_json::from_str(json).map_err(|e| {
        let span = relaxed
            .source_offset(e.line(), e.column())
            .map(|o| SourceSpan::from((start + o, 1)));
        Error::parse(e, src, filename, span)
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => {
            let offset = json
                .find(|c: char| !c.is_whitespace())
                .and_then(|i| relaxed.map.get(i))
                .map(|o| start + o);
            Err(Error::not_an_object(src, filename, offset))
        }
    }
}

/// Render a JSON object as `export default { ... };` with readable keys.
pub fn to_literal(map: &Map<String, Value>) -> String {
    // Serializing an in-memory map of JSON values cannot fail.
    let pretty = serde_json::to_string_pretty(map).unwrap_or_else(|_| "{}".to_string());
    let unquoted = QUOTED_KEY.replace_all(&pretty, "${1}${2}:");
    format!("{} {};\n", EXPORT_DEFAULT, unquoted)
}

/// Relaxed literal rewritten as JSON, with a byte map back to the input.
struct Relaxed {
    out: String,
    map: Vec<usize>,
}

impl Relaxed {
    fn convert(src: &str) -> Self {
        let chars: Vec<(usize, char)> = src.char_indices().collect();
        let mut this = Self {
            out: String::with_capacity(src.len()),
            map: Vec::with_capacity(src.len()),
        };

        let mut i = 0;
        while i < chars.len() {
            let (at, c) = chars[i];
            let next = chars.get(i + 1).map(|(_, c)| *c);

            match c {
                '"' | '\'' => i = this.string(&chars, i),
                '/' if next == Some('/') => {
                    while i < chars.len() && chars[i].1 != '\n' {
                        i += 1;
                    }
                }
                '/' if next == Some('*') => {
                    i += 2;
                    while i < chars.len() && !(chars[i].1 == '*' && chars.get(i + 1).map(|(_, c)| *c) == Some('/')) {
                        i += 1;
                    }
                    i += 2;
                }
                c if c.is_alphabetic() || c == '_' || c == '$' => i = this.word(&chars, i),
                '}' | ']' => {
                    this.drop_trailing_comma();
                    this.push(c, at);
                    i += 1;
                }
                _ => {
                    this.push(c, at);
                    i += 1;
                }
            }
        }

        this
    }

    fn push(&mut self, c: char, at: usize) {
        self.out.push(c);
        for _ in 0..c.len_utf8() {
            self.map.push(at);
        }
    }

    fn string(&mut self, chars: &[(usize, char)], start: usize) -> usize {
        let (at, quote) = chars[start];
        self.push('"', at);

        let mut i = start + 1;
        while i < chars.len() {
            let (at, c) = chars[i];
            if c == '\\' {
                if let Some(&(esc_at, escaped)) = chars.get(i + 1) {
                    if quote == '\'' && escaped == '\'' {
                        self.push('\'', esc_at);
                    } else {
                        self.push('\\', at);
                        self.push(escaped, esc_at);
                    }
                }
                i += 2;
                continue;
            }
            if c == quote {
                self.push('"', at);
                return i + 1;
            }
            if c == '"' {
                self.push('\\', at);
            }
            self.push(c, at);
            i += 1;
        }
        i
    }

    fn word(&mut self, chars: &[(usize, char)], start: usize) -> usize {
        let mut end = start;
        while end < chars.len() {
            let c = chars[end].1;
            if c.is_alphanumeric() || c == '_' || c == '$' {
                end += 1;
            } else {
                break;
            }
        }

        let mut look = end;
        while look < chars.len() && chars[look].1.is_whitespace() {
            look += 1;
        }
        let is_key = chars.get(look).is_some_and(|(_, c)| *c == ':');

        let at = chars[start].0;
        if is_key {
            self.push('"', at);
        }
        for &(at, c) in &chars[start..end] {
            self.push(c, at);
        }
        if is_key {
            self.push('"', chars[end - 1].0);
        }
        end
    }

    fn drop_trailing_comma(&mut self) {
        let len = self.out.trim_end().len();
        if self.out[..len].ends_with(',') {
            self.out.remove(len - 1);
            self.map.remove(len - 1);
        }
    }

    /// Map a 1-based line/column in `out` back to a byte offset in the input.
    fn source_offset(&self, line: usize, column: usize) -> Option<usize> {
        if self.map.is_empty() {
            return None;
        }
        let line_start: usize = self
            .out
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let offset = (line_start + column.saturating_sub(1)).min(self.map.len() - 1);
        self.map.get(offset).copied()
    }
}
