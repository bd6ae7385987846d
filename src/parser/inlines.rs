//! The inline highlighter.
//!
//! Delimited spans are found by one generic matcher consulting
//! [`DELIMITERS`]; adding a delimiter means adding a row, never touching the
//! matcher.

use crate::ctype::isalnum;
use crate::parser::{element, Converter};

/// One row of the delimiter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    /// The run of punctuation opening and closing the span.
    pub token: &'static str,
    /// Element emitted around the content.
    pub tag: &'static str,
    /// Content is emitted verbatim and frozen rather than highlighted again.
    pub literal: bool,
}

const fn delim(token: &'static str, tag: &'static str) -> Delimiter {
    Delimiter {
        token,
        tag,
        literal: false,
    }
}

/// Tried in order at every position, so a token must come before any of its
/// prefixes.
pub const DELIMITERS: &[Delimiter] = &[
    delim("**", "strong"),
    delim("__", "strong"),
    delim("~~", "s"),
    delim("--", "small"),
    delim("++", "big"),
    Delimiter {
        token: "``",
        tag: "code",
        literal: true,
    },
    delim("*", "em"),
    delim("_", "em"),
    delim("~", "sub"),
    delim("^", "sup"),
    Delimiter {
        token: "`",
        tag: "code",
        literal: true,
    },
];

const fn opener_set(table: &[Delimiter]) -> [bool; 256] {
    let mut a = [false; 256];
    let mut i = 0;
    while i < table.len() {
        a[table[i].token.as_bytes()[0] as usize] = true;
        i += 1;
    }
    a
}

static OPENERS: [bool; 256] = opener_set(DELIMITERS);

impl<'o> Converter<'o> {
    /// Wraps every delimited span of `s` in its element, recursing into the
    /// content of non-literal spans.
    pub(crate) fn highlight(&mut self, s: &str) -> String {
        let b = s.as_bytes();
        let mut v = String::with_capacity(s.len());
        let mut exhausted = [None; DELIMITERS.len()];
        let mut org = 0;
        let mut i = 0;

        while i < b.len() {
            if !OPENERS[b[i] as usize] || !can_open(b, i) {
                i += 1;
                continue;
            }

            let Some((d, content_end)) = find_span(b, i, &mut exhausted) else {
                i += 1;
                continue;
            };

            v.push_str(&s[org..i]);
            let content = &s[i + d.token.len()..content_end];
            if d.literal {
                let content = self.stash.thaw(content);
                let token = self.stash.freeze(element(d.tag, &content));
                v.push_str(&token);
            } else {
                let inner = self.highlight(content);
                v.push_str(&element(d.tag, &inner));
            }

            i = content_end + d.token.len();
            org = i;
        }

        v.push_str(&s[org..]);
        v
    }
}

/// An opener must not follow an alphanumeric byte or a backslash.
fn can_open(b: &[u8], i: usize) -> bool {
    i == 0 || !(isalnum(b[i - 1]) || b[i - 1] == b'\\')
}

/// Finds the first table row opening at `i` that has a closer, returning the
/// row and the offset of its closer.
///
/// `exhausted` remembers, per row, where a failed search gave up.  Any later
/// opener whose content starts before that point cannot close either.
fn find_span(
    b: &[u8],
    i: usize,
    exhausted: &mut [Option<usize>],
) -> Option<(&'static Delimiter, usize)> {
    for (ix, d) in DELIMITERS.iter().enumerate() {
        if !b[i..].starts_with(d.token.as_bytes()) {
            continue;
        }
        let content_start = i + d.token.len();
        if matches!(exhausted[ix], Some(limit) if content_start <= limit) {
            continue;
        }
        match find_closer(b, content_start, d.token.as_bytes()) {
            Ok(j) => return Some((d, j)),
            Err(limit) => exhausted[ix] = Some(limit),
        }
    }
    None
}

/// Offset of the closer for a span whose content starts at `content_start`,
/// or the offset where the search gave up.
///
/// A closer may not directly follow an unescaped copy of its first byte, so
/// the tail of an inner `**` never closes a `*` span.
fn find_closer(b: &[u8], content_start: usize, token: &[u8]) -> Result<usize, usize> {
    let first = token[0];
    let mut j = content_start + 1;

    while j + token.len() <= b.len() {
        if b[j - 1] == b'<' {
            return Err(j - 1);
        }
        if b[j..].starts_with(token) && b[j - 1] != b'\\' && !repeats(b, j, first) {
            let after = j + token.len();
            if after == b.len() || (b[after] != first && !isalnum(b[after])) {
                return Ok(j);
            }
        }
        j += 1;
    }

    Err(b.len())
}

fn repeats(b: &[u8], j: usize, first: u8) -> bool {
    b[j - 1] == first && !(j >= 2 && b[j - 2] == b'\\')
}
