use crate::ctype::isescapable;
use crate::stash::SENTINEL;

/// Prepares raw input for the pipeline: line endings become `\n`, tabs are
/// expanded, the stash sentinel and NUL are neutralised, other control
/// characters dropped, whitespace-only lines emptied, and the whole buffer
/// padded with one line break on each side.
pub fn normalize(input: &str) -> String {
    let mut v = String::with_capacity(input.len() + 2);
    v.push('\n');

    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                v.push('\n');
            }
            '\n' => v.push('\n'),
            '\t' => v.push_str("    "),
            '\0' | SENTINEL => v.push('\u{FFFD}'),
            c if c.is_ascii_control() => (),
            c => v.push(c),
        }
    }
    v.push('\n');

    if !v.contains(" \n") {
        return v;
    }

    let lines: Vec<&str> = v
        .split('\n')
        .map(|line| if line.bytes().all(|b| b == b' ') { "" } else { line })
        .collect();
    lines.join("\n")
}

/// Entity-encodes angle brackets.  `&` is left alone so existing entities
/// pass through unchanged.
pub fn escape_angles(s: &str) -> String {
    let mut v = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => v.push_str("&lt;"),
            '>' => v.push_str("&gt;"),
            c => v.push(c),
        }
    }
    v
}

/// Escapes a value destined for a double-quoted attribute.
pub fn escape_attr(s: &str) -> String {
    s.replace('"', "&quot;")
}

/// Removes the backslash from every backslash-escaped punctuation byte.
pub fn unescape(s: &str) -> String {
    let b = s.as_bytes();
    let mut v = String::with_capacity(s.len());
    let mut org = 0;
    let mut i = 0;

    while i < b.len() {
        if b[i] == b'\\' && i + 1 < b.len() && isescapable(b[i + 1]) {
            v.push_str(&s[org..i]);
            org = i + 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    v.push_str(&s[org..]);
    v
}

/// Backslash-escapes every escapable punctuation character; the inverse of
/// [`unescape`].
pub fn escape_punct(s: &str) -> String {
    let mut v = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if c.is_ascii() && isescapable(c as u8) {
            v.push('\\');
        }
        v.push(c);
    }
    v
}
