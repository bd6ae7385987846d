//! Hand-written scanners over the conversion buffer.
//!
//! Offsets are byte offsets into the buffer.  A "line start" is offset 0 or
//! the offset just past a `\n`.

use std::ops::Range;

use smallvec::SmallVec;

use crate::ctype::isdigit;

pub fn line_end(s: &str, from: usize) -> usize {
    s[from..].find('\n').map_or(s.len(), |ix| from + ix)
}

/// The offset where a run beginning at `from` stops: the first `\n` that is
/// followed by another `\n` or by the end of the buffer, or the end itself.
pub fn blank_boundary(s: &str, from: usize) -> usize {
    let b = s.as_bytes();
    let mut p = from;
    while let Some(ix) = s[p..].find('\n') {
        let nl = p + ix;
        if nl + 1 == b.len() || b[nl + 1] == b'\n' {
            return nl;
        }
        p = nl + 1;
    }
    b.len()
}

fn count(b: &[u8], from: usize, c: u8) -> usize {
    b[from..].iter().take_while(|&&x| x == c).count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    /// The info string following the opening fence, trimmed.
    pub info: Range<usize>,
    pub content: Range<usize>,
    /// End of the closing fence line (its `\n`, or the buffer end).
    pub end: usize,
}

/// Matches a complete fenced code block whose opening fence starts at the
/// line start `at`.  An unclosed fence is no match.
pub fn fenced_block(s: &str, at: usize) -> Option<Fence> {
    let b = s.as_bytes();
    let c = *b.get(at)?;
    if c != b'`' && c != b'~' {
        return None;
    }
    let len = count(b, at, c);
    if len < 3 {
        return None;
    }

    let open_end = line_end(s, at);
    let info_raw = &s[at + len..open_end];
    if c == b'`' && info_raw.contains('`') {
        return None;
    }
    let info_start = at + len + (info_raw.len() - info_raw.trim_start().len());
    let info = info_start..info_start + info_raw.trim().len();

    let mut line = open_end + 1;
    while line < b.len() {
        let eol = line_end(s, line);
        let run = count(b, line, c);
        if run >= len && s[line + run..eol].bytes().all(|x| x == b' ') {
            let content_end = line.saturating_sub(1).max(open_end + 1);
            return Some(Fence {
                info,
                content: (open_end + 1).min(content_end)..content_end,
                end: eol,
            });
        }
        line = eol + 1;
    }

    None
}

/// Byte ranges of every complete fenced code block in `s`.
pub fn fenced_regions(s: &str) -> Vec<Range<usize>> {
    let mut regions = vec![];
    let mut at = 0;
    while at < s.len() {
        if let Some(fence) = fenced_block(s, at) {
            regions.push(at..fence.end);
            at = fence.end + 1;
        } else {
            at = line_end(s, at) + 1;
        }
    }
    regions
}

pub fn within(regions: &[Range<usize>], at: usize) -> bool {
    regions.iter().any(|r| r.contains(&at))
}

/// `^([*\-=_] *){3,}$`
pub fn thematic_break(line: &str) -> bool {
    let is_mark = |c: u8| matches!(c, b'*' | b'-' | b'=' | b'_');
    let b = line.as_bytes();
    !b.is_empty()
        && is_mark(b[0])
        && b.iter().all(|&c| c == b' ' || is_mark(c))
        && b.iter().filter(|&&c| is_mark(c)).count() >= 3
}

/// Position of the escaped quote marker's end (after `&gt;` and any
/// following spaces) on the line starting at `at`.
pub fn quote_marker(s: &str, at: usize) -> Option<usize> {
    let b = s.as_bytes();
    let p = at + count(b, at, b' ');
    if !s[p..].starts_with("&gt;") {
        return None;
    }
    Some(p + 4 + count(b, p + 4, b' '))
}

/// Strips one quote marker level from every line that carries one.
pub fn dedent_quote(s: &str) -> String {
    s.split('\n')
        .map(|line| match quote_marker(line, 0) {
            Some(end) => &line[end..],
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Bullet,
    Numeric,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub indent: usize,
    pub style: ListStyle,
    pub start: usize,
    /// Offset of the item's content, past the marker and its spaces.
    pub content: usize,
}

/// Matches a list item marker on the line starting at `at`.
pub fn list_marker(s: &str, at: usize) -> Option<ListMarker> {
    let b = s.as_bytes();
    let indent = count(b, at, b' ');
    let p = at + indent;
    let c = *b.get(p)?;

    let (style, start, after) = match c {
        b'*' | b'-' | b'+' => (ListStyle::Bullet, 0, p + 1),
        _ if isdigit(c) => {
            let digits = b[p..].iter().take_while(|&&x| isdigit(x)).count();
            let start = s[p..p + digits].bytes().fold(0usize, |n, d| {
                n.saturating_mul(10).saturating_add((d - b'0') as usize)
            });
            (ListStyle::Numeric, start, p + digits)
        }
        b'a'..=b'z' => (ListStyle::LowerAlpha, (c - b'a') as usize + 1, p + 1),
        b'A'..=b'Z' => (ListStyle::UpperAlpha, (c - b'A') as usize + 1, p + 1),
        _ => return None,
    };

    let after = if style == ListStyle::Bullet {
        after
    } else if matches!(b.get(after), Some(b'.') | Some(b')')) {
        after + 1
    } else {
        return None;
    };

    let spaces = count(b, after, b' ');
    if spaces == 0 {
        return None;
    }

    Some(ListMarker {
        indent,
        style,
        start,
        content: after + spaces,
    })
}

/// Splits list content into sibling items: a sibling starts on a line
/// indented by `indent` or `indent + 1` spaces that carries any marker.
pub fn list_siblings(content: &str, indent: usize) -> SmallVec<[&str; 8]> {
    let mut items = SmallVec::new();
    let mut org = 0;
    let mut p = 0;

    while let Some(ix) = content[p..].find('\n') {
        let nl = p + ix;
        match list_marker(content, nl + 1) {
            Some(m) if m.indent == indent || m.indent == indent + 1 => {
                items.push(&content[org..nl]);
                org = m.content;
                p = m.content;
            }
            _ => p = nl + 1,
        }
    }

    items.push(&content[org..]);
    items
}

/// Matches an ATX heading in `line`, returning its level and text.
pub fn atx_heading(line: &str) -> Option<(usize, &str)> {
    let b = line.as_bytes();
    let p = count(b, 0, b' ');
    let level = count(b, p, b'#');
    if level == 0 || level > 6 {
        return None;
    }
    let spaces = count(b, p + level, b' ');
    if spaces == 0 {
        return None;
    }

    let text = line[p + level + spaces..].trim_end_matches(' ');
    let unclosed = text.trim_end_matches('#');
    let text = if unclosed.len() == text.len() {
        text
    } else if unclosed.is_empty() {
        ""
    } else if unclosed.ends_with(' ') {
        unclosed.trim_end_matches(' ')
    } else {
        text
    };

    Some((level, text))
}

/// Whether `line` contains a `|` not preceded by a backslash.
pub fn has_unescaped_pipe(line: &str) -> bool {
    split_cells(line).len() > 1
}

/// Splits a table row on unescaped pipes after dropping one leading and one
/// trailing pipe.  Cells are trimmed.
pub fn table_cells(line: &str) -> SmallVec<[&str; 8]> {
    let mut row = line.trim();
    if let Some(rest) = row.strip_prefix('|') {
        row = rest;
    }
    if row.ends_with('|') && !row.ends_with("\\|") {
        row = &row[..row.len() - 1];
    }
    split_cells(row).into_iter().map(str::trim).collect()
}

fn split_cells(row: &str) -> SmallVec<[&str; 8]> {
    let b = row.as_bytes();
    let mut cells = SmallVec::new();
    let mut org = 0;
    let mut i = 0;
    while i < b.len() {
        match b[i] {
            b'\\' => i += 2,
            b'|' => {
                cells.push(&row[org..i]);
                i += 1;
                org = i;
            }
            _ => i += 1,
        }
    }
    cells.push(&row[org.min(b.len())..]);
    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

/// Matches an alignment-separator row, returning each column's alignment.
pub fn table_separator(line: &str) -> Option<SmallVec<[Alignment; 8]>> {
    let cells = table_cells(line);
    let mut aligns = SmallVec::new();
    for cell in cells {
        let inner = cell.strip_prefix(':').unwrap_or(cell);
        let inner = inner.strip_suffix(':').unwrap_or(inner);
        if inner.is_empty() || !inner.bytes().all(|c| c == b'-') {
            return None;
        }
        let left = cell.starts_with(':');
        let right = cell.len() > 1 && cell.ends_with(':');
        aligns.push(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        });
    }
    Some(aligns)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A generated block element, kept verbatim by later passes.
    Markup(Range<usize>),
    /// Top-level text between generated block elements.
    Text(Range<usize>),
}

const BLOCK_TAGS: &[&str] = &[
    "blockquote",
    "ul",
    "ol",
    "table",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
];

/// Partitions the buffer into generated block elements and the text between
/// them.
pub fn segments(s: &str) -> Vec<Segment> {
    let mut v = vec![];
    let mut org = 0;
    let mut p = 0;

    while let Some(ix) = s[p..].find('<') {
        let at = p + ix;
        match block_element_end(s, at) {
            Some(end) => {
                if org < at {
                    v.push(Segment::Text(org..at));
                }
                v.push(Segment::Markup(at..end));
                org = end;
                p = end;
            }
            None => p = at + 1,
        }
    }

    if org < s.len() {
        v.push(Segment::Text(org..s.len()));
    }
    v
}

fn open_tag_name(s: &str, at: usize) -> Option<&str> {
    let rest = s[at..].strip_prefix('<')?;
    let len = rest.bytes().take_while(u8::is_ascii_alphanumeric).count();
    match rest.as_bytes().get(len) {
        Some(b'>') | Some(b' ') | Some(b'/') if len > 0 => Some(&rest[..len]),
        _ => None,
    }
}

/// End offset of the generated block element opening at `at`.
pub fn block_element_end(s: &str, at: usize) -> Option<usize> {
    let name = open_tag_name(s, at)?;
    if name == "hr" {
        return s[at..].find('>').map(|ix| at + ix + 1);
    }
    if !BLOCK_TAGS.contains(&name) {
        return None;
    }

    let close = format!("</{}>", name);
    let mut depth = 0usize;
    let mut p = at;
    while let Some(ix) = s[p..].find('<') {
        let q = p + ix;
        if s[q..].starts_with(&close) {
            depth -= 1;
            if depth == 0 {
                return Some(q + close.len());
            }
            p = q + close.len();
        } else {
            if open_tag_name(s, q) == Some(name) {
                depth += 1;
            }
            p = q + 1;
        }
    }

    None
}
