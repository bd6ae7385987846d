use std::ops::Range;

use crate::ctype::isescapable;
use crate::parser::Converter;
use crate::scanners;
use crate::strings::{escape_attr, unescape};

/// The parts of a `[text](url "title")` construct.
#[derive(Debug, PartialEq, Eq)]
struct Target<'s> {
    text: Range<usize>,
    url: &'s str,
    title: Option<&'s str>,
    end: usize,
}

impl<'o> Converter<'o> {
    /// Freezes links, images, and backslash escapes, scanning left to right
    /// so an escape inside a link is left for the link's own text.
    pub(crate) fn links(&mut self, src: &str) -> String {
        let b = src.as_bytes();
        let mut v = String::with_capacity(src.len());
        let mut org = 0;
        let mut i = 0;

        while i < b.len() {
            let (html, end) = match b[i] {
                b'\\' if i + 1 < b.len() && isescapable(b[i + 1]) => {
                    (src[i + 1..i + 2].to_string(), i + 2)
                }
                b'!' if b.get(i + 1) == Some(&b'[') => match target(src, i + 1) {
                    Some(t) => (self.image(src, &t), t.end),
                    None => {
                        i += 1;
                        continue;
                    }
                },
                b'[' => match target(src, i) {
                    Some(t) => (self.anchor(src, &t), t.end),
                    None => {
                        i += 1;
                        continue;
                    }
                },
                _ => {
                    i += 1;
                    continue;
                }
            };

            v.push_str(&src[org..i]);
            v.push_str(&self.stash.freeze(html));
            i = end;
            org = end;
        }

        v.push_str(&src[org..]);
        v
    }

    fn anchor(&mut self, src: &str, t: &Target) -> String {
        let text = unescape(&self.highlight(&src[t.text.clone()]));
        match t.title {
            Some(title) => format!(
                "<a href=\"{}\" title=\"{}\">{}</a>",
                escape_attr(t.url),
                escape_attr(title),
                text
            ),
            None => format!("<a href=\"{}\">{}</a>", escape_attr(t.url), text),
        }
    }

    fn image(&mut self, src: &str, t: &Target) -> String {
        if let Some(title) = t.title {
            self.stash.release(title);
        }
        format!(
            "<img src=\"{}\" alt=\"{}\"/>",
            escape_attr(t.url),
            escape_attr(&unescape(&src[t.text.clone()]))
        )
    }
}

/// Matches `[text](url)` or `[text](url "title")` with the opening bracket
/// at `open`.  The whole construct lies on one line.
fn target(src: &str, open: usize) -> Option<Target<'_>> {
    let b = src.as_bytes();
    let eol = scanners::line_end(src, open);

    let close = (open + 1..eol).find(|&j| b[j] == b']' && b[j - 1] != b'\\')?;
    if b.get(close + 1) != Some(&b'(') {
        return None;
    }
    let paren = close + 2 + src[close + 2..eol].find(')')?;
    let inner = &src[close + 2..paren];

    let (url, title) = match inner.find(" \"") {
        Some(q) if inner.len() > q + 2 && inner.ends_with('"') => {
            (&inner[..q], Some(&inner[q + 2..inner.len() - 1]))
        }
        _ => (inner, None),
    };
    let url = url.trim_matches(' ');
    if url.is_empty() || url.contains(' ') {
        return None;
    }

    Some(Target {
        text: open + 1..close,
        url,
        title,
        end: paren + 1,
    })
}
