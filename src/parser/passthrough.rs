//! Raw tags let through unescaped.

use phf::phf_map;
use smallvec::SmallVec;

use crate::parser::Converter;

const NONE: &[&str] = &[];
const TITLE: &[&str] = &["title"];
const DATETIME: &[&str] = &["datetime"];
const CITE: &[&str] = &["cite"];

/// Tags that survive escaping, mapped to the attributes each may carry.
pub static ALLOWED_TAGS: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "abbr" => TITLE,
    "b" => NONE,
    "br" => NONE,
    "cite" => NONE,
    "del" => DATETIME,
    "dfn" => TITLE,
    "i" => NONE,
    "ins" => DATETIME,
    "kbd" => NONE,
    "mark" => NONE,
    "q" => CITE,
    "s" => NONE,
    "samp" => NONE,
    "small" => NONE,
    "span" => TITLE,
    "sub" => NONE,
    "sup" => NONE,
    "u" => NONE,
    "var" => NONE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Open,
    Close,
    /// Self-closing, or `br`.
    Empty,
}

/// An allow-listed tag at the start of the text it was matched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tag<'s> {
    pub name: &'s str,
    pub kind: TagKind,
    pub len: usize,
}

impl<'o> Converter<'o> {
    /// Freezes every allow-listed tag verbatim so the escape pass leaves it
    /// alone.  A close tag is only let through when an open tag of the same
    /// name precedes it unclosed; otherwise it is escaped like any other.
    pub(crate) fn passthrough(&mut self, src: &str) -> String {
        if self.options.escape {
            return src.to_string();
        }

        let mut v = String::with_capacity(src.len());
        let mut open: SmallVec<[(&str, usize); 4]> = SmallVec::new();
        let mut org = 0;
        let mut p = 0;

        while let Some(ix) = src[p..].find('<') {
            let at = p + ix;
            let Some(tag) = allowed_tag(&src[at..]) else {
                p = at + 1;
                continue;
            };

            let keep = match tag.kind {
                TagKind::Open => {
                    match open.iter_mut().find(|(name, _)| *name == tag.name) {
                        Some((_, n)) => *n += 1,
                        None => open.push((tag.name, 1)),
                    }
                    true
                }
                TagKind::Close => match open
                    .iter_mut()
                    .find(|(name, n)| *name == tag.name && *n > 0)
                {
                    Some((_, n)) => {
                        *n -= 1;
                        true
                    }
                    None => false,
                },
                TagKind::Empty => true,
            };
            if !keep {
                log::trace!("unmatched </{}> at byte {} is escaped", tag.name, at);
                p = at + 1;
                continue;
            }

            v.push_str(&src[org..at]);
            v.push_str(&self.stash.freeze(&src[at..at + tag.len]));
            org = at + tag.len;
            p = org;
        }

        v.push_str(&src[org..]);
        v
    }
}

fn spaces(b: &[u8], from: usize) -> usize {
    b[from..].iter().take_while(|&&c| c == b' ').count()
}

/// Matches an allow-listed open or close tag at the start of `s`.
pub(crate) fn allowed_tag(s: &str) -> Option<Tag<'_>> {
    let b = s.as_bytes();
    if b.first() != Some(&b'<') {
        return None;
    }

    let closing = b.get(1) == Some(&b'/');
    let name_start = if closing { 2 } else { 1 };
    let name_len = b
        .get(name_start..)?
        .iter()
        .take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .count();
    let name = &s[name_start..name_start + name_len];
    let attrs = ALLOWED_TAGS.get(name)?;
    let mut p = name_start + name_len;
    let tag = |kind, len| Tag { name, kind, len };

    if closing {
        p += spaces(b, p);
        return (b.get(p) == Some(&b'>')).then(|| tag(TagKind::Close, p + 1));
    }
    let open = if name == "br" {
        TagKind::Empty
    } else {
        TagKind::Open
    };

    let mut seen: SmallVec<[&str; 2]> = SmallVec::new();
    loop {
        let sp = spaces(b, p);
        p += sp;
        match *b.get(p)? {
            b'>' => return Some(tag(open, p + 1)),
            b'/' => return (b.get(p + 1) == Some(&b'>')).then(|| tag(TagKind::Empty, p + 2)),
            _ if sp == 0 => return None,
            _ => {
                let attr_len = b[p..].iter().take_while(|c| c.is_ascii_lowercase()).count();
                let attr = &s[p..p + attr_len];
                if !attrs.contains(&attr) || seen.contains(&attr) {
                    return None;
                }
                seen.push(attr);

                p += attr_len;
                if !s[p..].starts_with("=\"") {
                    return None;
                }
                p += 2;
                p += b[p..]
                    .iter()
                    .take_while(|c| !matches!(c, b'"' | b'<' | b'>'))
                    .count();
                if b.get(p) != Some(&b'"') {
                    return None;
                }
                p += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(s: &str) -> Option<usize> {
        allowed_tag(s).map(|t| t.len)
    }

    #[test]
    fn kinds() {
        assert_eq!(allowed_tag("<kbd>").map(|t| t.kind), Some(TagKind::Open));
        assert_eq!(allowed_tag("</kbd>").map(|t| t.kind), Some(TagKind::Close));
        assert_eq!(allowed_tag("<br>").map(|t| t.kind), Some(TagKind::Empty));
        assert_eq!(allowed_tag("<i/>").map(|t| t.kind), Some(TagKind::Empty));
        assert_eq!(allowed_tag("</abbr>").map(|t| t.name), Some("abbr"));
    }

    #[test]
    fn open_and_close() {
        assert_eq!(len("<kbd>x"), Some(5));
        assert_eq!(len("</kbd >x"), Some(7));
        assert_eq!(len("<br/>"), Some(5));
        assert_eq!(len("<br />"), Some(6));
        assert_eq!(len("<script>"), None);
        assert_eq!(len("<KBD>"), None);
        assert_eq!(len("<bx>"), None);
        assert_eq!(len("<"), None);
    }

    #[test]
    fn attributes() {
        assert_eq!(len("<abbr title=\"x y\">"), Some(18));
        assert_eq!(len("<abbr  title=\"\" >"), Some(17));
        assert_eq!(len("<abbr title=\"a\" title=\"b\">"), None);
        assert_eq!(len("<abbr class=\"x\">"), None);
        assert_eq!(len("<abbr title='x'>"), None);
        assert_eq!(len("<abbr title=\"<\">"), None);
        assert_eq!(len("<abbrtitle=\"x\">"), None);
        assert_eq!(len("<b title=\"x\">"), None);
    }

    #[test]
    fn every_name_is_lowercase() {
        for name in ALLOWED_TAGS.keys() {
            assert!(name.bytes().all(|c| c.is_ascii_lowercase()), "{}", name);
        }
    }
}
