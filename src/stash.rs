//! Placeholder registry protecting finished HTML from later passes.
//!
//! A frozen fragment is replaced in the buffer by a token made of the
//! sentinel, the decimal id, and the sentinel again.  The sentinel is a
//! private-use codepoint that normalization removes from user input, so
//! tokens can only ever come from [`Stash::freeze`].

use jetscii::Substring;

use crate::strings::escape_angles;

/// Codepoint delimiting stash tokens.
pub const SENTINEL: char = '\u{F8FF}';
const SENTINEL_STR: &str = "\u{F8FF}";

#[derive(Debug)]
struct Entry {
    html: Option<String>,
    block: bool,
}

/// Call-scoped registry of frozen fragments.
#[derive(Debug, Default)]
pub struct Stash {
    entries: Vec<Entry>,
}

impl Stash {
    pub fn new() -> Self {
        Stash::default()
    }

    /// Freezes an inline fragment and returns its token.
    pub fn freeze<S: Into<String>>(&mut self, html: S) -> String {
        self.mint(html.into(), false)
    }

    /// Freezes a block-level fragment; a line holding only its token is
    /// never wrapped in a paragraph.
    pub fn freeze_block<S: Into<String>>(&mut self, html: S) -> String {
        self.mint(html.into(), true)
    }

    fn mint(&mut self, html: String, block: bool) -> String {
        let id = self.entries.len();
        self.entries.push(Entry {
            html: Some(html),
            block,
        });
        token(id)
    }

    /// Number of fragments frozen so far.
    pub fn minted(&self) -> usize {
        self.entries.len()
    }

    /// Whether `s` is exactly one token naming a block fragment.
    pub fn is_block_token(&self, s: &str) -> bool {
        match parse_token(s) {
            Some((id, len)) if len == s.len() => {
                self.entries.get(id).map_or(false, |e| e.block)
            }
            _ => false,
        }
    }

    /// Substitutes every token in `buffer` with its fragment.  Fragments may
    /// themselves contain tokens minted earlier; those are resolved as they
    /// are reached.
    pub fn resolve(&mut self, buffer: &str) -> String {
        self.substitute(buffer, false)
    }

    /// Like [`Stash::resolve`], but fragments are entity-escaped on the way
    /// back in.  Used where frozen markup turns out to sit inside code.
    pub fn thaw(&mut self, buffer: &str) -> String {
        self.substitute(buffer, true)
    }

    /// Marks every token in `buffer` resolved, for text dropped from the
    /// output.
    pub fn release(&mut self, buffer: &str) {
        self.substitute(buffer, false);
    }

    fn substitute(&mut self, buffer: &str, escape: bool) -> String {
        let finder = Substring::new(SENTINEL_STR);
        let mut out = String::with_capacity(buffer.len());
        let mut rest = buffer;

        while let Some(ix) = finder.find(rest) {
            out.push_str(&rest[..ix]);
            rest = &rest[ix..];

            let Some((id, len)) = parse_token(rest) else {
                log::error!("stray stash sentinel at byte {}", buffer.len() - rest.len());
                debug_assert!(false, "stray stash sentinel");
                out.push('\u{FFFD}');
                rest = &rest[SENTINEL.len_utf8()..];
                continue;
            };

            match self.entries.get_mut(id).and_then(|e| e.html.take()) {
                Some(html) => {
                    let inner = self.substitute(&html, escape);
                    if escape {
                        out.push_str(&escape_angles(&inner));
                    } else {
                        out.push_str(&inner);
                    }
                }
                None => {
                    log::error!("stash token {} has no fragment to resolve", id);
                    debug_assert!(false, "stash token {} unresolvable", id);
                    out.push_str(&rest[..len]);
                }
            }
            rest = &rest[len..];
        }

        out.push_str(rest);
        out
    }

    /// Number of minted fragments not yet resolved.
    pub fn pending(&self) -> usize {
        self.entries.iter().filter(|e| e.html.is_some()).count()
    }
}

pub fn token(id: usize) -> String {
    format!("{}{}{}", SENTINEL, id, SENTINEL)
}

/// Parses a token at the start of `s`, returning its id and byte length.
pub fn parse_token(s: &str) -> Option<(usize, usize)> {
    let body = s.strip_prefix(SENTINEL)?;
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !body[digits..].starts_with(SENTINEL) {
        return None;
    }
    let id = body[..digits].parse().ok()?;
    Some((id, digits + 2 * SENTINEL.len_utf8()))
}
