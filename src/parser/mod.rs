mod block_quote;
mod code;
mod heading;
mod inlines;
mod link;
mod list;
pub mod options;
mod paragraph;
mod passthrough;
mod table;

pub use crate::parser::inlines::{Delimiter, DELIMITERS};
pub use crate::parser::options::Options;
pub use crate::parser::passthrough::ALLOWED_TAGS;

use crate::stash::Stash;
use crate::strings;

/// A single conversion.  All state, the stash included, lives here and dies
/// with the call.
#[derive(Debug)]
pub struct Converter<'o> {
    options: &'o Options,
    stash: Stash,
}

type Pass<'o> = fn(&mut Converter<'o>, &str) -> String;

impl<'o> Converter<'o> {
    pub fn new(options: &'o Options) -> Self {
        Converter {
            options,
            stash: Stash::new(),
        }
    }

    /// Runs every pass over `text` in order and resolves the stash.
    pub fn convert(mut self, text: &str) -> String {
        let passes: [(&str, Pass<'o>); 11] = [
            ("passthrough", Self::passthrough),
            ("escape", |_, s| strings::escape_angles(s)),
            ("blockquote", Self::block_quotes),
            ("thematic break", Self::thematic_breaks),
            ("list", Self::lists),
            ("code block", Self::code_blocks),
            ("inline code", Self::inline_code),
            ("link", Self::links),
            ("table", Self::tables),
            ("heading", Self::headings),
            ("paragraph", Self::paragraphs),
        ];

        log::debug!("converting {} bytes", text.len());
        let mut src = strings::normalize(text);
        for (name, pass) in passes {
            src = pass(&mut self, &src);
            log::trace!(
                "after {} pass: {} bytes, {} fragments frozen",
                name,
                src.len(),
                self.stash.minted()
            );
        }

        let html = self.stash.resolve(&src);
        let pending = self.stash.pending();
        if pending > 0 {
            log::error!("{} stashed fragments were never resolved", pending);
        }
        debug_assert_eq!(pending, 0, "stashed fragments left unresolved");

        html.trim().to_string()
    }
}

/// `<tag>content</tag>`
pub(crate) fn element(tag: &str, content: &str) -> String {
    format!("<{}>{}</{}>", tag, content, tag)
}
