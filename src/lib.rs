//! A lightweight-markup to HTML converter.
//!
//! Conversion is an ordered pipeline of substitution passes over one text
//! buffer.  Finished markup is frozen behind placeholder tokens so later
//! passes cannot reinterpret it, and every token is resolved back in a
//! final pass.
//!
//! ```
//! use stashmark::{markdown_to_html, Options};
//! assert_eq!(markdown_to_html("Hello, **世界**!", &Options::default()),
//!            "<p>Hello, <strong>世界</strong>!</p>");
//! ```
//!
//! The pipeline never fails: any input produces some HTML fragment.  Raw
//! `<` and `>` are always escaped, except in a short allow-list of inline
//! tags (see [`ALLOWED_TAGS`]) which pass through untouched unless
//! [`Options::escape`] is set.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![allow(unknown_lints, clippy::doc_markdown)]

use std::fmt;

mod ctype;
mod parser;
mod scanners;
mod stash;
mod strings;
#[cfg(test)]
mod tests;

pub use crate::parser::{Delimiter, Options, ALLOWED_TAGS, DELIMITERS};
pub use crate::strings::{escape_punct, unescape};

/// Render `text` as an HTML fragment with the default options.
///
/// ```
/// assert_eq!(stashmark::convert("# Hi *there*"),
///            "<h1>Hi <em>there</em></h1>");
/// ```
pub fn convert(text: &str) -> String {
    markdown_to_html(text, &Options::default())
}

/// Render `text` as an HTML fragment.
pub fn markdown_to_html(text: &str, options: &Options) -> String {
    parser::Converter::new(options).convert(text)
}

/// Render `text` as an HTML fragment into `output`.
///
/// ```
/// # use stashmark::{format_html, Options};
/// let mut html = String::new();
/// format_html("a\n\nb", &Options::default(), &mut html).unwrap();
/// assert_eq!(html, "<p>a</p>\n<p>b</p>");
/// ```
pub fn format_html(text: &str, options: &Options, output: &mut dyn fmt::Write) -> fmt::Result {
    output.write_str(&markdown_to_html(text, options))
}
