//! Configuration for the converter.
//!
//! The delimiter table and the passthrough allow-list are fixed; options only
//! switch whole behaviours on or off.

#[cfg(feature = "bon")]
use bon::Builder;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Escape every raw tag, including those on the passthrough allow-list.
    ///
    /// ```rust
    /// # use stashmark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("a <kbd>b</kbd>", &options),
    ///            "<p>a <kbd>b</kbd></p>");
    /// options.escape = true;
    /// assert_eq!(markdown_to_html("a <kbd>b</kbd>", &options),
    ///            "<p>a &lt;kbd&gt;b&lt;/kbd&gt;</p>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub escape: bool,

    /// Add a `language-` class naming the first word of a fenced code
    /// block's info string.
    ///
    /// ```rust
    /// # use stashmark::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// options.code_lang_class = true;
    /// assert_eq!(markdown_to_html("```rust yum\nfn main<'a>();\n```", &options),
    ///            "<pre><code class=\"language-rust\">fn main&lt;'a&gt;();</code></pre>");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub code_lang_class: bool,
}
