use crate::parser::Converter;
use crate::scanners;

impl<'o> Converter<'o> {
    /// Replaces every run of quoted lines with a `<blockquote>`.  A run
    /// starts at a line carrying the escaped `&gt;` marker and extends to the
    /// next blank line.
    pub(crate) fn block_quotes(&mut self, src: &str) -> String {
        let fences = scanners::fenced_regions(src);
        let mut v = String::with_capacity(src.len());
        let mut org = 0;
        let mut at = 0;

        while at < src.len() {
            if scanners::within(&fences, at) || scanners::quote_marker(src, at).is_none() {
                at = scanners::line_end(src, at) + 1;
                continue;
            }

            let end = scanners::blank_boundary(src, at);
            v.push_str(&src[org..at]);
            let quote = self.quote(&src[at..end]);
            v.push_str(&quote);
            org = end;
            at = end + 1;
        }

        v.push_str(&src[org..]);
        v
    }

    fn quote(&mut self, run: &str) -> String {
        let inner = format!("\n{}", scanners::dedent_quote(run));
        let inner = self.code_blocks(&inner);
        let inner = self.block_quotes(&inner);
        let inner = self.lists(&inner);
        let inner = self.highlight(&inner);
        format!(
            "<blockquote>{}</blockquote>",
            inner.strip_prefix('\n').unwrap_or(&inner)
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Converter, Options};

    fn quotes(src: &str) -> String {
        let options = Options::default();
        let mut c = Converter::new(&options);
        let out = c.block_quotes(src);
        c.stash.resolve(&out)
    }

    #[test]
    fn single_run() {
        assert_eq!(
            quotes("\n&gt; a\n&gt; b\n\nc\n"),
            "\n<blockquote>a\nb</blockquote>\n\nc\n"
        );
    }

    #[test]
    fn lazy_continuation() {
        assert_eq!(
            quotes("\n&gt; a\nb\n"),
            "\n<blockquote>a\nb</blockquote>\n"
        );
    }

    #[test]
    fn nested() {
        assert_eq!(
            quotes("\n&gt; a\n&gt; &gt; b\n"),
            "\n<blockquote>a\n<blockquote>b</blockquote></blockquote>\n"
        );
    }

    #[test]
    fn fenced_markers_are_left() {
        let src = "\n```\n&gt; a\n```\n";
        assert_eq!(quotes(src), src);
    }
}
