use crate::parser::{element, Converter};
use crate::scanners;
use crate::strings::escape_attr;

const CODE_INDENT: &str = "    ";

impl<'o> Converter<'o> {
    /// Freezes fenced and indented code blocks as block fragments.
    pub(crate) fn code_blocks(&mut self, src: &str) -> String {
        let mut v = String::with_capacity(src.len());
        let mut org = 0;
        let mut at = 0;

        while at < src.len() {
            if let Some(fence) = scanners::fenced_block(src, at) {
                let info = &src[fence.info.clone()];
                let content = &src[fence.content.clone()];
                let html = self.code_block(content, info);
                v.push_str(&src[org..at]);
                v.push_str(&self.stash.freeze_block(html));
                org = fence.end;
                at = fence.end + 1;
                continue;
            }

            if follows_blank_line(src, at) && src[at..].starts_with(CODE_INDENT) {
                let mut end = scanners::line_end(src, at);
                while end < src.len() && src[end + 1..].starts_with(CODE_INDENT) {
                    end = scanners::line_end(src, end + 1);
                }

                let content = src[at..end]
                    .split('\n')
                    .map(|line| &line[CODE_INDENT.len()..])
                    .collect::<Vec<_>>()
                    .join("\n");
                let html = self.code_block(&content, "");
                v.push_str(&src[org..at]);
                v.push_str(&self.stash.freeze_block(html));
                org = end;
                at = end + 1;
                continue;
            }

            at = scanners::line_end(src, at) + 1;
        }

        v.push_str(&src[org..]);
        v
    }

    fn code_block(&mut self, content: &str, info: &str) -> String {
        let content = self.stash.thaw(content);
        let info = self.stash.thaw(info);
        let lang = info.split(' ').next().unwrap_or_default();
        if self.options.code_lang_class && !lang.is_empty() {
            format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                escape_attr(lang),
                content
            )
        } else {
            format!("<pre>{}</pre>", element("code", &content))
        }
    }

    /// Freezes backtick spans that open and close on the same line.
    pub(crate) fn inline_code(&mut self, src: &str) -> String {
        let b = src.as_bytes();
        let mut v = String::with_capacity(src.len());
        let mut org = 0;
        let mut i = 0;

        while i < b.len() {
            if b[i] != b'`' {
                i += 1;
                continue;
            }

            let run = backtick_run(b, i);
            if i > 0 && b[i - 1] == b'\\' {
                i += run;
                continue;
            }

            let eol = scanners::line_end(src, i);
            match closing_run(b, i + run, eol, run) {
                Some(close) if close > i + run => {
                    v.push_str(&src[org..i]);
                    let content = self.stash.thaw(&src[i + run..close]);
                    v.push_str(&self.stash.freeze(element("code", &content)));
                    i = close + run;
                    org = i;
                }
                _ => i += run,
            }
        }

        v.push_str(&src[org..]);
        v
    }
}

fn follows_blank_line(src: &str, at: usize) -> bool {
    at <= 1 || src.as_bytes()[at - 2] == b'\n'
}

fn backtick_run(b: &[u8], from: usize) -> usize {
    b[from..].iter().take_while(|&&c| c == b'`').count()
}

fn closing_run(b: &[u8], from: usize, to: usize, len: usize) -> Option<usize> {
    let mut j = from;
    while j < to {
        if b[j] == b'`' {
            let run = backtick_run(b, j);
            if run == len {
                return Some(j);
            }
            j += run;
        } else {
            j += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::parser::{Converter, Options};

    fn blocks(src: &str, options: &Options) -> String {
        let mut c = Converter::new(options);
        let out = c.code_blocks(src);
        c.stash.resolve(&out)
    }

    fn inline(src: &str) -> String {
        let options = Options::default();
        let mut c = Converter::new(&options);
        let out = c.inline_code(src);
        c.stash.resolve(&out)
    }

    #[test]
    fn fenced() {
        let options = Options::default();
        assert_eq!(
            blocks("\n```\n*a*\n```\nb\n", &options),
            "\n<pre><code>*a*</code></pre>\nb\n"
        );
        assert_eq!(
            blocks("\n~~~ rust\nx\n~~~\n", &options),
            "\n<pre><code>x</code></pre>\n"
        );
    }

    #[test]
    fn language_class() {
        let options = Options {
            code_lang_class: true,
            ..Options::default()
        };
        assert_eq!(
            blocks("\n``` rust extra\nx\n```\n", &options),
            "\n<pre><code class=\"language-rust\">x</code></pre>\n"
        );
    }

    #[test]
    fn indented() {
        let options = Options::default();
        assert_eq!(
            blocks("\n    a\n      b\nc\n", &options),
            "\n<pre><code>a\n  b</code></pre>\nc\n"
        );
        let src = "\npara\n    not code\n";
        assert_eq!(blocks(src, &options), src);
    }

    #[test]
    fn backtick_spans() {
        assert_eq!(inline("a `b` c"), "a <code>b</code> c");
        assert_eq!(inline("``a`b``"), "<code>a`b</code>");
        assert_eq!(inline("\\`a`"), "\\`a`");
        assert_eq!(inline("`a\nb`"), "`a\nb`");
        assert_eq!(inline("``"), "``");
    }
}
