use crate::parser::Converter;
use crate::scanners;
use crate::strings::unescape;

const QUOTE_OPEN: &str = "<blockquote>";

/// Generated closing tags that end a heading's text.
const HEADING_STOPS: &[&str] = &["</blockquote>", "</li>", "</ul>", "</ol>"];

impl<'o> Converter<'o> {
    /// Replaces every thematic break line outside fenced code with `<hr/>`.
    pub(crate) fn thematic_breaks(&mut self, src: &str) -> String {
        let fences = scanners::fenced_regions(src);
        let mut v = String::with_capacity(src.len());
        let mut at = 0;

        for line in src.split('\n') {
            if at > 0 {
                v.push('\n');
            }
            if !scanners::within(&fences, at) && scanners::thematic_break(line) {
                v.push_str("<hr/>");
            } else {
                v.push_str(line);
            }
            at += line.len() + 1;
        }

        v
    }

    /// Converts ATX headings at a line start or directly after generated
    /// `<blockquote>` tags.
    pub(crate) fn headings(&mut self, src: &str) -> String {
        let mut lines = Vec::new();
        for line in src.split('\n') {
            let heading = self.heading(line);
            lines.push(heading.unwrap_or_else(|| line.to_string()));
        }
        lines.join("\n")
    }

    fn heading(&mut self, line: &str) -> Option<String> {
        let mut prefix = 0;
        while line[prefix..].starts_with(QUOTE_OPEN) {
            prefix += QUOTE_OPEN.len();
        }

        let rest = &line[prefix..];
        let stop = HEADING_STOPS
            .iter()
            .filter_map(|tag| rest.find(tag))
            .min()
            .unwrap_or(rest.len());
        let (level, text) = scanners::atx_heading(&rest[..stop])?;

        let text = unescape(&self.highlight(text));
        Some(format!(
            "{}<h{}>{}</h{}>{}",
            &line[..prefix],
            level,
            text,
            level,
            &rest[stop..]
        ))
    }
}
