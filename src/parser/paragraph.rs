use crate::parser::{element, Converter};
use crate::scanners::{self, Segment};
use crate::strings::unescape;

impl<'o> Converter<'o> {
    /// Wraps top-level text in paragraphs and joins every top-level block
    /// with a line break.
    pub(crate) fn paragraphs(&mut self, src: &str) -> String {
        let mut blocks = Vec::new();
        for segment in scanners::segments(src) {
            match segment {
                Segment::Markup(r) => blocks.push(src[r].to_string()),
                Segment::Text(r) => self.paragraph_text(&src[r], &mut blocks),
            }
        }
        blocks.join("\n")
    }

    fn paragraph_text(&mut self, text: &str, blocks: &mut Vec<String>) {
        let mut group: Vec<&str> = Vec::new();

        for line in text.split('\n') {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.flush_paragraph(&mut group, blocks);
            } else if self.stash.is_block_token(trimmed) {
                self.flush_paragraph(&mut group, blocks);
                blocks.push(trimmed.to_string());
            } else {
                group.push(line);
            }
        }

        self.flush_paragraph(&mut group, blocks);
    }

    fn flush_paragraph(&mut self, group: &mut Vec<&str>, blocks: &mut Vec<String>) {
        if group.is_empty() {
            return;
        }
        let text = group.join("\n");
        let text = unescape(&self.highlight(text.trim()));
        blocks.push(element("p", &text));
        group.clear();
    }
}
