use smallvec::SmallVec;

use crate::parser::Converter;
use crate::scanners::{self, Alignment, Segment};
use crate::strings::unescape;

impl<'o> Converter<'o> {
    /// Converts pipe tables found in top-level text.
    pub(crate) fn tables(&mut self, src: &str) -> String {
        let mut v = String::with_capacity(src.len());
        for segment in scanners::segments(src) {
            match segment {
                Segment::Markup(r) => v.push_str(&src[r]),
                Segment::Text(r) => {
                    let text = self.table_text(&src[r]);
                    v.push_str(&text);
                }
            }
        }
        v
    }

    fn table_text(&mut self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut out: Vec<String> = Vec::with_capacity(lines.len());
        let mut i = 0;

        while i < lines.len() {
            let run = lines[i..]
                .iter()
                .take_while(|line| scanners::has_unescaped_pipe(line))
                .count();

            if run >= 2 || (run == 1 && is_lone_row(lines[i])) {
                let table = self.table(&lines[i..i + run]);
                out.push(table);
                i += run;
            } else {
                out.push(lines[i].to_string());
                i += 1;
            }
        }

        out.join("\n")
    }

    fn table(&mut self, rows: &[&str]) -> String {
        let separator = rows.get(1).and_then(|line| scanners::table_separator(line));
        let (header, aligns, body) = match separator {
            Some(aligns) => (Some(rows[0]), aligns, &rows[2..]),
            None => (None, SmallVec::new(), rows),
        };

        let mut html = String::from("<table>");
        if let Some(header) = header {
            html.push_str("<thead>");
            self.row(&mut html, header, "th", &aligns);
            html.push_str("</thead>");
        }
        if !body.is_empty() {
            html.push_str("<tbody>");
            for row in body {
                self.row(&mut html, row, "td", &aligns);
            }
            html.push_str("</tbody>");
        }
        html.push_str("</table>");
        html
    }

    fn row(&mut self, html: &mut String, line: &str, tag: &str, aligns: &[Alignment]) {
        html.push_str("<tr>");
        for (ix, cell) in scanners::table_cells(line).iter().enumerate() {
            let text = unescape(&self.highlight(cell));
            let align = match aligns.get(ix) {
                Some(Alignment::Left) => " align=\"left\"",
                Some(Alignment::Center) => " align=\"center\"",
                Some(Alignment::Right) => " align=\"right\"",
                Some(Alignment::None) | None => "",
            };
            html.push_str(&format!("<{}{}>{}</{}>", tag, align, text, tag));
        }
        html.push_str("</tr>");
    }
}

/// A single row line only makes a table when fenced by pipes on both sides.
fn is_lone_row(line: &str) -> bool {
    let line = line.trim();
    line.len() > 1 && line.starts_with('|') && line.ends_with('|')
}

#[cfg(test)]
mod tests {
    use crate::parser::{Converter, Options};

    fn tables(src: &str) -> String {
        let options = Options::default();
        let mut c = Converter::new(&options);
        let out = c.tables(src);
        c.stash.resolve(&out)
    }

    #[test]
    fn header_and_body() {
        assert_eq!(
            tables("\na|b\n-|-\n1|2\n"),
            "\n<table><thead><tr><th>a</th><th>b</th></tr></thead>\
             <tbody><tr><td>1</td><td>2</td></tr></tbody></table>\n"
        );
    }

    #[test]
    fn body_only() {
        assert_eq!(
            tables("\na|b\n1|2\n"),
            "\n<table><tbody><tr><td>a</td><td>b</td></tr>\
             <tr><td>1</td><td>2</td></tr></tbody></table>\n"
        );
    }

    #[test]
    fn alignment() {
        assert_eq!(
            tables("| a | b |\n|:-|-:|"),
            "<table><thead><tr><th align=\"left\">a</th><th align=\"right\">b</th></tr>\
             </thead></table>"
        );
    }

    #[test]
    fn single_lines() {
        assert_eq!(
            tables("| *a* |"),
            "<table><tbody><tr><td><em>a</em></td></tr></tbody></table>"
        );
        assert_eq!(tables("a | b"), "a | b");
    }

    #[test]
    fn markup_is_skipped() {
        let src = "<blockquote>a|b\nc|d</blockquote>";
        assert_eq!(tables(src), src);
    }
}
