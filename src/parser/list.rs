use crate::parser::Converter;
use crate::scanners::{self, ListMarker, ListStyle};

/// The most recently emitted list, kept so a following list of the same
/// style can be folded into it.
#[derive(Debug, Clone, Copy)]
struct Emitted {
    style: ListStyle,
    /// Offset in the source where the list stopped.
    end: usize,
    /// Offset in the output where its closing tag begins.
    close_at: usize,
}

impl<'o> Converter<'o> {
    pub(crate) fn lists(&mut self, src: &str) -> String {
        let fences = scanners::fenced_regions(src);
        let mut v = String::with_capacity(src.len());
        let mut org = 0;
        let mut p = 0;
        let mut last: Option<Emitted> = None;

        while let Some(ix) = src[p..].find('\n') {
            let nl = p + ix;
            let marker = match scanners::list_marker(src, nl + 1) {
                Some(m) if !scanners::within(&fences, nl + 1) => m,
                _ => {
                    p = nl + 1;
                    continue;
                }
            };

            let end = scanners::blank_boundary(src, nl + 1);
            let content = self.code_blocks(&src[marker.content..end]);
            let items = scanners::list_siblings(&content, marker.indent);
            let body = items
                .iter()
                .map(|item| self.lists(item))
                .collect::<Vec<_>>()
                .join("</li><li>");
            let body = self.highlight(&body);

            match last {
                Some(prev) if prev.style == marker.style && prev.end == org && nl == org + 1 => {
                    v.truncate(prev.close_at);
                }
                _ => {
                    v.push_str(&src[org..nl]);
                    v.push('\n');
                    v.push_str(&open_tag(&marker));
                }
            }

            v.push_str("<li>");
            v.push_str(&body);
            v.push_str("</li>");
            let close_at = v.len();
            v.push_str(close_tag(marker.style));

            last = Some(Emitted {
                style: marker.style,
                end,
                close_at,
            });
            org = end;
            p = end;
        }

        v.push_str(&src[org..]);
        v
    }
}

fn open_tag(marker: &ListMarker) -> String {
    match marker.style {
        ListStyle::Bullet => "<ul>".to_string(),
        ListStyle::Numeric => format!("<ol start=\"{}\">", marker.start),
        ListStyle::LowerAlpha => format!(
            "<ol start=\"{}\" style=\"list-style-type:lower-alpha\">",
            marker.start
        ),
        ListStyle::UpperAlpha => format!(
            "<ol start=\"{}\" style=\"list-style-type:upper-alpha\">",
            marker.start
        ),
    }
}

fn close_tag(style: ListStyle) -> &'static str {
    match style {
        ListStyle::Bullet => "</ul>",
        _ => "</ol>",
    }
}
