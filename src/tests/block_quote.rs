use super::*;

#[test]
fn simple() {
    html("> hello *there*", "<blockquote>hello <em>there</em></blockquote>");
}

#[test]
fn ends_at_blank_line() {
    html(
        concat!("> a\n", "> b\n", "\n", "c"),
        concat!("<blockquote>a\n", "b</blockquote>\n", "<p>c</p>"),
    );
}

#[test]
fn lazy_continuation() {
    html(
        concat!("> a\n", "b"),
        concat!("<blockquote>a\n", "b</blockquote>"),
    );
}

#[test]
fn nested() {
    html(
        concat!("> outer\n", "> > inner\n"),
        concat!("<blockquote>outer\n", "<blockquote>inner</blockquote></blockquote>"),
    );
}

#[test]
fn with_list() {
    html(
        concat!("> - a\n", "> - b\n"),
        "<blockquote><ul><li>a</li><li>b</li></ul></blockquote>",
    );
}

#[test]
fn with_heading() {
    html(
        concat!("> # Title\n", "> body\n"),
        concat!("<blockquote><h1>Title</h1>\n", "body</blockquote>"),
    );
}

#[test]
fn with_fenced_code() {
    html(
        concat!("> ```\n", "> *a* <b>\n", "> ```\n"),
        "<blockquote><pre><code>*a* &lt;b&gt;</code></pre></blockquote>",
    );
}

#[test]
fn marker_inside_text_is_literal() {
    html("a > b", "<p>a &gt; b</p>");
}
