use super::*;

#[test]
fn bullets() {
    html(
        concat!("- Hello.\n", "* Hi.\n", "+ Hey.\n"),
        "<ul><li>Hello.</li><li>Hi.</li><li>Hey.</li></ul>",
    );
}

#[test]
fn numeric_start() {
    html(
        concat!("3. item\n", "4. next\n"),
        "<ol start=\"3\"><li>item</li><li>next</li></ol>",
    );
    html("007) bond", "<ol start=\"7\"><li>bond</li></ol>");
}

#[test]
fn alpha() {
    html(
        "b) item",
        "<ol start=\"2\" style=\"list-style-type:lower-alpha\"><li>item</li></ol>",
    );
    html(
        concat!("C. third\n", "D. fourth\n"),
        concat!(
            "<ol start=\"3\" style=\"list-style-type:upper-alpha\">",
            "<li>third</li><li>fourth</li></ol>"
        ),
    );
}

#[test]
fn nested() {
    html(
        concat!("- a\n", "  - b\n", "  - c\n", "- d\n"),
        "<ul><li>a\n<ul><li>b</li><li>c</li></ul></li><li>d</li></ul>",
    );
}

#[test]
fn nested_ordered() {
    html(
        concat!("1. a\n", "   a) x\n", "2. b\n"),
        concat!(
            "<ol start=\"1\"><li>a\n",
            "<ol start=\"1\" style=\"list-style-type:lower-alpha\"><li>x</li></ol>",
            "</li><li>b</li></ol>"
        ),
    );
}

#[test]
fn merge_adjacent() {
    html(
        concat!("- a\n", "\n", "- b\n"),
        "<ul><li>a</li><li>b</li></ul>",
    );
    html(
        concat!("1. a\n", "\n", "5. b\n"),
        "<ol start=\"1\"><li>a</li><li>b</li></ol>",
    );
}

#[test]
fn no_merge_across_kinds_or_gaps() {
    html(
        concat!("- a\n", "\n", "1. b\n"),
        concat!(
            "<ul><li>a</li></ul>\n",
            "<ol start=\"1\"><li>b</li></ol>"
        ),
    );
    html(
        concat!("- a\n", "\n", "\n", "- b\n"),
        concat!("<ul><li>a</li></ul>\n", "<ul><li>b</li></ul>"),
    );
}

#[test]
fn highlighted_items() {
    html(
        concat!("- *a*\n", "- `b*`\n"),
        "<ul><li><em>a</em></li><li><code>b*</code></li></ul>",
    );
}

#[test]
fn needs_space_after_marker() {
    html("-x", "<p>-x</p>");
    html("1.5 apples", "<p>1.5 apples</p>");
}

#[test]
fn fenced_markers_are_code() {
    html(
        concat!("```\n", "- a\n", "```\n"),
        "<pre><code>- a</code></pre>",
    );
}

#[test]
fn fenced_code_in_items() {
    html(
        concat!("- a\n", "```\n", "*b* [l](u)\n", "```\n"),
        "<ul><li>a\n<pre><code>*b* [l](u)</code></pre></li></ul>",
    );
    html(
        concat!("1. run\n", "~~~ sh\n", "ls `pwd`\n", "~~~\n", "2. done\n"),
        concat!(
            "<ol start=\"1\"><li>run\n",
            "<pre><code>ls `pwd`</code></pre></li><li>done</li></ol>"
        ),
    );
}
