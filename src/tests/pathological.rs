use super::*;
use ntest::timeout;

// input: python3 -c 'n = 50000; print("*a_ " * n)'
#[test]
#[timeout(4000)]
fn pathological_emphases() {
    let n = 50_000;
    let input = "*a_ ".repeat(n);
    let mut exp = format!("<p>{}", input);
    // Right-most space is trimmed in output.
    exp.pop();
    exp += "</p>";

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_unclosed_strong() {
    let n = 50_000;
    let input = "**a ".repeat(n);
    let mut exp = format!("<p>{}", input);
    exp.pop();
    exp += "</p>";

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_table_rows() {
    let n = 20_000;
    let input = "x|y\n".repeat(n);
    let exp = format!(
        "<table><tbody>{}</tbody></table>",
        "<tr><td>x</td><td>y</td></tr>".repeat(n)
    );

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_list_items() {
    let n = 20_000;
    let input = "- a\n".repeat(n);
    let exp = format!("<ul>{}</ul>", "<li>a</li>".repeat(n));

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_separated_lists() {
    let n = 5_000;
    let input = "- a\n\n".repeat(n);
    let exp = format!("<ul>{}</ul>", "<li>a</li>".repeat(n));

    html(&input, &exp);
}

#[test]
#[timeout(4000)]
fn pathological_backticks() {
    let n = 20_000;
    let input = "`a` ".repeat(n);
    let mut exp = format!("<p>{}", "<code>a</code> ".repeat(n));
    exp.pop();
    exp += "</p>";

    html(&input, &exp);
}
