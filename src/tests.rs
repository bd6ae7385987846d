use crate::{markdown_to_html, Options};

mod api;
mod block_quote;
mod list;
mod pathological;

#[track_caller]
fn compare_strs(output: &str, expected: &str, kind: &str) {
    if output != expected {
        println!("Running {} test", kind);
        println!("Got:");
        println!("==============================");
        println!("{}", output);
        println!("==============================");
        println!();
        println!("Expected:");
        println!("==============================");
        println!("{}", expected);
        println!("==============================");
        println!();
    }
    pretty_assertions::assert_eq!(output, expected);
}

#[track_caller]
fn html(input: &str, expected: &str) {
    html_opts_i(input, expected, |_| ());
}

#[track_caller]
fn html_opts_i<F>(input: &str, expected: &str, opts: F)
where
    F: FnOnce(&mut Options),
{
    let mut options = Options::default();
    opts(&mut options);

    let output = markdown_to_html(input, &options);
    compare_strs(&output, expected, "regular");
}

macro_rules! html_opts {
    ([$($optname:ident),*], $lhs:expr, $rhs:expr) => {
        crate::tests::html_opts_i($lhs, $rhs, |opts| {
            $(opts.$optname = true;)*
        });
    };
}

pub(crate) use html_opts;
