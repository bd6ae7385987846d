#![no_main]

use libfuzzer_sys::fuzz_target;

use stashmark::{markdown_to_html, Options};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput<'s> {
    s: &'s str,
    opts: Options,
}

fuzz_target!(|i: FuzzInput| {
    markdown_to_html(i.s, &i.opts);
});
