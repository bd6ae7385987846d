#![no_main]

use libfuzzer_sys::fuzz_target;

use stashmark::{markdown_to_html, Options};

fuzz_target!(|s: &str| {
    let html = markdown_to_html(
        s,
        &Options {
            escape: true,
            code_lang_class: true,
        },
    );
    assert!(!html.contains('\u{F8FF}'));
});
