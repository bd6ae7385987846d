use super::*;

use crate::{Delimiter, ALLOWED_TAGS, DELIMITERS};

#[test]
fn exercise_full_api() {
    let default_options = Options::default();

    // Use every member of the exposed API without any defaults.
    // Not looking for specific outputs, just want to know if the API changes shape.

    let _: String = crate::convert("# My document\n");

    let _: String = crate::markdown_to_html("document", &default_options);

    let mut buffer = String::new();
    let _: std::fmt::Result = crate::format_html("document", &default_options, &mut buffer);

    let _: String = crate::escape_punct("*a*");
    let _: String = crate::unescape("\\*a\\*");

    let options = Options {
        escape: false,
        code_lang_class: false,
    };
    let _: bool = options.escape;
    let _: bool = options.code_lang_class;

    let row: &Delimiter = &DELIMITERS[0];
    let _: &str = row.token;
    let _: &str = row.tag;
    let _: bool = row.literal;

    let _: Option<&&[&str]> = ALLOWED_TAGS.get("abbr");
}

#[test]
fn format_html_matches_markdown_to_html() {
    let options = Options::default();
    let mut buffer = String::new();
    crate::format_html("*a*\n\nb", &options, &mut buffer).unwrap();
    assert_eq!(buffer, crate::markdown_to_html("*a*\n\nb", &options));
    assert_eq!(buffer, "<p><em>a</em></p>\n<p>b</p>");
}

#[test]
#[cfg(feature = "bon")]
fn builder() {
    let options = Options::builder().escape(true).build();
    assert!(options.escape);
    assert!(!options.code_lang_class);
    assert_eq!(Options::builder().build(), Options::default());
}

#[test]
fn options_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Options>();

    let options = Options::default();
    std::thread::scope(|s| {
        let a = s.spawn(|| crate::markdown_to_html("*x*", &options));
        let b = s.spawn(|| crate::markdown_to_html("*x*", &options));
        assert_eq!(a.join().unwrap(), b.join().unwrap());
    });
}
