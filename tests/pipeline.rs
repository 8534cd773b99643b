//! Integration tests for `process_text` and the individual passes.

use wsfix::{
    GENERATED_MARKER,
    LINE_SEPARATOR,
    TransformOptions,
    collapse_blank_lines,
    ensure_crlf,
    expand_leading_tabs,
    process_text,
    trim_trailing_whitespace,
};

mod prelude;
use prelude::*;

/// Every combination of the four pass toggles.
fn all_option_sets() -> Vec<TransformOptions> {
    (0..16u8)
        .map(|bits| TransformOptions {
            ensure_crlf: bits & 1 != 0,
            tabs_to_spaces: bits & 2 != 0,
            tab_width: 3,
            trim_trailing_whitespace: bits & 4 != 0,
            collapse_blank_lines: bits & 8 != 0,
        })
        .collect()
}

#[fixture]
fn crlf_only() -> TransformOptions {
    TransformOptions {
        ensure_crlf: true,
        ..TransformOptions::default()
    }
}

#[fixture]
fn tabs_only() -> TransformOptions {
    TransformOptions {
        tabs_to_spaces: true,
        ..TransformOptions::default()
    }
}

#[fixture]
fn trim_only() -> TransformOptions {
    TransformOptions {
        trim_trailing_whitespace: true,
        ..TransformOptions::default()
    }
}

#[fixture]
fn collapse_only() -> TransformOptions {
    TransformOptions {
        collapse_blank_lines: true,
        ..TransformOptions::default()
    }
}

#[rstest]
#[case("a\nb", "a\r\nb")]
#[case("a\rb", "a\r\nb")]
#[case("a\r\nb", "a\r\nb")]
fn terminator_examples(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(ensure_crlf(input), expected);
}

#[test]
fn terminator_normalisation_is_idempotent() {
    for input in TRICKY_INPUTS {
        let once = ensure_crlf(input);
        assert_eq!(ensure_crlf(&once), once, "input {input:?}");
    }
}

#[test]
fn only_leading_tab_is_expanded() {
    assert_eq!(expand_leading_tabs("\tx\ty", 4), "    x\ty");
}

#[test]
fn trim_rejoins_with_separator() {
    let expected = format!("a{LINE_SEPARATOR}b{LINE_SEPARATOR}");
    assert_eq!(trim_trailing_whitespace("a \r\nb\t\n"), expected);
}

#[test]
fn protected_buffers_are_never_changed() {
    let generated = format!("\t{GENERATED_MARKER} by hand  \n\n\r");
    let binary = "\tx \0 y  \n\r\n";
    for opts in all_option_sets() {
        assert_eq!(process_text(&generated, Some("cs"), &opts), generated);
        assert_eq!(process_text(binary, None, &opts), binary);
    }
}

#[rstest]
fn crlf_pass_leaves_normalised_text_alone(crlf_only: TransformOptions) {
    for input in TRICKY_INPUTS {
        let fixed = ensure_crlf(input);
        assert_eq!(process_text(&fixed, None, &crlf_only), fixed);
    }
}

#[rstest]
fn tab_pass_leaves_expanded_text_alone(tabs_only: TransformOptions) {
    for input in TRICKY_INPUTS {
        let fixed = expand_leading_tabs(input, tabs_only.tab_width);
        assert_eq!(process_text(&fixed, None, &tabs_only), fixed);
    }
}

#[rstest]
fn trim_pass_leaves_trimmed_text_alone(trim_only: TransformOptions) {
    for input in TRICKY_INPUTS {
        let fixed = trim_trailing_whitespace(input);
        assert_eq!(process_text(&fixed, None, &trim_only), fixed);
    }
}

#[rstest]
fn collapse_pass_leaves_text_without_runs_alone(collapse_only: TransformOptions) {
    for input in TRICKY_INPUTS.iter().filter(|s| !s.contains("\n\r\n\r")) {
        assert_eq!(process_text(input, None, &collapse_only), *input);
    }
}

#[rstest]
fn collapse_shrinks_double_empty_crlf_lines(collapse_only: TransformOptions) {
    assert_eq!(
        process_text("a\r\n\r\n\r\nb", None, &collapse_only),
        collapse_blank_lines("a\r\n\r\n\r\nb")
    );
    assert_eq!(process_text("a\r\n\r\n\r\nb", None, &collapse_only), "a\r\n\r\nb");
}

#[test]
fn mixed_endings_come_out_uniform() {
    let opts = TransformOptions {
        ensure_crlf: true,
        trim_trailing_whitespace: true,
        ..TransformOptions::default()
    };
    let out = process_text("one \rtwo\t\nthree\r\nfour", Some("txt"), &opts);
    assert_eq!(out, "one\r\ntwo\r\nthree\r\nfour");
}

#[test]
fn extension_hint_does_not_change_result() {
    let opts = TransformOptions {
        ensure_crlf: true,
        tabs_to_spaces: true,
        ..TransformOptions::default()
    };
    let input = "\tx\ny";
    assert_eq!(
        process_text(input, Some("cs"), &opts),
        process_text(input, None, &opts)
    );
}
