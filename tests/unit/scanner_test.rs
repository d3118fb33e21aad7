//! Tests for the lexical context scanner

use glyphlint::core::models::{ContextKind, LanguageFamily};
use glyphlint::core::services::scan_contexts;

#[test]
fn test_index_covers_input_with_no_gaps_or_overlaps() {
    let inputs = [
        "plain code only",
        "// comment\ncode\n/* block */ more \"str\" end",
        "# python\nx = 'a'\n",
        "\"unterminated",
        "",
    ];

    for text in inputs {
        let index = scan_contexts(text, LanguageFamily::Generic);
        let mut cursor = 0;
        for span in index.spans() {
            assert_eq!(span.span.start, cursor, "gap or overlap in {text:?}");
            assert!(span.span.start < span.span.end, "empty span in {text:?}");
            cursor = span.span.end;
        }
        assert_eq!(cursor, text.len(), "spans do not reach EOF for {text:?}");
    }
}

#[test]
fn test_line_comment_runs_to_end_of_line() {
    let text = "code // trailing\nnext";
    let index = scan_contexts(text, LanguageFamily::CLike);
    assert_eq!(index.kind_at(text.find("trailing").unwrap()), ContextKind::LineComment);
    assert_eq!(index.kind_at(text.find("next").unwrap()), ContextKind::PlainCode);
}

#[test]
fn test_block_comment_spans_lines() {
    let text = "a\n/* one\ntwo\nthree */\nb";
    let index = scan_contexts(text, LanguageFamily::CLike);
    assert_eq!(index.kind_at(text.find("two").unwrap()), ContextKind::BlockComment);
    assert_eq!(index.kind_at(text.find('b').unwrap()), ContextKind::PlainCode);
}

#[test]
fn test_escaped_quote_does_not_split_string() {
    let text = r#"x = "a\"b" + y"#;
    let index = scan_contexts(text, LanguageFamily::Generic);
    let string_spans: Vec<_> = index
        .spans()
        .iter()
        .filter(|s| s.kind == ContextKind::StringLiteral)
        .collect();
    assert_eq!(string_spans.len(), 1);
    assert_eq!(index.kind_at(text.find('y').unwrap()), ContextKind::PlainCode);
}

#[test]
fn test_unterminated_block_comment_closes_at_eof() {
    let text = "a /* never ends";
    let index = scan_contexts(text, LanguageFamily::CLike);
    assert_eq!(index.kind_at(text.len() - 1), ContextKind::BlockComment);
}

#[test]
fn test_pylike_ignores_c_style_comments() {
    let text = "x = 1 // 2  # floor division then comment";
    let index = scan_contexts(text, LanguageFamily::PyLike);
    assert_eq!(index.kind_at(text.find("//").unwrap()), ContextKind::PlainCode);
    assert_eq!(index.kind_at(text.find('#').unwrap()), ContextKind::LineComment);
}

#[test]
fn test_generic_supports_all_delimiter_styles() {
    let text = "// a\n# b\n/* c */ \"d\" 'e' `f`";
    let index = scan_contexts(text, LanguageFamily::Generic);
    assert_eq!(index.kind_at(text.find('a').unwrap()), ContextKind::LineComment);
    assert_eq!(index.kind_at(text.find('b').unwrap()), ContextKind::LineComment);
    assert_eq!(index.kind_at(text.find('c').unwrap()), ContextKind::BlockComment);
    assert_eq!(index.kind_at(text.find('d').unwrap()), ContextKind::StringLiteral);
    assert_eq!(index.kind_at(text.find('e').unwrap()), ContextKind::StringLiteral);
    assert_eq!(index.kind_at(text.find('f').unwrap()), ContextKind::StringLiteral);
}

#[test]
fn test_comment_marker_inside_string_is_string() {
    let text = "url = \"https://example.com\"";
    let index = scan_contexts(text, LanguageFamily::CLike);
    assert_eq!(index.kind_at(text.find("//").unwrap()), ContextKind::StringLiteral);
}

#[test]
fn test_multibyte_text_keeps_char_boundaries() {
    let text = "s = \"\u{4F60}\u{597D} \u{1F30D}\" # \u{306F}\u{3044}";
    let index = scan_contexts(text, LanguageFamily::PyLike);
    assert_eq!(index.kind_at(text.find('\u{1F30D}').unwrap()), ContextKind::StringLiteral);
    assert_eq!(index.kind_at(text.find('\u{306F}').unwrap()), ContextKind::LineComment);
}
