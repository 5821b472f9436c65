//! Tests for syntax classification

use super::*;
use crate::row::Row;

fn c_lang() -> &'static Language {
    select_language("test.c").expect("c profile")
}

fn classify(text: &[u8], starts_in_comment: bool) -> (Row, bool) {
    let mut row = Row::new(0, text);
    let changed = highlight_row(&mut row, Some(c_lang()), starts_in_comment);
    (row, changed)
}

#[test]
fn test_select_language_by_extension() {
    assert_eq!(select_language("main.c").unwrap().name, "c");
    assert_eq!(select_language("defs.h").unwrap().name, "c");
    assert_eq!(select_language("lib.rs").unwrap().name, "rust");
    assert!(select_language("notes.txt").is_none());
    assert!(select_language("Makefile").is_none());
}

#[test]
fn test_no_language_leaves_row_normal() {
    let mut row = Row::new(0, b"int x = 1; // hi");
    highlight_row(&mut row, None, false);
    assert!(row.hl.iter().all(|&h| h == Highlight::Normal));
    assert_eq!(row.hl.len(), row.render_len());
}

#[test]
fn test_keyword_number_and_line_comment() {
    // "int x = 1; // hi": int is a class-2 keyword, 1 a number,
    // and "// hi" comments out the rest of the row
    let (row, _) = classify(b"int x = 1; // hi", false);
    assert_eq!(&row.hl[0..3], &[Highlight::Keyword2; 3]);
    assert_eq!(row.hl[4], Highlight::Normal); // x
    assert_eq!(row.hl[8], Highlight::Number); // 1
    for i in 11..row.hl.len() {
        assert_eq!(row.hl[i], Highlight::Comment, "byte {}", i);
    }
}

#[test]
fn test_keyword_classes() {
    let (row, _) = classify(b"if x", false);
    assert_eq!(&row.hl[0..2], &[Highlight::Keyword1; 2]);
    let (row, _) = classify(b"void f", false);
    assert_eq!(&row.hl[0..4], &[Highlight::Keyword2; 4]);
}

#[test]
fn test_keyword_requires_separator_after_match() {
    // "interior" must not light up its "int" prefix
    let (row, _) = classify(b"interior", false);
    assert!(row.hl.iter().all(|&h| h == Highlight::Normal));
    // Keyword at end of row counts as bounded
    let (row, _) = classify(b"return", false);
    assert!(row.hl.iter().all(|&h| h == Highlight::Keyword1));
}

#[test]
fn test_keyword_requires_separator_before_match() {
    let (row, _) = classify(b"xif y", false);
    assert!(row.hl.iter().all(|&h| h == Highlight::Normal));
}

#[test]
fn test_numbers_need_separator_boundary() {
    let (row, _) = classify(b"a1", false);
    assert_eq!(row.hl[1], Highlight::Normal);
    let (row, _) = classify(b"1a1", false);
    // Digit after a digit keeps number state going only through digits
    assert_eq!(row.hl[0], Highlight::Number);
    assert_eq!(row.hl[1], Highlight::Normal);
    assert_eq!(row.hl[2], Highlight::Normal);
}

#[test]
fn test_decimal_point_continues_a_number() {
    let (row, _) = classify(b"3.14", false);
    assert!(row.hl.iter().all(|&h| h == Highlight::Number));
    // A leading dot is not a number
    let (row, _) = classify(b".5", false);
    assert_eq!(row.hl[0], Highlight::Normal);
}

#[test]
fn test_string_spans_and_escapes() {
    let (row, _) = classify(br#"x = "a\"b";"#, false);
    // Everything from the opening quote through the closing quote is string
    for i in 4..10 {
        assert_eq!(row.hl[i], Highlight::String, "byte {}", i);
    }
    assert_eq!(row.hl[10], Highlight::Normal); // trailing semicolon
}

#[test]
fn test_single_quoted_string() {
    let (row, _) = classify(b"'c' x", false);
    assert_eq!(&row.hl[0..3], &[Highlight::String; 3]);
    assert_eq!(row.hl[4], Highlight::Normal);
}

#[test]
fn test_comment_marker_inside_string_is_text() {
    let (row, _) = classify(br#""// not a comment""#, false);
    assert!(row.hl.iter().all(|&h| h == Highlight::String));
}

#[test]
fn test_block_comment_within_one_row() {
    let (row, changed) = classify(b"a /* b */ c", false);
    assert!(!changed);
    assert!(!row.open_comment);
    for i in 2..9 {
        assert_eq!(row.hl[i], Highlight::MultilineComment, "byte {}", i);
    }
    assert_eq!(row.hl[10], Highlight::Normal);
}

#[test]
fn test_unterminated_block_comment_sets_carry_flag() {
    let (row, changed) = classify(b"a /* open", false);
    assert!(changed);
    assert!(row.open_comment);
}

#[test]
fn test_carry_flag_seeds_next_row() {
    // Row continues a comment opened above and closes it
    let (row, changed) = classify(b"still */ after", true);
    assert!(!row.open_comment);
    assert!(!changed); // flag was false before and stays false
    for i in 0..8 {
        assert_eq!(row.hl[i], Highlight::MultilineComment, "byte {}", i);
    }
    assert_eq!(row.hl[9], Highlight::Normal);
}

#[test]
fn test_row_fully_inside_block_comment() {
    let (row, changed) = classify(b"int x = 1;", true);
    assert!(changed);
    assert!(row.open_comment);
    assert!(row.hl.iter().all(|&h| h == Highlight::MultilineComment));
}

#[test]
fn test_line_comment_marker_inside_block_comment_ignored() {
    let (row, _) = classify(b"/* // */ int", false);
    assert_eq!(&row.hl[9..12], &[Highlight::Keyword2; 3]);
}

#[test]
fn test_keyword_right_after_block_comment_end() {
    // Closing marker counts as a separator boundary
    let (row, _) = classify(b"/*x*/int y", false);
    assert_eq!(&row.hl[5..8], &[Highlight::Keyword2; 3]);
}

#[test]
fn test_highlight_array_matches_render_length() {
    let mut row = Row::new(0, b"\tif (x) { /* hm */ }");
    highlight_row(&mut row, Some(c_lang()), false);
    assert_eq!(row.hl.len(), row.render_len());
}

#[test]
fn test_highlight_colors_are_distinct_for_match_overlay() {
    assert_ne!(Highlight::Match.color(), Highlight::Normal.color());
}
