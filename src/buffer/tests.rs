//! Tests for buffer edit operations and file round-trips

use super::*;
use crate::syntax::Highlight;

fn buf_with(lines: &[&str]) -> Buffer {
    let mut buf = Buffer::new();
    for line in lines {
        buf.insert_row(buf.num_rows(), line.as_bytes());
    }
    buf
}

fn c_buf(lines: &[&str]) -> Buffer {
    let mut buf = buf_with(lines);
    buf.set_filename(PathBuf::from("test.c"));
    buf
}

#[test]
fn test_new_buffer_is_empty_and_clean() {
    let buf = Buffer::new();
    assert_eq!(buf.num_rows(), 0);
    assert!(!buf.is_dirty());
    assert!(buf.filename().is_none());
}

#[test]
fn test_insert_row_renumbers_following_rows() {
    let mut buf = buf_with(&["a", "c"]);
    buf.insert_row(1, b"b");
    assert_eq!(buf.num_rows(), 3);
    for at in 0..3 {
        assert_eq!(buf.row(at).unwrap().idx, at);
    }
    assert_eq!(buf.row(1).unwrap().chars(), b"b");
}

#[test]
fn test_insert_row_out_of_range_is_ignored() {
    let mut buf = buf_with(&["a"]);
    buf.insert_row(5, b"x");
    assert_eq!(buf.num_rows(), 1);
}

#[test]
fn test_delete_row_renumbers_following_rows() {
    let mut buf = buf_with(&["a", "b", "c"]);
    buf.delete_row(1);
    assert_eq!(buf.num_rows(), 2);
    assert_eq!(buf.row(1).unwrap().chars(), b"c");
    assert_eq!(buf.row(1).unwrap().idx, 1);
}

#[test]
fn test_mutations_set_dirty() {
    let mut buf = buf_with(&["ab"]);
    let was_dirty = buf.is_dirty();
    assert!(was_dirty); // insert_row already dirtied it
    buf.insert_char(0, 1, b'x');
    assert!(buf.is_dirty());
}

#[test]
fn test_insert_char_one_past_last_row_appends_row() {
    let mut buf = Buffer::new();
    buf.insert_char(0, 0, b'q');
    assert_eq!(buf.num_rows(), 1);
    assert_eq!(buf.row(0).unwrap().chars(), b"q");
}

#[test]
fn test_delete_char_out_of_range_is_ignored() {
    let mut buf = buf_with(&["ab"]);
    buf.delete_char(0, 9);
    buf.delete_char(7, 0);
    assert_eq!(buf.row(0).unwrap().chars(), b"ab");
}

#[test]
fn test_split_row_moves_suffix_to_new_row() {
    let mut buf = buf_with(&["hello world", "next"]);
    buf.split_row(0, 5);
    assert_eq!(buf.num_rows(), 3);
    assert_eq!(buf.row(0).unwrap().chars(), b"hello");
    assert_eq!(buf.row(1).unwrap().chars(), b" world");
    assert_eq!(buf.row(2).unwrap().chars(), b"next");
    assert_eq!(buf.row(2).unwrap().idx, 2);
}

#[test]
fn test_split_then_join_restores_row() {
    let mut buf = buf_with(&["hello world"]);
    buf.split_row(0, 5);
    let col = buf.join_row(1);
    assert_eq!(buf.num_rows(), 1);
    assert_eq!(buf.row(0).unwrap().chars(), b"hello world");
    // The cursor column the join reports is the original split column
    assert_eq!(col, Some(5));
}

#[test]
fn test_join_first_row_is_noop() {
    let mut buf = buf_with(&["a", "b"]);
    assert_eq!(buf.join_row(0), None);
    assert_eq!(buf.num_rows(), 2);
}

#[test]
fn test_rows_to_string_has_trailing_newline_per_row() {
    let buf = buf_with(&["one", "two", ""]);
    assert_eq!(buf.rows_to_string(), b"one\ntwo\n\n");
}

#[test]
fn test_set_filename_selects_profile_and_rehighlights() {
    let mut buf = buf_with(&["int x;"]);
    assert!(buf.row(0).unwrap().hl.iter().all(|&h| h == Highlight::Normal));
    buf.set_filename(PathBuf::from("prog.c"));
    assert_eq!(buf.syntax().unwrap().name, "c");
    assert_eq!(buf.row(0).unwrap().hl[0], Highlight::Keyword2);
}

#[test]
fn test_comment_carry_propagates_across_rows_on_load() {
    let buf = c_buf(&["/* start", "mid", "end */", "int x;"]);
    assert!(buf.row(0).unwrap().open_comment);
    assert!(buf.row(1).unwrap().open_comment);
    assert!(buf.row(1).unwrap().hl.iter().all(|&h| h == Highlight::MultilineComment));
    assert!(!buf.row(2).unwrap().open_comment);
    assert_eq!(buf.row(3).unwrap().hl[0], Highlight::Keyword2);
}

#[test]
fn test_closing_a_comment_stops_repropagation_at_unchanged_flag() {
    let mut buf = c_buf(&["/* start", "mid", "end */", "int x;"]);
    // Removing the comment opener re-classifies rows 0..=2; row 2's carry
    // flag is unchanged (still closed), so row 3 is never revisited
    buf.delete_char(0, 0);
    buf.delete_char(0, 0);
    assert!(!buf.row(0).unwrap().open_comment);
    assert!(buf.row(1).unwrap().hl.iter().all(|&h| h == Highlight::Normal));
    assert!(!buf.row(2).unwrap().open_comment);
    assert_eq!(buf.row(3).unwrap().hl[0], Highlight::Keyword2);
}

#[test]
fn test_opening_a_comment_cascades_down() {
    let mut buf = c_buf(&["int a;", "int b;"]);
    buf.insert_char(0, 0, b'*');
    buf.insert_char(0, 0, b'/');
    assert!(buf.row(0).unwrap().open_comment);
    assert!(buf.row(1).unwrap().hl.iter().all(|&h| h == Highlight::MultilineComment));
}

#[test]
fn test_save_requires_filename() {
    let mut buf = buf_with(&["x"]);
    let err = buf.save().unwrap_err();
    assert_eq!(err.code, errors::NO_PATH);
    assert!(buf.is_dirty());
}

#[test]
fn test_open_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "alpha\r\nbeta\n").unwrap();

    let mut buf = Buffer::new();
    buf.open(&path).unwrap();
    assert_eq!(buf.num_rows(), 2);
    assert_eq!(buf.row(0).unwrap().chars(), b"alpha");
    assert_eq!(buf.row(1).unwrap().chars(), b"beta");
    assert!(!buf.is_dirty());

    buf.insert_char(0, 5, b'!');
    assert!(buf.is_dirty());
    let written = buf.save().unwrap();
    assert_eq!(written, "alpha!\nbeta\n".len());
    assert!(!buf.is_dirty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "alpha!\nbeta\n");
}

#[test]
fn test_open_missing_file_fails() {
    let mut buf = Buffer::new();
    let err = buf.open(Path::new("/no/such/file.txt")).unwrap_err();
    assert_eq!(err.code, errors::OPEN_FAILED);
}
