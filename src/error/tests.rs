//! Tests for Inn error handling

use super::*;
use std::io;

#[test]
fn test_error_severity_display() {
    assert_eq!(format!("{}", ErrorSeverity::Warning), "WARN");
    assert_eq!(format!("{}", ErrorSeverity::Error), "ERROR");
    assert_eq!(format!("{}", ErrorSeverity::Critical), "CRITICAL");
}

#[test]
fn test_error_severity_ordering() {
    assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    assert!(ErrorSeverity::Error < ErrorSeverity::Critical);
}

#[test]
fn test_inn_error_new() {
    let err = InnError::new(ErrorKind::Io, "SAVE_FAILED", "disk full");
    assert_eq!(err.severity, ErrorSeverity::Error);
    assert_eq!(err.kind, ErrorKind::Io);
    assert_eq!(err.code, "SAVE_FAILED");
    assert_eq!(err.message, "disk full");
}

#[test]
fn test_inn_error_critical() {
    let err = InnError::critical(ErrorKind::Terminal, "RAW_MODE_FAILED", "tcsetattr");
    assert_eq!(err.severity, ErrorSeverity::Critical);
}

#[test]
fn test_error_display_format() {
    let err = InnError::new(ErrorKind::Internal, "E001", "oops");
    assert_eq!(format!("{}", err), "[ERROR] Internal(E001): oops");
}

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err: InnError = io_err.into();
    assert_eq!(err.kind, ErrorKind::Io);
    assert!(err.contains_msg("no such file"));
}
