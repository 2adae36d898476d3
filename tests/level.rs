//! Tests for log level and verbosity parsing.

use routelog::{LogLevel, Verbosity};

#[test]
fn severity_ordering() {
    assert!(LogLevel::Debug.severity() < LogLevel::Info.severity());
    assert!(LogLevel::Info.severity() < LogLevel::Warning.severity());
    assert!(LogLevel::Warning.severity() < LogLevel::Error.severity());
    assert_eq!(LogLevel::Error.severity(), Some(40));
}

#[test]
fn presentation_channels_have_no_severity() {
    assert_eq!(LogLevel::Screen.severity(), None);
    assert_eq!(LogLevel::Progress.severity(), None);
}

#[test]
fn level_display() {
    assert_eq!(LogLevel::Screen.to_string(), "screen");
    assert_eq!(LogLevel::Warning.to_string(), "warning");
    assert_eq!(LogLevel::all().len(), 6);
}

#[test]
fn level_from_str() {
    assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
    assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
    assert_eq!("err".parse::<LogLevel>().unwrap(), LogLevel::Error);
    assert!("trace".parse::<LogLevel>().is_err());
}

#[test]
fn verbosity_from_str() {
    assert_eq!("Quiet".parse::<Verbosity>().unwrap(), Verbosity::Quiet);
    assert_eq!("verbose".parse::<Verbosity>().unwrap(), Verbosity::Verbose);
    assert!("loud".parse::<Verbosity>().is_err());
    assert_eq!(Verbosity::default(), Verbosity::Normal);
}
