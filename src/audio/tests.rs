use super::types::{EngineError, clamp_volume};
use std::path::PathBuf;

#[test]
fn clamp_volume_bounds_and_nan() {
    assert_eq!(clamp_volume(0.5), 0.5);
    assert_eq!(clamp_volume(-0.2), 0.0);
    assert_eq!(clamp_volume(1.7), 1.0);
    assert_eq!(clamp_volume(f32::NAN), 0.0);
}

#[test]
fn engine_error_messages_name_the_file() {
    let err = EngineError::Open {
        path: PathBuf::from("/music/a.mp3"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("/music/a.mp3"));
    assert!(std::error::Error::source(&err).is_some());

    let err = EngineError::Decode {
        path: PathBuf::from("/music/b.mp3"),
        reason: "unrecognized format".to_string(),
    };
    assert!(err.to_string().contains("unrecognized format"));
    assert_eq!(EngineError::NotLoaded.to_string(), "no track loaded");
}

#[test]
fn decode_reports_missing_and_undecodable_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.mp3");
    assert!(matches!(
        super::sink::decode(&missing),
        Err(EngineError::Open { .. })
    ));

    let garbage = dir.path().join("garbage.mp3");
    std::fs::write(&garbage, b"this is not audio at all").unwrap();
    assert!(matches!(
        super::sink::decode(&garbage),
        Err(EngineError::Decode { .. })
    ));
}
