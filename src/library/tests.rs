use super::*;
use crate::config::LibrarySettings;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::tempdir;

#[test]
fn track_display_is_file_stem() {
    let t = Track::from_path("/music/Artist - Song.mp3");
    assert_eq!(t.display, "Artist - Song");
    assert_eq!(t.path, PathBuf::from("/music/Artist - Song.mp3"));

    let t = Track::from_path("/music/archive.tar.mp3");
    assert_eq!(t.display, "archive.tar");
}

#[test]
fn is_audio_file_matches_configured_extensions_case_insensitive() {
    let settings = LibrarySettings {
        extensions: vec!["mp3".into(), ".OGG".into()],
        ..LibrarySettings::default()
    };
    assert!(is_audio_file(Path::new("/tmp/a.mp3"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.MP3"), &settings));
    assert!(is_audio_file(Path::new("/tmp/a.ogg"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a.flac"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a.txt"), &settings));
    assert!(!is_audio_file(Path::new("/tmp/a"), &settings));
}

#[test]
fn collect_paths_accepts_single_audio_file_only() {
    let dir = tempdir().unwrap();
    let song = dir.path().join("song.mp3");
    let notes = dir.path().join("notes.txt");
    fs::write(&song, b"not a real mp3").unwrap();
    fs::write(&notes, b"ignore me").unwrap();

    let settings = LibrarySettings::default();
    assert_eq!(collect_paths(&song, &settings), vec![song.clone()]);
    assert!(collect_paths(&notes, &settings).is_empty());
    assert!(collect_paths(&dir.path().join("missing.mp3"), &settings).is_empty());
}

#[test]
fn collect_paths_expands_directory_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.mp3"), b"x").unwrap();
    fs::write(dir.path().join("a.MP3"), b"x").unwrap();
    fs::write(dir.path().join("c.txt"), b"x").unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("deep.mp3"), b"x").unwrap();

    let settings = LibrarySettings::default();
    let found = collect_paths(dir.path(), &settings);
    assert_eq!(
        found,
        vec![dir.path().join("a.MP3"), dir.path().join("b.mp3")]
    );
}

#[test]
fn collect_paths_respects_recursive_and_include_hidden() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("root.mp3"), b"x").unwrap();
    fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("deep.mp3"), b"x").unwrap();

    let settings = LibrarySettings {
        recursive: true,
        include_hidden: true,
        ..LibrarySettings::default()
    };
    let found = collect_paths(dir.path(), &settings);
    assert_eq!(found.len(), 3);
    assert!(found.contains(&sub.join("deep.mp3")));
    assert!(found.contains(&dir.path().join(".hidden.mp3")));
}

#[test]
fn expand_home_replaces_leading_tilde() {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    if let Some(home) = home {
        assert_eq!(expand_home("~/Music/a.mp3"), home.join("Music/a.mp3"));
        assert_eq!(expand_home("~"), home);
    }
    assert_eq!(expand_home("  /abs/a.mp3 "), PathBuf::from("/abs/a.mp3"));
    assert_eq!(expand_home("rel~/a.mp3"), PathBuf::from("rel~/a.mp3"));
}

struct CountingProbe {
    calls: Rc<Cell<usize>>,
    secs: Option<u64>,
}

impl DurationProbe for CountingProbe {
    fn probe(&self, _path: &Path) -> Option<u64> {
        self.calls.set(self.calls.get() + 1);
        self.secs
    }
}

#[test]
fn length_cache_probes_each_path_once() {
    let calls = Rc::new(Cell::new(0));
    let mut cache = LengthCache::new(CountingProbe {
        calls: calls.clone(),
        secs: Some(212),
    });

    assert_eq!(cache.length_of(Path::new("/a.mp3")), 212);
    assert_eq!(cache.length_of(Path::new("/a.mp3")), 212);
    assert_eq!(calls.get(), 1);

    assert_eq!(cache.length_of(Path::new("/b.mp3")), 212);
    assert_eq!(calls.get(), 2);
}

#[test]
fn length_cache_remembers_unreadable_as_zero() {
    let calls = Rc::new(Cell::new(0));
    let mut cache = LengthCache::new(CountingProbe {
        calls: calls.clone(),
        secs: None,
    });

    assert_eq!(cache.length_of(Path::new("/broken.mp3")), 0);
    assert_eq!(cache.length_of(Path::new("/broken.mp3")), 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn lofty_probe_reports_none_for_missing_file() {
    let dir = tempdir().unwrap();
    assert_eq!(LoftyProbe.probe(&dir.path().join("missing.mp3")), None);
}
