//! Settings persistence round trips through real files

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use guild_engine::Difficulty;
use guild_of_games::core::{CoreError, GameSettings};
use uuid::Uuid;

/// Log sink shared between a test and its subscriber
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn scratch_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("guild-settings-{}", Uuid::new_v4()))
        .join("settings.json")
}

#[test]
fn test_save_then_load() {
    let path = scratch_path();
    let settings = GameSettings {
        difficulty: Difficulty::Hard,
        go_board_size: 13,
        go_capture_target: Some(10),
        think_delay_ms: 0,
        ..GameSettings::default()
    };
    settings.save_to(&path).unwrap();
    assert_eq!(GameSettings::load_from(&path).unwrap(), settings);
    assert_eq!(GameSettings::load_or_default(&path), settings);

    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn test_missing_file_uses_defaults() {
    let path = scratch_path();
    assert_eq!(GameSettings::load_or_default(&path), GameSettings::default());
    assert!(matches!(
        GameSettings::load_from(&path),
        Err(CoreError::SettingsIo(_))
    ));
}

#[test]
fn test_corrupt_file_uses_defaults() {
    let path = scratch_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).unwrap();
    }
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        GameSettings::load_from(&path),
        Err(CoreError::SettingsSerialization(_))
    ));
    assert_eq!(GameSettings::load_or_default(&path), GameSettings::default());

    fs::write(&path, r#"{"go_board_size": 7}"#).unwrap();
    assert!(matches!(
        GameSettings::load_from(&path),
        Err(CoreError::InvalidSettings { .. })
    ));

    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn test_fallback_warning_reaches_scoped_subscriber() {
    let path = scratch_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).unwrap();
    }
    fs::write(&path, "{ not json").unwrap();

    let log = CapturedLog::default();
    let sink = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();
    let settings =
        tracing::subscriber::with_default(subscriber, || GameSettings::load_or_default(&path));

    assert_eq!(settings, GameSettings::default());
    let text = log.text();
    assert!(text.contains("WARN"), "{text}");
    assert!(text.contains("Failed to load settings"), "{text}");

    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}
