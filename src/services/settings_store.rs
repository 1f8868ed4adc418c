//! JSON document persistence with backup-before-overwrite.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::AppError;
use crate::domain::paths::BACKUP_INFIX;

/// Timestamp suffix appended to backup file names.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Result of reading a JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    Found(Value),
    /// The file does not exist.
    Absent,
    /// The file exists but could not be read or parsed.
    Corrupt(String),
}

/// Read a JSON document without ever failing.
pub fn read_json(path: &Path) -> ReadOutcome {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return ReadOutcome::Absent,
        Err(err) => return ReadOutcome::Corrupt(err.to_string()),
    };
    match serde_json::from_str(&content) {
        Ok(value) => ReadOutcome::Found(value),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unparseable JSON document");
            ReadOutcome::Corrupt(err.to_string())
        }
    }
}

/// Write a JSON document with two-space indentation, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, document: &T) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut content = serde_json::to_string_pretty(document)?;
    content.push('\n');
    fs::write(path, content)?;
    debug!(path = %path.display(), "wrote JSON document");
    Ok(())
}

/// Snapshot `path` next to itself, stamped with the current local time.
///
/// Returns the backup path even when there was nothing to copy.
pub fn create_backup(path: &Path) -> Result<PathBuf, AppError> {
    create_backup_at(path, Local::now().naive_local())
}

/// Snapshot `path` using an explicit timestamp.
pub fn create_backup_at(path: &Path, now: NaiveDateTime) -> Result<PathBuf, AppError> {
    let base = format!(
        "{}{}{}",
        path.display(),
        BACKUP_INFIX,
        now.format(BACKUP_TIMESTAMP_FORMAT)
    );
    let mut backup = PathBuf::from(&base);

    if !path.exists() {
        return Ok(backup);
    }

    let mut attempt = 1;
    while backup.exists() {
        backup = PathBuf::from(format!("{}-{}", base, attempt));
        attempt += 1;
    }

    fs::copy(path, &backup)?;
    info!(source = %path.display(), backup = %backup.display(), "created backup");
    Ok(backup)
}

/// Backups of `path`, newest first.
pub fn list_backups(path: &Path) -> Result<Vec<PathBuf>, AppError> {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return Ok(Vec::new());
    };
    let prefix = format!("{}{}", name.to_string_lossy(), BACKUP_INFIX);

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut backups = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if let Some(suffix) = file_name.strip_prefix(&prefix) {
            backups.push((backup_order(suffix), entry.path()));
        }
    }
    backups.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(backups.into_iter().map(|(_, path)| path).collect())
}

/// Sort key for a backup suffix: the timestamp, then the numeric collision counter.
fn backup_order(suffix: &str) -> (String, u32) {
    match suffix.rsplit_once('-') {
        Some((stamp, counter)) => match counter.parse() {
            Ok(counter) => (stamp.to_string(), counter),
            Err(_) => (suffix.to_string(), 0),
        },
        None => (suffix.to_string(), 0),
    }
}

/// Replace `target` wholesale with the bytes of `backup`.
pub fn restore_backup(backup: &Path, target: &Path) -> Result<(), AppError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(backup, target)?;
    info!(backup = %backup.display(), target = %target.display(), "restored backup");
    Ok(())
}

/// Delete a file, reporting whether it existed.
pub fn remove_if_exists(path: &Path) -> Result<bool, AppError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed file");
            Ok(true)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use tempfile::tempdir;

    fn timestamp(second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, second).unwrap()
    }

    #[test]
    fn read_distinguishes_absent_and_corrupt() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");

        assert_eq!(read_json(&path), ReadOutcome::Absent);

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_json(&path), ReadOutcome::Corrupt(_)));

        fs::write(&path, r#"{"a": 1}"#).unwrap();
        assert_eq!(read_json(&path), ReadOutcome::Found(json!({ "a": 1 })));
    }

    #[test]
    fn write_creates_parent_directories_and_pretty_prints() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested/dir/settings.json");

        write_json(&path, &json!({ "a": { "b": true } })).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"a\": {\n    \"b\": true\n  }\n}\n");
    }

    #[test]
    fn backup_of_absent_file_returns_path_without_copying() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");

        let backup = create_backup_at(&path, timestamp(45)).unwrap();

        assert_eq!(
            backup.file_name().unwrap().to_string_lossy(),
            "settings.json.backup.20240115_103045"
        );
        assert!(!backup.exists());
    }

    #[test]
    fn backup_copies_bytes_and_leaves_original_untouched() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");
        let original = "{\"keep\":   \"spacing\"}";
        fs::write(&path, original).unwrap();

        let backup = create_backup_at(&path, timestamp(1)).unwrap();

        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn backups_in_same_second_do_not_overwrite() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "first").unwrap();
        let first = create_backup_at(&path, timestamp(7)).unwrap();

        fs::write(&path, "second").unwrap();
        let second = create_backup_at(&path, timestamp(7)).unwrap();

        assert_ne!(first, second);
        assert!(second.to_string_lossy().ends_with("_103007-1"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
    }

    #[test]
    fn list_backups_matches_prefix_newest_first() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        create_backup_at(&path, timestamp(1)).unwrap();
        create_backup_at(&path, timestamp(2)).unwrap();
        fs::write(temp.path().join("other.json.backup.20240115_103003"), "{}").unwrap();

        let backups = list_backups(&path).unwrap();

        let names: Vec<String> =
            backups.iter().map(|p| p.file_name().unwrap().to_string_lossy().into()).collect();
        assert_eq!(
            names,
            ["settings.json.backup.20240115_103002", "settings.json.backup.20240115_103001"]
        );
    }

    #[test]
    fn list_backups_orders_collision_counters_numerically() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        create_backup_at(&path, timestamp(8)).unwrap();
        for _ in 0..12 {
            create_backup_at(&path, timestamp(9)).unwrap();
        }

        let backups = list_backups(&path).unwrap();

        let names: Vec<String> =
            backups.iter().map(|p| p.file_name().unwrap().to_string_lossy().into()).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "settings.json.backup.20240115_103009-11");
        assert_eq!(names[1], "settings.json.backup.20240115_103009-10");
        assert_eq!(names[10], "settings.json.backup.20240115_103009-1");
        assert_eq!(names[11], "settings.json.backup.20240115_103009");
        assert_eq!(names[12], "settings.json.backup.20240115_103008");
    }

    #[test]
    fn list_backups_in_missing_directory_is_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing/settings.json");

        assert!(list_backups(&path).unwrap().is_empty());
    }

    #[test]
    fn restore_overwrites_target_wholesale() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("settings.json");
        fs::write(&path, r#"{"old": true}"#).unwrap();
        let backup = create_backup_at(&path, timestamp(9)).unwrap();
        fs::write(&path, r#"{"new": true}"#).unwrap();

        restore_backup(&backup, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"old": true}"#);
    }

    #[test]
    fn remove_reports_whether_file_existed() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        assert!(remove_if_exists(&path).unwrap());
        assert!(!remove_if_exists(&path).unwrap());
    }
}
