use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Deserialize;

use crate::error::{OutputError, OutputResult};

#[derive(Deserialize, Debug, Clone)]
pub struct LogSettings {
    pub log_path: String,
    pub log_level: String,
    pub log_file_name: String,
    pub log_overwrite: bool,
}

pub fn setup_logging(log_level: &str, log_file_path: PathBuf) -> OutputResult<Config> {
    let log_level = get_logging_level(log_level);
    let log_file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y.%m.%d %H:%M:%S)} | {({l}):5.5} | {({f}:{L}):>40.40} | {m}{n}",
        )))
        .build(log_file_path)?;

    Config::builder()
        .appender(Appender::builder().build("x", Box::new(log_file)))
        .build(Root::builder().appender("x").build(log_level))
        .map_err(|e| OutputError::Logger(e.to_string()))
}

fn get_logging_level(log_level: &str) -> LevelFilter {
    match log_level {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Picks the log file inside `<config_dir>/<log_path>/logs`. An existing file
/// is either removed or left alone, in which case the new file gets a
/// timestamp suffix.
pub fn log_file_path(config_dir: &Path, log_settings: &LogSettings) -> OutputResult<PathBuf> {
    let log_path = config_dir.join(&log_settings.log_path).join("logs");
    if !log_path.exists() {
        fs::create_dir_all(&log_path)?;
    }

    let log_file_path = log_path.join(&log_settings.log_file_name);
    if !log_file_path.exists() {
        return Ok(log_file_path);
    }
    if log_settings.log_overwrite {
        fs::remove_file(&log_file_path)?;
        return Ok(log_file_path);
    }

    let stamp = Utc::now().format("_%d%m%Y_%H%M%S").to_string();
    let stem = log_settings
        .log_file_name
        .split('.')
        .next()
        .unwrap_or_default();
    Ok(log_path.join(format!("{}{}.log", stem, stamp)))
}

pub fn initiate_logger(config_dir: &Path, log_settings: &LogSettings) -> OutputResult<()> {
    let log_file_path = log_file_path(config_dir, log_settings)?;
    let logger_config = setup_logging(&log_settings.log_level, log_file_path)?;
    log4rs::init_config(logger_config).map_err(|e| OutputError::Logger(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(overwrite: bool) -> LogSettings {
        LogSettings {
            log_path: "output".to_string(),
            log_level: "debug".to_string(),
            log_file_name: "positions.log".to_string(),
            log_overwrite: overwrite,
        }
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        assert_eq!(get_logging_level("debug"), LevelFilter::Debug);
        assert_eq!(get_logging_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_log_file_inside_logs_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path(dir.path(), &settings(true)).unwrap();
        assert_eq!(path, dir.path().join("output/logs/positions.log"));
        assert!(dir.path().join("output/logs").is_dir());
    }

    #[test]
    fn test_existing_log_overwritten_or_suffixed() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("output/logs/positions.log");
        fs::create_dir_all(existing.parent().unwrap()).unwrap();
        fs::write(&existing, "old run").unwrap();

        let kept = log_file_path(dir.path(), &settings(false)).unwrap();
        assert_ne!(kept, existing);
        assert!(existing.exists());
        let name = kept.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("positions_"));
        assert!(name.ends_with(".log"));

        let replaced = log_file_path(dir.path(), &settings(true)).unwrap();
        assert_eq!(replaced, existing);
        assert!(!existing.exists());
    }
}
