use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG: &str = "HOTELLOG_CONFIG";
pub const ENV_ADMIN_SECRET: &str = "HOTELLOG_ADMIN_SECRET";
pub const ENV_EMPLOYEE_SECRET: &str = "HOTELLOG_EMPLOYEE_SECRET";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_secret: Option<String>,
    #[serde(default)]
    pub notify_on_submit: bool,
}

fn default_log_file() -> String {
    Config::log_file_default().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            admin_secret: None,
            employee_secret: None,
            notify_on_submit: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hotellog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hotellog")
        }
    }

    /// Full path of the config file; `HOTELLOG_CONFIG` wins over the default.
    pub fn config_file() -> PathBuf {
        match env::var(ENV_CONFIG) {
            Ok(p) if !p.trim().is_empty() => expand_tilde(p.trim()),
            _ => Self::config_dir().join("hotellog.conf"),
        }
    }

    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("hotel_log.csv")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Secrets from the environment override the file.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        cfg.apply_env();
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        // an empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    fn apply_env(&mut self) {
        if let Ok(s) = env::var(ENV_ADMIN_SECRET)
            && !s.is_empty()
        {
            self.admin_secret = Some(s);
        }
        if let Ok(s) = env::var(ENV_EMPLOYEE_SECRET)
            && !s.is_empty()
        {
            self.employee_secret = Some(s);
        }
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    /// Copy with secrets replaced, for printing.
    pub fn masked(&self) -> Config {
        let mask = |s: &Option<String>| s.as_ref().map(|_| "********".to_string());
        Config {
            log_file: self.log_file.clone(),
            admin_secret: mask(&self.admin_secret),
            employee_secret: mask(&self.employee_secret),
            notify_on_submit: self.notify_on_submit,
        }
    }

    /// Write a fresh configuration file (and its directory).
    pub fn init_all(
        log_file: Option<String>,
        admin_secret: Option<String>,
        employee_secret: Option<String>,
        is_test: bool,
    ) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config {
            log_file: log_file.unwrap_or_else(default_log_file),
            admin_secret,
            employee_secret,
            notify_on_submit: false,
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", path.display()));
        }

        if let Some(dir) = config.log_path().parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.conf")).unwrap();
        assert!(!cfg.notify_on_submit);
        assert!(cfg.admin_secret.is_none());
        assert!(cfg.log_file.ends_with("hotel_log.csv"));
    }

    #[test]
    fn partial_file_uses_serde_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotellog.conf");
        fs::write(&path, "admin_secret: s3cret\nnotify_on_submit: true\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.admin_secret.as_deref(), Some("s3cret"));
        assert!(cfg.notify_on_submit);
        assert!(cfg.employee_secret.is_none());
    }

    #[test]
    fn garbage_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotellog.conf");
        fs::write(&path, "log_file: [unterminated").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn masked_hides_secrets() {
        let cfg = Config {
            admin_secret: Some("letmein".into()),
            ..Config::default()
        };
        let yaml = serde_yaml::to_string(&cfg.masked()).unwrap();
        assert!(!yaml.contains("letmein"));
        assert!(yaml.contains("********"));
    }
}
