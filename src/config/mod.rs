use crate::db::slot::DEFAULT_SESSION_KEY;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Key of the slot holding the saved session.
    #[serde(default = "default_session_key")]
    pub session_key: String,
    #[serde(default = "default_target_daily_hours")]
    pub target_daily_hours: f64,
    /// Seed the demo admin/employee accounts on `init` when the directory is empty.
    #[serde(default = "default_seed_demo_accounts")]
    pub seed_demo_accounts: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_session_key() -> String {
    DEFAULT_SESSION_KEY.to_string()
}
fn default_target_daily_hours() -> f64 {
    8.0
}
fn default_seed_demo_accounts() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            session_key: default_session_key(),
            target_daily_hours: default_target_daily_hours(),
            seed_demo_accounts: default_seed_demo_accounts(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("planningpro")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".planningpro")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("planningpro.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("planningpro.sqlite")
    }

    /// Daily target in whole seconds.
    pub fn target_seconds(&self) -> i64 {
        (self.target_daily_hours.max(0.0) * 3600.0).round() as i64
    }

    /// Load the configuration file, or defaults if it is missing.
    ///
    /// An unreadable or malformed file is reported and replaced by defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(mut cfg) => {
                cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
                cfg
            }
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {}: {e}",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    /// Create the config directory, the config file (unless testing) and an
    /// empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Self::default()
            };
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/pp.sqlite\n").unwrap();
        assert_eq!(cfg.session_key, "planningpro_user");
        assert_eq!(cfg.target_seconds(), 8 * 3600);
        assert!(cfg.seed_demo_accounts);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("planningpro_bad_config.conf");
        std::fs::write(&path, "database: [unterminated").unwrap();
        let cfg = Config::load_from(&path);
        assert_eq!(cfg.target_daily_hours, 8.0);
        let _ = std::fs::remove_file(&path);
    }
}
