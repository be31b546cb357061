use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base directory of the entries store.
    pub store: String,
    #[serde(default = "default_daily_threshold")]
    pub daily_threshold: f64,
    #[serde(default = "default_clock_in")]
    pub default_clock_in: String,
    #[serde(default = "default_clock_out")]
    pub default_clock_out: String,
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_daily_threshold() -> f64 {
    crate::core::calculator::overtime::DEFAULT_DAILY_THRESHOLD
}
fn default_clock_in() -> String {
    "09:00".to_string()
}
fn default_clock_out() -> String {
    "17:00".to_string()
}
fn default_report_title() -> String {
    "Worked Hours Report".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_dir().to_string_lossy().to_string(),
            daily_threshold: default_daily_threshold(),
            default_clock_in: default_clock_in(),
            default_clock_out: default_clock_out(),
            report_title: default_report_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimecard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimecard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimecard.conf")
    }

    /// Default base directory of the entries store
    pub fn store_dir() -> PathBuf {
        Self::config_dir()
    }

    /// Load configuration from file. A missing file yields the defaults; an
    /// unreadable or unparsable file also yields the defaults, with a
    /// warning, so a broken config never blocks the tool.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warning(format!(
                    "Failed to read configuration file ({}). Using defaults.",
                    e
                ));
                return Config::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Failed to parse configuration file ({}). Using defaults.",
                    e
                ));
                Config::default()
            }
        }
    }

    /// Initialize configuration directory and file.
    ///
    /// `custom_store` overrides the store directory; in test mode the config
    /// file itself is not written.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();

        let store_dir = if let Some(store) = custom_store {
            let p = PathBuf::from(&store);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::store_dir()
        };

        let config = Config {
            store: store_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }
}
