//! Screener settings file (`[api]`, `[request]`, `[screener]`, `[output]`).
//!
//! Blank values read as unset so the caller's defaults apply, and unparsable
//! numbers fall back the same way. Only a file that cannot be read or parsed
//! at all is an error.

use crate::domain::error::ScreenerError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;
use tracing::debug;

pub struct FileConfigAdapter {
    ini: Ini,
}

impl FileConfigAdapter {
    pub fn from_file(path: &Path) -> Result<Self, ScreenerError> {
        let mut ini = Ini::new();
        ini.load(path).map_err(|reason| ScreenerError::ConfigParse {
            file: path.display().to_string(),
            reason,
        })?;
        debug!(path = %path.display(), sections = ini.sections().len(), "parsed config");
        Ok(Self { ini })
    }

    pub fn from_string(content: &str) -> Result<Self, ScreenerError> {
        let mut ini = Ini::new();
        ini.read(content.to_string())
            .map_err(|reason| ScreenerError::ConfigParse {
                file: "<inline>".to_string(),
                reason,
            })?;
        Ok(Self { ini })
    }

    fn value(&self, section: &str, key: &str) -> Option<String> {
        self.ini
            .get(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.value(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        match self.value(section, key).map(|v| v.parse::<i64>()) {
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                debug!(section, key, "not an integer, using default");
                default
            }
            None => default,
        }
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        match self.value(section, key).map(|v| v.parse::<f64>()) {
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                debug!(section, key, "not a number, using default");
                default
            }
            None => default,
        }
    }
}
