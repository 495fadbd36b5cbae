//
// emoji-list - emojilib crate.
//
// Copyright 2026 emoji-list contributors
//
// This file is part of emoji-list.
//
// emoji-list is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emoji-list is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emoji-list. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

//! Configuration of the registry location and of logging.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    source::{FileSource, Source, DEFAULT_EMOJI_TEST_URL},
    utils::logging::LogLevel,
};

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "EMOJI_LIST_CONFIG";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSettings {
    #[serde(default = "default_url")]
    pub url: String,
    /// Local copy of the registry, preferred over `url` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            path: None,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogSettings {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_url() -> String {
    DEFAULT_EMOJI_TEST_URL.to_string()
}

/// Path of the configuration file: `$EMOJI_LIST_CONFIG` if set, otherwise
/// `config.toml` in the XDG configuration directory of `emoji-list`.
pub fn get_config_file() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("emoji-list")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

impl Settings {
    pub const EXAMPLE_CONFIG: &'static str = include_str!("../docs/sample-config.toml");

    /// Loads the configuration file if there is one, defaults otherwise.
    pub fn new() -> Result<Self> {
        let config_path = get_config_file()?;
        if !config_path.exists() {
            log::debug!(
                "No configuration file at {}, using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::from_path(&config_path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("Could not read configuration file {}", path.display()))
            .chain_err_kind(ErrorKind::Configuration)?;
        contents
            .parse()
            .chain_err_summary(|| format!("Configuration file {} is invalid", path.display()))
    }

    /// The configured registry source: the local path if set, otherwise
    /// the URL.
    pub fn source(&self) -> Result<Box<dyn Source>> {
        if let Some(path) = self.source.path.as_ref() {
            return Ok(Box::new(FileSource::new(path)));
        }
        url_source(&self.source.url)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl std::str::FromStr for Settings {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// A source downloading `url`.
#[cfg(feature = "http")]
pub fn url_source(url: &str) -> Result<Box<dyn Source>> {
    Ok(Box::new(crate::source::HttpSource::new(url)))
}

#[cfg(not(feature = "http"))]
pub fn url_source(url: &str) -> Result<Box<dyn Source>> {
    Err(Error::new(format!(
        "Cannot download {}: this build of emojilib was compiled without the `http` feature. \
         Set `source.path` to a local copy instead.",
        url
    ))
    .set_kind(ErrorKind::Configuration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conf_example_config_parses() {
        let settings: Settings = Settings::EXAMPLE_CONFIG.parse().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.source.url, DEFAULT_EMOJI_TEST_URL);
        assert_eq!(settings.log.level, LogLevel::WARN);
    }

    #[test]
    fn test_conf_values() {
        let settings: Settings = r#"
[source]
path = "/srv/unicode/emoji-test.txt"

[log]
level = "DEBUG"
file = "/tmp/emoji-list.log"
"#
        .parse()
        .unwrap();
        assert_eq!(
            settings.source.path.as_deref(),
            Some(Path::new("/srv/unicode/emoji-test.txt"))
        );
        assert_eq!(settings.source.url, DEFAULT_EMOJI_TEST_URL);
        assert_eq!(settings.log.level, LogLevel::DEBUG);
        assert_eq!(
            settings.source().unwrap().describe(),
            "/srv/unicode/emoji-test.txt"
        );
        let again: Settings = settings.to_toml().unwrap().parse().unwrap();
        assert_eq!(again, settings);

        let empty: Settings = "".parse().unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn test_conf_rejects_unknown_keys() {
        let err = "[source]\nurl = \"x\"\nmirror = \"y\"\n"
            .parse::<Settings>()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        let err = "[log]\nlevel = \"LOUD\"\n".parse::<Settings>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_conf_from_path() {
        let tmp_dir = tempfile::TempDir::new().unwrap();
        let path = tmp_dir.path().join("config.toml");
        std::fs::write(&path, "[log]\nlevel = \"TRACE\"\n").unwrap();
        assert_eq!(Settings::from_path(&path).unwrap().log.level, LogLevel::TRACE);

        let err = Settings::from_path(&tmp_dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
