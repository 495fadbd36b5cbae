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

//! Where the registry text comes from.
//!
//! A [`Source`] performs one blocking read of the whole registry. There is
//! no retry and no partial result: either the full text is returned or an
//! error.

use std::{borrow::Cow, io::Read, path::PathBuf};

use crate::error::{Result, ResultIntoError};
#[cfg(feature = "http")]
use crate::error::{Error, ErrorKind, NetworkErrorKind};

/// The latest published `emoji-test.txt`.
pub const DEFAULT_EMOJI_TEST_URL: &str = "https://unicode.org/Public/emoji/latest/emoji-test.txt";

pub trait Source {
    /// Reads the complete registry text.
    fn fetch(&self) -> Result<String>;

    /// Human readable location, for log and error messages.
    fn describe(&self) -> String;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn fetch(&self) -> Result<String> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn fetch(&self) -> Result<String> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Registry text held in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    text: Cow<'static, str>,
}

impl StaticSource {
    pub fn new<T: Into<Cow<'static, str>>>(text: T) -> Self {
        Self { text: text.into() }
    }
}

impl Source for StaticSource {
    fn fetch(&self) -> Result<String> {
        Ok(self.text.to_string())
    }

    fn describe(&self) -> String {
        "in-memory text".to_string()
    }
}

#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl Source for FileSource {
    fn fetch(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .chain_err_summary(|| format!("Could not read {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads standard input until end of file.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinSource;

impl Source for StdinSource {
    fn fetch(&self) -> Result<String> {
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .chain_err_summary(|| "Could not read standard input")?;
        Ok(text)
    }

    fn describe(&self) -> String {
        "standard input".to_string()
    }
}

/// Downloads the registry with a single blocking HTTP GET.
#[cfg(feature = "http")]
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
}

#[cfg(feature = "http")]
impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_EMOJI_TEST_URL)
    }
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new<U: Into<String>>(url: U) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "http")]
impl Source for HttpSource {
    fn fetch(&self) -> Result<String> {
        use isahc::ReadResponseExt;

        let mut response = isahc::get(self.url.as_str())
            .chain_err_summary(|| format!("Could not connect to {}", self.url))?;
        let status = response.status();
        log::trace!("GET {}: {:?}", self.url, status);
        if !status.is_success() {
            return Err(Error::new(format!(
                "{} replied with HTTP status {}",
                self.url, status
            ))
            .set_kind(ErrorKind::Network(NetworkErrorKind::from(status))));
        }
        let text = response
            .text()
            .chain_err_summary(|| format!("Could not read response body of {}", self.url))?;
        Ok(text)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new("1F600 ; fully-qualified # 😀 grinning face\n");
        assert_eq!(
            source.fetch().unwrap(),
            "1F600 ; fully-qualified # 😀 grinning face\n"
        );
        let boxed: Box<dyn Source> = Box::new(StaticSource::new(String::from("")));
        assert_eq!(boxed.fetch().unwrap(), "");
        assert_eq!(boxed.describe(), "in-memory text");
    }

    #[test]
    fn test_file_source() {
        let tmp_dir = tempfile::TempDir::new().unwrap();
        let path = tmp_dir.path().join("emoji-test.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all("# group: Flags\n".as_bytes()).unwrap();
        f.flush().unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.fetch().unwrap(), "# group: Flags\n");
        assert_eq!(source.describe(), path.display().to_string());

        let err = FileSource::new(tmp_dir.path().join("nope.txt"))
            .fetch()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::OSError);
        assert!(err.summary.unwrap().starts_with("Could not read "));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_source_defaults() {
        assert_eq!(HttpSource::default().url(), DEFAULT_EMOJI_TEST_URL);
        assert_eq!(
            HttpSource::new("http://localhost/emoji-test.txt").describe(),
            "http://localhost/emoji-test.txt"
        );
    }
}
