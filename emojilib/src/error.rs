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

//! An error object for `emojilib`

use std::{borrow::Cow, fmt, io, result, str, string, sync::Arc};

pub mod network;

pub use network::NetworkErrorKind;

pub type Result<T> = result::Result<T, Error>;

/// Wraps an error value into the `Arc` that [`Error::set_source`] expects.
#[macro_export]
macro_rules! src_err_arc_wrap {
    ($err:expr) => {{
        (Box::new($err) as Box<dyn std::error::Error + Send + Sync + 'static>).into()
    }};
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorKind {
    #[default]
    None,
    /// The registry text could not be retrieved at all.
    SourceUnavailable,
    Network(NetworkErrorKind),
    Configuration,
    Platform,
    OSError,
    ValueError,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::SourceUnavailable => "Source unavailable",
            Self::Network(kind) => kind.as_str(),
            Self::Configuration => "Configuration",
            Self::Platform => "Platform/Runtime environment error",
            Self::OSError => "OS Error",
            Self::ValueError => "Invalid value",
        }
    }

    pub const fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable)
    }

    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub summary: Option<Cow<'static, str>>,
    pub details: Cow<'static, str>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    pub kind: ErrorKind,
}

pub trait IntoError {
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_kind(self, kind: ErrorKind) -> Error;
}

pub trait ResultIntoError<T> {
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_kind(self, kind: ErrorKind) -> Result<T>;
}

impl<I: Into<Error>> IntoError for I {
    #[inline]
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_summary(msg)
    }

    #[inline]
    fn set_err_kind(self, kind: ErrorKind) -> Error {
        let err: Error = self.into();
        err.set_kind(kind)
    }
}

impl<T, I: Into<Error>> ResultIntoError<T> for std::result::Result<T, I> {
    #[inline]
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_summary(msg_fn()))
    }

    #[inline]
    fn chain_err_kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|err| err.set_err_kind(kind))
    }
}

impl Error {
    pub fn new<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            summary: None,
            details: msg.into(),
            source: None,
            kind: ErrorKind::None,
        }
    }

    pub fn set_summary<M>(mut self, summary: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        self.summary = Some(summary.into());
        self
    }

    pub fn set_source(
        mut self,
        new_val: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.source = new_val;
        self
    }

    pub fn set_kind(mut self, new_val: ErrorKind) -> Self {
        self.kind = new_val;
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(summary) = self.summary.as_ref() {
            writeln!(f, "Summary: {}", summary)?;
        }
        write!(f, "{}", self.details)?;
        if !matches!(self.kind, ErrorKind::None) {
            write!(f, "\nKind: {}", self.kind)?;
        }
        if let Some(source) = self.source.as_ref() {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|s| &(*(*s)) as _)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(kind: io::Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::OSError)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<string::FromUtf8Error> for Error {
    #[inline]
    fn from(kind: string::FromUtf8Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<str::Utf8Error> for Error {
    #[inline]
    fn from(kind: str::Utf8Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<std::num::ParseIntError> for Error {
    #[inline]
    fn from(kind: std::num::ParseIntError) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::ValueError)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<toml::de::Error> for Error {
    #[inline]
    fn from(kind: toml::de::Error) -> Self {
        Self::new(format!("{}", kind))
            .set_kind(ErrorKind::Configuration)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<toml::ser::Error> for Error {
    #[inline]
    fn from(kind: toml::ser::Error) -> Self {
        Self::new(format!("{}", kind))
            .set_kind(ErrorKind::Configuration)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<serde_json::error::Error> for Error {
    #[inline]
    fn from(kind: serde_json::error::Error) -> Self {
        Self::new(format!("{}", kind)).set_source(Some(Arc::new(kind)))
    }
}

impl From<xdg::BaseDirectoriesError> for Error {
    #[inline]
    fn from(kind: xdg::BaseDirectoriesError) -> Self {
        Self::new(format!("{}", kind))
            .set_kind(ErrorKind::Platform)
            .set_source(Some(Arc::new(kind)))
    }
}

#[cfg(feature = "http")]
impl From<isahc::Error> for Error {
    #[inline]
    fn from(val: isahc::Error) -> Self {
        let kind = NetworkErrorKind::from(val.kind());
        Self::new(val.to_string())
            .set_kind(ErrorKind::Network(kind))
            .set_source(Some(Arc::new(val)))
    }
}

impl From<Box<dyn std::error::Error + Sync + Send + 'static>> for Error {
    #[inline]
    fn from(kind: Box<dyn std::error::Error + Sync + Send + 'static>) -> Self {
        Self::new(kind.to_string()).set_source(Some(kind.into()))
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(kind: &str) -> Self {
        Self::new(kind.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(kind: String) -> Self {
        Self::new(kind)
    }
}
