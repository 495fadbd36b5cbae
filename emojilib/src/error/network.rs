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

//! Error kinds for network related errors.

use super::ErrorKind;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NetworkErrorKind {
    /// Unspecified
    #[default]
    None,
    /// Name lookup of host failed.
    HostLookupFailed,
    /// Bad server certificate
    BadServerCertificate,
    /// Client initialization
    ClientInitialization,
    /// Connection failed
    ConnectionFailed,
    /// Invalid content encoding
    InvalidContentEncoding,
    /// IO Error
    Io,
    /// Protocol violation
    ProtocolViolation,
    /// Connection (not request) timeout.
    Timeout,
    /// Too many redirects
    TooManyRedirects,
    /// Invalid TLS connection
    InvalidTLSConnection,
    /// Equivalent to HTTP status code 400 Bad Request
    BadRequest,
    /// Equivalent to HTTP status code 401 Unauthorized
    Unauthorized,
    /// Equivalent to HTTP status code 403 Forbidden
    Forbidden,
    /// Equivalent to HTTP status code 404 Not Found
    NotFound,
    /// Equivalent to HTTP status code 408 Request Timeout
    RequestTimeout,
    /// Equivalent to HTTP status code 410 Gone
    Gone,
    /// Equivalent to HTTP status code 429 Too Many Requests
    TooManyRequests,
    /// Equivalent to HTTP status code 500 Internal Server Error
    InternalServerError,
    /// Equivalent to HTTP status code 502 Bad Gateway
    BadGateway,
    /// Equivalent to HTTP status code 503 Service Unavailable
    ServiceUnavailable,
    /// Equivalent to HTTP status code 504 Gateway Timeout
    GatewayTimeout,
}

impl NetworkErrorKind {
    pub const fn as_str(&self) -> &'static str {
        use NetworkErrorKind::*;
        match self {
            None => "Unspecified network error",
            HostLookupFailed => "Name lookup of host failed",
            BadServerCertificate => "Bad server Certificate",
            ClientInitialization => "Client initialization",
            ConnectionFailed => "Connection failed",
            InvalidContentEncoding => "Invalid content encoding",
            Io => "IO error",
            ProtocolViolation => "Protocol violation",
            Timeout => "Connection (not request) timeout",
            TooManyRedirects => "Too many redirects",
            InvalidTLSConnection => "Invalid TLS connection",
            BadRequest => "Bad request",
            Unauthorized => "Unauthorized",
            Forbidden => "Forbidden",
            NotFound => "Not found",
            RequestTimeout => "Request timeout",
            Gone => "Gone",
            TooManyRequests => "Too many requests",
            InternalServerError => "Internal server error",
            BadGateway => "Bad gateway",
            ServiceUnavailable => "Service unavailable",
            GatewayTimeout => "Gateway timeout",
        }
    }

    /// Maps a numeric HTTP status code; codes without a dedicated kind
    /// become [`NetworkErrorKind::None`].
    pub const fn from_status_code(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            408 => Self::RequestTimeout,
            410 => Self::Gone,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            _ => Self::None,
        }
    }

    /// Error kind means network is certainly down.
    pub const fn is_network_down(&self) -> bool {
        use NetworkErrorKind::*;
        matches!(
            self,
            BadGateway | ServiceUnavailable | GatewayTimeout | ConnectionFailed | HostLookupFailed
        )
    }
}

#[cfg(feature = "http")]
impl From<isahc::http::StatusCode> for NetworkErrorKind {
    fn from(val: isahc::http::StatusCode) -> Self {
        Self::from_status_code(val.as_u16())
    }
}

#[cfg(feature = "http")]
impl From<&isahc::error::ErrorKind> for NetworkErrorKind {
    #[inline]
    fn from(val: &isahc::error::ErrorKind) -> Self {
        use isahc::error::ErrorKind::*;
        match val {
            BadServerCertificate => Self::BadServerCertificate,
            ClientInitialization => Self::ClientInitialization,
            ConnectionFailed => Self::ConnectionFailed,
            InvalidContentEncoding => Self::InvalidContentEncoding,
            InvalidRequest => Self::BadRequest,
            Io => Self::Io,
            NameResolution => Self::HostLookupFailed,
            ProtocolViolation => Self::ProtocolViolation,
            Timeout => Self::Timeout,
            TlsEngine => Self::InvalidTLSConnection,
            TooManyRedirects => Self::TooManyRedirects,
            _ => Self::None,
        }
    }
}

impl From<NetworkErrorKind> for ErrorKind {
    #[inline]
    fn from(kind: NetworkErrorKind) -> Self {
        Self::Network(kind)
    }
}
