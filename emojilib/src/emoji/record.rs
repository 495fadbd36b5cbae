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

//! A single entry of the registry and its extraction from a data line.

use std::{fmt, str::FromStr};

use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, recognize},
    sequence::tuple,
    IResult,
};
use smallvec::SmallVec;

use super::{
    group::KnownGroup,
    search_terms::search_terms,
    skin_tone::{decompose_skin_tones, SkinTone, SkinTones},
};
use crate::error::{Error, ErrorKind, Result};

pub const FIELD_SEPARATOR: char = ';';
pub const COMMENT_SEPARATOR: char = '#';

/// Qualification status of an emoji sequence, as defined by UTS #51.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Qualification {
    #[default]
    #[serde(rename = "component")]
    Component,
    #[serde(rename = "fully-qualified")]
    FullyQualified,
    #[serde(rename = "minimally-qualified")]
    MinimallyQualified,
    #[serde(rename = "unqualified")]
    Unqualified,
}

impl Qualification {
    pub const ALL: [Self; 4] = [
        Self::Component,
        Self::FullyQualified,
        Self::MinimallyQualified,
        Self::Unqualified,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified",
            Self::Unqualified => "unqualified",
        }
    }

    /// Component and fully-qualified sequences are the ones meant for
    /// keyboards and pickers.
    pub const fn is_displayable(self) -> bool {
        matches!(self, Self::Component | Self::FullyQualified)
    }
}

impl FromStr for Qualification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| {
                Error::new(format!("Unknown qualification status `{}`", s))
                    .set_kind(ErrorKind::ValueError)
            })
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

/// Why a data line could not be turned into a record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineError {
    /// The line did not split into exactly two `;` separated fields.
    FieldCount(usize),
    MissingCodePoints,
    /// Status or descriptor around the `#` separator is missing.
    MissingDescriptor,
    /// The descriptor has a glyph but no name.
    MissingName,
    /// A second `#` that is neither part of the glyph nor the last token of
    /// the name.
    StraySeparator,
}

impl fmt::Display for LineError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FieldCount(n) => write!(
                fmt,
                "expected 2 `{}` separated fields, found {}",
                FIELD_SEPARATOR, n
            ),
            Self::MissingCodePoints => write!(fmt, "no code points"),
            Self::MissingDescriptor => write!(
                fmt,
                "expected a status and a descriptor separated by `{}`",
                COMMENT_SEPARATOR
            ),
            Self::MissingName => write!(fmt, "descriptor has no name after the glyph"),
            Self::StraySeparator => {
                write!(fmt, "unexpected `{}` in descriptor", COMMENT_SEPARATOR)
            }
        }
    }
}

impl std::error::Error for LineError {}

/// One parsed registry entry. Records are immutable once extracted.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmojiRecord {
    code_points: String,
    glyph: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emoji_version: Option<String>,
    search_terms: Vec<String>,
    skin_tones: SkinTones,
    qualification: Qualification,
    group: String,
    subgroup: String,
    sequence_index: usize,
}

/// `E<major>.<minor>`, the emoji version newer registries put after the
/// glyph.
fn emoji_version(input: &str) -> IResult<&str, &str> {
    recognize(tuple((char('E'), digit1, char('.'), digit1)))(input)
}

fn is_emoji_version(token: &str) -> bool {
    all_consuming(emoji_version)(token).is_ok()
}

impl EmojiRecord {
    /// Extracts a record from a data line of the form
    /// `<code points> ; <status> # <glyph> <name>`.
    ///
    /// The name is everything after the glyph. When it starts with an
    /// `E<major>.<minor>` token, that token is also copied to
    /// [`EmojiRecord::emoji_version`].
    ///
    /// An unknown status is logged and read as
    /// [`Qualification::Component`].
    pub fn from_line(
        line: &str,
        group: &str,
        subgroup: &str,
        sequence_index: usize,
    ) -> std::result::Result<Self, LineError> {
        let fields: SmallVec<[&str; 2]> = line.split(FIELD_SEPARATOR).collect();
        let [code_points, remainder] = fields.as_slice() else {
            return Err(LineError::FieldCount(fields.len()));
        };
        let code_points = code_points.trim();
        if code_points.is_empty() {
            return Err(LineError::MissingCodePoints);
        }

        // The first `#` ends the status. Anything after it belongs to the
        // descriptor, including `#` glyphs and names of the keycap subgroup.
        let (status, descriptor) = remainder
            .split_once(COMMENT_SEPARATOR)
            .ok_or(LineError::MissingDescriptor)?;
        // `##` is a doubled separator, not a `#` glyph.
        if descriptor.starts_with(COMMENT_SEPARATOR) {
            return Err(LineError::StraySeparator);
        }
        let (status, descriptor) = (status.trim(), descriptor.trim());
        if status.is_empty() || descriptor.is_empty() {
            return Err(LineError::MissingDescriptor);
        }

        let mut tokens = descriptor.split_whitespace();
        let glyph = tokens.next().ok_or(LineError::MissingName)?;
        let rest: SmallVec<[&str; 8]> = tokens.collect();
        let emoji_version = match rest.as_slice() {
            [] => return Err(LineError::MissingName),
            [version, _, ..] if is_emoji_version(version) => Some(version.to_string()),
            _ => None,
        };
        // Inside the name a `#` may only be the last token, as in `keycap: #`.
        if let [init @ .., _] = rest.as_slice() {
            if init.iter().any(|t| t.contains(COMMENT_SEPARATOR)) {
                return Err(LineError::StraySeparator);
            }
        }
        let name = rest.join(" ");

        let qualification = status.parse().unwrap_or_else(|err| {
            log::warn!("{}, reading `{}` as component.", err, line.trim());
            Qualification::Component
        });

        Ok(Self {
            skin_tones: decompose_skin_tones(code_points),
            search_terms: search_terms(&name),
            code_points: code_points.to_string(),
            glyph: glyph.to_string(),
            name,
            emoji_version,
            qualification,
            group: group.to_string(),
            subgroup: subgroup.to_string(),
            sequence_index,
        })
    }

    /// Whitespace separated hex code points, e.g. `1F468 1F3FF 200D 2695
    /// FE0F`.
    pub fn code_points(&self) -> &str {
        &self.code_points
    }

    /// The code points as scalar values.
    pub fn code_point_values(&self) -> Result<Vec<u32>> {
        self.code_points
            .split_whitespace()
            .map(|hex| u32::from_str_radix(hex, 16).map_err(Error::from))
            .collect()
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emoji_version(&self) -> Option<&str> {
        self.emoji_version.as_deref()
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    pub fn skin_tones(&self) -> &[SkinTone] {
        &self.skin_tones
    }

    pub fn has_skin_tone(&self) -> bool {
        self.skin_tones.iter().any(|t| !t.is_none())
    }

    pub fn qualification(&self) -> Qualification {
        self.qualification
    }

    pub fn is_displayable(&self) -> bool {
        self.qualification.is_displayable()
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn known_group(&self) -> Option<KnownGroup> {
        KnownGroup::from_name(&self.group)
    }

    pub fn subgroup(&self) -> &str {
        &self.subgroup
    }

    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    /// Camel case identifier made of the alphanumeric search terms, e.g.
    /// `GrinningFace` for "grinning face". Two records may share one.
    pub fn identifier(&self) -> String {
        self.search_terms
            .iter()
            .filter(|t| t.chars().all(char::is_alphanumeric))
            .map(|t| {
                let mut chars = t.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect::<String>()
                })
            })
            .collect()
    }
}

impl fmt::Display for EmojiRecord {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{} {} ({}; {})",
            self.glyph, self.name, self.code_points, self.qualification
        )
    }
}
