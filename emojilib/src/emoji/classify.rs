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

//! Classification of raw registry lines.

use nom::{
    bytes::complete::tag,
    combinator::{map, rest},
    sequence::preceded,
    IResult,
};

pub const GROUP_MARKER: &str = "# group:";
pub const SUBGROUP_MARKER: &str = "# subgroup:";
pub const COMMENT_MARKER: char = '#';

/// The role a single line of the registry plays.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind<'a> {
    /// `# group: <name>`, with the trimmed name.
    GroupMarker(&'a str),
    /// `# subgroup: <name>`, with the trimmed name.
    SubgroupMarker(&'a str),
    Blank,
    Comment,
    /// Anything else, passed on verbatim.
    Data(&'a str),
}

fn marker<'a>(prefix: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    map(preceded(tag(prefix), rest), str::trim)
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Ok((_, name)) = marker(GROUP_MARKER)(line) {
            Self::GroupMarker(name)
        } else if let Ok((_, name)) = marker(SUBGROUP_MARKER)(line) {
            Self::SubgroupMarker(name)
        } else if line.trim().is_empty() {
            Self::Blank
        } else if line.starts_with(COMMENT_MARKER) {
            Self::Comment
        } else {
            Self::Data(line)
        }
    }

    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}
