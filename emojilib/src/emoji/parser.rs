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

//! The pipeline from registry text to an [`EmojiList`].

use std::sync::Arc;

use super::{classify::LineKind, list::EmojiList, record::EmojiRecord};
use crate::{
    error::{Error, ErrorKind, Result},
    source::Source,
};

/// State carried from one line to the next.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParserState {
    /// Name of the last `# group:` marker seen.
    pub group: String,
    /// Name of the last `# subgroup:` marker seen.
    pub subgroup: String,
    /// Index the next successfully extracted record gets.
    pub sequence_index: usize,
    /// Data lines skipped so far.
    pub skipped: usize,
}

impl ParserState {
    /// Consumes one classified line. Markers replace the group or subgroup,
    /// data lines that extract into a record are pushed to `records` and
    /// advance `sequence_index`. Malformed data lines are logged and leave
    /// the index untouched.
    pub fn advance(
        self,
        line_no: usize,
        line: LineKind<'_>,
        records: &mut Vec<EmojiRecord>,
    ) -> Self {
        match line {
            LineKind::GroupMarker(group) => {
                debug!("line {}: group {:?}", line_no, group);
                Self {
                    group: group.to_string(),
                    ..self
                }
            }
            LineKind::SubgroupMarker(subgroup) => Self {
                subgroup: subgroup.to_string(),
                ..self
            },
            LineKind::Blank | LineKind::Comment => self,
            LineKind::Data(data) => {
                match EmojiRecord::from_line(data, &self.group, &self.subgroup, self.sequence_index)
                {
                    Ok(record) => {
                        log::trace!("line {}: {}", line_no, record);
                        records.push(record);
                        Self {
                            sequence_index: self.sequence_index + 1,
                            ..self
                        }
                    }
                    Err(err) => {
                        log::warn!("line {}: skipping `{}`: {}.", line_no, data.trim(), err);
                        Self {
                            skipped: self.skipped + 1,
                            ..self
                        }
                    }
                }
            }
        }
    }
}

/// Parses the full text of an `emoji-test.txt` registry. Lines that cannot
/// be parsed are logged and skipped, so this never fails; an input without
/// data lines gives an empty list.
pub fn parse_str(text: &str) -> EmojiList {
    let (state, records) = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, LineKind::classify(line)))
        .fold(
            (ParserState::default(), Vec::new()),
            |(state, mut records), (line_no, line)| {
                let state = state.advance(line_no, line, &mut records);
                (state, records)
            },
        );
    log::debug!(
        "Parsed {} emoji, skipped {} malformed line(s).",
        records.len(),
        state.skipped
    );
    EmojiList::from_records(records)
}

/// Retrieves the registry from a [`Source`] and parses it.
///
/// The source is read once per [`EmojiListParser::parse`] call and every
/// call starts from a fresh [`ParserState`].
#[derive(Debug)]
pub struct EmojiListParser<S: Source> {
    source: S,
}

impl<S: Source> EmojiListParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fails with [`ErrorKind::SourceUnavailable`] when the source cannot be
    /// read. An available but empty source yields `Ok` with an empty list.
    pub fn parse(&self) -> Result<EmojiList> {
        let text = self.source.fetch().map_err(|err| {
            Error::new(format!(
                "Could not retrieve the emoji list from {}.",
                self.source.describe()
            ))
            .set_kind(ErrorKind::SourceUnavailable)
            .set_source(Some(Arc::new(err)))
        })?;
        log::info!(
            "Retrieved {} bytes from {}.",
            text.len(),
            self.source.describe()
        );
        Ok(parse_str(&text))
    }
}
