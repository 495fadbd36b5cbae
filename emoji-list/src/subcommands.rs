//
// emoji-list - emoji-list binary crate.
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


use std::io::{Read, Write};

use emojilib::{
    conf::{self, LogSettings},
    emoji::{EmojiList, EmojiListParser, EmojiRecord},
    source::{FileSource, Source, StdinSource},
    LogLevel, StderrLogger,
};

use crate::{
    args::{InputOpt, PathOrStdio},
    Error, ErrorKind, Result, ResultIntoError, Settings,
};

/// Installs the logger described by `settings`, raised by `verbose` levels
/// above the default.
pub fn init_logging(settings: &LogSettings, verbose: u8) -> Result<StderrLogger> {
    let mut level = settings.level;
    if verbose > 0 {
        let requested = LogLevel::from((LogLevel::WARN as u8).saturating_add(verbose));
        if requested > level {
            level = requested;
        }
    }
    let mut logger = StderrLogger::new(level);
    if let Some(path) = settings.file.as_ref() {
        logger.change_log_dest(path.clone())?;
    }
    Ok(logger)
}

/// Chooses the source: `--input` or `--url` if given, the configuration
/// otherwise.
pub fn select_source(input: InputOpt, settings: &Settings) -> Result<Box<dyn Source>> {
    Ok(match (input.input, input.url) {
        (Some(PathOrStdio::Stdio), _) => Box::new(StdinSource),
        (Some(PathOrStdio::Path(path)), _) => Box::new(FileSource::new(path)),
        (None, Some(url)) => conf::url_source(&url)?,
        (None, None) => settings.source()?,
    })
}

/// Loads the configuration, sets up logging and parses the selected
/// registry.
pub fn fetch(input: InputOpt, verbose: u8) -> Result<EmojiList> {
    let settings = Settings::new()?;
    let _logger = init_logging(&settings.log, verbose)?;
    let parser = EmojiListParser::new(select_source(input, &settings)?);
    let list = parser.parse()?;
    if list.is_empty() {
        log::warn!("{} contains no emoji.", parser.source().describe());
    }
    Ok(list)
}

pub fn parse(list: &EmojiList, displayable: bool, pretty: bool) -> Result<()> {
    let records: Vec<&EmojiRecord> = if displayable {
        list.displayable().collect()
    } else {
        list.iter().collect()
    };
    let json = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

pub fn stats(list: &EmojiList) -> Result<()> {
    let stats = list.stats();
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "total: {}", stats.total)?;
    writeln!(stdout, "component: {}", stats.component)?;
    writeln!(stdout, "fully-qualified: {}", stats.fully_qualified)?;
    writeln!(stdout, "minimally-qualified: {}", stats.minimally_qualified)?;
    writeln!(stdout, "unqualified: {}", stats.unqualified)?;
    writeln!(stdout, "with skin tone: {}", stats.with_skin_tone)?;
    writeln!(stdout, "displayable: {}", list.displayable().count())?;
    writeln!(stdout, "groups:")?;
    for (group, count) in &stats.groups {
        writeln!(stdout, "  {}: {}", group, count)?;
    }
    Ok(())
}

pub fn groups(list: &EmojiList) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for group in list.groups() {
        writeln!(stdout, "{}", group)?;
    }
    Ok(())
}

pub fn test_config(path: Option<PathOrStdio>) -> Result<()> {
    match path {
        Some(PathOrStdio::Stdio) => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .chain_err_summary(|| "Could not read configuration from standard input")?;
            input
                .parse::<Settings>()
                .chain_err_summary(|| "Configuration from standard input is invalid")?;
        }
        Some(PathOrStdio::Path(path)) => {
            Settings::from_path(&path)?;
        }
        None => {
            let config_path = conf::get_config_file()?;
            if !config_path.exists() {
                return Err(Error::new(format!(
                    "No configuration file found at {}.",
                    config_path.display()
                ))
                .set_kind(ErrorKind::Configuration));
            }
            Settings::from_path(&config_path)?;
        }
    }
    Ok(())
}
