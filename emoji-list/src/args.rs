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


//! Command line arguments.

use std::{ffi::OsStr, path::PathBuf};

use structopt::StructOpt;

use crate::{subcommands, Result};

fn try_path_or_stdio(input: &OsStr) -> PathOrStdio {
    if input == "-" {
        PathOrStdio::Stdio
    } else {
        PathOrStdio::Path(PathBuf::from(input))
    }
}

/// `Pathbuf` or standard stream (`-` operand).
#[derive(Debug)]
pub enum PathOrStdio {
    /// Path
    Path(PathBuf),
    /// standard stream (`-` operand)
    Stdio,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "emoji-list", about = "Unicode emoji registry parser")]
pub struct Opt {
    /// use specified configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// log more; repeat for more detail (-vvv logs everything)
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    #[structopt(subcommand)]
    pub subcommand: SubCommand,
}

/// Where to read the registry from. Without either option the configured
/// source is used.
#[derive(Debug, StructOpt)]
pub struct InputOpt {
    /// read the registry from a file. Path `-` reads standard input instead.
    #[structopt(short, long, value_name = "PATH", parse(from_os_str = try_path_or_stdio))]
    pub input: Option<PathOrStdio>,
    /// download the registry from this URL.
    #[structopt(long, value_name = "URL", conflicts_with = "input")]
    pub url: Option<String>,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// parse the registry and print its records as JSON to stdout.
    #[structopt(display_order = 1)]
    Parse {
        #[structopt(flatten)]
        input: InputOpt,
        /// only print component and fully-qualified records.
        #[structopt(long)]
        displayable: bool,
        /// indent the JSON output.
        #[structopt(long)]
        pretty: bool,
    },
    /// print record counts by qualification and by group.
    #[structopt(display_order = 2)]
    Stats {
        #[structopt(flatten)]
        input: InputOpt,
    },
    /// print the group names of the registry in order.
    #[structopt(display_order = 3)]
    Groups {
        #[structopt(flatten)]
        input: InputOpt,
    },
    /// print a sample configuration file with all available options.
    PrintDefaultConfig,
    /// print location of configuration file that will be loaded.
    PrintConfigPath,
    /// test a configuration file for syntax issues or unknown options.
    /// If `PATH` is not specified, emoji-list will try to read it from
    /// `$XDG_CONFIG_HOME/emoji-list/config.toml`. Path `-` will read input
    /// from standard input instead.
    TestConfig {
        #[structopt(value_name = "CONFIG_PATH", parse(from_os_str = try_path_or_stdio))]
        path: Option<PathOrStdio>,
    },
}

impl Opt {
    /// Execute `self.subcommand` and return its result.
    pub fn execute(self) -> Result<()> {
        let verbose = self.verbose;
        match self.subcommand {
            SubCommand::Parse {
                input,
                displayable,
                pretty,
            } => {
                let list = subcommands::fetch(input, verbose)?;
                subcommands::parse(&list, displayable, pretty)
            }
            SubCommand::Stats { input } => {
                let list = subcommands::fetch(input, verbose)?;
                subcommands::stats(&list)
            }
            SubCommand::Groups { input } => {
                let list = subcommands::fetch(input, verbose)?;
                subcommands::groups(&list)
            }
            SubCommand::PrintDefaultConfig => {
                print!("{}", crate::Settings::EXAMPLE_CONFIG);
                Ok(())
            }
            SubCommand::PrintConfigPath => {
                let config_path = crate::conf::get_config_file()?;
                println!("{}", config_path.display());
                Ok(())
            }
            SubCommand::TestConfig { path } => subcommands::test_config(path),
        }
    }
}
