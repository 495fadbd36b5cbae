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

//! A [`log`] backend that writes to standard error or appends to a log file.

use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::PathBuf,
    sync::{
        atomic::{AtomicU8, Ordering},
        Arc, Mutex,
    },
};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

/// Environment variable that mirrors file logging to standard error.
pub const DEBUG_STDERR_ENV: &str = "EMOJI_LIST_DEBUG_STDERR";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, PartialOrd, Serialize)]
#[repr(u8)]
pub enum LogLevel {
    OFF = 0,
    ERROR,
    #[default]
    WARN,
    INFO,
    DEBUG,
    TRACE,
}

impl From<u8> for LogLevel {
    fn from(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::OFF,
            1 => Self::ERROR,
            2 => Self::WARN,
            3 => Self::INFO,
            4 => Self::DEBUG,
            _ => Self::TRACE,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(l: Level) -> Self {
        match l {
            Level::Error => Self::ERROR,
            Level::Warn => Self::WARN,
            Level::Info => Self::INFO,
            Level::Debug => Self::DEBUG,
            Level::Trace => Self::TRACE,
        }
    }
}

impl From<LevelFilter> for LogLevel {
    fn from(l: LevelFilter) -> Self {
        match l {
            LevelFilter::Off => Self::OFF,
            LevelFilter::Error => Self::ERROR,
            LevelFilter::Warn => Self::WARN,
            LevelFilter::Info => Self::INFO,
            LevelFilter::Debug => Self::DEBUG,
            LevelFilter::Trace => Self::TRACE,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::OFF => Self::Off,
            LogLevel::ERROR => Self::Error,
            LogLevel::WARN => Self::Warn,
            LogLevel::INFO => Self::Info,
            LogLevel::DEBUG => Self::Debug,
            LogLevel::TRACE => Self::Trace,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OFF => "OFF",
                ERROR => "ERROR",
                WARN => "WARN",
                INFO => "INFO",
                DEBUG => "DEBUG",
                TRACE => "TRACE",
            }
        )
    }
}

use LogLevel::*;

struct FileOutput {
    writer: BufWriter<File>,
    path: PathBuf,
}

#[derive(Clone)]
pub struct StderrLogger {
    dest: Arc<Mutex<Option<FileOutput>>>,
    level: Arc<AtomicU8>,
    print_level: bool,
    print_module_names: bool,
    mirror_to_stderr: bool,
}

impl std::fmt::Debug for StderrLogger {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct(stringify!(StderrLogger))
            .field("level", &self.log_level())
            .field("print_level", &self.print_level)
            .field("print_module_names", &self.print_module_names)
            .field("log_dest", &self.log_dest())
            .finish()
    }
}

impl Default for StderrLogger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl StderrLogger {
    /// Creates the logger and installs it as the global [`log`] backend. Only
    /// the first logger created in a process is installed; later ones still
    /// work as handles but do not receive records.
    pub fn new(level: LogLevel) -> Self {
        use std::sync::Once;

        static INIT_STDERR_LOGGING: Once = Once::new();

        let logger = Self {
            dest: Arc::new(Mutex::new(None)),
            level: Arc::new(AtomicU8::new(level as u8)),
            print_level: true,
            print_module_names: true,
            mirror_to_stderr: std::env::var(DEBUG_STDERR_ENV).is_ok(),
        };

        #[cfg(feature = "debug-tracing")]
        log::set_max_level(
            if matches!(LevelFilter::from(logger.log_level()), LevelFilter::Off) {
                LevelFilter::Off
            } else {
                LevelFilter::Trace
            },
        );
        #[cfg(not(feature = "debug-tracing"))]
        log::set_max_level(LevelFilter::from(logger.log_level()));

        INIT_STDERR_LOGGING.call_once(|| {
            if let Err(err) = log::set_boxed_logger(Box::new(logger.clone())) {
                eprintln!("Could not install logger: {}", err);
            }
        });
        logger
    }

    pub fn log_level(&self) -> LogLevel {
        self.level.load(Ordering::SeqCst).into()
    }

    pub fn set_log_level(&self, new_val: LogLevel) {
        self.level.store(new_val as u8, Ordering::SeqCst);
        #[cfg(not(feature = "debug-tracing"))]
        log::set_max_level(LevelFilter::from(new_val));
    }

    /// Appends log records to `path` instead of writing them to standard
    /// error.
    pub fn change_log_dest(&mut self, path: PathBuf) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .chain_err_summary(|| format!("Could not open log file {}", path.display()))?;
        let mut dest = self.dest.lock().map_err(|err| {
            Error::new(format!("Log destination lock is poisoned: {}", err))
                .set_kind(ErrorKind::Platform)
        })?;
        *dest = Some(FileOutput {
            writer: BufWriter::new(file),
            path,
        });
        Ok(())
    }

    pub fn log_dest(&self) -> Option<PathBuf> {
        self.dest
            .lock()
            .ok()
            .and_then(|d| d.as_ref().map(|d| d.path.clone()))
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        !["isahc", "curl", "polling", "async_io"]
            .iter()
            .any(|t| metadata.target().starts_with(t))
            && metadata.level() <= LevelFilter::from(self.log_level())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        fn write(
            writer: &mut impl Write,
            record: &Record,
            (print_level, print_module_names): (bool, bool),
        ) -> Option<()> {
            write!(
                writer,
                "{}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )
            .ok()?;
            writer.write_all(b" [").ok()?;
            if print_level {
                writer
                    .write_all(record.level().to_string().as_bytes())
                    .ok()?;
            }
            write!(writer, "]: ").ok()?;
            if print_module_names {
                write!(writer, "{}: ", record.metadata().target()).ok()?;
            }
            write!(writer, "{}", record.args()).ok()?;
            writer.write_all(b"\n").ok()?;
            writer.flush().ok()?;
            Some(())
        }

        let flags = (self.print_level, self.print_module_names);
        let wrote_to_file = self
            .dest
            .lock()
            .ok()
            .and_then(|mut d| d.as_mut().map(|d| write(&mut d.writer, record, flags)))
            .is_some();
        if !wrote_to_file || self.mirror_to_stderr {
            _ = write(&mut std::io::stderr(), record, flags);
        }
    }

    fn flush(&self) {
        if let Ok(mut dest) = self.dest.lock() {
            if let Some(d) = dest.as_mut() {
                _ = d.writer.flush();
            }
        }
    }
}
