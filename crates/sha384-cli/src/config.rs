// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Resolved run settings: what to hash, how to report it, how loud to log.

use std::fmt;
use std::path::{Path, PathBuf};

use sha384_stream::StreamConfig;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV: &str = "SHA384SUM_LOG";

/// Name printed for standard input and `--text`
pub const STDIN_NAME: &str = "-";

/// One thing to hash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
    Text(String),
}

impl Input {
    /// `-` maps to standard input, anything else is a path
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_NAME {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin | Input::Text(_) => f.write_str(STDIN_NAME),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Print one digest per input
    Hash { inputs: Vec<Input>, raw: bool },
    /// Verify a checksum list
    Check { list: Input, quiet: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub stream: StreamConfig,
}

impl Config {
    /// Builds the run settings from parsed arguments.
    ///
    /// # Errors
    /// [`CliError::InvalidInput`] for a zero chunk size or `--raw` with
    /// anything other than exactly one input.
    pub fn resolve(
        files: &[PathBuf],
        text: Option<String>,
        check: Option<&Path>,
        raw: bool,
        quiet: bool,
        chunk_size: usize,
    ) -> CliResult<Self> {
        let stream = StreamConfig::with_chunk_size(chunk_size);
        stream
            .validate()
            .map_err(|e| CliError::InvalidInput(e.to_string()))?;

        let mode = match (check, text) {
            (Some(list), _) => Mode::Check {
                list: Input::from_arg(list),
                quiet,
            },
            (None, Some(text)) => Mode::Hash {
                inputs: vec![Input::Text(text)],
                raw,
            },
            (None, None) if files.is_empty() => Mode::Hash {
                inputs: vec![Input::Stdin],
                raw,
            },
            (None, None) => Mode::Hash {
                inputs: files.iter().map(|f| Input::from_arg(f)).collect(),
                raw,
            },
        };

        if let Mode::Hash { inputs, raw: true } = &mode {
            if inputs.len() != 1 {
                return Err(CliError::InvalidInput(format!(
                    "--raw takes exactly one input, got {}",
                    inputs.len()
                )));
            }
        }

        Ok(Self { mode, stream })
    }
}

/// Default filter for a given `-v` count
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `SHA384SUM_LOG` if set and valid, otherwise the `-v` level
pub fn log_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbose)))
}
