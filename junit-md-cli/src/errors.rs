// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::StderrStyles;
use camino::Utf8PathBuf;
use owo_colors::OwoColorize;
use std::error::Error;
use thiserror::Error;
use tracing::error;

pub(crate) type Result<T, E = ExpectedError> = std::result::Result<T, E>;

/// Exit codes returned by the `junit-md` binary.
///
/// This is an uninhabited enum used as a namespace for the constants.
pub enum JunitMdExitCode {}

impl JunitMdExitCode {
    /// The report was generated successfully.
    pub const OK: i32 = 0;

    /// The input was not well-formed JUnit XML; no output was written.
    pub const PARSE_FAILED: i32 = 100;

    /// The input file could not be read.
    pub const READ_INPUT_ERROR: i32 = 102;

    /// The output file could not be written.
    pub const WRITE_OUTPUT_ERROR: i32 = 110;
}

// Note that the #[error()] strings are mostly placeholder messages -- the
// expected way to print out errors is with the display_to_stderr method.

/// A failure junit-md knows how to report to the user.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("failed to read input")]
    ReadInputError {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("failed to parse input")]
    ParseError {
        path: Utf8PathBuf,
        #[source]
        err: junit_md::ParseError,
    },
    #[error("failed to write output")]
    WriteOutputError {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::ReadInputError { .. } => JunitMdExitCode::READ_INPUT_ERROR,
            Self::ParseError { .. } => JunitMdExitCode::PARSE_FAILED,
            Self::WriteOutputError { .. } => JunitMdExitCode::WRITE_OUTPUT_ERROR,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let mut next_error = match self {
            Self::ReadInputError { path, err } => {
                error!("failed to read {}", path.style(styles.bold));
                Some(err as &dyn Error)
            }
            Self::ParseError { path, err } => {
                error!("error parsing JUnit report {}", path.style(styles.bold));
                Some(err as &dyn Error)
            }
            Self::WriteOutputError { path, err } => {
                error!("failed to write report to {}", path.style(styles.bold));
                Some(err as &dyn Error)
            }
        };

        while let Some(err) = next_error {
            error!(target: "junit_md_cli::no_heading", "\nCaused by:\n  {}", err);
            next_error = err.source();
        }
    }
}
