// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{ExpectedError, Result},
    output::{OutputContext, OutputOpts},
};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use camino::Utf8PathBuf;
use clap::Parser;
use junit_md::{parse_report, ReportSummary};
use std::io::{BufReader, Write};
use tracing::info;

/// Summarize JUnit XML test results as a Markdown report.
///
/// Reads a JUnit-style XML report and writes a Markdown document listing the
/// failed tests grouped by test suite. On parse failure no output file is
/// created, and an existing file at the output path is left untouched.
#[derive(Debug, Parser)]
#[command(version, bin_name = "junit-md")]
pub struct JunitMdApp {
    /// Path to the JUnit XML report to read
    #[arg(value_name = "INPUT_XML")]
    input: Utf8PathBuf,

    /// Path to write the Markdown summary to
    #[arg(value_name = "OUTPUT_MD")]
    output_path: Utf8PathBuf,

    #[command(flatten)]
    output: OutputOpts,
}

impl JunitMdApp {
    /// Initializes the output context: sets up logging and color support.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app.
    pub fn exec(self, output: OutputContext) -> Result<()> {
        let file = fs_err::File::open(self.input.as_std_path()).map_err(|err| {
            ExpectedError::ReadInputError {
                path: self.input.clone(),
                err,
            }
        })?;
        let report =
            parse_report(BufReader::new(file)).map_err(|err| ExpectedError::ParseError {
                path: self.input.clone(),
                err,
            })?;
        let summary = ReportSummary::from_report(&report);

        // Render fully before touching the destination, then persist in one
        // atomic write: a failure part-way never leaves a partial file
        // behind.
        let document = summary
            .to_markdown_string()
            .map_err(|err| ExpectedError::WriteOutputError {
                path: self.output_path.clone(),
                err,
            })?;
        AtomicFile::new(
            self.output_path.as_std_path(),
            OverwriteBehavior::AllowOverwrite,
        )
        .write(|f| f.write_all(document.as_bytes()))
        .map_err(|err| {
            let err = match err {
                atomicwrites::Error::Internal(err) | atomicwrites::Error::User(err) => err,
            };
            ExpectedError::WriteOutputError {
                path: self.output_path.clone(),
                err,
            }
        })?;

        if output.verbose {
            for (suite, failed) in summary.by_suite() {
                info!("suite {suite}: {} failed", failed.len());
            }
        }
        info!(
            "wrote {}: {} failed of {} tests across {} affected suites",
            self.output_path,
            summary.failed_count(),
            summary.total_tests,
            summary.affected_suites(),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn app_requires_both_paths() {
        let err = JunitMdApp::try_parse_from(["junit-md", "report.xml"])
            .expect_err("missing output path is rejected");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn color_rejects_unknown_values() {
        let err = JunitMdApp::try_parse_from([
            "junit-md",
            "report.xml",
            "report.md",
            "--color",
            "sometimes",
        ])
        .expect_err("unknown color value is rejected");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }
}
