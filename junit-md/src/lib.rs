// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read JUnit reports and summarize their failures as Markdown.
//!
//! The pipeline is a straight line: parse a JUnit XML document into a
//! [`Report`], aggregate it into a [`ReportSummary`], then render the summary
//! as a Markdown document listing every failed test grouped by test suite.

mod errors;
mod parse;
mod render;
mod report;
mod summary;

pub use errors::*;
pub use parse::*;
pub use report::*;
pub use summary::*;
