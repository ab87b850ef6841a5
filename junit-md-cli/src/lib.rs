// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line interface for [`junit-md`](junit_md).
//!
//! Reads a JUnit-style XML report and writes a Markdown document listing the
//! failed tests grouped by test suite.

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
#[doc(hidden)]
pub use output::*;
