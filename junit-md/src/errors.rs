// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while parsing a JUnit report.
///
/// Returned by [`parse_report`](crate::parse_report).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("malformed XML in JUnit report")]
    Xml(#[from] quick_xml::Error),

    /// An attribute could not be read.
    #[error("malformed attribute in JUnit report")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// A `tests` attribute was present but not a number.
    #[error("invalid `tests` attribute for test suite `{suite}`: `{value}`")]
    InvalidTestsAttribute {
        /// The name of the test suite carrying the attribute.
        suite: String,
        /// The attribute value as written.
        value: String,
    },

    /// The document contained no elements at all, e.g. an empty file.
    #[error("no root element found in JUnit report")]
    NoRootElement,

    /// The document ended while elements were still open, e.g. a truncated
    /// file.
    #[error("unexpected end of JUnit report with unclosed elements")]
    UnexpectedEof,
}
