// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parse a JUnit XML document into a [`Report`].

use crate::{
    errors::ParseError,
    report::{Failure, Report, TestCase, TestSuite},
};
use quick_xml::{
    events::{BytesStart, BytesText, Event},
    Reader,
};
use std::io::BufRead;

const TESTSUITE_TAG: &[u8] = b"testsuite";
const TESTCASE_TAG: &[u8] = b"testcase";
const FAILURE_TAG: &[u8] = b"failure";

/// Parses a JUnit XML document from the given reader.
///
/// Only `testsuite`, `testcase` and `failure` elements are consumed;
/// unrecognized elements and attributes are ignored, including the implicit
/// `testsuites` root. A missing `tests` attribute is treated as 0, while a
/// present but non-numeric one is rejected as
/// [`ParseError::InvalidTestsAttribute`]. A document with no elements at
/// all, or one that ends while elements are still open, is rejected as
/// malformed.
pub fn parse_report(reader: impl BufRead) -> Result<Report, ParseError> {
    let mut reader = Reader::from_reader(reader);
    reader.config_mut().trim_text(true);

    let mut parser = ReportParser::default();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            event => parser.handle_event(event)?,
        }
        buf.clear();
    }
    parser.finish()
}

#[derive(Debug, Default)]
struct ReportParser {
    report: Report,
    current_suite: Option<TestSuite>,
    current_case: Option<TestCase>,
    current_failure: Option<Failure>,
    // Nesting depth of all open elements, recognized or not. Nonzero at EOF
    // means the document was truncated.
    depth: usize,
    // Number of open `testsuite` elements nested inside the current one.
    nested_suites: usize,
    seen_element: bool,
}

impl ReportParser {
    fn handle_event(&mut self, event: Event<'_>) -> Result<(), ParseError> {
        match event {
            Event::Start(e) => {
                self.seen_element = true;
                self.depth += 1;
                match e.name().as_ref() {
                    TESTSUITE_TAG => self.open_suite(&e)?,
                    TESTCASE_TAG => self.open_case(&e)?,
                    FAILURE_TAG => self.open_failure(&e)?,
                    _ => {}
                }
            }
            Event::End(e) => {
                self.depth = self.depth.saturating_sub(1);
                match e.name().as_ref() {
                    TESTSUITE_TAG => self.close_suite(),
                    TESTCASE_TAG => self.close_case(),
                    FAILURE_TAG => self.close_failure(),
                    _ => {}
                }
            }
            Event::Empty(e) => {
                self.seen_element = true;
                match e.name().as_ref() {
                    TESTSUITE_TAG => {
                        self.open_suite(&e)?;
                        self.close_suite();
                    }
                    TESTCASE_TAG => {
                        self.open_case(&e)?;
                        self.close_case();
                    }
                    FAILURE_TAG => {
                        self.open_failure(&e)?;
                        self.close_failure();
                    }
                    _ => {}
                }
            }
            Event::Text(e) => self.append_failure_text(&e)?,
            Event::CData(e) => {
                if let Ok(text) = e.minimal_escape() {
                    self.append_failure_text(&text)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn open_suite(&mut self, e: &BytesStart<'_>) -> Result<(), ParseError> {
        // Only top-level testsuite elements shape the report. A nested one
        // contributes nothing itself, but test cases inside it still belong
        // to the enclosing suite.
        if self.current_suite.is_some() {
            self.nested_suites += 1;
            return Ok(());
        }
        let name = parse_attr::string(e, "name")?.unwrap_or_default();
        let mut suite = TestSuite::new(name);
        if let Some(value) = parse_attr::string(e, "tests")? {
            let tests =
                value
                    .parse::<usize>()
                    .map_err(|_| ParseError::InvalidTestsAttribute {
                        suite: suite.name.clone(),
                        value: value.into_owned(),
                    })?;
            suite.set_tests(tests);
        }
        self.current_suite = Some(suite);
        Ok(())
    }

    fn close_suite(&mut self) {
        if self.nested_suites > 0 {
            self.nested_suites -= 1;
            return;
        }
        if let Some(suite) = self.current_suite.take() {
            self.report.add_testsuite(suite);
        }
    }

    fn open_case(&mut self, e: &BytesStart<'_>) -> Result<(), ParseError> {
        // A testcase outside a testsuite is not part of the report shape.
        if self.current_suite.is_none() {
            return Ok(());
        }
        let name = parse_attr::string(e, "name")?.unwrap_or_default();
        let mut case = TestCase::new(name);
        if let Some(classname) = parse_attr::string(e, "classname")? {
            case.set_classname(classname);
        }
        self.current_case = Some(case);
        Ok(())
    }

    fn close_case(&mut self) {
        if let (Some(suite), Some(case)) = (self.current_suite.as_mut(), self.current_case.take()) {
            suite.add_testcase(case);
        }
    }

    fn open_failure(&mut self, e: &BytesStart<'_>) -> Result<(), ParseError> {
        let Some(case) = &self.current_case else {
            return Ok(());
        };
        // A test case has at most one failure; the first one wins.
        if case.failure.is_some() {
            return Ok(());
        }
        let mut failure = Failure::new();
        if let Some(message) = parse_attr::string(e, "message")? {
            failure.set_message(message);
        }
        self.current_failure = Some(failure);
        Ok(())
    }

    fn close_failure(&mut self) {
        if let (Some(case), Some(failure)) =
            (self.current_case.as_mut(), self.current_failure.take())
        {
            case.set_failure(failure);
        }
    }

    fn append_failure_text(&mut self, e: &BytesText<'_>) -> Result<(), ParseError> {
        let Some(failure) = &mut self.current_failure else {
            return Ok(());
        };
        let text = e.unescape()?;
        match &mut failure.description {
            Some(description) => description.push_str(&text),
            None => {
                failure.set_description(text);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Report, ParseError> {
        if !self.seen_element {
            return Err(ParseError::NoRootElement);
        }
        // quick-xml reports Eof without complaint even when elements are
        // still open, so a truncated document has to be caught here.
        if self.depth > 0 {
            return Err(ParseError::UnexpectedEof);
        }
        Ok(self.report)
    }
}

mod parse_attr {
    use crate::errors::ParseError;
    use quick_xml::events::BytesStart;
    use std::borrow::Cow;

    pub(super) fn string<'a>(
        e: &'a BytesStart<'a>,
        attr_name: &'static str,
    ) -> Result<Option<Cow<'a, str>>, ParseError> {
        match e.try_get_attribute(attr_name)? {
            Some(attr) => Ok(Some(attr.unescape_value()?)),
            None => Ok(None),
        }
    }
}
