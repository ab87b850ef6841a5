// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{render::render_markdown, report::Report};
use indexmap::IndexMap;
use quick_xml::escape::unescape;
use std::io;

/// Placeholder used when a failure carries no `message` attribute.
pub static NO_MESSAGE: &str = "No message provided.";

/// Placeholder used when a failure carries no stack trace text.
pub static NO_STACK_TRACE: &str = "No stack trace provided.";

/// A failing test, flattened out of the report tree.
///
/// This is the unit the Markdown renderer consumes: everything it needs is
/// already normalized, with placeholders substituted for missing data.
#[derive(Clone, Debug)]
pub struct FailedTest {
    /// The name of the suite the test belongs to.
    pub suite: String,

    /// The name of the test.
    pub name: String,

    /// The classname of the test, if any.
    pub classname: Option<String>,

    /// The failure message.
    pub message: String,

    /// The stack trace, trimmed and entity-decoded.
    pub stack_trace: String,
}

/// Aggregated view of a [`Report`]: totals plus the list of failing tests.
#[derive(Clone, Debug, Default)]
pub struct ReportSummary {
    /// Sum of the declared `tests` counts across all suites.
    pub total_tests: usize,

    /// All failing tests, in document order.
    pub failed: Vec<FailedTest>,
}

impl ReportSummary {
    /// Aggregates a parsed report into summary form.
    pub fn from_report(report: &Report) -> Self {
        let mut total_tests = 0;
        let mut failed = vec![];

        for suite in &report.testsuites {
            total_tests += suite.tests;
            for case in &suite.testcases {
                let Some(failure) = &case.failure else {
                    continue;
                };
                failed.push(FailedTest {
                    suite: suite.name.clone(),
                    name: case.name.clone(),
                    classname: case.classname.clone(),
                    message: failure
                        .message
                        .clone()
                        .unwrap_or_else(|| NO_MESSAGE.to_owned()),
                    stack_trace: normalize_stack_trace(failure.description.as_deref()),
                });
            }
        }

        Self {
            total_tests,
            failed,
        }
    }

    /// Total number of failing tests across all suites.
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// Number of distinct suite names with at least one failing test.
    pub fn affected_suites(&self) -> usize {
        self.by_suite().len()
    }

    /// Groups the failing tests by suite name.
    ///
    /// Buckets are keyed in first-seen order; tests within a bucket keep
    /// document order. Suites without failing tests have no bucket.
    pub fn by_suite(&self) -> IndexMap<&str, Vec<&FailedTest>> {
        let mut suites: IndexMap<&str, Vec<&FailedTest>> = IndexMap::new();
        for test in &self.failed {
            suites.entry(test.suite.as_str()).or_default().push(test);
        }
        suites
    }

    /// Renders this summary as a Markdown document to the given writer.
    pub fn render(&self, writer: impl io::Write) -> io::Result<()> {
        render_markdown(self, writer)
    }

    /// Renders this summary to a Markdown string.
    pub fn to_markdown_string(&self) -> io::Result<String> {
        let mut buf: Vec<u8> = vec![];
        self.render(&mut buf)?;
        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// Normalizes failure text into a renderable stack trace.
///
/// Missing or whitespace-only text becomes the [`NO_STACK_TRACE`] placeholder.
/// Otherwise the text is trimmed, then run through a second entity-decoding
/// pass: report producers sometimes double-escape trace text, so `&amp;lt;`
/// arrives from the XML parser as `&lt;` and still needs decoding. Text with
/// entity syntax that does not decode (a bare `&&` in C code, say) is kept
/// as-is.
fn normalize_stack_trace(text: Option<&str>) -> String {
    let Some(text) = text else {
        return NO_STACK_TRACE.to_owned();
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return NO_STACK_TRACE.to_owned();
    }
    match unescape(trimmed) {
        Ok(unescaped) => unescaped.into_owned(),
        Err(_) => trimmed.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_report;
    use indoc::indoc;

    fn summarize(xml: &str) -> ReportSummary {
        let report = parse_report(xml.as_bytes()).expect("report parses");
        ReportSummary::from_report(&report)
    }

    #[test]
    fn totals_use_declared_counts() {
        // 5 declared tests but only 3 testcase elements present.
        let xml = indoc! {r#"
            <testsuites>
              <testsuite name="A" tests="4">
                <testcase name="a1" />
                <testcase name="a2"><failure message="m" /></testcase>
              </testsuite>
              <testsuite name="B" tests="1">
                <testcase name="b1" />
              </testsuite>
            </testsuites>
        "#};
        let summary = summarize(xml);
        assert_eq!(summary.total_tests, 5);
        assert_eq!(summary.failed_count(), 1);
        assert_eq!(summary.affected_suites(), 1);
    }

    #[test]
    fn suites_without_failures_get_no_bucket() {
        let xml = indoc! {r#"
            <testsuites>
              <testsuite name="Clean" tests="2">
                <testcase name="ok1" />
                <testcase name="ok2" />
              </testsuite>
              <testsuite name="Broken" tests="2">
                <testcase name="bad"><failure message="nope" /></testcase>
                <testcase name="ok" />
              </testsuite>
            </testsuites>
        "#};
        let summary = summarize(xml);
        assert_eq!(summary.total_tests, 4);
        assert_eq!(summary.affected_suites(), 1);

        let suites = summary.by_suite();
        assert_eq!(suites.keys().copied().collect::<Vec<_>>(), ["Broken"]);
    }

    #[test]
    fn buckets_preserve_first_seen_order() {
        let xml = indoc! {r#"
            <testsuites>
              <testsuite name="Second" tests="1">
                <testcase name="s1"><failure /></testcase>
              </testsuite>
              <testsuite name="First" tests="2">
                <testcase name="f1"><failure /></testcase>
                <testcase name="f2"><failure /></testcase>
              </testsuite>
              <testsuite name="Second" tests="1">
                <testcase name="s2"><failure /></testcase>
              </testsuite>
            </testsuites>
        "#};
        let summary = summarize(xml);
        let suites = summary.by_suite();

        // Two elements named "Second" merge into one bucket, keyed at the
        // position its first failing test was seen.
        assert_eq!(
            suites.keys().copied().collect::<Vec<_>>(),
            ["Second", "First"]
        );
        assert_eq!(summary.affected_suites(), 2);

        let second: Vec<_> = suites["Second"].iter().map(|t| t.name.as_str()).collect();
        assert_eq!(second, ["s1", "s2"]);
        let first: Vec<_> = suites["First"].iter().map(|t| t.name.as_str()).collect();
        assert_eq!(first, ["f1", "f2"]);
    }

    #[test]
    fn missing_message_and_trace_get_placeholders() {
        let xml = indoc! {r#"
            <testsuite name="S" tests="1">
              <testcase name="t"><failure /></testcase>
            </testsuite>
        "#};
        let summary = summarize(xml);
        let test = &summary.failed[0];
        assert_eq!(test.message, NO_MESSAGE);
        assert_eq!(test.stack_trace, NO_STACK_TRACE);
    }

    #[test]
    fn double_escaped_traces_are_fully_decoded() {
        // The producer escaped an already-escaped trace: the XML parser
        // decodes `&amp;lt;` to `&lt;`, and the second pass finishes the job.
        let xml = indoc! {r#"
            <testsuite name="S" tests="1">
              <testcase name="t">
                <failure message="m">expected &amp;lt;Foo&amp;gt; to render</failure>
              </testcase>
            </testsuite>
        "#};
        let summary = summarize(xml);
        assert_eq!(summary.failed[0].stack_trace, "expected <Foo> to render");
    }

    #[test]
    fn undecodable_entities_are_left_alone() {
        let xml = indoc! {r#"
            <testsuite name="S" tests="1">
              <testcase name="t">
                <failure message="m">if (a &amp;&amp; b) { fail(); }</failure>
              </testcase>
            </testsuite>
        "#};
        let summary = summarize(xml);
        assert_eq!(summary.failed[0].stack_trace, "if (a && b) { fail(); }");
    }

    #[test]
    fn traces_are_trimmed_but_inner_whitespace_kept() {
        let xml = "<testsuite name=\"S\" tests=\"1\"><testcase name=\"t\"><failure message=\"m\">\
                   line one\n    at frame two</failure></testcase></testsuite>";
        let summary = summarize(xml);
        assert_eq!(summary.failed[0].stack_trace, "line one\n    at frame two");
    }
}
