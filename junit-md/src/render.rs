// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render a [`ReportSummary`] as a Markdown document.

use crate::summary::{FailedTest, ReportSummary};
use std::io;

static REPORT_TITLE: &str = "Failed Tests";

pub(crate) fn render_markdown(
    summary: &ReportSummary,
    mut writer: impl io::Write,
) -> io::Result<()> {
    writeln!(writer, "# {REPORT_TITLE}")?;
    writeln!(writer)?;
    writeln!(writer, "**Total failed tests:** {}", summary.failed_count())?;
    writeln!(writer, "**Total tests executed:** {}", summary.total_tests)?;
    writeln!(
        writer,
        "**Test suites affected:** {}",
        summary.affected_suites()
    )?;
    writeln!(writer)?;

    for (suite_name, failed) in summary.by_suite() {
        writeln!(writer, "## Test Suite: {suite_name}")?;
        writeln!(writer)?;
        for test in failed {
            render_failed_test(test, &mut writer)?;
        }
    }

    Ok(())
}

fn render_failed_test(test: &FailedTest, writer: &mut impl io::Write) -> io::Result<()> {
    writeln!(writer, "### Test: {}", test.name)?;
    writeln!(writer)?;

    if let Some(classname) = test.classname.as_deref().filter(|c| !c.is_empty()) {
        writeln!(writer, "**File or class:** `{classname}`")?;
        writeln!(writer)?;
    }

    writeln!(writer, "> {}", test.message)?;
    writeln!(writer)?;

    // The aggregator guarantees a non-empty stack trace (placeholder
    // included), so the fenced block is emitted unconditionally.
    writeln!(writer, "```")?;
    writeln!(writer, "{}", test.stack_trace)?;
    writeln!(writer, "```")?;
    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{FailedTest, ReportSummary};
    use indoc::indoc;

    #[test]
    fn renders_full_document() {
        let summary = ReportSummary {
            total_tests: 3,
            failed: vec![FailedTest {
                suite: "LoginTests".to_owned(),
                name: "testInvalidPassword".to_owned(),
                classname: Some("LoginSpec".to_owned()),
                message: "Expected redirect".to_owned(),
                stack_trace: "No stack trace provided.".to_owned(),
            }],
        };

        let expected = indoc! {r#"
            # Failed Tests

            **Total failed tests:** 1
            **Total tests executed:** 3
            **Test suites affected:** 1

            ## Test Suite: LoginTests

            ### Test: testInvalidPassword

            **File or class:** `LoginSpec`

            > Expected redirect

            ```
            No stack trace provided.
            ```

        "#};
        let rendered = summary.to_markdown_string().expect("renders to a string");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn empty_classname_line_is_omitted() {
        let summary = ReportSummary {
            total_tests: 1,
            failed: vec![FailedTest {
                suite: "S".to_owned(),
                name: "t".to_owned(),
                classname: Some(String::new()),
                message: "m".to_owned(),
                stack_trace: "trace".to_owned(),
            }],
        };
        let rendered = summary.to_markdown_string().expect("renders to a string");
        assert!(!rendered.contains("File or class"));
    }

    #[test]
    fn report_with_no_failures_has_header_only() {
        let summary = ReportSummary {
            total_tests: 7,
            failed: vec![],
        };

        let expected = indoc! {r#"
            # Failed Tests

            **Total failed tests:** 0
            **Total tests executed:** 7
            **Test suites affected:** 0

        "#};
        let rendered = summary.to_markdown_string().expect("renders to a string");
        assert_eq!(rendered, expected);
    }
}
