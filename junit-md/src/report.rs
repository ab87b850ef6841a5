// Copyright (c) The junit-md Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// The root of a parsed JUnit report.
///
/// Holds the test suites in document order. All data is constructed during
/// the parse pass and not mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// The test suites contained in this report.
    pub testsuites: Vec<TestSuite>,
}

impl Report {
    /// Adds a test suite to this report.
    pub fn add_testsuite(&mut self, testsuite: TestSuite) -> &mut Self {
        self.testsuites.push(testsuite);
        self
    }
}

/// A single test suite.
///
/// A `TestSuite` groups together several [`TestCase`] instances. Suite names
/// are not guaranteed to be unique within a report.
#[derive(Clone, Debug)]
pub struct TestSuite {
    /// The name of this test suite.
    pub name: String,

    /// The number of tests declared by the suite's `tests` attribute.
    ///
    /// This is the declared count, not the number of `testcase` elements
    /// actually present. A missing attribute is normalized to 0.
    pub tests: usize,

    /// The test cases that form this suite, in document order.
    pub testcases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a new `TestSuite` with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: 0,
            testcases: vec![],
        }
    }

    /// Sets the declared test count.
    pub fn set_tests(&mut self, tests: usize) -> &mut Self {
        self.tests = tests;
        self
    }

    /// Adds a test case to this suite.
    pub fn add_testcase(&mut self, testcase: TestCase) -> &mut Self {
        self.testcases.push(testcase);
        self
    }
}

/// A single test case.
#[derive(Clone, Debug)]
pub struct TestCase {
    /// The name of the test case.
    pub name: String,

    /// The "classname" of the test case.
    ///
    /// Typically the file or class the test lives in.
    pub classname: Option<String>,

    /// The failure attached to this test case, if it did not pass.
    pub failure: Option<Failure>,
}

impl TestCase {
    /// Creates a new, passing `TestCase` with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classname: None,
            failure: None,
        }
    }

    /// Sets the classname of the test.
    pub fn set_classname(&mut self, classname: impl Into<String>) -> &mut Self {
        self.classname = Some(classname.into());
        self
    }

    /// Attaches a failure to the test.
    pub fn set_failure(&mut self, failure: Failure) -> &mut Self {
        self.failure = Some(failure);
        self
    }
}

/// Evidence that a test case did not pass.
#[derive(Clone, Debug, Default)]
pub struct Failure {
    /// The failure message, from the `message` attribute.
    pub message: Option<String>,

    /// The text node of the `failure` element, usually a stack trace.
    ///
    /// XML entities are decoded by the parser.
    pub description: Option<String>,
}

impl Failure {
    /// Creates a new `Failure` with no message or description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failure message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the description (text node).
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}
