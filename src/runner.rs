//! A sequential engine for composed suites.
//!
//! [`SimpleRunner`] runs a [`CompositeSuite`] on the calling thread, one test
//! invocation at a time. Every invocation is wrapped by the fixtures of its
//! case: setups in order, then the test, then the teardowns of every fixture
//! whose setup completed, in reverse order. Teardowns run even when the test
//! panicked.

use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
    time::Instant,
};

use tracing::{debug, warn};

use crate::{
    composite::CompositeSuite,
    outcome::{TestFailure, TestOutcome, TestStatus},
    record::{Fixture, TestRecord},
    report::{CaseReport, SuiteReport, TestRun},
};

#[derive(Debug, Default, Clone)]
pub struct SimpleRunner {
    fail_fast: bool,
}

impl SimpleRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the whole suite after the first failed test invocation.
    pub fn with_fail_fast(self, fail_fast: bool) -> Self {
        Self { fail_fast }
    }

    pub fn run<'s>(&self, suite: &'s CompositeSuite) -> SuiteReport<'s> {
        let now = Instant::now();
        let mut cases = Vec::with_capacity(suite.cases().len());

        'cases: for case in suite.cases() {
            debug!(
                suite = suite.name(),
                case = case.name(),
                tests = case.tests().len(),
                "running case"
            );
            let mut report = CaseReport {
                name: case.name(),
                runs: Vec::new(),
            };

            for test in case.tests() {
                for iteration in test.iterations.clone() {
                    let now = Instant::now();
                    let status = run_wrapped(case.fixtures(), test, iteration);
                    let duration = now.elapsed();

                    let failed = status.failed();
                    if let TestStatus::Failed(failure) = &status {
                        warn!(
                            case = case.name(),
                            test = %test.name,
                            iteration,
                            ?failure,
                            "test failed"
                        );
                    }
                    report.runs.push(TestRun {
                        name: &test.name,
                        iteration,
                        outcome: TestOutcome { status, duration },
                    });

                    if failed && self.fail_fast {
                        cases.push(report);
                        break 'cases;
                    }
                }
            }

            cases.push(report);
        }

        SuiteReport {
            name: suite.name(),
            cases,
            duration: now.elapsed(),
        }
    }
}

fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
    err.downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|err| err.downcast::<String>().map(|s| *s))
        .unwrap_or_else(|_| String::from("Box<dyn Any>"))
}

fn catch(f: impl FnOnce()) -> Result<(), String> {
    catch_unwind(AssertUnwindSafe(f)).map_err(payload_as_string)
}

fn run_wrapped(fixtures: &[Fixture], test: &TestRecord, iteration: i32) -> TestStatus {
    let mut entered = 0;
    let mut failure = None;

    for (fixture, pair) in fixtures.iter().enumerate() {
        match catch(|| pair.setup.call()) {
            Ok(()) => entered += 1,
            Err(message) => {
                failure = Some(TestFailure::SetupPanicked { fixture, message });
                break;
            }
        }
    }

    if failure.is_none() {
        if let Err(message) = catch(|| test.function.call(iteration)) {
            failure = Some(TestFailure::Panicked(message));
        }
    }

    for (fixture, pair) in fixtures[..entered].iter().enumerate().rev() {
        if let Err(message) = catch(|| pair.teardown.call()) {
            failure.get_or_insert(TestFailure::TeardownPanicked { fixture, message });
        }
    }

    match failure {
        None => TestStatus::Passed,
        Some(failure) => TestStatus::Failed(failure),
    }
}
