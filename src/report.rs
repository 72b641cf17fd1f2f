use std::time::Duration;

use crate::outcome::TestOutcome;

/// Outcome of a single test invocation, named by test and iteration.
#[derive(Debug)]
pub struct TestRun<'s> {
    pub name: &'s str,
    pub iteration: i32,
    pub outcome: TestOutcome,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct CaseReport<'s> {
    pub name: &'s str,
    pub runs: Vec<TestRun<'s>>,
}

impl CaseReport<'_> {
    pub fn passed(&self) -> usize {
        self.runs.iter().filter(|run| run.outcome.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.runs.iter().filter(|run| run.outcome.failed()).count()
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct SuiteReport<'s> {
    pub name: &'s str,
    pub cases: Vec<CaseReport<'s>>,
    pub duration: Duration,
}

impl<'s> SuiteReport<'s> {
    pub fn passed(&self) -> usize {
        self.cases.iter().map(CaseReport::passed).sum()
    }

    pub fn failed(&self) -> usize {
        self.cases.iter().map(CaseReport::failed).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Every run of the suite together with the name of its case.
    pub fn runs(&self) -> impl Iterator<Item = (&'s str, &TestRun<'s>)> {
        self.cases
            .iter()
            .flat_map(|case| case.runs.iter().map(move |run| (case.name, run)))
    }
}
