use std::time::Duration;

#[derive(Debug)]
#[non_exhaustive]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration: Duration,
}

impl TestOutcome {
    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Failed(TestFailure),
}

impl TestStatus {
    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The test body panicked.
    Panicked(String),

    /// The setup of the fixture at `fixture` panicked, the test body was not run.
    SetupPanicked { fixture: usize, message: String },

    /// The test passed but the teardown of the fixture at `fixture` panicked.
    TeardownPanicked { fixture: usize, message: String },
}
