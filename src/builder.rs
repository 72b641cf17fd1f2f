//! Explicit construction of suite records.
//!
//! The builders produce the same [`SuiteRecord`] the collector does, without
//! going through static declarations. This is useful for generated tests and
//! for tests that close over runtime values.
//!
//! ```
//! use kisuite::builder::{CaseBuilder, SuiteBuilder};
//!
//! fn t1(_: i32) {}
//! fn setup() {}
//! fn teardown() {}
//!
//! let suite = SuiteBuilder::new("Arithmetic")
//!     .with_case(
//!         CaseBuilder::new("Addition")
//!             .with_fixture(setup, teardown)
//!             .with_test("t1", t1),
//!     )
//!     .build()
//!     .unwrap();
//! assert_eq!(suite.test_count(), 1);
//! ```

use std::{borrow::Cow, collections::HashSet, ops::Range};

use crate::{
    error::{Error, Result},
    record::{CaseRecord, Fixture, SuiteRecord, TestRecord},
    test::{HookFnHandle, TestFnHandle},
};

#[derive(Debug)]
pub struct SuiteBuilder {
    name: Cow<'static, str>,
    cases: Vec<CaseRecord>,
}

impl SuiteBuilder {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    pub fn with_case(mut self, case: CaseBuilder) -> Self {
        self.cases.push(case.record);
        self
    }

    pub fn build(self) -> Result<SuiteRecord> {
        let mut seen = HashSet::new();
        for case in &self.cases {
            if !seen.insert(case.name.as_ref()) {
                return Err(Error::DuplicateCase {
                    suite: self.name.to_string(),
                    name: case.name.to_string(),
                    locations: None,
                });
            }
        }

        Ok(SuiteRecord {
            name: self.name,
            location: None,
            cases: self.cases,
        })
    }
}

#[derive(Debug)]
pub struct CaseBuilder {
    record: CaseRecord,
}

impl CaseBuilder {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            record: CaseRecord {
                name: name.into(),
                location: None,
                fixtures: Vec::new(),
                tests: Vec::new(),
            },
        }
    }

    pub fn with_fixture(
        mut self,
        setup: impl Into<HookFnHandle>,
        teardown: impl Into<HookFnHandle>,
    ) -> Self {
        self.record.fixtures.push(Fixture {
            setup: setup.into(),
            teardown: teardown.into(),
        });
        self
    }

    pub fn with_test(
        self,
        name: impl Into<Cow<'static, str>>,
        function: impl Into<TestFnHandle>,
    ) -> Self {
        self.with_loop_test(name, function, 0..1)
    }

    /// Add a test that is run once for every index in `iterations`.
    pub fn with_loop_test(
        mut self,
        name: impl Into<Cow<'static, str>>,
        function: impl Into<TestFnHandle>,
        iterations: Range<i32>,
    ) -> Self {
        self.record.tests.push(TestRecord {
            name: name.into(),
            function: function.into(),
            iterations,
            location: None,
        });
        self
    }
}
