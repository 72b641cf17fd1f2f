//! Grouped, ordered records.
//!
//! These are what the [collector](crate::collect) and the
//! [builder](crate::builder) produce and what the [composer](crate::compose)
//! walks. They own their data, so a record can be composed any number of
//! times.

use std::{borrow::Cow, ops::Range};

use crate::{
    location::Location,
    test::{HookFnHandle, TestFnHandle},
};

#[derive(Debug, Clone)]
pub struct SuiteRecord {
    pub name: Cow<'static, str>,
    pub location: Option<Location>,
    pub cases: Vec<CaseRecord>,
}

impl SuiteRecord {
    pub fn case(&self, name: &str) -> Option<&CaseRecord> {
        self.cases.iter().find(|case| case.name == name)
    }

    /// Number of tests over all cases.
    pub fn test_count(&self) -> usize {
        self.cases.iter().map(|case| case.tests.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct CaseRecord {
    pub name: Cow<'static, str>,
    pub location: Option<Location>,
    pub fixtures: Vec<Fixture>,
    pub tests: Vec<TestRecord>,
}

#[derive(Debug, Clone)]
pub struct TestRecord {
    pub name: Cow<'static, str>,
    pub function: TestFnHandle,
    pub iterations: Range<i32>,
    pub location: Option<Location>,
}

/// A setup hook together with the teardown hook that undoes it.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub setup: HookFnHandle,
    pub teardown: HookFnHandle,
}
