use std::borrow::Cow;

use crate::{
    engine::SuiteEngine,
    record::{Fixture, TestRecord},
    test::HookFnHandle,
};

/// A runner ready suite.
///
/// Built once by the [composer](crate::compose) and read-only afterwards.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CompositeSuite {
    name: Cow<'static, str>,
    cases: Vec<CompositeCase>,
}

impl CompositeSuite {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cases(&self) -> &[CompositeCase] {
        &self.cases
    }

    pub fn case(&self, name: &str) -> Option<&CompositeCase> {
        self.cases.iter().find(|case| case.name == name)
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CompositeCase {
    name: Cow<'static, str>,
    fixtures: Vec<Fixture>,
    tests: Vec<TestRecord>,
}

impl CompositeCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixture pairs in the order they wrap each test, outermost first.
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn tests(&self) -> &[TestRecord] {
        &self.tests
    }
}

/// The [`SuiteEngine`] producing [`CompositeSuite`] values.
#[derive(Debug, Default, Clone)]
pub struct CompositeEngine;

impl SuiteEngine for CompositeEngine {
    type Suite = CompositeSuite;
    type Case = CompositeCase;

    fn create_suite(&mut self, name: Cow<'static, str>) -> CompositeSuite {
        CompositeSuite {
            name,
            cases: Vec::new(),
        }
    }

    fn create_case(&mut self, name: Cow<'static, str>) -> CompositeCase {
        CompositeCase {
            name,
            fixtures: Vec::new(),
            tests: Vec::new(),
        }
    }

    fn add_fixture(
        &mut self,
        case: &mut CompositeCase,
        setup: HookFnHandle,
        teardown: HookFnHandle,
    ) {
        case.fixtures.push(Fixture { setup, teardown });
    }

    fn add_test(&mut self, case: &mut CompositeCase, test: &TestRecord) {
        case.tests.push(test.clone());
    }

    fn attach_case(&mut self, suite: &mut CompositeSuite, case: CompositeCase) {
        suite.cases.push(case);
    }
}
