//! The boundary to a test execution engine.
//!
//! An engine knows how to build its own notion of a suite and a case and how
//! to register fixtures and tests with them. The [composer](crate::compose)
//! drives an engine through this trait; it never runs anything itself.
//!
//! [`CompositeEngine`](crate::composite::CompositeEngine) is the engine used by
//! default. It builds a [`CompositeSuite`](crate::composite::CompositeSuite)
//! that the [`SimpleRunner`](crate::runner::SimpleRunner) can execute.

use std::borrow::Cow;

use crate::{record::TestRecord, test::HookFnHandle};

/// A consumer of composed suites.
///
/// Engines are expected to run every registered fixture pair around every
/// test of the case it was registered with: all setups in registration order
/// before the test, the matching teardowns after it, even if the test failed.
pub trait SuiteEngine {
    /// The engine's suite handle.
    type Suite;

    /// The engine's case handle.
    type Case;

    fn create_suite(&mut self, name: Cow<'static, str>) -> Self::Suite;

    fn create_case(&mut self, name: Cow<'static, str>) -> Self::Case;

    /// Register a setup/teardown pair that wraps every test in `case`.
    fn add_fixture(&mut self, case: &mut Self::Case, setup: HookFnHandle, teardown: HookFnHandle);

    fn add_test(&mut self, case: &mut Self::Case, test: &TestRecord);

    fn attach_case(&mut self, suite: &mut Self::Suite, case: Self::Case);
}

impl<E: SuiteEngine + ?Sized> SuiteEngine for &mut E {
    type Suite = E::Suite;
    type Case = E::Case;

    fn create_suite(&mut self, name: Cow<'static, str>) -> Self::Suite {
        (**self).create_suite(name)
    }

    fn create_case(&mut self, name: Cow<'static, str>) -> Self::Case {
        (**self).create_case(name)
    }

    fn add_fixture(&mut self, case: &mut Self::Case, setup: HookFnHandle, teardown: HookFnHandle) {
        (**self).add_fixture(case, setup, teardown)
    }

    fn add_test(&mut self, case: &mut Self::Case, test: &TestRecord) {
        (**self).add_test(case, test)
    }

    fn attach_case(&mut self, suite: &mut Self::Suite, case: Self::Case) {
        (**self).attach_case(suite, case)
    }
}
