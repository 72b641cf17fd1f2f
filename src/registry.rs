//! Link-time registration.
//!
//! The declaration macros append their statics to the distributed slices in
//! this module. [`Declarations::linked`] reads them back as one value that the
//! [collector](crate::collect) can group. A [`Declarations`] value can also be
//! assembled by hand, which is how declarations are collected without going
//! through the linker.

use linkme::distributed_slice;

use crate::decl::{CaseDecl, HookDecl, SuiteDecl, TestDecl};

#[doc(hidden)]
#[distributed_slice]
pub static SUITES: [SuiteDecl];

#[doc(hidden)]
#[distributed_slice]
pub static CASES: [CaseDecl];

#[doc(hidden)]
#[distributed_slice]
pub static TESTS: [TestDecl];

#[doc(hidden)]
#[distributed_slice]
pub static HOOKS: [HookDecl];

/// A complete set of declarations, ready for collection.
#[derive(Debug, Default, Clone)]
pub struct Declarations {
    pub suites: Vec<&'static SuiteDecl>,
    pub cases: Vec<&'static CaseDecl>,
    pub tests: Vec<&'static TestDecl>,
    pub hooks: Vec<&'static HookDecl>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything declared anywhere in the program, in linker order.
    pub fn linked() -> Self {
        Self {
            suites: SUITES.iter().collect(),
            cases: CASES.iter().collect(),
            tests: TESTS.iter().collect(),
            hooks: HOOKS.iter().collect(),
        }
    }

    pub fn with_suite(mut self, suite: &'static SuiteDecl) -> Self {
        self.suites.push(suite);
        self
    }

    pub fn with_case(mut self, case: &'static CaseDecl) -> Self {
        self.cases.push(case);
        self
    }

    pub fn with_test(mut self, test: &'static TestDecl) -> Self {
        self.tests.push(test);
        self
    }

    pub fn with_hook(mut self, hook: &'static HookDecl) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn len(&self) -> usize {
        self.suites.len() + self.cases.len() + self.tests.len() + self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Begin a suite.
///
/// ```ignore
/// kisuite::suite!(pub static ARITHMETIC = "Arithmetic");
/// ```
#[macro_export]
macro_rules! suite {
    ($(#[$attr:meta])* $vis:vis static $ident:ident = $name:expr $(;)?) => {
        $(#[$attr])*
        #[$crate::__private::linkme::distributed_slice($crate::registry::SUITES)]
        #[linkme(crate = $crate::__private::linkme)]
        $vis static $ident: $crate::decl::SuiteDecl =
            $crate::decl::SuiteDecl::new($name, $crate::location!());
    };
}

/// Begin a case within a suite.
///
/// ```ignore
/// kisuite::case!(pub static ADDITION in ARITHMETIC = "Addition");
/// ```
#[macro_export]
macro_rules! case {
    ($(#[$attr:meta])* $vis:vis static $ident:ident in $suite:path = $name:expr $(;)?) => {
        $(#[$attr])*
        #[$crate::__private::linkme::distributed_slice($crate::registry::CASES)]
        #[linkme(crate = $crate::__private::linkme)]
        $vis static $ident: $crate::decl::CaseDecl =
            $crate::decl::CaseDecl::new(&$suite, $name, $crate::location!());
    };
}

/// Declare a setup/teardown pair wrapping every test of a case.
///
/// ```ignore
/// kisuite::fixture!(ADDITION, setup_a, teardown_a);
/// ```
#[macro_export]
macro_rules! fixture {
    ($case:path, $setup:path, $teardown:path $(,)?) => {
        const _: () = {
            #[$crate::__private::linkme::distributed_slice($crate::registry::HOOKS)]
            #[linkme(crate = $crate::__private::linkme)]
            static __KISUITE_SETUP: $crate::decl::HookDecl = $crate::decl::HookDecl::new(
                &$case,
                $crate::decl::HookRole::Setup,
                stringify!($setup),
                $setup,
                $crate::location!(),
            );

            #[$crate::__private::linkme::distributed_slice($crate::registry::HOOKS)]
            #[linkme(crate = $crate::__private::linkme)]
            static __KISUITE_TEARDOWN: $crate::decl::HookDecl = $crate::decl::HookDecl::new(
                &$case,
                $crate::decl::HookRole::Teardown,
                stringify!($teardown),
                $teardown,
                $crate::location!(),
            );
        };
    };
}
