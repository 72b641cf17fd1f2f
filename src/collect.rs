//! Grouping of scattered declarations into suites and cases.
//!
//! The collector takes every declaration at once and attributes each of them
//! to its owner. Nothing is dropped silently: a declaration either ends up in
//! exactly one suite or case, or collection fails with an [`Error`] naming it.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    decl::{CaseDecl, Declared, HookDecl, HookRole, SuiteDecl},
    error::{DeclKind, Error, Result},
    location::Location,
    record::{CaseRecord, Fixture, SuiteRecord, TestRecord},
    registry::Declarations,
    test::{HookFnHandle, TestFnHandle},
};

/// How declarations are ordered inside their group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationOrder {
    /// Order by source location: file, then line, then column.
    #[default]
    Source,

    /// Keep the order of the input, which is linker order for
    /// [`Declarations::linked`].
    Link,
}

#[derive(Debug, Default, Clone)]
pub struct Collector {
    order: DeclarationOrder,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(self, order: DeclarationOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> DeclarationOrder {
        self.order
    }

    fn ordered<T: Declared>(&self, decls: &[&'static T]) -> Vec<&'static T> {
        let mut decls = decls.to_vec();
        if self.order == DeclarationOrder::Source {
            decls.sort_by_key(|decl| decl.location());
        }
        decls
    }

    pub fn collect(&self, decls: &Declarations) -> Result<Collection> {
        debug!(
            suites = decls.suites.len(),
            cases = decls.cases.len(),
            tests = decls.tests.len(),
            hooks = decls.hooks.len(),
            order = ?self.order,
            "collecting declarations"
        );

        let mut suites = Vec::with_capacity(decls.suites.len());
        let mut suite_index: HashMap<*const SuiteDecl, usize> = HashMap::new();
        let mut suite_names: HashMap<&'static str, &'static SuiteDecl> = HashMap::new();
        for suite in self.ordered(&decls.suites) {
            if let Some(first) = suite_names.insert(suite.name, suite) {
                return Err(Error::DuplicateSuite {
                    name: suite.name,
                    first: first.location,
                    second: suite.location,
                });
            }
            suite_index.insert(suite, suites.len());
            suites.push(SuiteRecord {
                name: suite.name.into(),
                location: Some(suite.location),
                cases: Vec::new(),
            });
        }

        let mut case_index: HashMap<*const CaseDecl, (usize, usize)> = HashMap::new();
        let mut case_names: HashMap<(usize, &'static str), Location> = HashMap::new();
        for case in self.ordered(&decls.cases) {
            let Some(&s) = suite_index.get(&(case.suite as *const SuiteDecl)) else {
                return Err(Error::UndeclaredSuite {
                    suite: case.suite.name,
                    case: case.name,
                    location: case.location,
                });
            };
            if let Some(first) = case_names.insert((s, case.name), case.location) {
                return Err(Error::DuplicateCase {
                    suite: case.suite.name.to_string(),
                    name: case.name.to_string(),
                    locations: Some((first, case.location)),
                });
            }
            let cases = &mut suites[s].cases;
            case_index.insert(case, (s, cases.len()));
            cases.push(CaseRecord {
                name: case.name.into(),
                location: Some(case.location),
                fixtures: Vec::new(),
                tests: Vec::new(),
            });
        }

        let owner = |case: &'static CaseDecl, kind: DeclKind, decl: &dyn Declared| {
            case_index
                .get(&(case as *const CaseDecl))
                .copied()
                .ok_or(Error::UndeclaredCase {
                    kind,
                    name: decl.name(),
                    case: case.name,
                    location: decl.location(),
                })
        };

        for test in self.ordered(&decls.tests) {
            let (s, c) = owner(test.case, DeclKind::Test, test)?;
            trace!(
                suite = test.case.suite.name,
                case = test.case.name,
                test = test.name,
                "collected test"
            );
            suites[s].cases[c].tests.push(TestRecord {
                name: test.name.into(),
                function: TestFnHandle::from_const_fn(test.function),
                iterations: test.iterations.clone(),
                location: Some(test.location),
            });
        }

        let mut hooks: HashMap<(usize, usize), (Vec<&'static HookDecl>, Vec<&'static HookDecl>)> =
            HashMap::new();
        for hook in self.ordered(&decls.hooks) {
            let key = owner(hook.case, DeclKind::Hook(hook.role), hook)?;
            let (setups, teardowns) = hooks.entry(key).or_default();
            match hook.role {
                HookRole::Setup => setups.push(hook),
                HookRole::Teardown => teardowns.push(hook),
            }
        }

        // Pair per case by position; walk in record order so errors are stable.
        for (s, suite) in suites.iter_mut().enumerate() {
            for (c, case) in suite.cases.iter_mut().enumerate() {
                let Some((setups, teardowns)) = hooks.remove(&(s, c)) else {
                    continue;
                };
                if setups.len() != teardowns.len() {
                    return Err(Error::UnpairedFixture {
                        suite: suite.name.to_string(),
                        case: case.name.to_string(),
                        setups: setups.len(),
                        teardowns: teardowns.len(),
                    });
                }
                case.fixtures = setups
                    .into_iter()
                    .zip(teardowns)
                    .map(|(setup, teardown)| {
                        trace!(
                            case = %case.name,
                            setup = setup.name,
                            teardown = teardown.name,
                            "paired fixture"
                        );
                        Fixture {
                            setup: HookFnHandle::from_const_fn(setup.function),
                            teardown: HookFnHandle::from_const_fn(teardown.function),
                        }
                    })
                    .collect();
            }
        }

        debug!(suites = suites.len(), "collection finished");
        Ok(Collection { suites })
    }
}

/// Every collected suite, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    suites: Vec<SuiteRecord>,
}

impl Collection {
    pub fn suites(&self) -> &[SuiteRecord] {
        &self.suites
    }

    pub fn suite(&self, name: &str) -> Option<&SuiteRecord> {
        self.suites.iter().find(|suite| suite.name == name)
    }

    pub fn into_suites(self) -> Vec<SuiteRecord> {
        self.suites
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

/// Collect everything declared in the program with the default [`Collector`].
pub fn collect() -> Result<Collection> {
    Collector::default().collect(&Declarations::linked())
}
