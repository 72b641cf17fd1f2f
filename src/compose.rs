//! Materializing collected suites for an engine.

use tracing::debug;

use crate::{
    collect::{self, Collection},
    composite::{CompositeEngine, CompositeSuite},
    engine::SuiteEngine,
    error::{Error, Result},
    record::SuiteRecord,
};

/// Build `suite` with `engine`.
///
/// Cases, fixture pairs and tests are registered in record order. This walks
/// the record once and cannot fail; every structural check already happened
/// when the record was collected or built.
pub fn compose<E: SuiteEngine>(mut engine: E, suite: &SuiteRecord) -> E::Suite {
    debug!(suite = %suite.name, cases = suite.cases.len(), "composing suite");
    let mut composite = engine.create_suite(suite.name.clone());
    for case in &suite.cases {
        let mut sub = engine.create_case(case.name.clone());
        for fixture in &case.fixtures {
            engine.add_fixture(&mut sub, fixture.setup.clone(), fixture.teardown.clone());
        }
        for test in &case.tests {
            engine.add_test(&mut sub, test);
        }
        engine.attach_case(&mut composite, sub);
    }
    composite
}

impl Collection {
    /// Compose the suite called `name` into a [`CompositeSuite`].
    pub fn construct(&self, name: &str) -> Result<CompositeSuite> {
        let suite = self
            .suite(name)
            .ok_or_else(|| Error::UnknownSuite(name.to_string()))?;
        Ok(compose(CompositeEngine, suite))
    }
}

/// Collect the program's declarations and compose the suite called `name`.
pub fn construct_suite(name: &str) -> Result<CompositeSuite> {
    collect::collect()?.construct(name)
}

/// Collect the program's declarations and compose every suite, in order.
pub fn construct_suites() -> Result<Vec<CompositeSuite>> {
    let collection = collect::collect()?;
    Ok(collection
        .suites()
        .iter()
        .map(|suite| compose(CompositeEngine, suite))
        .collect())
}
