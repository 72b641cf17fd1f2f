//! Declarative test suites, cases and fixtures.
//!
//! Suites, cases, tests and setup/teardown hooks are declared as independent
//! items anywhere in a program. They register themselves at link time and are
//! grouped by the [collector](collect::Collector) into suites and cases, which
//! the [composer](compose()) then turns into a runnable [`CompositeSuite`].
//!
//! ```ignore
//! kisuite::suite!(static ARITHMETIC = "Arithmetic");
//! kisuite::case!(static ADDITION in ARITHMETIC = "Addition");
//!
//! fn setup_a() {}
//! fn teardown_a() {}
//! kisuite::fixture!(ADDITION, setup_a, teardown_a);
//!
//! #[kisuite::test(ADDITION)]
//! fn t1() {
//!     assert_eq!(1 + 1, 2);
//! }
//!
//! let suite = kisuite::construct_suite("Arithmetic")?;
//! let report = kisuite::runner::SimpleRunner::new().run(&suite);
//! ```

extern crate self as kisuite;

pub mod builder;
pub mod collect;
pub mod compose;
pub mod composite;
pub mod decl;
pub mod engine;
pub mod location;
pub mod outcome;
pub mod record;
pub mod registry;
pub mod runner;
pub mod test;

mod error;
pub use error::*;

mod report;
pub use report::*;

pub use collect::collect;
pub use compose::{compose, construct_suite, construct_suites};
pub use composite::CompositeSuite;

pub use kisuite_macros::{setup, teardown, test};

#[doc(hidden)]
pub mod __private {
    pub use linkme;
}
