//! Declared functions may share their names with the items the declaration
//! macros generate next to them.

#![allow(non_snake_case)]

use std::cell::RefCell;

use kisuite::runner::SimpleRunner;
use pretty_assertions::assert_eq;

thread_local! {
    static LOG: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn log(entry: &'static str) {
    LOG.with_borrow_mut(|log| log.push(entry));
}

kisuite::suite!(static NAMES = "Names");
kisuite::case!(static UPPERCASE in NAMES = "Uppercase");

#[kisuite::setup(UPPERCASE)]
fn HOOK() {
    log("HOOK");
}

#[kisuite::teardown(UPPERCASE)]
fn TEARDOWN() {
    log("TEARDOWN");
}

fn SETUP() {
    log("SETUP");
}

kisuite::fixture!(UPPERCASE, SETUP, TEARDOWN);

#[kisuite::test(UPPERCASE)]
fn TEST() {
    log("TEST");
}

#[kisuite::test(UPPERCASE)]
fn r#loop() {
    log("loop");
}

#[test]
fn uppercase_names_collect_and_run() {
    let suite = kisuite::construct_suite("Names").unwrap();
    let case = suite.case("Uppercase").unwrap();
    let tests: Vec<_> = case.tests().iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(tests, ["TEST", "loop"]);
    assert_eq!(case.fixtures().len(), 2);

    let report = SimpleRunner::new().run(&suite);
    assert!(report.is_success());
    assert_eq!(
        LOG.with_borrow_mut(std::mem::take),
        [
            "HOOK", "SETUP", "TEST", "TEARDOWN", "TEARDOWN", //
            "HOOK", "SETUP", "loop", "TEARDOWN", "TEARDOWN",
        ]
    );
}
