use std::cell::RefCell;

use kisuite::{
    collect::{Collector, DeclarationOrder},
    outcome::{TestFailure, TestStatus},
    registry::Declarations,
    runner::SimpleRunner,
};
use pretty_assertions::assert_eq;

thread_local! {
    static LOG: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn log(entry: impl Into<String>) {
    LOG.with_borrow_mut(|log| log.push(entry.into()));
}

fn take_log() -> Vec<String> {
    LOG.with_borrow_mut(std::mem::take)
}

kisuite::suite!(pub static STORAGE = "Storage");

mod cases {
    kisuite::case!(pub static FILES in super::STORAGE = "Files");
    kisuite::case!(pub static EMPTY in super::STORAGE = "Empty");
}

use cases::FILES;

#[kisuite::setup(FILES)]
fn open_dir() {
    log("open_dir");
}

#[kisuite::setup(FILES)]
fn open_file() {
    log("open_file");
}

#[kisuite::teardown(FILES)]
fn close_dir() {
    log("close_dir");
}

#[kisuite::teardown(FILES)]
fn close_file() {
    log("close_file");
}

#[kisuite::test(FILES, iterations = 0..3)]
fn write_block(block: i32) {
    log(format!("write {block}"));
}

#[kisuite::test(cases::FILES)]
fn fails_midway() {
    log("fails_midway");
    panic!("disk full");
}

mod elsewhere {
    // A test declared in another module still lands in its case.
    #[kisuite::test(crate::cases::FILES)]
    fn read_back() {
        super::log("read_back");
    }
}

#[test]
fn standalone_hooks_pair_by_position() {
    let suite = kisuite::construct_suite("Storage").unwrap();
    let files = suite.case("Files").unwrap();
    assert_eq!(files.fixtures().len(), 2);

    take_log();
    for fixture in files.fixtures() {
        fixture.setup.call();
        fixture.teardown.call();
    }
    assert_eq!(take_log(), ["open_dir", "close_dir", "open_file", "close_file"]);
}

#[test]
fn tests_keep_source_order_and_iterations() {
    let suite = kisuite::construct_suite("Storage").unwrap();

    let files = suite.case("Files").unwrap();
    let tests: Vec<_> = files
        .tests()
        .iter()
        .map(|t| (t.name.as_ref(), t.iterations.clone()))
        .collect();
    assert_eq!(
        tests,
        vec![("write_block", 0..3), ("fails_midway", 0..1), ("read_back", 0..1)]
    );
    assert!(suite.case("Empty").unwrap().tests().is_empty());
}

#[test]
fn teardowns_run_when_a_test_fails() {
    let suite = kisuite::construct_suite("Storage").unwrap();

    take_log();
    let report = SimpleRunner::new().run(&suite);
    let wrapped = |body: &str| {
        vec![
            "open_dir".to_string(),
            "open_file".to_string(),
            body.to_string(),
            "close_file".to_string(),
            "close_dir".to_string(),
        ]
    };
    let expected: Vec<String> = ["write 0", "write 1", "write 2", "fails_midway", "read_back"]
        .into_iter()
        .flat_map(wrapped)
        .collect();
    assert_eq!(take_log(), expected);

    assert_eq!((report.passed(), report.failed()), (4, 1));
    let failed: Vec<_> = report
        .runs()
        .filter(|(_, run)| run.outcome.failed())
        .map(|(case, run)| (case, run.name, run.outcome.status.clone()))
        .collect();
    assert_eq!(
        failed,
        vec![(
            "Files",
            "fails_midway",
            TestStatus::Failed(TestFailure::Panicked("disk full".to_string()))
        )]
    );
}

#[test]
fn link_order_groups_the_same_declarations() {
    let by_source = Collector::new().collect(&Declarations::linked()).unwrap();
    let by_link = Collector::new()
        .with_order(DeclarationOrder::Link)
        .collect(&Declarations::linked())
        .unwrap();

    let count = |c: &kisuite::collect::Collection| {
        let suite = c.suite("Storage").unwrap();
        let mut cases: Vec<_> = suite
            .cases
            .iter()
            .map(|case| (case.name.to_string(), case.tests.len(), case.fixtures.len()))
            .collect();
        cases.sort();
        cases
    };
    assert_eq!(count(&by_source), count(&by_link));
}
