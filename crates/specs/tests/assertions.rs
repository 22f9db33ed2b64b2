//! Integration tests for the public assertion API
//!
//! Exercises contexts bound to both the harness sink and the recording sink,
//! the way a downstream test suite would use them.

use std::panic::{self, AssertUnwindSafe};

use specs::{FatalAbort, RecordingSink, SpecEntry, Specs, SpecsConfig, TestSink, init_logging};

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(s) => *s,
        Err(payload) => payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .unwrap_or_default(),
    }
}

// =============================================================================
// Harness sink
// =============================================================================

#[test]
fn test_passing_test_body() {
    init_logging();

    let mut t = TestSink::named("test_passing_test_body");
    let mut s = Specs::new(&mut t);

    s.equal(3, add(1, 2), None);
    s.not_equal(4, add(1, 2), None);
    s.is_not_nil(add(0, 0), None);
    s.is_nil(None::<&str>, None);
    s.matches_pattern(r"^\d+$", &add(20, 22).to_string(), None);
    s.run_table(&[
        SpecEntry::new(3, add(1, 2)),
        SpecEntry::new(4, add(2, 2)),
        SpecEntry::new(-1, add(4, -5)),
        SpecEntry::new(1001, add(1000, 1)),
    ]);

    t.finish();
}

#[test]
fn test_failing_body_reports_every_failure_at_the_end() {
    let result = panic::catch_unwind(|| {
        let mut t = TestSink::named("arith");
        let mut s = Specs::new(&mut t);
        s.equal(4, add(1, 2), None);
        s.equal(5, add(1, 2), Some("1 + 2 is not 5"));
        s.is_nil(0, None);
    });

    let message = panic_message(result.unwrap_err());
    assert_eq!(
        message,
        "arith: 3 assertion failures\n  expected: 4 but got: 3\n  1 + 2 is not 5\n  expected nil but got: 0"
    );
}

#[test]
fn test_fatal_stops_the_test_body() {
    let mut reached_end = false;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut t = TestSink::new();
        let mut s = Specs::new(&mut t);
        s.equal(1, 2, None);
        s.is_nil_fatal(Some("handle"), None);
        reached_end = true;
    }));

    assert!(!reached_end);
    let message = panic_message(result.unwrap_err());
    assert_eq!(
        message,
        "2 assertion failures\n  expected: 1 but got: 2\n  fatal: expected nil but got: Some(\"handle\")"
    );
}

// =============================================================================
// Recording sink
// =============================================================================

#[test]
fn test_table_counts_only_mismatches() {
    let mut sink = RecordingSink::new();
    let entries: Vec<SpecEntry<i32>> = (0..10).map(|i| SpecEntry::new(i, i - i % 3)).collect();

    let summary = Specs::new(&mut sink).run_table(&entries);

    // Matches at i = 0, 3, 6, 9 only
    assert_eq!(summary.evaluated, 10);
    assert_eq!(summary.mismatched, 6);
    assert_eq!(sink.non_fatal().len(), 6);
    assert!(sink.non_fatal()[0].starts_with("entry [1]: "));
}

#[test]
fn test_expect_after_error_skips_comparison() {
    let mut sink = RecordingSink::new();
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut s = Specs::new(&mut sink);
        let parsed = "x2".parse::<i32>();
        let (value, err) = match parsed {
            Ok(v) => (v, None),
            Err(e) => (0, Some(e)),
        };
        s.expect_after_error(err, 2, value, None);
    }));

    let payload = result.unwrap_err();
    assert!(payload.downcast_ref::<FatalAbort>().is_some());
    assert_eq!(sink.fatal(), Some("invalid digit found in string"));
    assert!(sink.non_fatal().is_empty());
}

#[test]
fn test_config_loaded_from_toml_shapes_messages() {
    let config = SpecsConfig::from_toml_str(
        r#"
value_format = "pretty"
max_table_failures = 1
"#,
    )
    .unwrap();

    let mut sink = RecordingSink::new();
    {
        let mut s = Specs::with_config(&mut sink, config);
        s.equal((1, "a"), (1, "b"), None);
        s.run_table(&[SpecEntry::new(1, 0), SpecEntry::new(2, 0)]);
    }

    assert_eq!(
        sink.non_fatal(),
        [
            "expected: (\n    1,\n    \"a\",\n) but got: (\n    1,\n    \"b\",\n)",
            "entry [0]: expected: 1 but got: 0",
            "... and 1 more mismatching entry",
        ]
    );
}

#[test]
fn test_independent_contexts_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let mut sink = RecordingSink::new();
                let mut s = Specs::new(&mut sink);
                s.equal(i, i, None);
                s.not_equal(i, i + 1, None);
                sink.report_count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 0);
    }
}
