use std::thread;

use tracing::error;

use super::Sink;

/// Sink bound to the built-in test harness.
///
/// Non-fatal failures accumulate and are raised together when the sink is
/// dropped at the end of the test body, so one test can report several
/// mismatches. A fatal report panics immediately, carrying everything
/// recorded so far.
#[derive(Debug, Default)]
pub struct TestSink {
    name: Option<String>,
    failures: Vec<String>,
}

impl TestSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix the final report with the test's name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            failures: Vec::new(),
        }
    }

    /// Failures recorded so far
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Fail the test now if anything was recorded.
    ///
    /// Equivalent to letting the sink drop, but reads better as the last
    /// statement of a test.
    pub fn finish(mut self) {
        if let Some(report) = self.take_report(None) {
            panic!("{report}");
        }
    }

    fn take_report(&mut self, fatal: Option<&str>) -> Option<String> {
        if self.failures.is_empty() && fatal.is_none() {
            return None;
        }

        let failures = std::mem::take(&mut self.failures);
        let mut report = match &self.name {
            Some(name) => format!("{name}: "),
            None => String::new(),
        };

        let count = failures.len() + usize::from(fatal.is_some());
        report.push_str(&format!(
            "{count} assertion failure{}",
            if count == 1 { "" } else { "s" }
        ));
        for failure in &failures {
            report.push_str("\n  ");
            report.push_str(failure);
        }
        if let Some(message) = fatal {
            report.push_str("\n  fatal: ");
            report.push_str(message);
        }

        Some(report)
    }
}

impl Sink for TestSink {
    fn report_non_fatal(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }

    fn report_fatal_and_abort(&mut self, message: &str) -> ! {
        let report = self
            .take_report(Some(message))
            .unwrap_or_else(|| message.to_string());
        panic!("{report}");
    }
}

impl Drop for TestSink {
    fn drop(&mut self) {
        let Some(report) = self.take_report(None) else {
            return;
        };
        // A second panic while unwinding would abort the whole test binary,
        // so the report goes to the captured test output instead.
        if thread::panicking() {
            error!(
                event = "specs.sink.failures_dropped_during_unwind",
                report = %report
            );
            eprintln!("{report}");
            return;
        }
        panic!("{report}");
    }
}
