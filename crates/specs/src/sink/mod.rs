//! Failure-reporting sinks.
//!
//! A sink is the per-test object that collects failures. Assertions only ever
//! talk to it through [`Sink`], so the same context works against the real
//! test harness ([`TestSink`]) and against an inspectable recorder
//! ([`RecordingSink`]).

mod recording;
mod test_sink;

pub use recording::{FatalAbort, RecordingSink};
pub use test_sink::TestSink;

/// The reporting channels an assertion context needs from its host.
pub trait Sink {
    /// Record a failure and let the test keep running.
    fn report_non_fatal(&mut self, message: &str);

    /// Record a failure and stop the current test.
    ///
    /// Implementations must not return; unwinding is how the rest of the
    /// test body is skipped.
    fn report_fatal_and_abort(&mut self, message: &str) -> !;
}
