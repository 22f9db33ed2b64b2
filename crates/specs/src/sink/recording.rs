use std::panic;

use super::Sink;

/// Unwind payload raised by [`RecordingSink`] on a fatal report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalAbort {
    pub message: String,
}

/// Sink that only records what it is told.
///
/// Useful for testing assertion helpers themselves: run the code under
/// [`std::panic::catch_unwind`] and inspect [`non_fatal`](Self::non_fatal)
/// and [`fatal`](Self::fatal) afterwards.
#[derive(Debug, Default)]
pub struct RecordingSink {
    non_fatal: Vec<String>,
    fatal: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn non_fatal(&self) -> &[String] {
        &self.non_fatal
    }

    pub fn fatal(&self) -> Option<&str> {
        self.fatal.as_deref()
    }

    /// Total number of reports, fatal included
    pub fn report_count(&self) -> usize {
        self.non_fatal.len() + usize::from(self.fatal.is_some())
    }

    pub fn is_clean(&self) -> bool {
        self.report_count() == 0
    }
}

impl Sink for RecordingSink {
    fn report_non_fatal(&mut self, message: &str) {
        self.non_fatal.push(message.to_string());
    }

    fn report_fatal_and_abort(&mut self, message: &str) -> ! {
        self.fatal = Some(message.to_string());
        // resume_unwind skips the panic hook, keeping test output clean.
        panic::resume_unwind(Box::new(FatalAbort {
            message: message.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::AssertUnwindSafe;

    #[test]
    fn test_records_non_fatal() {
        let mut sink = RecordingSink::new();
        assert!(sink.is_clean());
        sink.report_non_fatal("a");
        sink.report_non_fatal("b");
        assert_eq!(sink.non_fatal(), ["a", "b"]);
        assert_eq!(sink.report_count(), 2);
        assert!(sink.fatal().is_none());
    }

    #[test]
    fn test_fatal_unwinds_with_payload() {
        let mut sink = RecordingSink::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            sink.report_fatal_and_abort("stop");
        }));

        let payload = result.unwrap_err();
        let abort = payload.downcast_ref::<FatalAbort>().unwrap();
        assert_eq!(abort.message, "stop");
        assert_eq!(sink.fatal(), Some("stop"));
        assert_eq!(sink.report_count(), 1);
    }
}
