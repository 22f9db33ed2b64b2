use std::fmt::{Debug, Display};

use regex::Regex;
use tracing::{debug, error, warn};

use super::format;
use super::nil::Nilable;
use super::table::{SpecEntry, TableSummary};
use crate::config::SpecsConfig;
use crate::errors::{SpecsError, SpecsErrorCode};
use crate::sink::Sink;

/// Assertion context bound to one test's sink.
///
/// Every operation takes `(expected, actual, msg)` in that order. `msg`, when
/// `Some`, replaces the default failure message entirely.
///
/// A context borrows its sink mutably for its whole lifetime, so it cannot be
/// shared between threads or between concurrently running tests. Each test
/// (and each subtest) builds its own.
pub struct Specs<'a, S: Sink + ?Sized> {
    sink: &'a mut S,
    config: SpecsConfig,
}

impl<'a, S: Sink + ?Sized> Specs<'a, S> {
    pub fn new(sink: &'a mut S) -> Self {
        Self::with_config(sink, SpecsConfig::default())
    }

    pub fn with_config(sink: &'a mut S, config: SpecsConfig) -> Self {
        Self { sink, config }
    }

    pub fn config(&self) -> &SpecsConfig {
        &self.config
    }

    /// Fail unless `actual == expected`.
    pub fn equal<E, A>(&mut self, expected: E, actual: A, msg: Option<&str>)
    where
        E: Debug,
        A: PartialEq<E> + Debug,
    {
        if actual == expected {
            self.passed("equal");
            return;
        }
        let message = override_or(msg, || {
            format::equal(&expected, &actual, self.config.value_format)
        });
        self.failed("equal", &message);
    }

    /// Fail if `actual == expected`.
    pub fn not_equal<E, A>(&mut self, expected: E, actual: A, msg: Option<&str>)
    where
        E: Debug,
        A: PartialEq<E> + Debug,
    {
        if actual != expected {
            self.passed("not_equal");
            return;
        }
        let message = override_or(msg, || {
            format::not_equal(&expected, &actual, self.config.value_format)
        });
        self.failed("not_equal", &message);
    }

    /// Fail unless `pattern` finds a match somewhere in `text`.
    ///
    /// An invalid pattern aborts the test: it means the test is broken, not
    /// the subject.
    pub fn matches_pattern(&mut self, pattern: &str, text: &str, msg: Option<&str>) {
        let regex = self.compile(pattern);
        if regex.is_match(text) {
            self.passed("matches_pattern");
            return;
        }
        let message = override_or(msg, || format::matches(pattern, text));
        self.failed("matches_pattern", &message);
    }

    /// Fail if `pattern` finds a match anywhere in `text`.
    pub fn not_matches_pattern(&mut self, pattern: &str, text: &str, msg: Option<&str>) {
        let regex = self.compile(pattern);
        if !regex.is_match(text) {
            self.passed("not_matches_pattern");
            return;
        }
        let message = override_or(msg, || format::not_matches(pattern, text));
        self.failed("not_matches_pattern", &message);
    }

    /// Fail unless `value` is nil. See [`Nilable`] for what counts as nil.
    pub fn is_nil<V>(&mut self, value: V, msg: Option<&str>)
    where
        V: Nilable + Debug,
    {
        if value.is_nil() {
            self.passed("is_nil");
            return;
        }
        let message = override_or(msg, || format::nil(&value, self.config.value_format));
        self.failed("is_nil", &message);
    }

    /// Like [`is_nil`](Self::is_nil), but a failure aborts the test.
    pub fn is_nil_fatal<V>(&mut self, value: V, msg: Option<&str>)
    where
        V: Nilable + Debug,
    {
        if value.is_nil() {
            self.passed("is_nil_fatal");
            return;
        }
        let message = override_or(msg, || format::nil(&value, self.config.value_format));
        self.fatal("is_nil_fatal", &message);
    }

    /// Fail if `value` is nil.
    pub fn is_not_nil<V>(&mut self, value: V, msg: Option<&str>)
    where
        V: Nilable + Debug,
    {
        if !value.is_nil() {
            self.passed("is_not_nil");
            return;
        }
        let message = override_or(msg, || format::not_nil(&value, self.config.value_format));
        self.failed("is_not_nil", &message);
    }

    /// Abort on `Some(err)` before comparing anything, otherwise behave like
    /// [`equal`](Self::equal).
    ///
    /// The abort message is `msg` if given, else the error's own text.
    pub fn expect_after_error<Err, E, A>(
        &mut self,
        err: Option<Err>,
        expected: E,
        actual: A,
        msg: Option<&str>,
    ) where
        Err: Display,
        E: Debug,
        A: PartialEq<E> + Debug,
    {
        if let Some(err) = err {
            let message = override_or(msg, || err.to_string());
            self.fatal("expect_after_error", &message);
        }
        self.equal(expected, actual, msg);
    }

    /// Abort on `Err`, otherwise compare the `Ok` value against `expected`.
    pub fn expect_ok<T, Err, E>(&mut self, result: Result<T, Err>, expected: E, msg: Option<&str>)
    where
        Err: Display,
        E: Debug,
        T: PartialEq<E> + Debug,
    {
        match result {
            Ok(actual) => self.equal(expected, actual, msg),
            Err(err) => {
                let message = override_or(msg, || err.to_string());
                self.fatal("expect_ok", &message);
            }
        }
    }

    /// Compare every entry, reporting each mismatch once.
    ///
    /// Never stops early; the returned summary always covers the whole table.
    pub fn run_table<E, A>(&mut self, entries: &[SpecEntry<E, A>]) -> TableSummary
    where
        E: Debug,
        A: PartialEq<E> + Debug,
    {
        debug!(event = "specs.table.run_started", entries = entries.len());

        let cap = self.config.max_table_failures.unwrap_or(usize::MAX);
        let mut summary = TableSummary::default();

        for (index, entry) in entries.iter().enumerate() {
            summary.evaluated += 1;
            if entry.actual() == entry.expected() {
                continue;
            }

            summary.mismatched += 1;
            if summary.mismatched <= cap {
                let mismatch =
                    format::equal(entry.expected(), entry.actual(), self.config.value_format);
                self.failed("run_table", &format::table_entry(index, &mismatch));
            }
        }

        if summary.mismatched > cap {
            self.failed("run_table", &format::table_overflow(summary.mismatched - cap));
        }

        debug!(
            event = "specs.table.run_completed",
            evaluated = summary.evaluated,
            mismatched = summary.mismatched,
        );

        summary
    }

    fn compile(&mut self, pattern: &str) -> Regex {
        match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => {
                let err = SpecsError::from((pattern, e));
                error!(
                    event = "specs.assert.invalid_pattern",
                    error_code = err.error_code(),
                    error = %err
                );
                self.sink.report_fatal_and_abort(&err.to_string())
            }
        }
    }

    fn passed(&self, assertion: &'static str) {
        if self.config.log_passes {
            debug!(event = "specs.assert.passed", assertion);
        }
    }

    fn failed(&mut self, assertion: &'static str, message: &str) {
        warn!(event = "specs.assert.failed", assertion, message);
        self.sink.report_non_fatal(message);
    }

    fn fatal(&mut self, assertion: &'static str, message: &str) -> ! {
        error!(event = "specs.assert.fatal", assertion, message);
        self.sink.report_fatal_and_abort(message)
    }
}

fn override_or(msg: Option<&str>, default: impl FnOnce() -> String) -> String {
    msg.map_or_else(default, str::to_string)
}
