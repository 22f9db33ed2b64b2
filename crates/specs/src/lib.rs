//! specs: assertion helpers for the built-in test harness
//!
//! This library provides:
//! - Equality, inequality and nil checks that record a failure and keep going
//! - Regular-expression checks (substring search, not full-string match)
//! - Fatal variants that stop the current test immediately
//! - Table-driven comparison that reports every mismatching row
//!
//! # Argument order
//!
//! Every operation takes **`(expected, actual, msg)`**. Pattern checks take
//! `(pattern, text, msg)`, the pattern being the expected side. Default
//! failure messages label both values, e.g. `expected: 4 but got: 3`.
//!
//! # Example
//!
//! ```
//! use specs::{SpecEntry, Specs, TestSink};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let mut t = TestSink::named("add");
//! let mut s = Specs::new(&mut t);
//!
//! s.equal(3, add(1, 2), None);
//! s.not_equal(4, add(1, 2), None);
//! s.is_not_nil(add(0, 0), None);
//! s.expect_ok("2".parse::<i32>(), 2, Some("2 should parse"));
//!
//! s.run_table(&[
//!     SpecEntry::new(3, add(1, 2)),
//!     SpecEntry::new(4, add(2, 2)),
//!     SpecEntry::new(-1, add(4, -5)),
//! ]);
//!
//! t.finish();
//! ```
//!
//! A context borrows its sink for the whole test and is not meant to be shared
//! across threads; parallel tests and subtests each build their own.

pub mod assert;
pub mod config;
pub mod errors;
pub mod logging;
pub mod sink;

// Re-export commonly used types at the crate root
pub use assert::{Nilable, SpecEntry, Specs, TableSummary};
pub use config::{ConfigError, SpecsConfig, ValueFormat};
pub use errors::{SpecsError, SpecsErrorCode};
pub use logging::{init_logging, init_logging_json};
pub use sink::{FatalAbort, RecordingSink, Sink, TestSink};
