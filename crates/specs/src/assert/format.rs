//! Default failure messages.
//!
//! Every message names which value was expected and which was observed, so a
//! report stays readable even when a call site mixes up the argument order.

use std::fmt::Debug;

use crate::config::ValueFormat;

pub(crate) fn render<T: Debug + ?Sized>(value: &T, format: ValueFormat) -> String {
    match format {
        ValueFormat::Debug => format!("{value:?}"),
        ValueFormat::Pretty => format!("{value:#?}"),
    }
}

pub(crate) fn equal<E, A>(expected: &E, actual: &A, format: ValueFormat) -> String
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    format!(
        "expected: {} but got: {}",
        render(expected, format),
        render(actual, format)
    )
}

pub(crate) fn not_equal<E, A>(expected: &E, actual: &A, format: ValueFormat) -> String
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    format!(
        "expected anything but: {} but got: {}",
        render(expected, format),
        render(actual, format)
    )
}

pub(crate) fn matches(pattern: &str, text: &str) -> String {
    format!("expected pattern {pattern:?} to match {text:?}")
}

pub(crate) fn not_matches(pattern: &str, text: &str) -> String {
    format!("expected pattern {pattern:?} not to match {text:?}")
}

pub(crate) fn nil<V: Debug + ?Sized>(value: &V, format: ValueFormat) -> String {
    format!("expected nil but got: {}", render(value, format))
}

pub(crate) fn not_nil<V: Debug + ?Sized>(value: &V, format: ValueFormat) -> String {
    format!("expected a non-nil value but got: {}", render(value, format))
}

pub(crate) fn table_entry(index: usize, mismatch: &str) -> String {
    format!("entry [{index}]: {mismatch}")
}

pub(crate) fn table_overflow(suppressed: usize) -> String {
    format!(
        "... and {suppressed} more mismatching entr{}",
        if suppressed == 1 { "y" } else { "ies" }
    )
}
