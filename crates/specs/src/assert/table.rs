/// One row of a table-driven comparison.
///
/// Fields follow the crate-wide order: expected first, actual second.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecEntry<E, A = E> {
    expected: E,
    actual: A,
}

impl<E, A> SpecEntry<E, A> {
    pub fn new(expected: E, actual: A) -> Self {
        Self { expected, actual }
    }

    pub fn expected(&self) -> &E {
        &self.expected
    }

    pub fn actual(&self) -> &A {
        &self.actual
    }
}

impl<E, A> From<(E, A)> for SpecEntry<E, A> {
    fn from((expected, actual): (E, A)) -> Self {
        Self::new(expected, actual)
    }
}

/// Outcome counts of one table run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    /// Entries evaluated (always the full table)
    pub evaluated: usize,
    /// Entries whose actual value differed from the expected one
    pub mismatched: usize,
}

impl TableSummary {
    pub fn passed(&self) -> bool {
        self.mismatched == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let entry = SpecEntry::new(3, 1 + 2);
        assert_eq!(*entry.expected(), 3);
        assert_eq!(*entry.actual(), 3);
    }

    #[test]
    fn test_entry_from_tuple() {
        let entry: SpecEntry<&str, String> = ("foo", "foo".to_string()).into();
        assert_eq!(*entry.expected(), "foo");
        assert_eq!(entry.actual(), "foo");
    }

    #[test]
    fn test_summary_passed() {
        assert!(TableSummary::default().passed());
        let summary = TableSummary {
            evaluated: 3,
            mismatched: 1,
        };
        assert!(!summary.passed());
    }
}
