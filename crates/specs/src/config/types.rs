use serde::Deserialize;

/// How values are rendered inside default failure messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Single-line `{:?}`
    #[default]
    Debug,
    /// Multi-line `{:#?}`
    Pretty,
}

/// Settings shared by every assertion made through one context.
///
/// Build in code with the `with_*` setters, or load from TOML:
///
/// ```toml
/// value_format = "pretty"
/// log_passes = true
/// max_table_failures = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecsConfig {
    pub value_format: ValueFormat,
    /// Emit a debug event for every passing assertion
    pub log_passes: bool,
    /// Report at most this many table mismatches individually, then one summary line
    pub max_table_failures: Option<usize>,
}

impl SpecsConfig {
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    pub fn with_log_passes(mut self, log_passes: bool) -> Self {
        self.log_passes = log_passes;
        self
    }

    pub fn with_max_table_failures(mut self, max: usize) -> Self {
        self.max_table_failures = Some(max);
        self
    }
}
