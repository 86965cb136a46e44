//! Per-invocation parse settings

/// Knobs for one parse; `Default` matches what most callers want
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSettings {
    /// Lowercase `sys global-settings hostname`
    pub lowercase_hostname: bool,
    /// List each unrecognized statement as a diagnostic. When off they are
    /// only counted and flagged on the model.
    pub record_unrecognized: bool,
    /// Turn references to structures the document never defines into
    /// diagnostics. Off by default: a well-formed document may still point
    /// at objects defined elsewhere.
    pub report_undefined_references: bool,
    /// Cap on the number of diagnostics returned
    pub max_diagnostics: Option<usize>,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            lowercase_hostname: true,
            record_unrecognized: true,
            report_undefined_references: false,
            max_diagnostics: None,
        }
    }
}

impl ParseSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase_hostname(mut self, lowercase: bool) -> Self {
        self.lowercase_hostname = lowercase;
        self
    }

    pub fn with_record_unrecognized(mut self, record: bool) -> Self {
        self.record_unrecognized = record;
        self
    }

    pub fn with_undefined_references(mut self, report: bool) -> Self {
        self.report_undefined_references = report;
        self
    }

    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = Some(max);
        self
    }
}
