//! Build options and configuration.

/// Options for rebuilding a document from an analysis result.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Error handling mode for malformed tables
    pub error_mode: ErrorMode,

    /// What to do with tables that have no column header cells
    pub header_policy: HeaderPolicy,

    /// Whether to build several documents in parallel
    pub parallel: bool,

    /// Apply NFC normalization and trim paragraph and cell text
    pub normalize_text: bool,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (repair malformed tables instead of failing).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set header policy.
    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    /// Reject tables without column headers.
    pub fn strict_headers(mut self) -> Self {
        self.header_policy = HeaderPolicy::Strict;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable text normalization.
    pub fn with_normalized_text(mut self, normalize: bool) -> Self {
        self.normalize_text = normalize;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            header_policy: HeaderPolicy::Positional,
            parallel: true,
            normalize_text: false,
        }
    }
}

/// Error handling mode for table reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// A malformed table fails the whole document
    #[default]
    Strict,
    /// Log a warning and keep a best-effort table
    Lenient,
}

/// Handling of tables without column header cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Key every row by position: `col0`, `col1`, ...
    #[default]
    Positional,
    /// Treat a missing header as a malformed table
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_builder() {
        let options = BuildOptions::new()
            .lenient()
            .strict_headers()
            .with_normalized_text(true)
            .sequential();

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert_eq!(options.header_policy, HeaderPolicy::Strict);
        assert!(options.normalize_text);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = BuildOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert_eq!(options.header_policy, HeaderPolicy::Positional);
        assert!(options.parallel);
        assert!(!options.normalize_text);
    }
}
