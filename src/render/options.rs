//! Rendering options and configuration.

/// Options for rendering a rebuilt document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum heading level (1-6)
    pub max_heading_level: u8,

    /// Append the footnote bucket after the main content
    pub include_footnotes: bool,

    /// Emit page headers and footers as HTML comments
    pub include_page_furniture: bool,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable footnotes.
    pub fn with_footnotes(mut self, include: bool) -> Self {
        self.include_footnotes = include;
        self
    }

    /// Enable or disable page headers and footers.
    pub fn with_page_furniture(mut self, include: bool) -> Self {
        self.include_page_furniture = include;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_heading_level: 6,
            include_footnotes: true,
            include_page_furniture: false,
            escape_special_chars: true,
            collect_stats: false,
        }
    }
}
