//! Rendering options and configuration.

use super::CleanupOptions;

/// Placeholder emitted in place of a table of contents.
pub const DEFAULT_TOC_PLACEHOLDER: &str = "<!-- Table of Contents -->";

/// Options for rendering document content.
///
/// The defaults produce the plain conversion output with no frontmatter
/// and no post-processing.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with the document title
    pub include_frontmatter: bool,

    /// Text emitted where the document has a table of contents
    pub toc_placeholder: String,

    /// Text cleanup options
    pub cleanup: Option<CleanupOptions>,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the table of contents placeholder.
    pub fn with_toc_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.toc_placeholder = placeholder.into();
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            toc_placeholder: DEFAULT_TOC_PLACEHOLDER.to_string(),
            cleanup: None,
            collect_stats: false,
        }
    }
}
