//! Post-processing pipeline for converted text.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Soft line break inserted by the document editor for Shift+Enter.
const VERTICAL_TAB: char = '\u{000B}';

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: Unicode NFC normalization and soft breaks only
    Minimal,
    /// Standard cleanup: minimal + character filtering + whitespace
    #[default]
    Standard,
    /// Aggressive cleanup: standard + private-use removal + tight newlines
    Aggressive,
}

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Turn vertical-tab soft breaks into newlines
    pub convert_soft_breaks: bool,

    /// Remove Private Use Area (PUA) characters
    pub remove_pua: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Strip trailing whitespace and collapse runs of 3+ spaces
    pub normalize_whitespace: bool,

    /// Maximum consecutive newlines (0 = unlimited)
    pub max_consecutive_newlines: u8,

    /// Preserve YAML frontmatter during cleanup
    pub preserve_frontmatter: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            convert_soft_breaks: true,
            remove_pua: false,
            remove_replacement_char: false,
            normalize_whitespace: false,
            max_consecutive_newlines: 0,
            preserve_frontmatter: true,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            convert_soft_breaks: true,
            remove_pua: false,
            remove_replacement_char: true,
            normalize_whitespace: true,
            max_consecutive_newlines: 2,
            preserve_frontmatter: true,
        }
    }

    /// Aggressive cleanup options.
    pub fn aggressive() -> Self {
        Self {
            normalize_unicode: true,
            convert_soft_breaks: true,
            remove_pua: true,
            remove_replacement_char: true,
            normalize_whitespace: true,
            max_consecutive_newlines: 1,
            preserve_frontmatter: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    spaces_regex: Regex,
    trailing_regex: Regex,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            spaces_regex: Regex::new(r"([^ \n]) {3,}").expect("valid regex"),
            trailing_regex: Regex::new(r"(?m)[ \t]+$").expect("valid regex"),
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let frontmatter = if self.options.preserve_frontmatter {
            extract_frontmatter(text)
        } else {
            None
        };

        match frontmatter {
            Some((fm, content)) => format!("{}\n{}", fm, self.process_content(content)),
            None => self.process_content(text),
        }
    }

    fn process_content(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        if self.options.convert_soft_breaks {
            result = result.replace(VERTICAL_TAB, "\n");
        }

        if self.options.remove_pua {
            result = remove_pua_chars(&result);
        }

        if self.options.remove_replacement_char {
            result = result.replace('\u{FFFD}', "");
        }

        if self.options.normalize_whitespace {
            // Leading indentation is left alone so nested list items survive
            result = self.spaces_regex.replace_all(&result, "$1 ").to_string();
            result = self.trailing_regex.replace_all(&result, "").to_string();
        }

        if self.options.max_consecutive_newlines > 0 {
            result = limit_newlines(&result, self.options.max_consecutive_newlines as usize);
        }

        result.trim().to_string()
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

fn extract_frontmatter(text: &str) -> Option<(&str, &str)> {
    let stripped = text.strip_prefix("---\n")?;
    let end_pos = stripped.find("\n---\n")?;
    let fm_end = 4 + end_pos + 5;
    Some((&text[..fm_end], &text[fm_end..]))
}

fn remove_pua_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            !(0xE000..=0xF8FF).contains(&code)
                && !(0xF0000..=0xFFFFD).contains(&code)
                && !(0x100000..=0x10FFFD).contains(&code)
        })
        .collect()
}

fn limit_newlines(text: &str, max: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = 0;
    for c in text.chars() {
        if c == '\n' {
            run += 1;
            if run > max {
                continue;
            }
        } else {
            run = 0;
        }
        result.push(c);
    }
    result
}
