use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attribute pattern carried by monochrome master artwork.
pub const MONO_FILL_PATTERN: &str = r##"fill="#000000" stroke="none""##;

/// White piece styling: light fill with a dark outline.
pub const WHITE_PIECE_STYLE: &str = r##"fill="#ffffff" stroke="#000000" stroke-width="10""##;

/// Black piece styling: dark fill with a light outline.
pub const BLACK_PIECE_STYLE: &str = r##"fill="#000000" stroke="#ffffff" stroke-width="10""##;

#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub path: String,
    pub content: String,
}

/// One substitution spec: replace every occurrence of `target`
/// with `replacement` and write the result to `dest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantSpec {
    pub name: String,
    pub target: String,
    pub replacement: String,
    pub dest: String,
}

impl VariantSpec {
    /// 內建的白／黑變體組，對應單色母稿的重新上色
    pub fn builtin() -> Vec<VariantSpec> {
        vec![
            VariantSpec {
                name: "white".to_string(),
                target: MONO_FILL_PATTERN.to_string(),
                replacement: WHITE_PIECE_STYLE.to_string(),
                dest: "white.svg".to_string(),
            },
            VariantSpec {
                name: "black".to_string(),
                target: MONO_FILL_PATTERN.to_string(),
                replacement: BLACK_PIECE_STYLE.to_string(),
                dest: "black.svg".to_string(),
            },
        ]
    }
}

#[derive(Debug, Clone)]
pub struct RenderedVariant {
    pub spec: VariantSpec,
    pub content: String,
    pub replacements: usize,
}

#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub source_path: String,
    pub variants: Vec<RenderedVariant>,
}

/// Machine-readable summary of a run, written next to the outputs
/// when a report filename is configured.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub outputs: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub variant: String,
    pub path: String,
    pub replacements: usize,
}
