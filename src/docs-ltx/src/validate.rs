//! Structural validation of an llms.txt file.
//!
//! This is a line-prefix check, not a markdown parse: an H1 line (`# `), a summary
//! blockquote line (`> `) and at least one H2 line (`## `) are required. Links are
//! reported but do not affect validity.

use std::path::Path;

use crate::errors::{LtxError, Result};

/// A required llms.txt element that was not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingElement {
    H1,
    Blockquote,
    H2Section,
}

impl std::fmt::Display for MissingElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingElement::H1 => write!(f, "Missing H1 heading (should start with '# ')"),
            MissingElement::Blockquote => write!(f, "Missing blockquote summary (should start with '> ')"),
            MissingElement::H2Section => write!(f, "Need at least 1 H2 section (should start with '## ')"),
        }
    }
}

/// What was found in an llms.txt file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmsTxtReport {
    pub h1_found: bool,
    pub blockquote_found: bool,
    pub h2_count: usize,
    /// Some line contains `[`, `]`, `(` and `)`. Informational only.
    pub links_found: bool,
}

impl LlmsTxtReport {
    pub fn is_valid(&self) -> bool {
        self.h1_found && self.blockquote_found && self.h2_count >= 1
    }

    /// The required elements that are missing, in document order.
    pub fn missing(&self) -> Vec<MissingElement> {
        let mut missing = Vec::new();
        if !self.h1_found {
            missing.push(MissingElement::H1);
        }
        if !self.blockquote_found {
            missing.push(MissingElement::Blockquote);
        }
        if self.h2_count < 1 {
            missing.push(MissingElement::H2Section);
        }
        missing
    }

    /// Logs every check and, when invalid, each missing element.
    pub fn log(&self) {
        tracing::info!("llms.txt format validation:");
        tracing::info!("- H1 heading found: {}", self.h1_found);
        tracing::info!("- Blockquote summary found: {}", self.blockquote_found);
        tracing::info!("- H2 sections found: {} (minimum 1 required)", self.h2_count);
        tracing::info!("- Links found: {}", self.links_found);
        tracing::info!("- Overall validity: {}", self.is_valid());

        for missing in self.missing() {
            tracing::warn!("Validation error: {}", missing);
        }
    }

    /// `Ok` when valid, otherwise an error listing the missing elements.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(LtxError::InvalidLlmsTxt(self.missing()))
        }
    }
}

/// Checks llms.txt content line by line.
pub fn check_llms_txt(content: &str) -> LlmsTxtReport {
    let lines: Vec<&str> = content.split('\n').collect();

    LlmsTxtReport {
        h1_found: lines.iter().any(|line| line.starts_with("# ")),
        blockquote_found: lines.iter().any(|line| line.starts_with("> ")),
        h2_count: lines.iter().filter(|line| line.starts_with("## ")).count(),
        links_found: lines
            .iter()
            .any(|line| ['[', ']', '(', ')'].iter().all(|c| line.contains(*c))),
    }
}

/// Reads an llms.txt file and checks it.
pub async fn validate_llms_txt_file(path: &Path) -> Result<LlmsTxtReport> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LtxError::io(path, e))?;
    Ok(check_llms_txt(&content))
}
