//! End-to-end llms.txt generation.

use std::path::PathBuf;

use crate::assemble::assemble;
use crate::config::GeneratorOptions;
use crate::errors::{LtxError, Result};
use crate::extract::{KeyInfo, extract_key_info};
use crate::source::DocumentSource;
use crate::template::Template;
use crate::validate::{LlmsTxtReport, validate_llms_txt_file};

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub lines: usize,
    pub bytes: u64,
    pub validation: LlmsTxtReport,
}

/// Harvests key information from every text of the source, merged in source order.
pub async fn harvest_source(source: &(dyn DocumentSource + Send + Sync)) -> Result<KeyInfo> {
    let mut info = KeyInfo::default();
    for text in source.collect().await? {
        let found = extract_key_info(&text.text);
        tracing::debug!(
            "Harvested from {}: {} concepts, {} endpoints, {} parameters, {} response fields, {} streaming events",
            text.origin,
            found.core_concepts.len(),
            found.endpoints.len(),
            found.parameters.len(),
            found.response_fields.len(),
            found.streaming_events.len()
        );
        info.merge(found);
    }
    Ok(info)
}

/// Generates the llms.txt file.
///
/// This function:
/// 1. Collects cleaned documentation text from the source
/// 2. Harvests key information from each text
/// 3. Assembles the document from the template and the harvest
/// 4. Writes it to `options.output` in a single write, creating parent directories
/// 5. Reads the file back and validates its structure
///
/// # Errors
///
/// Returns an error if the source cannot be read, the file cannot be written or
/// read back, or the written file is not a valid llms.txt. Pages that fail to
/// download are not errors: their sections are left out.
pub async fn generate_llms_txt(
    source: &(dyn DocumentSource + Send + Sync),
    template: &Template,
    options: &GeneratorOptions,
) -> Result<GenerationReport> {
    let info = harvest_source(source).await?;
    if info.is_empty() {
        tracing::info!("No key information harvested; only the static sections will be written");
    }

    let doc = assemble(template, &info);
    let output = &options.output;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| LtxError::io(parent, e))?;
    }
    tokio::fs::write(output, doc.render())
        .await
        .map_err(|e| LtxError::io(output, e))?;
    tracing::info!("Generated llms.txt with {} lines", doc.len());

    let validation = validate_llms_txt_file(output).await?;
    validation.log();
    let validation = validation.into_result()?;

    let bytes = tokio::fs::metadata(output)
        .await
        .map_err(|e| LtxError::io(output, e))?
        .len();

    Ok(GenerationReport {
        output: output.clone(),
        lines: doc.len(),
        bytes,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use indoc::indoc;

    use super::*;
    use crate::source::SourceText;
    use crate::template::{OPEN_RESPONSES, StaticSection};

    /// Serves fixed texts.
    struct StaticSource(Vec<&'static str>);

    #[async_trait]
    impl DocumentSource for StaticSource {
        async fn collect(&self) -> Result<Vec<SourceText>> {
            Ok(self
                .0
                .iter()
                .enumerate()
                .map(|(i, text)| SourceText {
                    origin: format!("static-{i}"),
                    text: text.to_string(),
                })
                .collect())
        }
    }

    fn options_in(dir: &tempfile::TempDir) -> GeneratorOptions {
        GeneratorOptions::builder()
            .output(dir.path().join("public").join("llms.txt"))
            .build()
    }

    #[tokio::test]
    async fn test_generate_without_harvest() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(&dir);

        let report = generate_llms_txt(&StaticSource(vec![]), &OPEN_RESPONSES, &options).await.unwrap();

        assert_eq!(report.output, options.output);
        assert_eq!(report.validation.h2_count, 3);
        assert!(report.validation.links_found);
        let content = std::fs::read_to_string(&options.output).unwrap();
        assert_eq!(report.bytes, content.len() as u64);
        assert_eq!(report.lines, content.split('\n').count());
    }

    #[tokio::test]
    async fn test_generate_merges_sources() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(&dir);
        let source = StaticSource(vec![
            indoc! {"
                POST /v1/responses
                `response.created` is sent first
            "},
            "GET /v1/responses/resp_1 and `response.created` then `response.completed`",
        ]);

        let report = generate_llms_txt(&source, &OPEN_RESPONSES, &options).await.unwrap();
        assert_eq!(report.validation.h2_count, 5);

        let content = std::fs::read_to_string(&options.output).unwrap();
        assert!(content.contains("### Endpoints\n- `POST /v1/responses`\n- `GET /v1/responses/resp_1`\n"));
        assert!(content.contains("## Streaming Events\n\n- `response.created`\n- `response.completed`\n"));
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid_template() {
        const NO_SECTIONS: Template = Template {
            title: "Empty",
            summary: "Nothing here.",
            sections: &[],
        };
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(&dir);

        let result = generate_llms_txt(&StaticSource(vec![]), &NO_SECTIONS, &options).await;
        assert!(matches!(
            result,
            Err(LtxError::InvalidLlmsTxt(missing)) if missing == vec![crate::validate::MissingElement::H2Section]
        ));
        // The file is still written.
        assert!(options.output.exists());
    }

    #[tokio::test]
    async fn test_static_sections_follow_template() {
        const ONE_SECTION: Template = Template {
            title: "Docs",
            summary: "Summary.",
            sections: &[StaticSection {
                heading: "Links",
                links: &[],
            }],
        };
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(&dir);

        let report = generate_llms_txt(&StaticSource(vec![]), &ONE_SECTION, &options).await.unwrap();
        assert_eq!(report.validation.h2_count, 1);
        assert!(!report.validation.links_found);
        let content = std::fs::read_to_string(&options.output).unwrap();
        assert_eq!(content, "# Docs\n\n> Summary.\n\n## Links\n\n");
    }
}
