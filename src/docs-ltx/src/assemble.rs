//! Assembly of the llms.txt document from a template and harvested key information.

use crate::extract::KeyInfo;
use crate::template::Template;

/// The output document as an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLines(Vec<String>);

impl DocumentLines {
    pub fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    pub fn blank(&mut self) {
        self.0.push(String::new());
    }

    /// `## heading`, a blank line, one bullet per item and a closing blank line.
    fn bullet_section(&mut self, heading: &str, items: impl IntoIterator<Item = String>) {
        self.push(format!("## {heading}"));
        self.blank();
        self.bullets(items);
        self.blank();
    }

    fn bullets(&mut self, items: impl IntoIterator<Item = String>) {
        for item in items {
            self.push(format!("- {item}"));
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The file content: every line joined with `\n`.
    pub fn render(&self) -> String {
        self.0.join("\n")
    }
}

fn code(value: &str) -> String {
    format!("`{value}`")
}

/// Builds the llms.txt lines.
///
/// Harvested sections (Core Concepts, API, Streaming Events) only appear when they
/// have content. The template's static sections always follow. Response fields are
/// harvested but not rendered.
pub fn assemble(template: &Template, info: &KeyInfo) -> DocumentLines {
    let mut doc = DocumentLines::default();

    doc.push(format!("# {}", template.title));
    doc.blank();
    doc.push(format!("> {}", template.summary));
    doc.blank();

    if !info.core_concepts.is_empty() {
        doc.bullet_section("Core Concepts", info.core_concepts.iter().cloned());
    }

    if !info.endpoints.is_empty() || !info.parameters.is_empty() {
        doc.push("## API");
        doc.blank();
        if !info.endpoints.is_empty() {
            doc.push("### Endpoints");
            doc.bullets(info.endpoints.iter().map(|e| code(e)));
            doc.blank();
        }
        if !info.parameters.is_empty() {
            doc.push("### Key Parameters");
            doc.bullets(info.parameters.iter().map(|p| code(p)));
            doc.blank();
        }
    }

    if !info.streaming_events.is_empty() {
        doc.bullet_section("Streaming Events", info.streaming_events.iter().map(|e| code(e)));
    }

    for section in template.sections {
        doc.bullet_section(
            section.heading,
            section
                .links
                .iter()
                .map(|link| format!("[{}]({}): {}", link.label, link.url, link.description)),
        );
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::OPEN_RESPONSES;

    fn headings(doc: &DocumentLines) -> Vec<&str> {
        doc.lines()
            .iter()
            .filter(|l| l.starts_with('#'))
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_empty_key_info_has_only_static_sections() {
        let doc = assemble(&OPEN_RESPONSES, &KeyInfo::default());
        assert_eq!(
            headings(&doc),
            vec!["# Open Responses", "## Resources", "## Documentation", "## Examples"]
        );
        assert!(doc.lines()[2].starts_with("> Open Responses is an open, vendor-neutral specification"));
        assert!(!doc.render().contains("## Streaming Events"));
        assert!(!doc.render().contains("## API"));
    }

    #[test]
    fn test_full_key_info() {
        let info = KeyInfo {
            core_concepts: vec!["**Items** are the atomic unit".to_string()],
            endpoints: vec!["POST /v1/responses".to_string()],
            parameters: vec!["previous_response_id".to_string()],
            response_fields: vec!["output_text".to_string()],
            streaming_events: vec!["response.created".to_string()],
        };
        let doc = assemble(&OPEN_RESPONSES, &info);

        assert_eq!(
            headings(&doc),
            vec![
                "# Open Responses",
                "## Core Concepts",
                "## API",
                "### Endpoints",
                "### Key Parameters",
                "## Streaming Events",
                "## Resources",
                "## Documentation",
                "## Examples",
            ]
        );

        let rendered = doc.render();
        assert!(rendered.contains(
            "## Core Concepts\n\n- **Items** are the atomic unit\n\n## API\n\n### Endpoints\n- `POST /v1/responses`\n\n\
             ### Key Parameters\n- `previous_response_id`\n\n## Streaming Events\n\n- `response.created`\n\n## Resources"
        ));
        assert!(!rendered.contains("output_text"));
    }

    #[test]
    fn test_api_section_with_parameters_only() {
        let info = KeyInfo {
            parameters: vec!["max_output_tokens".to_string()],
            ..KeyInfo::default()
        };
        let rendered = assemble(&OPEN_RESPONSES, &info).render();
        assert!(rendered.contains("## API\n\n### Key Parameters\n- `max_output_tokens`\n\n## Resources"));
        assert!(!rendered.contains("### Endpoints"));
    }

    #[test]
    fn test_static_links() {
        let rendered = assemble(&OPEN_RESPONSES, &KeyInfo::default()).render();
        assert!(rendered.contains(
            "## Examples\n\n- [cURL Snippets](https://www.openresponses.org/curl_snippets/curl_snippets.yaml): \
             YAML file with cURL examples for various API calls\n"
        ));
        assert!(rendered.contains("- [Overview](https://www.openresponses.org/): Introduction to Open Responses"));
        assert_eq!(rendered.matches("\n- [").count(), 5 + 6 + 2);
        assert!(rendered.ends_with("Complete OpenAPI specification in JSON format\n"));
    }
}
