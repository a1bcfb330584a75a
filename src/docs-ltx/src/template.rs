//! Fixed content of the generated llms.txt.
//!
//! Title, summary and the always-present link sections do not depend on what was
//! harvested. They are kept here as data so they can change without touching the
//! extraction or assembly code.

/// A link entry of a static section: `- [label](url): description`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateLink {
    pub label: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

impl TemplateLink {
    const fn new(label: &'static str, url: &'static str, description: &'static str) -> Self {
        Self { label, url, description }
    }
}

/// A section emitted regardless of harvested content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSection {
    pub heading: &'static str,
    pub links: &'static [TemplateLink],
}

/// Everything in an llms.txt that does not come from the documentation pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub title: &'static str,
    pub summary: &'static str,
    /// Emitted after the harvested sections, in order.
    pub sections: &'static [StaticSection],
}

pub const OPEN_RESPONSES: Template = Template {
    title: "Open Responses",
    summary: "Open Responses is an open, vendor-neutral specification for large language model APIs that defines a \
              shared schema, consistent streaming/events, and extensible tooling to enable interoperable LLM workflows \
              across different providers. It standardizes LLM interfaces while maintaining flexibility for \
              provider-specific extensions and advanced agentic capabilities.",
    sections: &[
        StaticSection {
            heading: "Resources",
            links: &[
                TemplateLink::new(
                    "API Reference",
                    "https://www.openresponses.org/reference",
                    "Detailed API documentation with all endpoints, parameters, and response structures",
                ),
                TemplateLink::new(
                    "Specification",
                    "https://www.openresponses.org/specification",
                    "Complete technical specification with detailed concepts and implementation guidelines",
                ),
                TemplateLink::new(
                    "Compliance",
                    "https://www.openresponses.org/compliance",
                    "Acceptance tests and validation procedures",
                ),
                TemplateLink::new(
                    "Governance",
                    "https://www.openresponses.org/governance",
                    "Technical charter and governance structure",
                ),
                TemplateLink::new(
                    "Changelog",
                    "https://www.openresponses.org/changelog",
                    "Version history and updates",
                ),
            ],
        },
        StaticSection {
            heading: "Documentation",
            links: &[
                TemplateLink::new("Overview", "https://www.openresponses.org/", "Introduction to Open Responses"),
                TemplateLink::new(
                    "Specification",
                    "https://www.openresponses.org/specification",
                    "Complete technical specification",
                ),
                TemplateLink::new(
                    "API Reference",
                    "https://www.openresponses.org/reference",
                    "Detailed API documentation",
                ),
                TemplateLink::new(
                    "Compliance",
                    "https://www.openresponses.org/compliance",
                    "Acceptance tests and validation",
                ),
                TemplateLink::new(
                    "Governance",
                    "https://www.openresponses.org/governance",
                    "Technical charter and governance structure",
                ),
                TemplateLink::new(
                    "Changelog",
                    "https://www.openresponses.org/changelog",
                    "Version history and updates",
                ),
            ],
        },
        StaticSection {
            heading: "Examples",
            links: &[
                TemplateLink::new(
                    "cURL Snippets",
                    "https://www.openresponses.org/curl_snippets/curl_snippets.yaml",
                    "YAML file with cURL examples for various API calls",
                ),
                TemplateLink::new(
                    "OpenAPI Specification",
                    "https://www.openresponses.org/openapi/openapi.json",
                    "Complete OpenAPI specification in JSON format",
                ),
            ],
        },
    ],
};
