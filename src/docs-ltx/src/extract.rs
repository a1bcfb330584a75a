//! Heuristic harvesting of key information from cleaned documentation text.
//!
//! The documentation has no machine-readable schema, so every category is scraped with
//! the regular expressions in [`crate::patterns`]. Results are best-effort: a pattern may
//! match nothing, part of what was meant, or something unrelated.

use std::sync::LazyLock;

use regex::{Captures, Regex, RegexBuilder};

use crate::patterns::{CORE_CONCEPTS, ENDPOINTS, PARAMETERS, PatternDef, RESPONSE_FIELDS, Render, Rule, STREAMING_EVENTS};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap_or_else(|e| panic!("invalid whitespace pattern: {e}")));

/// Key information harvested from documentation text.
///
/// Every list holds unique values in discovery order and never exceeds its rule's cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInfo {
    pub core_concepts: Vec<String>,
    pub endpoints: Vec<String>,
    pub parameters: Vec<String>,
    pub response_fields: Vec<String>,
    pub streaming_events: Vec<String>,
}

impl KeyInfo {
    /// True when nothing at all was harvested.
    pub fn is_empty(&self) -> bool {
        self.core_concepts.is_empty()
            && self.endpoints.is_empty()
            && self.parameters.is_empty()
            && self.response_fields.is_empty()
            && self.streaming_events.is_empty()
    }

    /// Folds another record into this one, keeping values unique and within the caps.
    pub fn merge(&mut self, other: KeyInfo) {
        merge_capped(&mut self.core_concepts, other.core_concepts, CORE_CONCEPTS.cap);
        merge_capped(&mut self.endpoints, other.endpoints, ENDPOINTS.cap);
        merge_capped(&mut self.parameters, other.parameters, PARAMETERS.cap);
        merge_capped(&mut self.response_fields, other.response_fields, RESPONSE_FIELDS.cap);
        merge_capped(&mut self.streaming_events, other.streaming_events, STREAMING_EVENTS.cap);
    }
}

fn merge_capped(into: &mut Vec<String>, from: Vec<String>, cap: usize) {
    let mut harvest = Harvest {
        values: std::mem::take(into),
        cap,
    };
    for value in from {
        harvest.push(value);
    }
    *into = harvest.values;
}

/// Harvests all five categories from cleaned text.
pub fn extract_key_info(content: &str) -> KeyInfo {
    KeyInfo {
        core_concepts: harvest(&CORE_CONCEPTS, content),
        endpoints: harvest(&ENDPOINTS, content),
        parameters: harvest(&PARAMETERS, content),
        response_fields: harvest(&RESPONSE_FIELDS, content),
        streaming_events: harvest(&STREAMING_EVENTS, content),
    }
}

/// Applies every pattern of a rule, in order, and collects the accepted candidates.
///
/// A pattern that does not compile is logged and skipped; the others still contribute.
pub fn harvest(rule: &Rule, content: &str) -> Vec<String> {
    let mut harvest = Harvest {
        values: Vec::new(),
        cap: rule.cap,
    };

    for def in rule.patterns {
        if harvest.is_full() {
            break;
        }
        let pattern = match CompiledPattern::compile(def) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("Skipping {} pattern {:?}: {}", rule.name, def.regex, e);
                continue;
            }
        };
        for candidate in pattern.candidates(content) {
            if let Some(value) = accept(rule, &candidate) {
                harvest.push(value);
            }
        }
    }

    harvest.values
}

/// Applies a rule's normalization and filters to one candidate.
fn accept(rule: &Rule, candidate: &str) -> Option<String> {
    let value = if rule.normalize_whitespace {
        WHITESPACE.replace_all(candidate.trim(), " ").into_owned()
    } else {
        candidate.to_string()
    };

    if value.chars().count() <= rule.min_len {
        return None;
    }

    let lowered = value.to_lowercase();
    if rule.stop_words.contains(&lowered.as_str()) {
        return None;
    }

    Some(value)
}

/// Order-preserving, deduplicated, capped list.
struct Harvest {
    values: Vec<String>,
    cap: usize,
}

impl Harvest {
    fn is_full(&self) -> bool {
        self.values.len() >= self.cap
    }

    fn push(&mut self, value: String) {
        if !self.is_full() && !self.values.contains(&value) {
            self.values.push(value);
        }
    }
}

struct CompiledPattern {
    regex: Regex,
    resume_after_group: bool,
    render: Render,
}

impl CompiledPattern {
    fn compile(def: &PatternDef) -> Result<Self, regex::Error> {
        let source = match def.until {
            Some(context) => format!("{}(?:{})", def.regex, context),
            None => def.regex.to_string(),
        };
        let regex = RegexBuilder::new(&source).case_insensitive(def.case_insensitive).build()?;
        Ok(Self {
            regex,
            resume_after_group: def.until.is_some(),
            render: def.render,
        })
    }

    /// All non-overlapping matches, rendered, in order.
    fn candidates(&self, content: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut at = 0;

        while at <= content.len() {
            let Some(caps) = self.regex.captures_at(content, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            found.push(self.render(&caps));

            let resume = match caps.get(1) {
                Some(group) if self.resume_after_group => group.end(),
                _ => whole.end(),
            };
            at = if resume > whole.start() {
                resume
            } else {
                next_char_boundary(content, whole.start())
            };
        }

        found
    }

    fn render(&self, caps: &Captures<'_>) -> String {
        let mut groups = caps.iter().skip(1).flatten().map(|m| m.as_str());
        match self.render {
            Render::FirstGroup if caps.len() == 1 => caps.get(0).map_or("", |m| m.as_str()).to_string(),
            Render::FirstGroup => groups.find(|g| !g.is_empty()).unwrap_or("").to_string(),
            Render::Joined => groups.collect::<Vec<_>>().join(" "),
        }
    }
}

fn next_char_boundary(content: &str, from: usize) -> usize {
    from + content[from..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_streaming_events_capped_in_order() {
        let content = (0..30)
            .map(|i| format!("`response.event_{i}` is emitted"))
            .collect::<Vec<_>>()
            .join("\n");
        let events = harvest(&STREAMING_EVENTS, &content);
        let expected = (0..15).map(|i| format!("response.event_{i}")).collect::<Vec<_>>();
        assert_eq!(events, expected);
    }

    #[test]
    fn test_streaming_events_need_backticks() {
        let content = "`response.created` then response.completed then `response.in_progress`";
        assert_eq!(harvest(&STREAMING_EVENTS, content), vec!["response.created", "response.in_progress"]);
        // Dotted names past the second segment do not match.
        assert!(harvest(&STREAMING_EVENTS, "`response.output_text.delta`").is_empty());
    }

    #[test]
    fn test_parameters_deduplicated_in_first_seen_order() {
        let content = "`foo` (string) ... `bar` (string) ... `foo` (string)";
        assert_eq!(harvest(&PARAMETERS, content), vec!["foo", "bar"]);
    }

    #[test]
    fn test_parameters_stop_words_and_short_names() {
        let content = "`model` (string) and `previous_response_id` (string) and `id` (integer)";
        assert_eq!(harvest(&PARAMETERS, content), vec!["previous_response_id"]);

        let content = "temperature (number) and max_output_tokens (integer)";
        assert_eq!(harvest(&PARAMETERS, content), vec!["max_output_tokens"]);
    }

    #[test]
    fn test_endpoints_rendered_and_case_sensitive() {
        let content = "POST /v1/responses creates one.\nGET /v1/responses/resp_123 reads it.\n\
                       post /lowercase is ignored. POST /v1/responses again.";
        assert_eq!(
            harvest(&ENDPOINTS, content),
            vec!["POST /v1/responses", "GET /v1/responses/resp_123"]
        );
    }

    #[test]
    fn test_endpoints_capped() {
        let content = (0..12).map(|i| format!("DELETE /v1/items/{i}")).collect::<Vec<_>>().join(" ");
        let endpoints = harvest(&ENDPOINTS, &content);
        assert_eq!(endpoints.len(), 10);
        assert_eq!(endpoints[0], "DELETE /v1/items/0");
        assert_eq!(endpoints[9], "DELETE /v1/items/9");
    }

    #[test]
    fn test_core_concepts_bold_and_loose() {
        let content = indoc! {"
            **Items** are the atomic unit of context
            **Agentic Loop** lets models call tools
            ## Next
        "};
        assert_eq!(
            harvest(&CORE_CONCEPTS, content),
            vec![
                "**Items** are the atomic unit of context",
                "**Agentic Loop** lets models call tools",
                "Items** are the atomic unit",
                "Agentic Loop",
            ]
        );
    }

    #[test]
    fn test_core_concepts_trailing_marker_starts_next_match() {
        let content = "**Items** first\n**Items** second";
        assert_eq!(harvest(&CORE_CONCEPTS, content), vec!["**Items** first", "**Items** second"]);
    }

    #[test]
    fn test_core_concepts_whitespace_normalized() {
        let content = "**State Machines** drive\n  the   lifecycle\n## Next";
        assert_eq!(
            harvest(&CORE_CONCEPTS, content),
            vec!["**State Machines** drive the lifecycle", "State Machines"]
        );
    }

    #[test]
    fn test_core_concepts_too_short() {
        assert!(harvest(&CORE_CONCEPTS, "**Items**").is_empty());
    }

    #[test]
    fn test_response_fields() {
        assert_eq!(
            harvest(&RESPONSE_FIELDS, "`output_text` contains the model output"),
            vec!["output_text", "contains"]
        );
        assert!(harvest(&RESPONSE_FIELDS, "`id` is the response id").is_empty());
    }

    #[test]
    fn test_broken_pattern_is_skipped() {
        const PATTERNS: &[PatternDef] = &[PatternDef::new(r"`(\w+"), PatternDef::new(r"`(\w+)`")];
        let rule = Rule {
            name: "test",
            patterns: PATTERNS,
            normalize_whitespace: false,
            min_len: 0,
            stop_words: &[],
            cap: 5,
        };
        assert_eq!(harvest(&rule, "`alpha` and `beta`"), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_pattern_without_groups_renders_whole_match() {
        const PATTERNS: &[PatternDef] = &[PatternDef::new(r"v\d+")];
        let rule = Rule {
            name: "test",
            patterns: PATTERNS,
            normalize_whitespace: false,
            min_len: 0,
            stop_words: &[],
            cap: 5,
        };
        assert_eq!(harvest(&rule, "v1 then v2 then v1"), vec!["v1", "v2"]);
    }

    #[test]
    fn test_extract_key_info_empty() {
        let info = extract_key_info("");
        assert!(info.is_empty());
        assert_eq!(info, KeyInfo::default());
    }

    #[test]
    fn test_merge_respects_uniqueness_and_caps() {
        let mut info = KeyInfo {
            endpoints: (0..8).map(|i| format!("GET /{i}")).collect(),
            streaming_events: vec!["response.created".to_string()],
            ..KeyInfo::default()
        };
        info.merge(KeyInfo {
            endpoints: (5..12).map(|i| format!("GET /{i}")).collect(),
            streaming_events: vec!["response.created".to_string(), "response.completed".to_string()],
            ..KeyInfo::default()
        });

        assert_eq!(info.endpoints, (0..10).map(|i| format!("GET /{i}")).collect::<Vec<_>>());
        assert_eq!(info.streaming_events, vec!["response.created", "response.completed"]);
    }
}
