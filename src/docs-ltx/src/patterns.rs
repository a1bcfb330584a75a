//! Extraction patterns, stop-lists and caps.
//!
//! Everything the key-information extractor matches against lives here as data, one
//! [`Rule`] per category. Tuning what gets harvested means editing these tables only.

/// How a match becomes a candidate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// First non-empty capture group. The whole match when the pattern has no groups.
    FirstGroup,
    /// Every capture group, joined by a single space.
    Joined,
}

/// One regular expression of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternDef {
    /// The pattern itself.
    pub regex: &'static str,
    /// Match without regard to case.
    pub case_insensitive: bool,
    /// Trailing context that must follow the match without being part of it.
    /// Scanning resumes at the end of the first capture group, so the context can
    /// start the next match.
    pub until: Option<&'static str>,
    /// How a match is turned into a candidate.
    pub render: Render,
}

impl PatternDef {
    pub const fn new(regex: &'static str) -> Self {
        Self {
            regex,
            case_insensitive: false,
            until: None,
            render: Render::FirstGroup,
        }
    }

    pub const fn ignore_case(self) -> Self {
        Self {
            case_insensitive: true,
            ..self
        }
    }

    pub const fn until(self, context: &'static str) -> Self {
        Self {
            until: Some(context),
            ..self
        }
    }

    pub const fn joined(self) -> Self {
        Self {
            render: Render::Joined,
            ..self
        }
    }
}

/// Everything needed to harvest one category of key information.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Category name, used in logs.
    pub name: &'static str,
    /// Patterns, applied in order over the whole text.
    pub patterns: &'static [PatternDef],
    /// Collapse whitespace runs (newlines included) into single spaces.
    pub normalize_whitespace: bool,
    /// Candidates must be strictly longer than this many characters.
    pub min_len: usize,
    /// Candidates whose lowercase form is listed here are dropped.
    pub stop_words: &'static [&'static str],
    /// Maximum number of harvested values.
    pub cap: usize,
}

/// Ends a bold concept paragraph: the next bold marker, the next heading or the end of text.
const CONCEPT_END: &str = r"\n\*\*|\n##|\z";

pub const CORE_CONCEPTS: Rule = Rule {
    name: "core_concepts",
    patterns: &[
        PatternDef::new(r"(\*\*Items\*\*[^\.]*?)").until(CONCEPT_END).ignore_case(),
        PatternDef::new(r"(\*\*Agentic Loop\*\*[^\.]*?)").until(CONCEPT_END).ignore_case(),
        PatternDef::new(r"(\*\*Semantic Streaming\*\*[^\.]*?)").until(CONCEPT_END).ignore_case(),
        PatternDef::new(r"(\*\*State Machines\*\*[^\.]*?)").until(CONCEPT_END).ignore_case(),
        PatternDef::new(r"(\*\*Multi-provider\*\*[^\.]*?)").until(CONCEPT_END).ignore_case(),
        PatternDef::new(r"(\*\*Items → Items\*\*[^\.]*?)").until(CONCEPT_END).ignore_case(),
        PatternDef::new(r"Items.*?atomic.*?unit").ignore_case(),
        PatternDef::new(r"Agentic.*?loop").ignore_case(),
        PatternDef::new(r"Semantic.*?streaming").ignore_case(),
        PatternDef::new(r"State.*?machines").ignore_case(),
        PatternDef::new(r"Multi.*?provider").ignore_case(),
    ],
    normalize_whitespace: true,
    min_len: 10,
    stop_words: &[],
    cap: 5,
};

pub const ENDPOINTS: Rule = Rule {
    name: "endpoints",
    patterns: &[PatternDef::new(r"(POST|GET|PUT|DELETE)\s+(/[\w/\-]+)").joined()],
    normalize_whitespace: false,
    min_len: 0,
    stop_words: &[],
    cap: 10,
};

/// Common English words and generic API terms that are never reported as parameters.
pub const PARAMETER_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "to", "of", "in", "on", "at", "by", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would", "could", "should", "type", "id", "name",
    "text", "url", "data", "model", "input", "tools", "tool", "stream", "temperature", "top_p",
];

pub const PARAMETERS: Rule = Rule {
    name: "parameters",
    patterns: &[
        PatternDef::new(r"`(\w+)`\s+\([^)]*(?:string|number|boolean|integer)").ignore_case(),
        PatternDef::new(r"`(\w+)`\s+.*?(?:parameter|field|argument)").ignore_case(),
        PatternDef::new(
            r"`(\w+)`.*?(?:input|request|model|tool|stream|temperature|top_p|truncation|service_tier)",
        )
        .ignore_case(),
        PatternDef::new(r"(\w+)\s+\(string\)|(\w+)\s+\(number\)|(\w+)\s+\(boolean\)|(\w+)\s+\(integer\)")
            .ignore_case(),
    ],
    normalize_whitespace: false,
    min_len: 2,
    stop_words: PARAMETER_STOP_WORDS,
    cap: 20,
};

pub const RESPONSE_FIELDS: Rule = Rule {
    name: "response_fields",
    patterns: &[
        PatternDef::new(r"`(\w+)`\s+.*?(?:response|output|status|model|usage|error)").ignore_case(),
        PatternDef::new(r"`(\w+)`\s+.*?(?:field|property|attribute)").ignore_case(),
        PatternDef::new(r"(\w+)\s+.*?(?:response|output|status|model|usage|error)").ignore_case(),
    ],
    normalize_whitespace: false,
    min_len: 2,
    stop_words: &[],
    cap: 20,
};

pub const STREAMING_EVENTS: Rule = Rule {
    name: "streaming_events",
    patterns: &[PatternDef::new(r"`(response\.[\w_]+)`")],
    normalize_whitespace: false,
    min_len: 0,
    stop_words: &[],
    cap: 15,
};
