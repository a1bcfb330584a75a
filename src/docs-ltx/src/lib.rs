//! # llms.txt generation for the Open Responses documentation
//!
//! Fetches the documentation site (or reads a local docs directory), extracts readable
//! text, harvests key information with heuristic patterns and writes a static
//! `llms.txt` summary. The written file is read back and validated.
//!
//! ## Pipeline
//!
//! 1. [`fetch_page`]: HTTP GET, failures become [`Fetched::Empty`]
//! 2. [`extract_main_text`]: visible text of the main content area
//! 3. [`clean_markdown`]: strip links, images and leftover tags
//! 4. [`extract_key_info`]: concepts, endpoints, parameters, response fields, streaming events
//! 5. [`assemble`]: fixed template plus the harvested sections
//! 6. [`check_llms_txt`]: H1, summary blockquote, H2 sections, links
//!
//! ## Example
//!
//! ```no_run
//! use docs_ltx::{GeneratorOptions, OPEN_RESPONSES, generate_llms_txt, source_from_options};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = GeneratorOptions::builder().output("public/llms.txt".into()).build();
//!     let source = source_from_options(&options)?;
//!     let report = generate_llms_txt(&*source, &OPEN_RESPONSES, &options).await?;
//!     println!("{} bytes written to {}", report.bytes, report.output.display());
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod config;
mod errors;
pub mod extract;
pub mod fetch;
mod generator;
pub mod html;
pub mod logging;
pub mod markdown;
pub mod patterns;
pub mod source;
pub mod template;
pub mod validate;

// Public API re-exports
pub use assemble::{DocumentLines, assemble};
pub use config::{GeneratorOptions, GeneratorOptionsBuilder, PageSelection};
pub use errors::{LtxError, Result};
pub use extract::{KeyInfo, extract_key_info, harvest};
pub use fetch::{Fetched, build_client, fetch_page};
pub use generator::{GenerationReport, generate_llms_txt, harvest_source};
pub use html::{extract_main_text, extract_text};
pub use markdown::clean_markdown;
pub use source::{DocumentSource, LocalDocsSource, SourceText, WebSource, source_from_options};
pub use template::{OPEN_RESPONSES, Template};
pub use validate::{LlmsTxtReport, MissingElement, check_llms_txt, validate_llms_txt_file};
