//! Configuration options for llms.txt generation.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::errors::{LtxError, Result};

/// Root of the Open Responses documentation site.
pub const DEFAULT_SITE_ROOT: &str = "https://www.openresponses.org/";

/// Where the generated file lands when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "public/llms.txt";

/// Environment variable overriding the output path.
pub const ENV_OUTPUT: &str = "LLMS_TXT_OUTPUT";
/// Environment variable overriding the documentation site root.
pub const ENV_SITE_ROOT: &str = "LLMS_TXT_SITE_ROOT";
/// Environment variable setting a request timeout, in seconds.
pub const ENV_TIMEOUT_S: &str = "LLMS_TXT_TIMEOUT_S";

/// Which of the known documentation pages are fetched and harvested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSelection {
    /// Only the specification page.
    #[default]
    Specification,
    /// Every known page, one after the other.
    All,
}

/// Configuration options for the generator.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// File the llms.txt is written to. Parent directories are created.
    pub output: PathBuf,
    /// Documentation site the source pages are resolved against.
    pub site_root: Url,
    /// Pages to harvest when reading from the site.
    pub pages: PageSelection,
    /// Local documentation directory. When set, it is read instead of the site.
    pub docs_dir: Option<PathBuf>,
    /// Per-request timeout. `None` leaves the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            site_root: default_site_root(),
            pages: PageSelection::default(),
            docs_dir: None,
            timeout: None,
        }
    }
}

fn default_site_root() -> Url {
    match Url::parse(DEFAULT_SITE_ROOT) {
        Ok(url) => url,
        Err(e) => unreachable!("default site root is a valid URL: {e}"),
    }
}

impl GeneratorOptions {
    /// Creates a new builder for GeneratorOptions.
    pub fn builder() -> GeneratorOptionsBuilder {
        GeneratorOptionsBuilder::default()
    }

    /// Creates a builder seeded from the environment (`LLMS_TXT_*` variables).
    /// Unset or blank variables keep their defaults; malformed ones are an error.
    pub fn builder_from_env() -> Result<GeneratorOptionsBuilder> {
        Self::builder_from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`GeneratorOptions::builder_from_env`], reading variables through `lookup`.
    pub fn builder_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<GeneratorOptionsBuilder> {
        let value = |name: &str| non_blank(lookup(name));
        let mut builder = GeneratorOptionsBuilder::default();

        if let Some(output) = value(ENV_OUTPUT) {
            builder = builder.output(PathBuf::from(output));
        }

        if let Some(site_root) = value(ENV_SITE_ROOT) {
            builder = builder.site_root(Url::parse(&site_root)?);
        }

        if let Some(timeout_s) = value(ENV_TIMEOUT_S) {
            let secs = timeout_s
                .parse::<u64>()
                .map_err(|e| LtxError::ConfigError(format!("{ENV_TIMEOUT_S} must be a valid number: {e}")))?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder)
    }
}

/// Trimmed value, or `None` when it is missing or blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Site roots are directories: page paths are joined onto them, so the last
/// segment must end in `/` or it would be replaced.
fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Builder for GeneratorOptions.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptionsBuilder {
    output: Option<PathBuf>,
    site_root: Option<Url>,
    pages: Option<PageSelection>,
    docs_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl GeneratorOptionsBuilder {
    /// Sets the output file.
    pub fn output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    /// Sets the documentation site root. A missing trailing `/` is added.
    pub fn site_root(mut self, site_root: Url) -> Self {
        self.site_root = Some(as_directory(site_root));
        self
    }

    /// Sets which pages are harvested.
    pub fn pages(mut self, pages: PageSelection) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Reads documentation from a local directory instead of the site.
    pub fn docs_dir(mut self, docs_dir: PathBuf) -> Self {
        self.docs_dir = Some(docs_dir);
        self
    }

    /// Sets a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the GeneratorOptions.
    pub fn build(self) -> GeneratorOptions {
        let defaults = GeneratorOptions::default();
        GeneratorOptions {
            output: self.output.unwrap_or(defaults.output),
            site_root: self.site_root.unwrap_or(defaults.site_root),
            pages: self.pages.unwrap_or(defaults.pages),
            docs_dir: self.docs_dir,
            timeout: self.timeout,
        }
    }
}
