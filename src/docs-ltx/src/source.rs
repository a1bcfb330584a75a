//! Where documentation text comes from: the live site or a local docs directory.

use std::path::PathBuf;

use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use url::Url;

use crate::config::{GeneratorOptions, PageSelection};
use crate::errors::{LtxError, Result};
use crate::fetch::{Fetched, build_client, fetch_page};
use crate::html::extract_main_text;
use crate::markdown::clean_markdown;

/// A known page of the documentation site, relative to the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitePage {
    pub key: &'static str,
    pub path: &'static str,
}

pub const SITE_PAGES: [SitePage; 6] = [
    SitePage { key: "overview", path: "" },
    SitePage { key: "specification", path: "specification" },
    SitePage { key: "reference", path: "reference" },
    SitePage { key: "compliance", path: "compliance" },
    SitePage { key: "governance", path: "governance" },
    SitePage { key: "changelog", path: "changelog" },
];

/// Cleaned text from one origin, ready for key-information extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// URL or file path the text came from.
    pub origin: String,
    pub text: String,
}

/// Produces the documentation text that key information is harvested from.
#[async_trait]
pub trait DocumentSource {
    /// Cleaned texts, in a stable order. Origins that yield nothing are left out.
    async fn collect(&self) -> Result<Vec<SourceText>>;
}

/// Builds the source the options ask for: the docs directory when set, otherwise the site.
pub fn source_from_options(options: &GeneratorOptions) -> Result<Box<dyn DocumentSource + Send + Sync>> {
    match &options.docs_dir {
        Some(dir) => Ok(Box::new(LocalDocsSource::new(dir.clone())?)),
        None => Ok(Box::new(WebSource::new(options)?)),
    }
}

/// Documentation pages fetched over HTTP, one after the other.
pub struct WebSource {
    client: reqwest::Client,
    pages: Vec<Url>,
}

impl WebSource {
    pub fn new(options: &GeneratorOptions) -> Result<Self> {
        let selected: Vec<&SitePage> = match options.pages {
            PageSelection::Specification => SITE_PAGES.iter().filter(|p| p.key == "specification").collect(),
            PageSelection::All => SITE_PAGES.iter().collect(),
        };
        let pages = selected
            .into_iter()
            .map(|page| options.site_root.join(page.path))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            client: build_client(options)?,
            pages,
        })
    }

    /// The page URLs that will be fetched, in order.
    pub fn pages(&self) -> &[Url] {
        &self.pages
    }
}

#[async_trait]
impl DocumentSource for WebSource {
    async fn collect(&self) -> Result<Vec<SourceText>> {
        let mut texts = Vec::new();
        for url in &self.pages {
            tracing::info!("Fetching {}", url);
            match fetch_page(&self.client, url).await {
                Fetched::Content(html) => {
                    let text = clean_markdown(&extract_main_text(&html));
                    texts.push(SourceText {
                        origin: url.to_string(),
                        text,
                    });
                }
                Fetched::Empty => tracing::warn!("No content from {}, skipping its sections", url),
            }
        }
        Ok(texts)
    }
}

/// Markdown/MDX files of a local documentation directory, read recursively.
pub struct LocalDocsSource {
    dir: PathBuf,
    doc_files: GlobSet,
}

/// File name patterns of documentation files.
const DOC_FILE_GLOBS: [&str; 2] = ["*.md", "*.mdx"];

impl LocalDocsSource {
    pub fn new(dir: PathBuf) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in DOC_FILE_GLOBS {
            builder.add(Glob::new(pattern)?);
        }
        Ok(Self {
            dir,
            doc_files: builder.build()?,
        })
    }

    /// Documentation files under the directory, sorted by path.
    ///
    /// Symlinked directories are not descended into, so a link back to an ancestor
    /// cannot make the walk loop.
    pub async fn doc_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![self.dir.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = tokio::fs::read_dir(&dir).await.map_err(|e| LtxError::io(&dir, e))?;
            while let Some(entry) = entries.next_entry().await.map_err(|e| LtxError::io(&dir, e))? {
                let path = entry.path();
                let file_type = entry.file_type().await.map_err(|e| LtxError::io(&path, e))?;
                if file_type.is_dir() {
                    pending.push(path);
                } else if path.file_name().is_some_and(|name| self.doc_files.is_match(name)) {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl DocumentSource for LocalDocsSource {
    async fn collect(&self) -> Result<Vec<SourceText>> {
        let mut texts = Vec::new();
        for path in self.doc_files().await? {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| LtxError::io(&path, e))?;
            let text = clean_markdown(&content);
            if text.is_empty() {
                tracing::debug!("Skipping empty documentation file {}", path.display());
                continue;
            }
            texts.push(SourceText {
                origin: path.display().to_string(),
                text,
            });
        }
        tracing::info!("Read {} documentation file(s) from {}", texts.len(), self.dir.display());
        Ok(texts)
    }
}
