//! Static site generation for Landly page schemas.
//!
//! [`StaticRenderer::render_static`] turns a normalized schema into a build
//! directory of plain HTML pages plus shared `styles.css` and `analytics.js`.

pub mod blocks;
mod document;
pub mod html;
mod output;

use document::PageContext;
use landly_core::props;
use landly_core::Locale;
use output::PageLocation;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

pub const STYLESHEET: &str = include_str!("../assets/landing.css");
pub const ANALYTICS_SCRIPT: &str = include_str!("../assets/analytics.js");

pub(crate) const ASSETS: [(&str, &str); 2] = [
    ("styles.css", STYLESHEET),
    ("analytics.js", ANALYTICS_SCRIPT),
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to parse schema: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid pages structure in schema")]
    InvalidPages,

    #[error("page {index} has unsafe path '{path}'")]
    UnsafePagePath { index: usize, path: String },

    #[error("failed to {stage} {}: {source}", .path.display())]
    Io {
        stage: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list build directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub build_dir: PathBuf,
    /// Every file in the build directory, relative and sorted
    pub files: Vec<String>,
}

/// Renders schemas into `<out_root>/<project-id>/`
#[derive(Debug, Clone)]
pub struct StaticRenderer {
    out_root: PathBuf,
    locale: Locale,
}

impl StaticRenderer {
    pub fn new(out_root: impl Into<PathBuf>) -> Self {
        Self {
            out_root: out_root.into(),
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn out_root(&self) -> &Path {
        &self.out_root
    }

    pub fn build_dir(&self, project_id: &Uuid) -> PathBuf {
        self.out_root.join(project_id.to_string())
    }

    /// Render every page of `schema_json` and write the site.
    ///
    /// All pages are rendered in memory first, so a schema with a bad page
    /// leaves the build directory untouched. Re-rendering a project
    /// overwrites its files in place.
    pub fn render_static(
        &self,
        project_id: &Uuid,
        schema_json: &str,
    ) -> Result<BuildOutput, RenderError> {
        let schema: Value = serde_json::from_str(schema_json).map_err(RenderError::Parse)?;
        let pages = schema
            .get("pages")
            .and_then(Value::as_array)
            .ok_or(RenderError::InvalidPages)?;

        let mut rendered = Vec::with_capacity(pages.len());
        for (index, page) in pages.iter().enumerate() {
            let Some(page) = page.as_object() else {
                continue;
            };
            let fallback_path = if index == 0 {
                "/".to_string()
            } else {
                format!("/page-{}", index + 1)
            };
            let path = props::non_blank(page, "path").unwrap_or(&fallback_path);
            let location = PageLocation::from_page_path(index, path)?;
            let asset_prefix = location.asset_prefix();
            let ctx = PageContext {
                schema: &schema,
                locale: self.locale,
                asset_prefix: &asset_prefix,
            };
            rendered.push((location.relative_file(), document::render_page(page, &ctx)));
        }

        let build_dir = self.build_dir(project_id);
        output::create_dir(&build_dir, "create build directory")?;

        for (relative, html) in &rendered {
            let file = build_dir.join(relative);
            if let Some(parent) = file.parent() {
                output::create_dir(parent, "create page directory")?;
            }
            write_file(&file, html.as_bytes(), "write page")?;
        }

        for (name, contents) in ASSETS {
            write_file(&build_dir.join(name), contents.as_bytes(), "write asset")?;
        }

        let files = output::list_files(&build_dir)?;
        Ok(BuildOutput { build_dir, files })
    }
}

fn write_file(path: &Path, contents: &[u8], stage: &'static str) -> Result<(), RenderError> {
    output::write_atomically(path, contents).map_err(|source| RenderError::Io {
        stage,
        path: path.to_path_buf(),
        source,
    })
}
